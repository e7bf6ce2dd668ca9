//! Filtered directory listings.
//!
//! [`Listing`] walks a directory lazily, wrapping every entry in a
//! [`PathString`](crate::PathString) and applying the include/exclude rules
//! from [`ListingOptions`]. [`list_files`] is the collecting front door:
//! it validates the root, drains the walk, and optionally rewrites entries
//! relative to the root.

mod filter;
mod options;
mod walker;

pub use filter::{exclude_from_listing, include_in_listing};
pub use options::ListingOptions;
pub use walker::{Listing, list_files};
