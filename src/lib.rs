//! Pomelo - directory listings sorted the way humans expect
//!
//! A [`PathString`] decomposes a path once into segments, filename, and
//! extension, and compares in natural order: `file2` before `file10`.
//! [`list_files`] walks a directory with include/exclude filtering and
//! collects [`Filenames`], which sort naturally by default.

pub mod digits;
pub mod error;
pub mod filenames;
pub mod listing;
pub mod output;
pub mod path_string;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use digits::{Token, tokenize};
pub use error::{Error, Result};
pub use filenames::Filenames;
pub use listing::{Listing, ListingOptions, list_files};
pub use output::{OutputConfig, print_json, print_listing};
pub use path_string::{FileKind, PathString};
