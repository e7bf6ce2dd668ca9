//! Error types for path and listing operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by relative-path computation and directory listing.
///
/// Stat lookups never fail: `exists`/`is_file`/`is_directory` report a path
/// they cannot stat as absent. Every other filesystem error propagates as
/// [`Error::Io`].
#[derive(Debug, Error)]
pub enum Error {
    /// The root of a listing does not name an existing directory.
    #[error("{0} isn't a directory")]
    NotADirectory(String),

    /// The base of a relative-path computation is not in path style.
    #[error("other path must have trailing slash")]
    BaseNotPathStyle,

    /// The two paths of a relative-path computation share no root segment.
    #[error("relative paths can only be calculated from paths with a common root")]
    NoCommonRoot,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
