//! Path-aware strings with natural ("human") ordering.
//!
//! [`PathString`] decomposes a raw path string once, at construction, into
//! its separator-delimited segments, directory path, filename, extension,
//! and directory name. Comparison, relative-path computation, and the
//! directory walker all operate on that decomposition. The filesystem is
//! only consulted lazily, through a memoized stat.

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR};
use std::sync::OnceLock;

use crate::digits::{Token, tokenize};
use crate::error::{Error, Result};

/// What a path names on disk, as reported by a stat call or carried over
/// from a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    Symlink,
}

impl From<fs::FileType> for FileKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            FileKind::Directory
        } else if file_type.is_symlink() {
            FileKind::Symlink
        } else {
            FileKind::File
        }
    }
}

/// Append a trailing separator unless one is already present.
pub(crate) fn path_style(path: &str) -> String {
    if path.ends_with(MAIN_SEPARATOR) {
        path.to_string()
    } else {
        format!("{path}{MAIN_SEPARATOR_STR}")
    }
}

/// A path string plus its decomposition.
///
/// A path ending in the separator is "path style": it denotes a directory
/// reference and has no filename or extension. Anything else is treated as
/// naming a leaf, whose final segment splits into filename and extension at
/// the last `.`. A leading-dot segment with no other dot (`.bashrc`) has an
/// empty filename and `bashrc` as its extension.
///
/// Instances are immutable once constructed; the stat result and the
/// natural sort key are computed at most once and cached.
#[derive(Debug, Clone)]
pub struct PathString {
    raw: String,
    segments: Vec<String>,
    is_path_style: bool,
    directory_path: String,
    filename: String,
    extension: String,
    directory_name: String,
    stat: OnceLock<Option<FileKind>>,
    key: OnceLock<Vec<Vec<Token>>>,
}

impl PathString {
    /// Wrap `path` into a `PathString`. A value that already is one passes
    /// through unchanged.
    pub fn new(path: impl Into<PathString>) -> PathString {
        path.into()
    }

    /// Wrap `path`, seeding the stat cache with a kind already known from a
    /// directory entry, so no stat call is ever made for this instance.
    pub fn with_kind(path: impl Into<PathString>, kind: FileKind) -> PathString {
        let ps = path.into();
        let _ = ps.stat.set(Some(kind));
        ps
    }

    fn parse(raw: String) -> PathString {
        let segments: Vec<String> = raw
            .split(MAIN_SEPARATOR)
            .map(str::to_string)
            .collect();
        let is_path_style = segments.last().is_some_and(String::is_empty);

        let (directory_path, filename, extension) = if is_path_style {
            (raw.clone(), String::new(), String::new())
        } else {
            let last = &segments[segments.len() - 1];
            let directory_path = if segments.len() == 1 {
                String::new()
            } else {
                let mut joined = segments[..segments.len() - 1].join(MAIN_SEPARATOR_STR);
                joined.push(MAIN_SEPARATOR);
                joined
            };
            match last.rsplit_once('.') {
                None => (directory_path, last.clone(), String::new()),
                Some((name, ext)) => (directory_path, name.to_string(), ext.to_string()),
            }
        };

        let directory_name = if segments.len() >= 2 {
            segments[segments.len() - 2].clone()
        } else {
            String::new()
        };

        PathString {
            raw,
            segments,
            is_path_style,
            directory_path,
            filename,
            extension,
            directory_name,
            stat: OnceLock::new(),
            key: OnceLock::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The separator-delimited segments of the path; joining them with the
    /// separator reproduces the original string.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the path ends in the separator (a directory reference).
    pub fn is_path_style(&self) -> bool {
        self.is_path_style
    }

    /// Everything up to and including the last separator, or empty if the
    /// path has none.
    pub fn directory_path(&self) -> &str {
        &self.directory_path
    }

    /// The last segment without its extension; empty for path-style inputs
    /// and for dotfiles like `.bashrc`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The suffix after the last `.` of the last segment, or empty.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The name of the immediate parent directory, or empty.
    pub fn directory_name(&self) -> &str {
        &self.directory_name
    }

    fn stat(&self) -> Option<FileKind> {
        *self.stat.get_or_init(|| {
            fs::metadata(&self.raw)
                .ok()
                .map(|meta| FileKind::from(meta.file_type()))
        })
    }

    /// Whether the path names anything on disk. Stat failures (not found,
    /// permission denied, races) all read as "no".
    pub fn exists(&self) -> bool {
        self.stat().is_some()
    }

    pub fn is_file(&self) -> bool {
        self.stat() == Some(FileKind::File)
    }

    pub fn is_directory(&self) -> bool {
        self.stat() == Some(FileKind::Directory)
    }

    /// The natural sort key: per-segment token sequences, with the final
    /// segment of a leaf path replaced by separate filename and extension
    /// sequences so the two compare independently. Directory segments are
    /// tokenized lowercased; filename and extension are not.
    fn natural_key(&self) -> &[Vec<Token>] {
        self.key.get_or_init(|| {
            let mut key: Vec<Vec<Token>> = self
                .segments
                .iter()
                .map(|segment| tokenize(&segment.to_lowercase()))
                .collect();
            if !self.is_path_style {
                key.pop();
                key.push(tokenize(&self.filename));
                key.push(tokenize(&self.extension));
            }
            key
        })
    }

    /// Strict natural-order "less than".
    ///
    /// Walks the two keys segment by segment from the root, then token by
    /// token. Number tokens sort before text tokens; numbers compare by
    /// value, text by plain string order. Running out of segments or tokens
    /// on `other`'s side means `self` is not less. If every token compares
    /// equal, equal-value-but-differently-padded numbers can still make the
    /// raw strings differ, so plain string order settles it.
    pub fn natural_lt(&self, other: &PathString) -> bool {
        let mine = self.natural_key();
        let theirs = other.natural_key();

        for (i, segment) in mine.iter().enumerate() {
            let Some(other_segment) = theirs.get(i) else {
                // other has less depth
                return false;
            };
            for (j, token) in segment.iter().enumerate() {
                let Some(other_token) = other_segment.get(j) else {
                    // other segment has a shorter name
                    return false;
                };
                match (token, other_token) {
                    (Token::Number { value: a, .. }, Token::Number { value: b, .. }) => {
                        if a != b {
                            return a < b;
                        }
                    }
                    (Token::Text(a), Token::Text(b)) => {
                        if a != b {
                            return a < b;
                        }
                    }
                    // numeric content sorts before text
                    (Token::Number { .. }, Token::Text(_)) => return true,
                    (Token::Text(_), Token::Number { .. }) => return false,
                }
            }
        }

        if mine.len() < theirs.len() {
            return true;
        }

        self.raw < other.raw
    }

    /// Total-order comparison derived from [`natural_lt`](Self::natural_lt)
    /// evaluated in both directions; neither side less means equal for
    /// ordering purposes.
    pub fn natural_cmp(&self, other: &PathString) -> Ordering {
        match (self.natural_lt(other), other.natural_lt(self)) {
            (true, _) => Ordering::Less,
            (_, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }

    /// Re-express this path relative to `base`.
    ///
    /// `base` must be path style (trailing separator), and the two paths
    /// must share their first segment. Matching leading segments are
    /// consumed; whatever remains of `base` becomes `..` steps, or a single
    /// `.` when none remain. The result names the same filesystem entity,
    /// so a known stat result carries over.
    pub fn relative_to(&self, base: &PathString) -> Result<PathString> {
        if !base.is_path_style {
            return Err(Error::BaseNotPathStyle);
        }

        let base_segments = &base.segments[..base.segments.len() - 1];

        let mut common = 0;
        while common < self.segments.len() && common < base_segments.len() {
            if self.segments[common] == base_segments[common] {
                common += 1;
            } else if common == 0 {
                return Err(Error::NoCommonRoot);
            } else {
                break;
            }
        }

        let up_levels = base_segments.len() - common;
        let mut parts: Vec<&str> = Vec::new();
        if up_levels > 0 {
            parts.extend(std::iter::repeat("..").take(up_levels));
        } else {
            parts.push(".");
        }
        parts.extend(self.segments[common..].iter().map(String::as_str));

        let relative = PathString::parse(parts.join(MAIN_SEPARATOR_STR));
        if let Some(Some(kind)) = self.stat.get() {
            let _ = relative.stat.set(Some(*kind));
        }
        Ok(relative)
    }

    /// Resolve `other` against this path as a base directory, collapsing
    /// `.` and `..` segments lexically. `..` never climbs past the root of
    /// an absolute base. A path-style `other` keeps its trailing separator,
    /// and its known stat result carries over.
    pub fn append(&self, other: &PathString) -> PathString {
        let mut resolved = self.segments.clone();
        if self.is_path_style {
            resolved.pop();
        }

        for segment in &other.segments {
            match segment.as_str() {
                "" | "." => {}
                ".." => {
                    if resolved.last().is_some_and(|s| !s.is_empty()) {
                        resolved.pop();
                    }
                }
                _ => resolved.push(segment.clone()),
            }
        }

        if other.is_path_style {
            resolved.push(String::new());
        }

        let joined = PathString::parse(resolved.join(MAIN_SEPARATOR_STR));
        if let Some(Some(kind)) = other.stat.get() {
            let _ = joined.stat.set(Some(*kind));
        }
        joined
    }
}

impl From<&str> for PathString {
    fn from(raw: &str) -> Self {
        PathString::parse(raw.to_string())
    }
}

impl From<String> for PathString {
    fn from(raw: String) -> Self {
        PathString::parse(raw)
    }
}

impl From<&PathString> for PathString {
    fn from(ps: &PathString) -> Self {
        ps.clone()
    }
}

impl fmt::Display for PathString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for PathString {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for PathString {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for PathString {}
