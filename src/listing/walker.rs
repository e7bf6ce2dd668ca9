//! Lazy, filtered directory traversal.

use std::fs::{self, ReadDir};

use crate::error::{Error, Result};
use crate::filenames::Filenames;
use crate::path_string::{FileKind, PathString, path_style};

use super::filter::{exclude_from_listing, include_in_listing};
use super::options::ListingOptions;

/// A pull-based recursive listing.
///
/// Entries are produced one at a time, in the order the underlying
/// directory listing returns them, depth-first: a recursed directory is
/// yielded first (in path style), then its contents are fully drained
/// before the next sibling. An entry that fails the exclude check is
/// skipped along with its whole subtree.
///
/// Each pending directory holds its open read handle in an explicit stack
/// frame, so abandoning the iterator early closes everything.
pub struct Listing {
    options: ListingOptions,
    root: Option<PathString>,
    stack: Vec<Frame>,
}

struct Frame {
    /// Path-style form of the directory, used to build child paths.
    dir: String,
    entries: ReadDir,
}

impl Listing {
    /// Start a listing of `root`. The filesystem is not touched until the
    /// first call to `next`; a root that is not an existing directory makes
    /// that first call yield [`Error::NotADirectory`].
    pub fn new(root: impl Into<PathString>, options: &ListingOptions) -> Listing {
        let mut options = options.clone();
        if options.recursive {
            // child paths cannot be built from bare names
            options.full_path = true;
        }
        Listing {
            options,
            root: Some(root.into()),
            stack: Vec::new(),
        }
    }

    /// Open `dir` and queue its contents; in recursive mode the directory
    /// itself is the next entry when it passes the include filter. The
    /// listing root never gets an exclude check; child directories had
    /// theirs before this call.
    fn enter_dir(&mut self, dir: &str) -> Result<Option<PathString>> {
        self.stack.push(Frame {
            dir: path_style(dir),
            entries: fs::read_dir(dir)?,
        });
        if self.options.recursive {
            let dir_ps = PathString::with_kind(path_style(dir), FileKind::Directory);
            if include_in_listing(&dir_ps, false, &self.options) {
                return Ok(Some(dir_ps));
            }
        }
        Ok(None)
    }
}

impl Iterator for Listing {
    type Item = Result<PathString>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if !root.is_directory() {
                return Some(Err(Error::NotADirectory(root.to_string())));
            }
            match self.enter_dir(root.as_str()) {
                Ok(Some(dir_ps)) => return Some(Ok(dir_ps)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }

        loop {
            let (dir, next_entry) = {
                let frame = self.stack.last_mut()?;
                (frame.dir.clone(), frame.entries.next())
            };

            let entry = match next_entry {
                None => {
                    self.stack.pop();
                    continue;
                }
                Some(Err(e)) => return Some(Err(e.into())),
                Some(Ok(entry)) => entry,
            };

            // the directory entry already knows the kind, no stat needed
            let kind = match entry.file_type() {
                Ok(file_type) => FileKind::from(file_type),
                Err(e) => return Some(Err(e.into())),
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let child = if self.options.full_path {
                format!("{dir}{name}")
            } else {
                name
            };

            let ps = PathString::with_kind(child.as_str(), kind);
            if exclude_from_listing(&ps, &self.options) {
                // pruned: an excluded directory is never descended into
                continue;
            }

            if kind == FileKind::Directory {
                if self.options.recursive {
                    match self.enter_dir(ps.as_str()) {
                        Ok(Some(dir_ps)) => return Some(Ok(dir_ps)),
                        Ok(None) => continue,
                        Err(e) => return Some(Err(e)),
                    }
                }
                if include_in_listing(&ps, false, &self.options) {
                    let entry = if self.options.full_path {
                        PathString::with_kind(path_style(ps.as_str()), FileKind::Directory)
                    } else {
                        ps
                    };
                    return Some(Ok(entry));
                }
                continue;
            }

            // symlinks take the file branch, same as any other non-directory
            if include_in_listing(&ps, true, &self.options) {
                return Some(Ok(ps));
            }
        }
    }
}

/// Collect the contents of `root` into a [`Filenames`] list.
///
/// The root must be an existing directory. It is re-expressed as an
/// absolute path-style string before walking, so `relative_path` rewriting
/// always shares a root segment with the collected entries.
pub fn list_files(root: &PathString, options: &ListingOptions) -> Result<Filenames> {
    if !root.is_directory() {
        return Err(Error::NotADirectory(root.to_string()));
    }

    let root = absolutize(root)?;
    let mut filenames = Filenames::new();
    for entry in Listing::new(&root, options) {
        let entry = entry?;
        if options.relative_path {
            filenames.push(entry.relative_to(&root)?);
        } else {
            filenames.push(entry);
        }
    }
    Ok(filenames)
}

/// Re-express an already-verified directory root as an absolute path-style
/// string.
fn absolutize(root: &PathString) -> Result<PathString> {
    let absolute = if std::path::Path::new(root.as_str()).is_absolute() {
        root.clone()
    } else {
        let cwd = std::env::current_dir()?;
        PathString::from(path_style(&cwd.to_string_lossy())).append(root)
    };

    if absolute.is_path_style() {
        Ok(absolute)
    } else {
        Ok(PathString::with_kind(
            path_style(absolute.as_str()),
            FileKind::Directory,
        ))
    }
}
