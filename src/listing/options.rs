//! Listing configuration.

use regex::Regex;

/// Configuration for a directory listing.
///
/// Everything defaults off: a default listing is non-recursive, yields bare
/// entry names, and filters nothing.
#[derive(Debug, Clone, Default)]
pub struct ListingOptions {
    /// Recurse into subdirectories. Recursion needs full paths to build
    /// child entries, so this forces `full_path` while walking.
    pub recursive: bool,
    /// Build entries as full paths rather than bare names.
    pub full_path: bool,
    /// Rewrite collected entries relative to the listing root.
    pub relative_path: bool,
    /// Keep only files whose extension is in this set; empty means no
    /// extension filtering. A non-empty set rejects directories outright.
    pub extensions: Vec<String>,
    /// Drop system files: entries whose decomposition has an empty filename
    /// and a non-empty extension (dotfiles with no second dot).
    pub exclude_system_files: bool,
    /// Keep only entries whose full text matches at least one pattern.
    pub include_patterns: Vec<Regex>,
    /// Drop entries whose full text matches any pattern; a hit here wins
    /// even when an include pattern also matches.
    pub exclude_patterns: Vec<Regex>,
    /// Drop directory entries.
    pub exclude_directories: bool,
    /// Drop file entries.
    pub exclude_files: bool,
}
