//! Include/exclude predicates for directory listings.
//!
//! The two checks are evaluated independently: an entry is kept iff the
//! include check passes and the exclude check does not. Exclusion always
//! wins when both match.

use crate::path_string::PathString;

use super::options::ListingOptions;

/// Inclusion check: the extension filter, the include patterns, and the
/// entry-type filter must all pass.
pub fn include_in_listing(ps: &PathString, is_file: bool, options: &ListingOptions) -> bool {
    let extension_ok = if options.extensions.is_empty() {
        true
    } else if is_file {
        options.extensions.iter().any(|ext| ext == ps.extension())
    } else {
        // extensions are a file-only concept
        false
    };

    // multiple include patterns are OR'ed: one match is enough
    let include_pattern_ok = options.include_patterns.is_empty()
        || options
            .include_patterns
            .iter()
            .any(|pattern| pattern.is_match(ps.as_str()));

    let type_ok = if is_file {
        !options.exclude_files
    } else {
        !options.exclude_directories
    };

    extension_ok && include_pattern_ok && type_ok
}

/// Exclusion check: system files (when configured) and exclude patterns,
/// OR'ed.
pub fn exclude_from_listing(ps: &PathString, options: &ListingOptions) -> bool {
    // names starting with a dot decompose to an empty filename with an
    // extension, which is what marks a system file
    let is_system_file = ps.filename().is_empty() && !ps.extension().is_empty();
    if options.exclude_system_files && is_system_file {
        return true;
    }

    options
        .exclude_patterns
        .iter()
        .any(|pattern| pattern.is_match(ps.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn options() -> ListingOptions {
        ListingOptions::default()
    }

    #[test]
    fn test_default_options_include_everything() {
        let ps = PathString::from("dir/file.ext");
        assert!(include_in_listing(&ps, true, &options()));
        assert!(include_in_listing(&ps, false, &options()));
        assert!(!exclude_from_listing(&ps, &options()));
    }

    #[test]
    fn test_extension_filter_keeps_matching_files_only() {
        let opts = ListingOptions {
            extensions: vec!["ext".to_string()],
            ..options()
        };
        assert!(include_in_listing(&PathString::from("a/file.ext"), true, &opts));
        assert!(!include_in_listing(&PathString::from("a/file.other"), true, &opts));
        // a non-empty extension set rejects every directory
        assert!(!include_in_listing(&PathString::from("a/dir.ext"), false, &opts));
    }

    #[test]
    fn test_empty_extension_list_means_no_filtering() {
        let opts = ListingOptions {
            extensions: Vec::new(),
            ..options()
        };
        assert!(include_in_listing(&PathString::from("a/file.other"), true, &opts));
        assert!(include_in_listing(&PathString::from("a/dir"), false, &opts));
    }

    #[test]
    fn test_include_patterns_are_ored() {
        let opts = ListingOptions {
            include_patterns: vec![
                Regex::new("Name").unwrap(),
                Regex::new("something").unwrap(),
            ],
            ..options()
        };
        assert!(include_in_listing(&PathString::from("a/differentName.ext"), true, &opts));
        assert!(include_in_listing(&PathString::from("a/somethingElse"), true, &opts));
        assert!(!include_in_listing(&PathString::from("a/unrelated"), true, &opts));
    }

    #[test]
    fn test_type_filters() {
        let no_dirs = ListingOptions {
            exclude_directories: true,
            ..options()
        };
        assert!(!include_in_listing(&PathString::from("a/dir"), false, &no_dirs));
        assert!(include_in_listing(&PathString::from("a/file"), true, &no_dirs));

        let no_files = ListingOptions {
            exclude_files: true,
            ..options()
        };
        assert!(include_in_listing(&PathString::from("a/dir"), false, &no_files));
        assert!(!include_in_listing(&PathString::from("a/file"), true, &no_files));
    }

    #[test]
    fn test_system_file_exclusion_flags_single_dot_names_only() {
        let opts = ListingOptions {
            exclude_system_files: true,
            ..options()
        };
        assert!(exclude_from_listing(&PathString::from("a/.bashrc"), &opts));
        // a second dot gives the entry a filename, so it is not a system file
        assert!(!exclude_from_listing(&PathString::from("a/.inactive.bashrc"), &opts));
        assert!(!exclude_from_listing(&PathString::from("a/regular.ext"), &opts));
    }

    #[test]
    fn test_exclude_patterns_win_over_include_patterns() {
        let opts = ListingOptions {
            include_patterns: vec![Regex::new("something").unwrap()],
            exclude_patterns: vec![Regex::new("Else").unwrap()],
            ..options()
        };
        let ps = PathString::from("a/somethingElse");
        assert!(include_in_listing(&ps, true, &opts));
        assert!(exclude_from_listing(&ps, &opts));
    }

    #[test]
    fn test_exclude_patterns_are_ored() {
        let opts = ListingOptions {
            exclude_patterns: vec![
                Regex::new("Level2").unwrap(),
                Regex::new("Else").unwrap(),
            ],
            ..options()
        };
        assert!(exclude_from_listing(&PathString::from("a/somethingElse"), &opts));
        assert!(exclude_from_listing(&PathString::from("a/fileLevel2"), &opts));
        assert!(!exclude_from_listing(&PathString::from("a/fileLevel1"), &opts));
    }
}
