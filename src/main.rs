//! CLI entry point for pomelo

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pomelo::{
    ListingOptions, OutputConfig, PathString, list_files, print_json, print_listing,
};
use regex::Regex;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pomelo")]
#[command(about = "Directory listings sorted the way humans expect")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Print entries relative to the listing root
    #[arg(long = "relative")]
    relative: bool,

    /// Print entries with their full paths
    #[arg(long = "full-path")]
    full_path: bool,

    /// Only show files with this extension (can be used multiple times)
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    extensions: Vec<String>,

    /// Only show entries matching this regular expression (can be used
    /// multiple times; one match is enough)
    #[arg(long = "include", value_name = "REGEX")]
    include: Vec<String>,

    /// Hide entries matching this regular expression (can be used multiple
    /// times; wins over --include)
    #[arg(long = "exclude", value_name = "REGEX")]
    exclude: Vec<String>,

    /// Skip dotfiles (names with nothing before the first dot)
    #[arg(short = 's', long = "skip-hidden")]
    skip_hidden: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only", conflicts_with = "files_only")]
    dirs_only: bool,

    /// List files only
    #[arg(short = 'f', long = "files-only")]
    files_only: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Compile CLI pattern strings, bailing out on the first invalid one.
fn compile_patterns(patterns: &[String], flag: &str) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).unwrap_or_else(|e| {
                eprintln!("pomelo: invalid {flag} pattern '{pattern}': {e}");
                process::exit(1);
            })
        })
        .collect()
}

fn main() {
    let args = Args::parse();

    let options = ListingOptions {
        recursive: args.recursive,
        // relative rewriting needs full entry paths to share the root
        full_path: args.full_path || args.relative,
        relative_path: args.relative,
        extensions: args.extensions.clone(),
        exclude_system_files: args.skip_hidden,
        include_patterns: compile_patterns(&args.include, "--include"),
        exclude_patterns: compile_patterns(&args.exclude, "--exclude"),
        exclude_directories: args.files_only,
        exclude_files: args.dirs_only,
    };

    let root = PathString::from(args.path.to_string_lossy().into_owned());

    let mut filenames = match list_files(&root, &options) {
        Ok(filenames) => filenames,
        Err(e) => {
            eprintln!("pomelo: {e}");
            process::exit(1);
        }
    };
    filenames.sort();

    let result = if args.json {
        print_json(root.as_str(), &filenames)
    } else {
        print_listing(
            &filenames,
            OutputConfig {
                use_color: should_use_color(args.color),
            },
        )
    };

    if let Err(e) = result {
        eprintln!("pomelo: error writing output: {e}");
        process::exit(1);
    }
}
