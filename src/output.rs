//! Listing output formatting for the CLI.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::filenames::Filenames;

/// How the listing printer renders entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

/// Print one entry per line, coloring directory entries.
///
/// Directory detection uses the kind recorded during the walk, so printing
/// never stats anything.
pub fn print_listing(filenames: &Filenames, config: OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let mut dir_spec = ColorSpec::new();
    dir_spec.set_fg(Some(Color::Blue)).set_bold(true);

    for ps in filenames {
        if ps.is_directory() {
            stdout.set_color(&dir_spec)?;
            writeln!(stdout, "{ps}")?;
            stdout.reset()?;
        } else {
            writeln!(stdout, "{ps}")?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonListing<'a> {
    root: &'a str,
    count: usize,
    entries: Vec<&'a str>,
}

/// Print the listing as pretty-printed JSON to stdout.
pub fn print_json(root: &str, filenames: &Filenames) -> io::Result<()> {
    let payload = JsonListing {
        root,
        count: filenames.len(),
        entries: filenames.iter().map(|ps| ps.as_str()).collect(),
    };
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
