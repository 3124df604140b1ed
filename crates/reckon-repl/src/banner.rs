//! Startup banner.

/// ASCII-art calculator shown at startup.
pub const LOGO: &str = r#" _____________________
|  _________________  |
| |              0. | |
| |_________________| |
|  ___ ___ ___   ___  |
| | 7 | 8 | 9 | | + | |
| |___|___|___| |___| |
| | 4 | 5 | 6 | | - | |
| |___|___|___| |___| |
| | 1 | 2 | 3 | | x | |
| |___|___|___| |___| |
| | . | 0 | = | | / | |
| |___|___|___| |___| |
|_____________________|"#;

/// Fallback for terminals too narrow for the art.
pub const TITLE: &str = "reckon calculator";

/// Width of the widest line of [`LOGO`].
pub fn logo_width() -> usize {
    LOGO.lines().map(str::len).max().unwrap_or(0)
}

/// Pick the banner for a terminal of the given width.
///
/// An unknown width (not a terminal) gets the full art.
pub fn for_width(columns: Option<usize>) -> &'static str {
    match columns {
        Some(columns) if columns < logo_width() => TITLE,
        _ => LOGO,
    }
}

/// Banner for the current terminal.
pub fn current() -> &'static str {
    let columns = terminal_size::terminal_size().map(|(width, _)| usize::from(width.0));
    for_width(columns)
}
