//! Styled terminal labels.

use console::style;

/// Color is off when `NO_COLOR` is set or the terminal cannot show it.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some() || !console::colors_enabled()
}

/// Section header, e.g. `=== Reads ===`.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Tag for a failed request or run.
#[must_use]
pub fn error_tag() -> String {
    if is_color_disabled() {
        "[ERROR]".to_string()
    } else {
        style("[ERROR]").red().bold().to_string()
    }
}

/// Dimmed text for secondary details.
#[must_use]
pub fn dim(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).dim().to_string()
    }
}

/// Print a section header to stdout.
pub fn print_header(text: &str) {
    println!("{}", header(text));
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", error_tag());
}
