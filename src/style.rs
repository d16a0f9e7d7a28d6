//! ANSI styling used in command output.

use regex_lite::Regex;

pub const GREEN: &str = "\x1B[32m";
pub const CYAN: &str = "\x1B[36m";
pub const RED: &str = "\x1B[31m";
pub const YELLOW: &str = "\x1B[33m";
pub const DIM: &str = "\x1B[2m";
pub const BOLD: &str = "\x1B[1m";
pub const RESET: &str = "\x1B[0m";

lazy_static::lazy_static! {
    static ref ANSI_SEQUENCE: Regex = Regex::new(r"\x1B\[[0-9;]*[A-Za-z]").unwrap();
}

/// Wrap `text` in `style` and a reset.
pub fn paint(style: &str, text: &str) -> String {
    format!("{}{}{}", style, text, RESET)
}

/// Render a directory name the way listings show it.
pub fn dir_name(name: &str) -> String {
    paint(CYAN, name)
}

/// Text with all ANSI escape sequences removed.
pub fn strip_ansi(text: &str) -> String {
    ANSI_SEQUENCE.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_and_strip() {
        let s = paint(RED, "boom");
        assert_eq!(s, "\x1B[31mboom\x1B[0m");
        assert_eq!(strip_ansi(&s), "boom");
        assert_eq!(strip_ansi(&format!("{}{}x{}", BOLD, GREEN, RESET)), "x");
        assert_eq!(strip_ansi("plain"), "plain");
    }
}
