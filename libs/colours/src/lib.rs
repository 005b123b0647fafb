//! ANSI styling for terminal output.
//!
//! Example:
//! ```
//! use colours::{CYAN, styled_println, styles};
//!
//! styled_println!(styles(&[CYAN]), "Current time: {} msec", 1_700_000_000_000u64).unwrap();
//! ```

use std::fmt;
use std::io::{self, Write};


// Reset
pub const RESET: &str = "\x1b[0m";

// Regular colours (30-37)
pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const PURPLE: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

// Bright colours (90-97)
pub const BRIGHT_BLACK: &str = "\x1b[90m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_PURPLE: &str = "\x1b[95m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";

// Backgrounds (40-47)
pub const BLACK_BG: &str = "\x1b[40m";
pub const RED_BG: &str = "\x1b[41m";
pub const GREEN_BG: &str = "\x1b[42m";
pub const YELLOW_BG: &str = "\x1b[43m";
pub const BLUE_BG: &str = "\x1b[44m";
pub const PURPLE_BG: &str = "\x1b[45m";
pub const CYAN_BG: &str = "\x1b[46m";
pub const WHITE_BG: &str = "\x1b[47m";

// Bright backgrounds (100-107)
pub const BRIGHT_BLACK_BG: &str = "\x1b[100m";
pub const BRIGHT_RED_BG: &str = "\x1b[101m";
pub const BRIGHT_GREEN_BG: &str = "\x1b[102m";
pub const BRIGHT_YELLOW_BG: &str = "\x1b[103m";
pub const BRIGHT_BLUE_BG: &str = "\x1b[104m";
pub const BRIGHT_PURPLE_BG: &str = "\x1b[105m";
pub const BRIGHT_CYAN_BG: &str = "\x1b[106m";
pub const BRIGHT_WHITE_BG: &str = "\x1b[107m";

// Text styles
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const SLOW_BLINK: &str = "\x1b[5m";
pub const RAPID_BLINK: &str = "\x1b[6m";
pub const REVERSE: &str = "\x1b[7m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

// not widely supported
pub const DOUBLE_UNDERLINE: &str = "\x1b[21m";
pub const OVERLINE: &str = "\x1b[53m";

// Style resets. Bold and dim share SGR 22.
pub const RESET_BOLD: &str = "\x1b[22m";
pub const RESET_DIM: &str = "\x1b[22m";
pub const RESET_ITALIC: &str = "\x1b[23m";
pub const RESET_UNDERLINE: &str = "\x1b[24m";
pub const RESET_BLINK: &str = "\x1b[25m";
pub const RESET_REVERSE: &str = "\x1b[27m";
pub const RESET_STRIKETHROUGH: &str = "\x1b[29m";


/// Foreground colour from the 256-colour palette. Codes outside 0-255 are not rejected.
pub fn colour256(code: i32) -> String {
    format!("\x1b[38;5;{}m", code)
}

pub fn background256(code: i32) -> String {
    format!("\x1b[48;5;{}m", code)
}

/// 24-bit true colour foreground.
pub fn rgb(r: i32, g: i32, b: i32) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub fn rgb_background(r: i32, g: i32, b: i32) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}


/// Starts a styled line. Tokens are written in the given order and are not
/// validated, so any string passes through as-is.
pub fn styles(tokens: &[&str]) -> Builder {
    let mut prefix = String::new();
    for token in tokens {
        prefix.push_str(token);
    }
    Builder { prefix }
}


/// Single-use line builder returned by [`styles`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    prefix: String,
}

impl Builder {
    /// Writes `prefix + line + RESET` and a line terminator to stdout.
    ///
    /// # Arguments
    /// * `line` - Printed as-is, no interpolation happens here. Use
    ///   [`styled_println!`] for formatted output.
    pub fn println(self, line: impl fmt::Display) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.writeln(&mut handle, line)
    }

    /// Same as [`Builder::println`], for any writer.
    pub fn writeln<W: Write + ?Sized>(self, out: &mut W, line: impl fmt::Display) -> io::Result<()> {
        let styled = format!("{}{}{}\n", self.prefix, line, RESET);

        // one write per line so a reset never ends up split from its content
        out.write_all(styled.as_bytes())?;
        out.flush()
    }
}


/// Prints a styled line to stdout.
///
/// With only a line the text is printed verbatim, braces included. With
/// arguments the line is a format string, checked at compile time.
#[macro_export]
macro_rules! styled_println {
    ($builder:expr, $line:expr $(,)?) => {
        $builder.println($line)
    };
    ($builder:expr, $fmt:literal, $($arg:tt)+) => {
        $builder.println(::core::format_args!($fmt, $($arg)+))
    };
}

/// Like [`styled_println!`] but writes to the given `io::Write`.
#[macro_export]
macro_rules! styled_writeln {
    ($out:expr, $builder:expr, $line:expr $(,)?) => {
        $builder.writeln($out, $line)
    };
    ($out:expr, $builder:expr, $fmt:literal, $($arg:tt)+) => {
        $builder.writeln($out, ::core::format_args!($fmt, $($arg)+))
    };
}


#[cfg(test)]
mod tests {
    use super::*;

    fn render(builder: Builder, line: &str) -> String {
        let mut out = Vec::new();
        builder.writeln(&mut out, line).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn tokens_are_written_in_order_before_the_line() {
        let cases: [&[&str]; 4] = [
            &[CYAN],
            &[GREEN, BOLD],
            &[UNDERLINE, RED_BG, BRIGHT_WHITE],
            &[SLOW_BLINK, SLOW_BLINK],
        ];

        for tokens in cases {
            let output = render(styles(tokens), "hello");
            let expected = format!("{}hello{}\n", tokens.concat(), RESET);
            assert_eq!(output, expected);
        }
    }

    #[test]
    fn no_tokens_still_resets() {
        assert_eq!(render(styles(&[]), "plain"), "plain\x1b[0m\n");
    }

    #[test]
    fn non_ansi_tokens_pass_through() {
        assert_eq!(render(styles(&[">> "]), "x"), ">> x\x1b[0m\n");
    }

    #[test]
    fn zero_arguments_print_verbatim() {
        let mut out = Vec::new();
        styled_writeln!(&mut out, styles(&[]), "literal %d {} text").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "literal %d {} text\x1b[0m\n");
    }

    #[test]
    fn arguments_are_interpolated() {
        let mut out = Vec::new();
        styled_writeln!(&mut out, styles(&[]), "{} items", 5).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "5 items\x1b[0m\n");

        let mut out = Vec::new();
        styled_writeln!(&mut out, styles(&[GREEN]), "Result: {:.2} hashes/s", 12.3456).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[32mResult: 12.35 hashes/s\x1b[0m\n");
    }

    #[test]
    fn leading_newline_stays_inside_the_style() {
        let mut out = Vec::new();
        styled_writeln!(&mut out, styles(&[CYAN]), "\nChecking CPU over {} cores...", 4).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[36m\nChecking CPU over 4 cores...\x1b[0m\n"
        );
    }

    #[test]
    fn factory_tokens() {
        assert_eq!(rgb(255, 0, 128), "\x1b[38;2;255;0;128m");
        assert_eq!(rgb_background(255, 0, 128), "\x1b[48;2;255;0;128m");
        assert_eq!(colour256(208), "\x1b[38;5;208m");
        assert_eq!(background256(17), "\x1b[48;5;17m");
    }

    #[test]
    fn factory_tokens_are_not_range_checked() {
        assert_eq!(rgb(300, 0, 1000), "\x1b[38;2;300;0;1000m");
        assert_eq!(colour256(256), "\x1b[38;5;256m");
        assert_eq!(rgb(-1, 0, 0), "\x1b[38;2;-1;0;0m");
        assert_eq!(background256(-7), "\x1b[48;5;-7m");
    }

    #[test]
    fn factory_tokens_combine_with_constants() {
        let pink = rgb(255, 0, 128);
        let output = render(styles(&[pink.as_str(), BOLD]), "pink");
        assert_eq!(output, "\x1b[38;2;255;0;128m\x1b[1mpink\x1b[0m\n");
    }

    #[test]
    fn bold_and_dim_resets_share_a_code() {
        assert_eq!(RESET_BOLD, RESET_DIM);
        assert_eq!(RESET_BOLD, "\x1b[22m");
    }
}
