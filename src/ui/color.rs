//! Color utilities for terminal output

use std::env;
use std::io::IsTerminal;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Apply color to text printed on stdout if the terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    paint(text, color, supports_formatting())
}

/// Apply color to text printed on stderr if the terminal supports it
pub fn colorize_stderr(text: &str, color: &str) -> String {
    paint(text, color, stderr_supports_formatting())
}

fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Whether stdout should receive ANSI escapes
pub fn supports_formatting() -> bool {
    formatting_allowed(&TermEnv::current(), std::io::stdout().is_terminal())
}

/// Whether stderr should receive ANSI escapes
pub fn stderr_supports_formatting() -> bool {
    formatting_allowed(&TermEnv::current(), std::io::stderr().is_terminal())
}

/// Snapshot of the environment variables that control coloring
#[derive(Debug, Default, Clone)]
struct TermEnv {
    no_color: bool,
    force_color: Option<String>,
    term: Option<String>,
    running_tests: bool,
}

impl TermEnv {
    fn current() -> Self {
        Self {
            no_color: env::var_os("NO_COLOR").is_some(),
            force_color: env::var("FORCE_COLOR").ok(),
            term: env::var("TERM").ok(),
            running_tests: cfg!(test) || env::var_os("RUST_TEST_TIME_UNIT").is_some(),
        }
    }
}

fn formatting_allowed(term_env: &TermEnv, is_terminal: bool) -> bool {
    if term_env.no_color || term_env.force_color.as_deref() == Some("0") {
        return false;
    }

    if term_env.force_color.is_some() {
        return true;
    }

    if term_env.running_tests || !is_terminal {
        return false;
    }

    match term_env.term.as_deref() {
        Some("dumb") | Some("") => false,
        // Windows consoles commonly leave TERM unset but handle ANSI
        None => cfg!(windows),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_env(term: &str) -> TermEnv {
        TermEnv {
            term: Some(term.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_paint() {
        assert_eq!(paint("text", Colors::RED, false), "text");
        assert_eq!(paint("text", Colors::RED, true), "\x1b[31mtext\x1b[0m");
    }

    #[test]
    fn test_formatting_allowed_on_capable_terminal() {
        assert!(formatting_allowed(&tty_env("xterm-256color"), true));
        assert!(formatting_allowed(&tty_env("screen"), true));
    }

    #[test]
    fn test_formatting_disabled_when_redirected() {
        assert!(!formatting_allowed(&tty_env("xterm-256color"), false));
    }

    #[test]
    fn test_formatting_disabled_for_dumb_or_empty_term() {
        assert!(!formatting_allowed(&tty_env("dumb"), true));
        assert!(!formatting_allowed(&tty_env(""), true));
    }

    #[test]
    fn test_no_color_wins() {
        let term_env = TermEnv {
            no_color: true,
            force_color: Some("1".to_string()),
            ..tty_env("xterm")
        };
        assert!(!formatting_allowed(&term_env, true));
    }

    #[test]
    fn test_force_color() {
        let forced = TermEnv {
            force_color: Some("1".to_string()),
            running_tests: true,
            ..Default::default()
        };
        assert!(formatting_allowed(&forced, false));

        let disabled = TermEnv {
            force_color: Some("0".to_string()),
            ..tty_env("xterm")
        };
        assert!(!formatting_allowed(&disabled, true));
    }

    #[test]
    fn test_formatting_disabled_when_running_tests() {
        let term_env = TermEnv {
            running_tests: true,
            ..tty_env("xterm")
        };
        assert!(!formatting_allowed(&term_env, true));
    }
}
