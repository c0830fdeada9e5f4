//! # Output Configuration
//!
//! Controls whether the run summary printed by the CLI uses color and emoji.
//! Log lines go through `env_logger` and are not affected.
//!
//! The `--color` flag takes `always`, `never` or `auto`. In `auto` mode color
//! is turned off by `NO_COLOR` (any value), `CLICOLOR=0` or `TERM=dumb`,
//! forced on by `CLICOLOR_FORCE`, and otherwise follows whether stdout is a
//! color-capable terminal.

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Build from the environment and the value of `--color`
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// `emoji` when color is on, `plain` otherwise
    pub fn emoji<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// Render a count, green when zero problems and red otherwise
    pub fn count(&self, count: usize, is_problem: bool) -> String {
        if !self.use_color {
            return count.to_string();
        }
        if is_problem && count > 0 {
            style(count).red().bold().force_styling(true).to_string()
        } else {
            style(count).green().force_styling(true).to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
