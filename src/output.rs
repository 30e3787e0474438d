//! # Output
//!
//! User-facing progress lines. Whether they carry emoji and colour is
//! decided once from the `--color` flag and the environment:
//!
//! - `--color=always|never` wins.
//! - In `auto` mode colour is off when `NO_COLOR` is set, `CLICOLOR=0`,
//!   `TERM=dumb`, or stdout is not a terminal (unless `CLICOLOR_FORCE=1`).
//!
//! Lines are built by [`OutputConfig`] methods and printed by the caller,
//! which keeps them easy to test.

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // Presence alone disables colour (https://no-color.org/)
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

    /// Configuration with colors enabled.
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Configuration with colors disabled.
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// A step that is about to run, e.g. "Pulling from origin/main".
    pub fn step(&self, message: &str) -> String {
        self.line("🔄", "[..]", message, |m| style(m).cyan().to_string())
    }

    /// A step that finished successfully.
    pub fn success(&self, message: &str) -> String {
        self.line("✅", "[OK]", message, |m| style(m).green().to_string())
    }

    /// A step that failed but did not stop the operation.
    pub fn warning(&self, message: &str) -> String {
        self.line("⚠️ ", "[WARN]", message, |m| style(m).yellow().to_string())
    }

    /// Advice for the user.
    pub fn hint(&self, message: &str) -> String {
        self.line("💡", "[HINT]", message, |m| m.to_string())
    }

    fn line(&self, emoji_str: &str, plain: &str, message: &str, paint: impl Fn(&str) -> String) -> String {
        let body = if self.use_color {
            paint(message)
        } else {
            message.to_string()
        };
        format!("{} {}", emoji(self, emoji_str, plain), body)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain marker otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("NEVER");
        assert!(!config.use_color);
    }

    #[test]
    fn test_plain_lines() {
        let config = OutputConfig::without_color();
        assert_eq!(config.success("Pushed"), "[OK] Pushed");
        assert_eq!(config.warning("Push rejected"), "[WARN] Push rejected");
        assert_eq!(config.step("Pulling"), "[..] Pulling");
        assert_eq!(config.hint("Pull first"), "[HINT] Pull first");
    }

    #[test]
    fn test_colored_lines_use_emoji() {
        let config = OutputConfig::with_color();
        assert!(config.success("Pushed").starts_with("✅ "));
        assert!(config.success("Pushed").contains("Pushed"));
    }
}
