use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if var("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        if let Some(mode) = var("DOCPROPS_COLOR").as_deref().and_then(ColorMode::parse) {
            config.color = mode;
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Makes `colored` follow this configuration process-wide.
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!(ColorMode::parse("ALWAYS"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("sometimes"), None);
    }

    #[test]
    fn test_no_color_wins_over_auto() {
        let config = FormattingConfig::from_vars(|k| (k == "NO_COLOR").then(|| "1".to_string()));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_clicolor_force() {
        let config = FormattingConfig::from_vars(|k| match k {
            "CLICOLOR" => Some("0".to_string()),
            "CLICOLOR_FORCE" => Some("1".to_string()),
            _ => None,
        });
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_explicit_color_mode() {
        let config = FormattingConfig::from_vars(|k| match k {
            "NO_COLOR" => Some(String::new()),
            "DOCPROPS_COLOR" => Some("always".to_string()),
            _ => None,
        });
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_plain() {
        assert!(!FormattingConfig::plain().color.should_use_color());
    }
}
