use serde::{Deserialize, Serialize};

use crate::core::{Defaults, EolStyle, IndentStyle};

/// Name of the configuration file searched for in the working directory
/// and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".docprops.toml";

/// Codec used when neither the config nor the CLI names one.
pub const DEFAULT_CODEC: &str = "utf-8";

/// Root configuration structure for docprops
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DocpropsConfig {
    /// Fallback verdict used when a buffer carries no signal
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Directory scanning and file decoding
    #[serde(default)]
    pub scan: Option<ScanConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub eol: Option<EolStyle>,
    #[serde(default)]
    pub indent: Option<IndentStyle>,
    #[serde(default)]
    pub indent_width: Option<usize>,
    #[serde(default)]
    pub tab_width: Option<usize>,
}

impl DefaultsConfig {
    /// Overlays the configured values onto `defaults`.
    pub fn apply(&self, defaults: &mut Defaults) {
        if let Some(eol) = self.eol {
            defaults.set_eol(eol);
        }
        if let Some(indent) = self.indent {
            defaults.set_indent(indent);
        }
        if let Some(width) = self.indent_width {
            defaults.set_indent_width(width);
        }
        if let Some(width) = self.tab_width {
            defaults.set_tab_width(width);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Encoding label, e.g. "utf-8" or "windows-1252"
    #[serde(default)]
    pub codec: Option<String>,

    /// Glob patterns excluded from directory scans
    #[serde(default)]
    pub ignore: Option<Vec<String>>,

    /// Maximum recursion depth for directory scans
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Include hidden files and directories
    #[serde(default)]
    pub hidden: Option<bool>,
}

impl DocpropsConfig {
    /// Built-in defaults overlaid with the `[defaults]` section.
    pub fn resolved_defaults(&self) -> Defaults {
        let mut defaults = Defaults::default();
        if let Some(section) = &self.defaults {
            section.apply(&mut defaults);
        }
        defaults
    }

    pub fn codec(&self) -> &str {
        self.scan
            .as_ref()
            .and_then(|s| s.codec.as_deref())
            .unwrap_or(DEFAULT_CODEC)
    }

    pub fn ignore_patterns(&self) -> Vec<String> {
        self.scan
            .as_ref()
            .and_then(|s| s.ignore.clone())
            .unwrap_or_else(|| vec!["README".to_string()])
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.scan.as_ref().and_then(|s| s.max_depth)
    }

    pub fn include_hidden(&self) -> bool {
        self.scan.as_ref().and_then(|s| s.hidden).unwrap_or(false)
    }

    /// Checks values that would make the fallback verdict meaningless.
    pub fn validate(&self) -> Result<(), String> {
        self.resolved_defaults()
            .validate()
            .map_err(|e| e.to_string())?;

        if let Some(patterns) = self.scan.as_ref().and_then(|s| s.ignore.as_ref()) {
            for pattern in patterns {
                glob::Pattern::new(pattern)
                    .map_err(|e| format!("invalid ignore pattern '{}': {}", pattern, e))?;
            }
        }

        Ok(())
    }
}
