//! User settings, persisted as TOML.
//!
//! A [`Settings`] value is built once (from a file or defaults) and handed to
//! a [`crate::generator::DocGenerator`], which owns it immutably. Nothing in
//! the crate keeps settings in global state.
//!
//! ```toml
//! include_crefs = true
//! exclude_async_suffix = true
//!
//! [severities]
//! method = "info"
//!
//! [[word_maps]]
//! word = "Repo"
//! translation = "repository"
//!
//! [[word_maps]]
//! word = "To"
//! translation = "Converts to"
//! when = "leading-word"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::declaration::MemberKind;
use crate::grammar::translate::{self, WordMap};

/// Errors from reading or writing settings files.
#[derive(Debug, Error, Diagnostic)]
pub enum SettingsError {
    #[error("failed to read settings: {path}")]
    #[diagnostic(
        code(autodoc::settings::config_read),
        help("Ensure the settings file exists and is readable.")
    )]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {path}: {message}")]
    #[diagnostic(
        code(autodoc::settings::config_parse),
        help(
            "Check the TOML syntax. Toggles are booleans, severities are one of \
             hidden, info, warning, error, and each [[word_maps]] entry needs \
             `word` and `translation`."
        )
    )]
    ConfigParse { path: String, message: String },

    #[error("failed to encode settings as TOML: {message}")]
    #[diagnostic(
        code(autodoc::settings::config_encode),
        help("Word map text and severities must be representable as TOML strings.")
    )]
    ConfigEncode { message: String },

    #[error("failed to write settings: {path}")]
    #[diagnostic(
        code(autodoc::settings::config_write),
        help("Ensure you have write permissions to the settings directory.")
    )]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Diagnostic severity a host reports for an undocumented declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Hidden,
    Info,
    #[default]
    Warning,
    Error,
}

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Describe generic and array return types in prose instead of CDATA.
    #[serde(default = "default_true")]
    pub use_natural_language_for_return_node: bool,
    /// Link type names with `<see cref=".."/>`.
    #[serde(default)]
    pub include_crefs: bool,
    /// Emit `<value>` for properties.
    #[serde(default)]
    pub include_value_node_in_properties: bool,
    /// Drop a trailing `Async` from method summaries.
    #[serde(default)]
    pub exclude_async_suffix: bool,
    #[serde(default = "default_true")]
    pub preserve_existing_summary: bool,
    /// Only document public members (and members of interfaces).
    #[serde(default)]
    pub public_members_only: bool,
    /// Document non-public fields when `public_members_only` is off.
    #[serde(default)]
    pub non_public_fields_enabled: bool,
    /// Append "and return ..." to summaries of wrapper-returning methods.
    #[serde(default)]
    pub summary_mentions_return: bool,
    /// Regenerate returns, value and parameter text that is already written.
    #[serde(default)]
    pub rebuild_sections: bool,
    #[serde(default)]
    pub severities: BTreeMap<MemberKind, Severity>,
    #[serde(default = "translate::default_word_maps")]
    pub word_maps: Vec<WordMap>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_natural_language_for_return_node: true,
            include_crefs: false,
            include_value_node_in_properties: false,
            exclude_async_suffix: false,
            preserve_existing_summary: true,
            public_members_only: false,
            non_public_fields_enabled: false,
            summary_mentions_return: false,
            rebuild_sections: false,
            severities: BTreeMap::new(),
            word_maps: translate::default_word_maps(),
        }
    }
}

impl Settings {
    /// Severity for a declaration kind, defaulting to warning.
    pub fn severity(&self, kind: MemberKind) -> Severity {
        self.severities.get(&kind).copied().unwrap_or_default()
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let settings = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), word_maps = settings.word_maps.len(), "loaded settings");
        Ok(settings)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::ConfigEncode {
            message: e.to_string(),
        })
    }

    /// Save to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::ConfigWrite {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::ConfigWrite {
            path: path.display().to_string(),
            source: e,
        })
    }

    fn parse(content: &str, origin: &str) -> SettingsResult<Self> {
        toml::from_str(content).map_err(|e| SettingsError::ConfigParse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }
}
