//! Merger configuration: class prefix and rule-table extensions.
//!
//! A [`MergeConfig`] is built in code with builder methods or loaded from a
//! TOML file:
//!
//! ```toml
//! prefix = "tw-"
//!
//! [[groups]]
//! id = "text-shadow"
//! exact = ["text-shadow"]
//! prefixes = [{ prefix = "text-shadow", accepts = ["tshirt-size", "arbitrary"] }]
//!
//! [conflicts]
//! "text-shadow" = ["text-color"]
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::rules::validators::UnknownValidator;
use crate::rules::{RuleTable, Validator};

/// Errors from loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("group `{group}`: {source}")]
    UnknownValidator {
        group: String,
        #[source]
        source: UnknownValidator,
    },
    #[error("group `{0}` has no exact classes or prefixes")]
    EmptyGroup(String),
    #[error("conflict references unknown group `{0}`")]
    UnknownGroup(String),
}

/// A prefix rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixSpec {
    pub prefix: String,
    /// Validator names, e.g. `"number"`, `"arbitrary-length"`, `"keyword:a|b"`.
    pub accepts: Vec<String>,
}

/// A conflict group definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    pub id: String,
    #[serde(default)]
    pub exact: Vec<String>,
    #[serde(default)]
    pub prefixes: Vec<PrefixSpec>,
}

/// Additions to a rule table: new groups and conflict relations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleExtension {
    pub groups: Vec<GroupSpec>,
    pub conflicts: BTreeMap<String, Vec<String>>,
    pub modifier_conflicts: BTreeMap<String, Vec<String>>,
}

impl RuleExtension {
    /// Returns `true` if applying this extension changes nothing.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.conflicts.is_empty() && self.modifier_conflicts.is_empty()
    }
}

impl RuleTable {
    /// Apply an extension. Groups are added first so conflicts may refer to
    /// them. Extension prefix rules are tried before the table's existing
    /// rules on the same prefix, in the order written. On error the table is
    /// left unchanged.
    pub fn extend(&mut self, ext: &RuleExtension) -> Result<(), ConfigError> {
        let mut staged = self.clone();
        let mut inserted: HashMap<&str, usize> = HashMap::new();

        for group in &ext.groups {
            if group.exact.is_empty() && group.prefixes.is_empty() {
                return Err(ConfigError::EmptyGroup(group.id.clone()));
            }
            staged.add_exact(&group.id, &group.exact);
            for spec in &group.prefixes {
                let accepts = spec
                    .accepts
                    .iter()
                    .map(|name| name.parse::<Validator>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|source| ConfigError::UnknownValidator {
                        group: group.id.clone(),
                        source,
                    })?;
                let slot = inserted.entry(spec.prefix.as_str()).or_default();
                staged.insert_prefixed(*slot, &group.id, &spec.prefix, accepts);
                *slot += 1;
            }
        }

        for (map, modifier) in [(&ext.conflicts, false), (&ext.modifier_conflicts, true)] {
            for (group, overridden) in map {
                if let Some(unknown) = std::iter::once(group)
                    .chain(overridden)
                    .find(|g| !staged.has_group(g))
                {
                    return Err(ConfigError::UnknownGroup(unknown.clone()));
                }
                if modifier {
                    staged.add_modifier_conflicts(group, overridden);
                } else {
                    staged.add_conflicts(group, overridden);
                }
            }
        }

        debug!(
            groups = ext.groups.len(),
            conflicts = ext.conflicts.len(),
            modifier_conflicts = ext.modifier_conflicts.len(),
            "extended rule table"
        );
        *self = staged;
        Ok(())
    }
}

/// Configuration for a [`Merger`](crate::merge::Merger).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeConfig {
    /// Class prefix (e.g. `tw-`). When set, only classes whose base starts
    /// with it are treated as utilities.
    pub prefix: Option<String>,
    /// Rules added on top of the default table.
    pub extension: RuleExtension,
}

/// On-disk layout: prefix and extension fields side by side.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ConfigFile {
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default)]
    groups: Vec<GroupSpec>,
    #[serde(default)]
    conflicts: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    modifier_conflicts: BTreeMap<String, Vec<String>>,
}

impl From<ConfigFile> for MergeConfig {
    fn from(file: ConfigFile) -> Self {
        MergeConfig {
            prefix: file.prefix,
            extension: RuleExtension {
                groups: file.groups,
                conflicts: file.conflicts,
                modifier_conflicts: file.modifier_conflicts,
            },
        }
    }
}

impl MergeConfig {
    /// Create a default config: no prefix, no extensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class prefix (builder).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the rule extension (builder).
    pub fn with_extension(mut self, extension: RuleExtension) -> Self {
        self.extension = extension;
        self
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config = MergeConfig::from(toml::from_str::<ConfigFile>(input)?);
        debug!(
            prefix = config.prefix.as_deref().unwrap_or(""),
            groups = config.extension.groups.len(),
            "loaded merge config"
        );
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the rule table this config describes: the Tailwind defaults
    /// plus the extension.
    pub fn build_rules(&self) -> Result<RuleTable, ConfigError> {
        let mut table = RuleTable::tailwind();
        if !self.extension.is_empty() {
            table.extend(&self.extension)?;
        }
        Ok(table)
    }
}
