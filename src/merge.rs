//! The class-name resolver: flatten inputs, then drop every class that a
//! later class overrides.
//!
//! Two classes conflict when they share a modifier id (same variants, same
//! important flag) and either belong to the same group or the later one's
//! group overrides the earlier one's (`p-4` overrides `px-2`). Classes the
//! rules don't recognize always survive.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::class::{parse_class, ParsedClass};
use crate::config::{ConfigError, MergeConfig};
use crate::input::{join_classes, ClassNameInput};
use crate::rules::{ConflictRules, GroupId, RuleTable};

static DEFAULT_MERGER: LazyLock<Merger> = LazyLock::new(Merger::default);

/// Resolve class-name inputs with the default Tailwind rules.
///
/// ```
/// use classmerge::resolve_class_names;
///
/// assert_eq!(resolve_class_names(["px-4 py-2", "px-8"]), "py-2 px-8");
/// ```
pub fn resolve_class_names<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassNameInput>,
{
    DEFAULT_MERGER.resolve(inputs)
}

/// Merge an already-joined class string with the default Tailwind rules.
pub fn merge_classes(classes: &str) -> String {
    DEFAULT_MERGER.merge(classes)
}

/// Conflict-aware class merger. Immutable once built; share it freely.
pub struct Merger {
    rules: Box<dyn ConflictRules>,
    prefix: Option<String>,
}

impl Merger {
    /// Build a merger from configuration: Tailwind defaults plus the
    /// configured extension and prefix.
    pub fn new(config: &MergeConfig) -> Result<Self, ConfigError> {
        let rules = config.build_rules()?;
        debug!(prefix = config.prefix.as_deref().unwrap_or(""), rules = rules.len(), "built merger");
        Ok(Self {
            rules: Box::new(rules),
            prefix: config.prefix.clone(),
        })
    }

    /// Build a merger over custom rules.
    pub fn with_rules(rules: impl ConflictRules + 'static) -> Self {
        Self {
            rules: Box::new(rules),
            prefix: None,
        }
    }

    /// Only treat classes starting with `prefix` as utilities (builder).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The rules this merger consults.
    pub fn rules(&self) -> &dyn ConflictRules {
        self.rules.as_ref()
    }

    /// Flatten `inputs` and merge the result.
    pub fn resolve<I>(&self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassNameInput>,
    {
        self.merge(&join_classes(inputs))
    }

    /// Merge a whitespace-separated class string.
    pub fn merge(&self, class_list: &str) -> String {
        let classes: Vec<&str> = class_list.split_whitespace().collect();
        let mut claimed: HashSet<(String, GroupId)> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

        for &raw in classes.iter().rev() {
            let parsed = parse_class(raw);
            let Some((group, has_modifier)) = self.group_of(&parsed) else {
                kept.push(raw);
                continue;
            };

            let key = (parsed.modifier_id(), group);
            if claimed.contains(&key) {
                trace!(class = raw, group = %key.1, "dropped overridden class");
                continue;
            }

            let (modifier_id, group) = &key;
            let mut overridden: Vec<&GroupId> = self.rules.conflicting_groups(group).iter().collect();
            if has_modifier {
                overridden.extend(self.rules.modifier_conflicting_groups(group));
            }
            for other in overridden {
                claimed.insert((modifier_id.clone(), other.clone()));
            }
            claimed.insert(key);
            kept.push(raw);
        }

        kept.reverse();
        kept.join(" ")
    }

    /// Group of a parsed class and whether the group was found with the
    /// postfix modifier cut off.
    fn group_of(&self, parsed: &ParsedClass<'_>) -> Option<(GroupId, bool)> {
        if parsed.postfix_modifier.is_some() {
            if let Some(group) = self.lookup(parsed.base_without_modifier()) {
                return Some((group, true));
            }
        }
        self.lookup(parsed.base).map(|group| (group, false))
    }

    fn lookup(&self, base: &str) -> Option<GroupId> {
        let base = match &self.prefix {
            Some(prefix) if !base.starts_with('[') => {
                let negative = base.starts_with('-');
                let rest = base.strip_prefix('-').unwrap_or(base).strip_prefix(prefix.as_str())?;
                if negative {
                    return self.rules.class_group(&format!("-{rest}"));
                }
                rest
            }
            _ => base,
        };
        self.rules.class_group(base)
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::with_rules(RuleTable::tailwind())
    }
}

impl fmt::Debug for Merger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Merger")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
