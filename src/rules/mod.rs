//! Conflict rules: which group a class belongs to and which groups collide.
//!
//! The merger only talks to the [`ConflictRules`] trait. [`RuleTable`] is the
//! data-driven implementation; [`RuleTable::tailwind`] fills it with the
//! default Tailwind groups.
//!
//! Lookup order for a base class (variants and `!` already stripped):
//!
//! 1. Arbitrary property `[prop:value]` → group `arbitrary..prop`
//! 2. Exact match (`block`, `border`, `truncate`)
//! 3. Longest dash-delimited prefix whose validators accept the remainder
//!    (`inset-x-4` tries `inset-x` before `inset`). Rules registered on the
//!    same prefix are tried in registration order.
//!
//! A leading `-` (negative value) is ignored.

pub mod tailwind;
pub mod validators;

use std::collections::HashMap;

pub use validators::Validator;

/// Identifier of a conflict group.
pub type GroupId = String;

/// Pluggable conflict-group rules.
pub trait ConflictRules: Send + Sync {
    /// The conflict group of a base class, or `None` if unrecognized.
    fn class_group(&self, base: &str) -> Option<GroupId>;

    /// Groups that a class in `group` overrides.
    fn conflicting_groups(&self, group: &str) -> &[GroupId];

    /// Additional groups overridden when the class carries a postfix
    /// modifier (`text-lg/7` also sets line height).
    fn modifier_conflicting_groups(&self, _group: &str) -> &[GroupId] {
        &[]
    }
}

/// One candidate rule on a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PrefixRule {
    group: GroupId,
    accepts: Vec<Validator>,
}

impl PrefixRule {
    fn matches(&self, value: &str) -> bool {
        self.accepts.iter().any(|v| v.accepts(value))
    }
}

/// Data-driven conflict rules.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    exact: HashMap<String, GroupId>,
    prefixed: HashMap<String, Vec<PrefixRule>>,
    conflicts: HashMap<GroupId, Vec<GroupId>>,
    modifier_conflicts: HashMap<GroupId, Vec<GroupId>>,
}

impl RuleTable {
    /// Create an empty table. Nothing is recognized until rules are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register whole class names belonging to `group`.
    pub fn add_exact<S: AsRef<str>>(
        &mut self,
        group: &str,
        classes: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        for class in classes {
            self.exact.insert(class.as_ref().to_owned(), group.to_owned());
        }
        self
    }

    /// Register `prefix-<value>` classes belonging to `group`, where `value`
    /// must satisfy one of `accepts`.
    pub fn add_prefixed(
        &mut self,
        group: &str,
        prefix: &str,
        accepts: impl IntoIterator<Item = Validator>,
    ) -> &mut Self {
        self.prefixed
            .entry(prefix.to_owned())
            .or_default()
            .push(PrefixRule {
                group: group.to_owned(),
                accepts: accepts.into_iter().collect(),
            });
        self
    }

    /// Like [`add_prefixed`](Self::add_prefixed), but the rule is tried at
    /// position `index` among the rules already on `prefix` (clamped to the
    /// end).
    pub fn insert_prefixed(
        &mut self,
        index: usize,
        group: &str,
        prefix: &str,
        accepts: impl IntoIterator<Item = Validator>,
    ) -> &mut Self {
        let rules = self.prefixed.entry(prefix.to_owned()).or_default();
        rules.insert(
            index.min(rules.len()),
            PrefixRule {
                group: group.to_owned(),
                accepts: accepts.into_iter().collect(),
            },
        );
        self
    }

    /// Declare that classes in `group` override classes in `overridden`.
    pub fn add_conflicts<S: AsRef<str>>(
        &mut self,
        group: &str,
        overridden: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        extend_unique(self.conflicts.entry(group.to_owned()).or_default(), overridden);
        self
    }

    /// Declare groups overridden by `group` only when a postfix modifier is present.
    pub fn add_modifier_conflicts<S: AsRef<str>>(
        &mut self,
        group: &str,
        overridden: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        extend_unique(
            self.modifier_conflicts.entry(group.to_owned()).or_default(),
            overridden,
        );
        self
    }

    /// Returns `true` if any rule produces `group`.
    pub fn has_group(&self, group: &str) -> bool {
        self.exact.values().any(|g| g == group)
            || self
                .prefixed
                .values()
                .flatten()
                .any(|rule| rule.group == group)
    }

    /// Number of registered exact classes and prefix rules.
    pub fn len(&self) -> usize {
        self.exact.len() + self.prefixed.values().map(Vec::len).sum::<usize>()
    }

    /// Returns `true` if the table recognizes nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup_prefixed(&self, base: &str) -> Option<&GroupId> {
        // Walk dash positions right to left so longer prefixes win.
        for (idx, _) in base.rmatch_indices('-') {
            let (prefix, value) = (&base[..idx], &base[idx + 1..]);
            if let Some(rules) = self.prefixed.get(prefix) {
                if let Some(rule) = rules.iter().find(|r| r.matches(value)) {
                    return Some(&rule.group);
                }
            }
        }
        None
    }
}

impl ConflictRules for RuleTable {
    fn class_group(&self, base: &str) -> Option<GroupId> {
        if let Some(property) = arbitrary_property(base) {
            return Some(format!("arbitrary..{property}"));
        }

        let base = match base.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => rest,
            _ => base,
        };
        if base.is_empty() {
            return None;
        }

        self.exact
            .get(base)
            .or_else(|| self.lookup_prefixed(base))
            .cloned()
    }

    fn conflicting_groups(&self, group: &str) -> &[GroupId] {
        self.conflicts.get(group).map(Vec::as_slice).unwrap_or_default()
    }

    fn modifier_conflicting_groups(&self, group: &str) -> &[GroupId] {
        self.modifier_conflicts
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// `[mask-type:luminance]` → `mask-type`.
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    let valid = !property.is_empty()
        && !value.is_empty()
        && property
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    valid.then_some(property)
}

fn extend_unique<S: AsRef<str>>(list: &mut Vec<GroupId>, items: impl IntoIterator<Item = S>) {
    for item in items {
        let item = item.as_ref();
        if !list.iter().any(|g| g == item) {
            list.push(item.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small_table() -> RuleTable {
        let mut table = RuleTable::new();
        table
            .add_exact("display", ["block", "flex", "hidden"])
            .add_prefixed("p", "p", [Validator::Length])
            .add_prefixed("px", "px", [Validator::Length])
            .add_prefixed("font-size", "text", [Validator::TshirtSize])
            .add_prefixed("text-color", "text", [Validator::Any])
            .add_prefixed("inset", "inset", [Validator::Length])
            .add_prefixed("inset-x", "inset-x", [Validator::Length])
            .add_conflicts("p", ["px"]);
        table
    }

    #[test]
    fn test_exact() {
        let table = small_table();
        assert_eq!(table.class_group("flex").as_deref(), Some("display"));
    }

    #[test]
    fn test_prefixed() {
        let table = small_table();
        assert_eq!(table.class_group("px-4").as_deref(), Some("px"));
        assert_eq!(table.class_group("p-4").as_deref(), Some("p"));
    }

    #[test]
    fn test_registration_order_decides() {
        let table = small_table();
        assert_eq!(table.class_group("text-sm").as_deref(), Some("font-size"));
        assert_eq!(table.class_group("text-red-500").as_deref(), Some("text-color"));
    }

    #[test]
    fn test_longest_prefix_first() {
        let table = small_table();
        assert_eq!(table.class_group("inset-x-4").as_deref(), Some("inset-x"));
        assert_eq!(table.class_group("inset-4").as_deref(), Some("inset"));
    }

    #[test]
    fn test_negative() {
        let table = small_table();
        assert_eq!(table.class_group("-px-4").as_deref(), Some("px"));
        assert_eq!(table.class_group("-").as_deref(), None);
    }

    #[test]
    fn test_rejected_value() {
        let table = small_table();
        assert_eq!(table.class_group("px-auto"), None);
    }

    #[test]
    fn test_unknown() {
        let table = small_table();
        assert_eq!(table.class_group("glass-panel"), None);
        assert_eq!(table.class_group(""), None);
    }

    #[test]
    fn test_arbitrary_property() {
        let table = RuleTable::new();
        assert_eq!(
            table.class_group("[mask-type:luminance]").as_deref(),
            Some("arbitrary..mask-type")
        );
        assert_eq!(table.class_group("[oops]"), None);
    }

    #[test]
    fn test_conflicts() {
        let table = small_table();
        assert_eq!(table.conflicting_groups("p"), &["px".to_string()]);
        assert!(table.conflicting_groups("px").is_empty());
        assert!(table.modifier_conflicting_groups("p").is_empty());
    }

    #[test]
    fn test_conflicts_deduplicated() {
        let mut table = RuleTable::new();
        table.add_conflicts("a", ["b", "c"]).add_conflicts("a", ["b"]);
        assert_eq!(table.conflicting_groups("a").len(), 2);
    }

    #[test]
    fn test_insert_prefixed_ahead_of_catch_all() {
        let mut table = small_table();
        table.insert_prefixed(0, "font-size", "text", [Validator::keywords(["huge"])]);
        assert_eq!(table.class_group("text-huge").as_deref(), Some("font-size"));
        assert_eq!(table.class_group("text-red-500").as_deref(), Some("text-color"));

        table.insert_prefixed(99, "late", "text", [Validator::Any]);
        assert_eq!(table.class_group("text-other").as_deref(), Some("text-color"));
    }

    #[test]
    fn test_has_group_and_len() {
        let table = small_table();
        assert!(table.has_group("display"));
        assert!(table.has_group("inset-x"));
        assert!(!table.has_group("missing"));
        assert_eq!(table.len(), 9);
        assert!(RuleTable::new().is_empty());
    }
}
