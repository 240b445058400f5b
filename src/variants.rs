//! Variant styles: base classes plus named variant axes, defaults, and
//! compound variants.
//!
//! ```
//! use classmerge::variants::{VariantProps, VariantStyles};
//!
//! let button = VariantStyles::new("inline-flex items-center rounded-md")
//!     .variant("variant", [("primary", "bg-primary text-white"), ("ghost", "bg-transparent")])
//!     .variant("size", [("sm", "h-8 px-3"), ("lg", "h-10 px-8")])
//!     .default_variant("variant", "primary")
//!     .default_variant("size", "sm");
//!
//! let classes = button.resolve(&VariantProps::new().set("size", "lg").class("px-2"));
//! assert_eq!(classes, "inline-flex items-center rounded-md bg-primary text-white h-10 px-2");
//! ```

use crate::input::{join_classes, ClassNameInput};
use crate::merge::{resolve_class_names, Merger};

/// One variant axis: its name and `(value, classes)` options in order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VariantAxis {
    name: String,
    options: Vec<(String, String)>,
}

impl VariantAxis {
    fn classes_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, classes)| classes.as_str())
    }
}

/// Classes applied when several variant selections hold at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundVariant {
    conditions: Vec<(String, Vec<String>)>,
    class: String,
}

impl CompoundVariant {
    /// Create a compound variant with no conditions and no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require variant `name` to equal `value` (builder).
    pub fn when(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.when_any(name, [value])
    }

    /// Require variant `name` to equal any of `values` (builder).
    pub fn when_any<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.conditions
            .push((name.into(), values.into_iter().map(Into::into).collect()));
        self
    }

    /// Classes to add when every condition holds (builder).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn matches(&self, selected: &dyn Fn(&str) -> Option<String>) -> bool {
        self.conditions.iter().all(|(name, accepted)| {
            selected(name).is_some_and(|value| accepted.iter().any(|a| *a == value))
        })
    }
}

/// Per-call variant selections plus extra classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantProps {
    selections: Vec<(String, String)>,
    class: ClassNameInput,
}

impl VariantProps {
    /// Create empty props: every axis falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` on axis `name` (builder). A later call for the same
    /// axis replaces the earlier one.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.selections.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.selections.push((name, value)),
        }
        self
    }

    /// Select a boolean axis: `true`/`false` map to the `"true"`/`"false"` options.
    pub fn set_flag(self, name: impl Into<String>, on: bool) -> Self {
        self.set(name, if on { "true" } else { "false" })
    }

    /// Select `value` only if present; `None` keeps the default (builder).
    pub fn set_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Extra classes appended after all variant classes (builder).
    pub fn class(mut self, class: impl Into<ClassNameInput>) -> Self {
        self.class = class.into();
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.selections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A reusable set of variant styles for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantStyles {
    base: String,
    axes: Vec<VariantAxis>,
    defaults: Vec<(String, String)>,
    compounds: Vec<CompoundVariant>,
}

impl VariantStyles {
    /// Create variant styles with `base` classes applied to every call.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    /// Add a variant axis with `(value, classes)` options (builder).
    pub fn variant<V, C>(
        mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = (V, C)>,
    ) -> Self
    where
        V: Into<String>,
        C: Into<String>,
    {
        self.axes.push(VariantAxis {
            name: name.into(),
            options: options
                .into_iter()
                .map(|(v, c)| (v.into(), c.into()))
                .collect(),
        });
        self
    }

    /// Value used for axis `name` when props don't select one (builder).
    pub fn default_variant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.defaults.retain(|(n, _)| *n != name);
        self.defaults.push((name, value.into()));
        self
    }

    /// Add a compound variant (builder).
    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.compounds.push(compound);
        self
    }

    /// Names of the variant axes, in declaration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|axis| axis.name.as_str())
    }

    /// The value in effect for axis `name`: the prop if set, else the default.
    fn selected(&self, props: &VariantProps, name: &str) -> Option<String> {
        props
            .get(name)
            .or_else(|| {
                self.defaults
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| v.as_str())
            })
            .map(str::to_owned)
    }

    fn inputs(&self, props: &VariantProps) -> Vec<ClassNameInput> {
        let mut inputs = vec![ClassNameInput::from(self.base.as_str())];

        for axis in &self.axes {
            if let Some(classes) = self
                .selected(props, &axis.name)
                .and_then(|value| axis.classes_for(&value).map(str::to_owned))
            {
                inputs.push(classes.into());
            }
        }

        let selected = |name: &str| self.selected(props, name);
        for compound in &self.compounds {
            if compound.matches(&selected) {
                inputs.push(compound.class.as_str().into());
            }
        }

        inputs.push(props.class.clone());
        inputs
    }

    /// All applicable classes joined in order, without conflict resolution.
    pub fn classes(&self, props: &VariantProps) -> String {
        join_classes(self.inputs(props))
    }

    /// All applicable classes, merged with the default rules.
    pub fn resolve(&self, props: &VariantProps) -> String {
        resolve_class_names(self.inputs(props))
    }

    /// All applicable classes, merged with `merger`.
    pub fn resolve_with(&self, merger: &Merger, props: &VariantProps) -> String {
        merger.resolve(self.inputs(props))
    }
}
