//! # classmerge
//!
//! Compose CSS utility class names and resolve Tailwind-style conflicts.
//!
//! Inputs are flattened clsx-style (strings, optionals, conditional pairs,
//! nested lists), then merged so that when two classes set the same
//! property under the same variants, only the later one survives.
//!
//! ```
//! use classmerge::{resolve_class_names, ClassNameInput};
//!
//! let disabled = true;
//! let classes = resolve_class_names([
//!     ClassNameInput::from("rounded-md px-4 py-2 bg-primary"),
//!     ClassNameInput::when("opacity-50 pointer-events-none", disabled),
//!     ClassNameInput::from(Some("px-8 bg-accent")),
//! ]);
//! assert_eq!(classes, "rounded-md py-2 opacity-50 pointer-events-none px-8 bg-accent");
//! ```
//!
//! ## Modules
//!
//! - **[`input`]**: class-name inputs and clsx-style flattening
//! - **[`class`]**: splitting a class into variants, important flag, base, and modifier
//! - **[`rules`]**: conflict groups, validators, and the default Tailwind table
//! - **[`config`]**: prefix and rule extensions, in code or TOML
//! - **[`merge`]**: the conflict resolver
//! - **[`variants`]**: base + variant + compound class composition

// Inputs
pub mod input;

// Class parsing and rules
pub mod class;
pub mod rules;

// Resolution
pub mod config;
pub mod merge;
pub mod variants;

pub use config::{ConfigError, MergeConfig, RuleExtension};
pub use input::{join_classes, ClassNameInput};
pub use merge::{merge_classes, resolve_class_names, Merger};
pub use rules::{ConflictRules, GroupId, RuleTable, Validator};
pub use variants::{CompoundVariant, VariantProps, VariantStyles};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use classmerge_macros::cn;
