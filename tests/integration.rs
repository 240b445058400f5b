//! Integration tests for classmerge.
//!
//! These tests exercise the public API from outside the crate: input
//! flattening, conflict resolution, configuration, and variant styles
//! working together.

use classmerge::{
    join_classes, merge_classes, resolve_class_names, ClassNameInput, CompoundVariant,
    MergeConfig, Merger, RuleTable, VariantProps, VariantStyles,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Input flattening
// ---------------------------------------------------------------------------

#[test]
fn test_empty_input() {
    assert_eq!(resolve_class_names(Vec::<ClassNameInput>::new()), "");
    assert_eq!(resolve_class_names([""]), "");
}

#[test]
fn test_absent_values_skipped() {
    let classes = resolve_class_names([
        ClassNameInput::from("a"),
        ClassNameInput::from(None::<&str>),
        ClassNameInput::Empty,
        ClassNameInput::from("b"),
    ]);
    assert_eq!(classes, "a b");
}

#[test]
fn test_nested_lists() {
    assert_eq!(resolve_class_names([vec!["foo", "bar"]]), "foo bar");
    let nested = ClassNameInput::from(vec![
        ClassNameInput::from("a"),
        ClassNameInput::from(vec![ClassNameInput::from("b"), ClassNameInput::when("c", true)]),
    ]);
    assert_eq!(resolve_class_names([nested]), "a b c");
}

#[test]
fn test_false_conditional_skipped() {
    let classes = resolve_class_names([
        ClassNameInput::from("base"),
        ClassNameInput::when("hidden", false),
        ClassNameInput::from("extra"),
    ]);
    assert_eq!(classes, "base extra");
}

#[test]
fn test_conditional_map() {
    let map: ClassNameInput = [("active", true), ("disabled", false), ("focus", true)]
        .into_iter()
        .collect();
    assert_eq!(resolve_class_names([map]), "active focus");
}

#[test]
fn test_join_does_not_merge() {
    assert_eq!(join_classes(["px-4", "px-8"]), "px-4 px-8");
}

// ---------------------------------------------------------------------------
// Conflict resolution
// ---------------------------------------------------------------------------

#[test]
fn test_later_class_wins() {
    assert_eq!(resolve_class_names(["px-4", "px-8"]), "px-8");
}

#[test]
fn test_variant_scoping() {
    assert_eq!(merge_classes("hover:bg-red-500 bg-blue-500"), "hover:bg-red-500 bg-blue-500");
    assert_eq!(merge_classes("md:flex hidden md:block"), "hidden md:block");
}

#[test]
fn test_shorthand_longhand_direction() {
    assert_eq!(merge_classes("p-4 px-2"), "p-4 px-2");
    assert_eq!(merge_classes("px-2 p-4"), "p-4");
}

#[test]
fn test_idempotent() {
    let samples = [
        "px-2 py-1 p-4 hover:bg-red-500 bg-blue-500 !mt-2 mt-4",
        "text-sm text-primary-foreground text-lg/7 leading-none",
        "inset-0 inset-x-4 -top-2 [mask-type:luminance] custom-class custom-class",
        "w-1/2 w-full md:hover:underline hover:md:no-underline",
        "grid grid-cols-2 gap-4 gap-x-2 col-span-2 col-start-1",
    ];
    for sample in samples {
        let once = merge_classes(sample);
        assert_eq!(merge_classes(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_output_is_subsequence() {
    let input = "flex items-center px-2 glass px-4 hover:px-1 text-sm text-xs";
    let output = merge_classes(input);
    let mut remaining = input.split_whitespace();
    for class in output.split_whitespace() {
        assert!(remaining.any(|c| c == class), "{class} out of order");
    }
}

#[test]
fn test_field_component_classes() {
    let classes = resolve_class_names([
        ClassNameInput::from("group/field flex w-full gap-3 data-[invalid=true]:text-destructive"),
        ClassNameInput::from("flex-col [&>*]:w-full [&>.sr-only]:w-auto"),
        ClassNameInput::from(Some("gap-2 w-auto")),
    ]);
    assert_snapshot!(
        classes,
        @"group/field flex data-[invalid=true]:text-destructive flex-col [&>*]:w-full [&>.sr-only]:w-auto gap-2 w-auto"
    );
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_prefixed_merger_from_config() {
    let config = MergeConfig::from_toml_str("prefix = \"tw-\"\n").unwrap();
    let merger = Merger::new(&config).unwrap();
    assert_eq!(merger.merge("tw-p-2 tw-p-4 p-2 p-4"), "tw-p-4 p-2 p-4");
}

#[test]
fn test_extended_merger_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classmerge.toml");
    std::fs::write(
        &path,
        r#"
[[groups]]
id = "glass"
exact = ["glass", "glass-strong"]

[conflicts]
glass = ["bg-color"]
"#,
    )
    .unwrap();

    let merger = Merger::new(&MergeConfig::from_path(&path).unwrap()).unwrap();
    assert_eq!(merger.merge("bg-white glass glass-strong"), "glass-strong");
    // The default merger doesn't know the group.
    assert_eq!(merge_classes("bg-white glass glass-strong"), "bg-white glass glass-strong");
}

#[test]
fn test_custom_rule_table() {
    let mut table = RuleTable::new();
    table
        .add_exact("size", ["small", "large"])
        .add_exact("elevation", ["flat", "raised"]);
    let merger = Merger::with_rules(table);
    assert_eq!(merger.resolve(["small flat", "large"]), "flat large");
}

// ---------------------------------------------------------------------------
// Variant styles
// ---------------------------------------------------------------------------

fn button() -> VariantStyles {
    VariantStyles::new("inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium")
        .variant(
            "variant",
            [
                ("primary", "bg-primary text-primary-foreground hover:bg-primary/90"),
                ("secondary", "bg-secondary text-secondary-foreground hover:bg-secondary/80"),
                ("destructive", "bg-destructive text-white hover:bg-destructive/90"),
                ("link", "text-primary underline-offset-4 hover:underline"),
            ],
        )
        .variant(
            "size",
            [
                ("default", "h-9 px-4 py-2"),
                ("sm", "h-8 rounded-md gap-1.5 px-3"),
                ("lg", "h-10 rounded-md px-6"),
                ("icon", "size-9"),
            ],
        )
        .default_variant("variant", "primary")
        .default_variant("size", "default")
        .compound(
            CompoundVariant::new()
                .when("variant", "link")
                .when_any("size", ["sm", "default"])
                .class("px-0 h-auto"),
        )
}

#[test]
fn test_button_defaults() {
    assert_snapshot!(
        button().resolve(&VariantProps::new()),
        @"inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium bg-primary text-primary-foreground hover:bg-primary/90 h-9 px-4 py-2"
    );
}

#[test]
fn test_button_user_class_overrides() {
    let props = VariantProps::new()
        .set("variant", "destructive")
        .set("size", "lg")
        .class("rounded-full px-10");
    assert_snapshot!(
        button().resolve(&props),
        @"inline-flex items-center justify-center gap-2 text-sm font-medium bg-destructive text-white hover:bg-destructive/90 h-10 rounded-full px-10"
    );
}

#[test]
fn test_button_compound_link() {
    let props = VariantProps::new().set("variant", "link");
    assert_snapshot!(
        button().resolve(&props),
        @"inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium text-primary underline-offset-4 hover:underline py-2 px-0 h-auto"
    );
}

#[test]
fn test_button_unmerged_classes() {
    let props = VariantProps::new().set("size", "sm");
    assert_eq!(
        button().classes(&props),
        "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium \
         bg-primary text-primary-foreground hover:bg-primary/90 h-8 rounded-md gap-1.5 px-3"
    );
}
