//! Default Tailwind conflict groups.
//!
//! Group ids follow the names used by the Tailwind ecosystem (`px`,
//! `font-size`, `bg-color`, ...) so configuration files can refer to them.
//! Rules sharing a prefix are registered most-specific first; color rules
//! accept anything and therefore always come last on their prefix.

use crate::rules::validators::Validator::{self, *};
use crate::rules::RuleTable;

const POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];

const BLEND_MODES: &[&str] = &[
    "normal",
    "multiply",
    "screen",
    "overlay",
    "darken",
    "lighten",
    "color-dodge",
    "color-burn",
    "hard-light",
    "soft-light",
    "difference",
    "exclusion",
    "hue",
    "saturation",
    "color",
    "luminosity",
    "plus-lighter",
];

fn kw(words: &[&str]) -> Validator {
    Validator::keywords(words.iter().copied())
}

fn spacing() -> Vec<Validator> {
    vec![Length, Arbitrary, ArbitraryVariable]
}

fn spacing_auto() -> Vec<Validator> {
    vec![Length, kw(&["auto"]), Arbitrary, ArbitraryVariable]
}

fn sizing(extra: &[&str]) -> Vec<Validator> {
    let mut words = vec!["auto", "min", "max", "fit", "none"];
    words.extend_from_slice(extra);
    vec![Length, kw(&words), Arbitrary, ArbitraryVariable]
}

fn numeric() -> Vec<Validator> {
    vec![Number, Arbitrary, ArbitraryVariable]
}

fn integer_auto() -> Vec<Validator> {
    vec![Integer, kw(&["auto"]), Arbitrary, ArbitraryVariable]
}

fn border_width() -> Vec<Validator> {
    vec![Number, ArbitraryLength]
}

impl RuleTable {
    /// The default Tailwind rule table.
    pub fn tailwind() -> Self {
        let mut t = RuleTable::new();
        layout(&mut t);
        flexbox_grid(&mut t);
        spacing_groups(&mut t);
        sizing_groups(&mut t);
        typography(&mut t);
        backgrounds(&mut t);
        borders(&mut t);
        effects_filters(&mut t);
        transitions_transforms(&mut t);
        interactivity(&mut t);
        conflicts(&mut t);
        t
    }
}

fn layout(t: &mut RuleTable) {
    t.add_exact(
        "display",
        [
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ],
    )
    .add_exact("position", ["static", "fixed", "absolute", "relative", "sticky"])
    .add_exact("visibility", ["visible", "invisible", "collapse"])
    .add_exact("isolation", ["isolate", "isolation-auto"])
    .add_exact("box", ["box-border", "box-content"])
    .add_exact("box-decoration", ["box-decoration-slice", "box-decoration-clone"])
    .add_exact("container", ["container"])
    .add_exact("sr", ["sr-only", "not-sr-only"])
    .add_exact("border-collapse", ["border-collapse", "border-separate"])
    .add_exact("table-layout", ["table-auto", "table-fixed"])
    .add_prefixed("float", "float", [kw(&["right", "left", "none", "start", "end"])])
    .add_prefixed("clear", "clear", [kw(&["left", "right", "both", "none", "start", "end"])])
    .add_prefixed("columns", "columns", [Number, TshirtSize, Arbitrary, ArbitraryVariable])
    .add_prefixed("aspect", "aspect", [kw(&["auto", "square", "video"]), Fraction, Arbitrary, ArbitraryVariable])
    .add_exact("object-fit", ["object-contain", "object-cover", "object-fill", "object-none", "object-scale-down"])
    .add_prefixed("object-position", "object", [kw(POSITIONS), Arbitrary, ArbitraryVariable]);

    let overflow = ["auto", "hidden", "clip", "visible", "scroll"];
    t.add_prefixed("overflow", "overflow", [kw(&overflow)])
        .add_prefixed("overflow-x", "overflow-x", [kw(&overflow)])
        .add_prefixed("overflow-y", "overflow-y", [kw(&overflow)]);

    let overscroll = ["auto", "contain", "none"];
    t.add_prefixed("overscroll", "overscroll", [kw(&overscroll)])
        .add_prefixed("overscroll-x", "overscroll-x", [kw(&overscroll)])
        .add_prefixed("overscroll-y", "overscroll-y", [kw(&overscroll)]);

    for group in ["inset", "inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end"] {
        t.add_prefixed(group, group, spacing_auto());
    }
    t.add_prefixed("z", "z", integer_auto());
}

fn flexbox_grid(t: &mut RuleTable) {
    t.add_exact("flex-direction", ["flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse"])
        .add_exact("flex-wrap", ["flex-wrap", "flex-wrap-reverse", "flex-nowrap"])
        .add_prefixed("flex", "flex", [kw(&["1", "auto", "initial", "none"]), Number, Arbitrary, ArbitraryVariable])
        .add_prefixed("basis", "basis", sizing(&["full"]))
        .add_exact("grow", ["grow", "flex-grow"])
        .add_prefixed("grow", "grow", numeric())
        .add_prefixed("grow", "flex-grow", numeric())
        .add_exact("shrink", ["shrink", "flex-shrink"])
        .add_prefixed("shrink", "shrink", numeric())
        .add_prefixed("shrink", "flex-shrink", numeric())
        .add_prefixed("order", "order", [Integer, kw(&["first", "last", "none"]), Arbitrary, ArbitraryVariable]);

    t.add_prefixed("grid-cols", "grid-cols", [Integer, kw(&["none", "subgrid"]), Arbitrary, ArbitraryVariable])
        .add_exact("col-start-end", ["col-auto"])
        .add_prefixed("col-start-end", "col-span", [Integer, kw(&["full"]), Arbitrary, ArbitraryVariable])
        .add_prefixed("col-start", "col-start", integer_auto())
        .add_prefixed("col-end", "col-end", integer_auto())
        .add_prefixed("grid-rows", "grid-rows", [Integer, kw(&["none", "subgrid"]), Arbitrary, ArbitraryVariable])
        .add_exact("row-start-end", ["row-auto"])
        .add_prefixed("row-start-end", "row-span", [Integer, kw(&["full"]), Arbitrary, ArbitraryVariable])
        .add_prefixed("row-start", "row-start", integer_auto())
        .add_prefixed("row-end", "row-end", integer_auto())
        .add_prefixed("grid-flow", "grid-flow", [kw(&["row", "col", "dense", "row-dense", "col-dense"])])
        .add_prefixed("auto-cols", "auto-cols", [kw(&["auto", "min", "max", "fr"]), Arbitrary, ArbitraryVariable])
        .add_prefixed("auto-rows", "auto-rows", [kw(&["auto", "min", "max", "fr"]), Arbitrary, ArbitraryVariable]);

    t.add_prefixed("gap", "gap", spacing())
        .add_prefixed("gap-x", "gap-x", spacing())
        .add_prefixed("gap-y", "gap-y", spacing());

    let content = ["normal", "start", "end", "center", "between", "around", "evenly", "stretch", "baseline"];
    let items = ["start", "end", "center", "baseline", "stretch"];
    let self_ = ["auto", "start", "end", "center", "stretch", "baseline"];
    t.add_prefixed("justify-content", "justify", [kw(&content)])
        .add_prefixed("justify-items", "justify-items", [kw(&items)])
        .add_prefixed("justify-self", "justify-self", [kw(&self_)])
        .add_prefixed("align-content", "content", [kw(&content)])
        .add_prefixed("align-items", "items", [kw(&items)])
        .add_prefixed("align-self", "self", [kw(&self_)])
        .add_prefixed("place-content", "place-content", [kw(&content)])
        .add_prefixed("place-items", "place-items", [kw(&items)])
        .add_prefixed("place-self", "place-self", [kw(&self_)]);
}

fn spacing_groups(t: &mut RuleTable) {
    for side in ["", "x", "y", "s", "e", "t", "r", "b", "l"] {
        let p = format!("p{side}");
        let m = format!("m{side}");
        t.add_prefixed(&p, &p, spacing()).add_prefixed(&m, &m, spacing_auto());
    }
    t.add_prefixed("space-x", "space-x", spacing())
        .add_exact("space-x-reverse", ["space-x-reverse"])
        .add_prefixed("space-y", "space-y", spacing())
        .add_exact("space-y-reverse", ["space-y-reverse"]);
}

fn sizing_groups(t: &mut RuleTable) {
    let viewport_w = ["screen", "svw", "lvw", "dvw"];
    let viewport_h = ["screen", "svh", "lvh", "dvh"];
    t.add_prefixed("w", "w", sizing(&viewport_w))
        .add_prefixed("min-w", "min-w", sizing(&viewport_w))
        .add_prefixed("max-w", "max-w", {
            let mut v = sizing(&["prose", "screen-sm", "screen-md", "screen-lg", "screen-xl", "screen-2xl"]);
            v.push(TshirtSize);
            v
        })
        .add_prefixed("h", "h", sizing(&viewport_h))
        .add_prefixed("min-h", "min-h", sizing(&viewport_h))
        .add_prefixed("max-h", "max-h", sizing(&viewport_h))
        .add_prefixed("size", "size", sizing(&[]));
}

fn typography(t: &mut RuleTable) {
    t.add_exact("font-smoothing", ["antialiased", "subpixel-antialiased"])
        .add_exact("font-style", ["italic", "not-italic"])
        .add_exact("text-decoration", ["underline", "overline", "line-through", "no-underline"])
        .add_exact("text-transform", ["uppercase", "lowercase", "capitalize", "normal-case"])
        .add_exact("text-overflow", ["truncate", "text-ellipsis", "text-clip"])
        .add_exact("text-wrap", ["text-wrap", "text-nowrap", "text-balance", "text-pretty"])
        .add_exact("text-alignment", ["text-left", "text-center", "text-right", "text-justify", "text-start", "text-end"])
        .add_exact("break", ["break-normal", "break-words", "break-all", "break-keep"])
        .add_exact("list-style-position", ["list-inside", "list-outside"])
        .add_prefixed("font-size", "text", [TshirtSize, kw(&["base"]), ArbitraryLength])
        .add_prefixed("text-color", "text", [Any])
        .add_prefixed(
            "font-weight",
            "font",
            [
                kw(&["thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black"]),
                ArbitraryNumber,
            ],
        )
        .add_prefixed("font-family", "font", [Any])
        .add_prefixed("tracking", "tracking", [kw(&["tighter", "tight", "normal", "wide", "wider", "widest"]), Arbitrary, ArbitraryVariable])
        .add_prefixed("leading", "leading", [kw(&["none", "tight", "snug", "normal", "relaxed", "loose"]), Length, Arbitrary, ArbitraryVariable])
        .add_prefixed("line-clamp", "line-clamp", [Integer, kw(&["none"]), ArbitraryNumber, ArbitraryVariable])
        .add_prefixed("list-style-type", "list", [kw(&["none", "disc", "decimal"]), Arbitrary, ArbitraryVariable])
        .add_prefixed("text-decoration-style", "decoration", [kw(&["solid", "double", "dotted", "dashed", "wavy"])])
        .add_prefixed("text-decoration-thickness", "decoration", [Number, kw(&["auto", "from-font"]), ArbitraryLength])
        .add_prefixed("text-decoration-color", "decoration", [Any])
        .add_prefixed("underline-offset", "underline-offset", [Number, kw(&["auto"]), ArbitraryLength])
        .add_prefixed("indent", "indent", spacing())
        .add_prefixed("vertical-align", "align", [kw(&["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"]), Arbitrary])
        .add_prefixed("whitespace", "whitespace", [kw(&["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"])])
        .add_prefixed("content", "content", [kw(&["none"]), Arbitrary, ArbitraryVariable]);
}

fn backgrounds(t: &mut RuleTable) {
    t.add_exact("bg-attachment", ["bg-fixed", "bg-local", "bg-scroll"])
        .add_exact("bg-repeat", ["bg-repeat", "bg-no-repeat", "bg-repeat-x", "bg-repeat-y", "bg-repeat-round", "bg-repeat-space"])
        .add_exact("bg-size", ["bg-auto", "bg-cover", "bg-contain"])
        .add_exact("bg-image", ["bg-none"])
        .add_prefixed("bg-clip", "bg-clip", [kw(&["border", "padding", "content", "text"])])
        .add_prefixed("bg-origin", "bg-origin", [kw(&["border", "padding", "content"])])
        .add_prefixed("bg-image", "bg-gradient-to", [kw(&["t", "tr", "r", "br", "b", "bl", "l", "tl"])])
        .add_prefixed("bg-image", "bg-linear-to", [kw(&["t", "tr", "r", "br", "b", "bl", "l", "tl"])])
        .add_prefixed("bg-position", "bg", [kw(POSITIONS)])
        .add_prefixed("bg-image", "bg", [ArbitraryImage])
        .add_prefixed("bg-color", "bg", [Any])
        .add_prefixed("bg-blend", "bg-blend", [kw(BLEND_MODES)]);

    for stop in ["from", "via", "to"] {
        t.add_prefixed(&format!("gradient-{stop}-pos"), stop, [Percent])
            .add_prefixed(&format!("gradient-{stop}"), stop, [Any]);
    }
}

fn borders(t: &mut RuleTable) {
    t.add_exact("rounded", ["rounded"])
        .add_prefixed("rounded", "rounded", [TshirtSize, kw(&["none", "full"]), Arbitrary, ArbitraryVariable]);
    for corner in ["s", "e", "t", "r", "b", "l", "ss", "se", "ee", "es", "tl", "tr", "br", "bl"] {
        let group = format!("rounded-{corner}");
        t.add_exact(&group, [group.as_str()])
            .add_prefixed(&group, &group, [TshirtSize, kw(&["none", "full"]), Arbitrary, ArbitraryVariable]);
    }

    t.add_exact("border-w", ["border"])
        .add_prefixed("border-w", "border", border_width())
        .add_prefixed("border-style", "border", [kw(&["solid", "dashed", "dotted", "double", "hidden", "none"])])
        .add_prefixed("border-color", "border", [Any]);
    for side in ["x", "y", "s", "e", "t", "r", "b", "l"] {
        let prefix = format!("border-{side}");
        let width = format!("border-w-{side}");
        t.add_exact(&width, [prefix.as_str()])
            .add_prefixed(&width, &prefix, border_width())
            .add_prefixed(&format!("border-color-{side}"), &prefix, [Any]);
    }

    t.add_exact("divide-x", ["divide-x"])
        .add_prefixed("divide-x", "divide-x", border_width())
        .add_exact("divide-x-reverse", ["divide-x-reverse"])
        .add_exact("divide-y", ["divide-y"])
        .add_prefixed("divide-y", "divide-y", border_width())
        .add_exact("divide-y-reverse", ["divide-y-reverse"])
        .add_prefixed("divide-style", "divide", [kw(&["solid", "dashed", "dotted", "double", "none"])])
        .add_prefixed("divide-color", "divide", [Any]);

    t.add_exact("outline-style", ["outline", "outline-none", "outline-dashed", "outline-dotted", "outline-double"])
        .add_prefixed("outline-offset", "outline-offset", [Number, ArbitraryLength, ArbitraryVariable])
        .add_prefixed("outline-w", "outline", border_width())
        .add_prefixed("outline-color", "outline", [Any]);

    t.add_exact("ring-w", ["ring"])
        .add_exact("ring-w-inset", ["ring-inset"])
        .add_prefixed("ring-offset-w", "ring-offset", border_width())
        .add_prefixed("ring-offset-color", "ring-offset", [Any])
        .add_prefixed("ring-w", "ring", border_width())
        .add_prefixed("ring-color", "ring", [Any]);
}

fn effects_filters(t: &mut RuleTable) {
    t.add_exact("shadow", ["shadow"])
        .add_prefixed("shadow", "shadow", [TshirtSize, kw(&["inner", "none"]), ArbitraryShadow])
        .add_prefixed("shadow-color", "shadow", [Any])
        .add_prefixed("opacity", "opacity", numeric())
        .add_prefixed("mix-blend", "mix-blend", [kw(BLEND_MODES)]);

    for filter in ["blur", "backdrop-blur", "drop-shadow"] {
        t.add_exact(filter, [filter])
            .add_prefixed(filter, filter, [TshirtSize, kw(&["none"]), Arbitrary, ArbitraryVariable]);
    }
    for filter in ["grayscale", "invert", "sepia", "backdrop-grayscale", "backdrop-invert", "backdrop-sepia"] {
        t.add_exact(filter, [filter]).add_prefixed(filter, filter, numeric());
    }
    for filter in [
        "brightness",
        "contrast",
        "saturate",
        "hue-rotate",
        "backdrop-brightness",
        "backdrop-contrast",
        "backdrop-saturate",
        "backdrop-hue-rotate",
        "backdrop-opacity",
    ] {
        t.add_prefixed(filter, filter, numeric());
    }
}

fn transitions_transforms(t: &mut RuleTable) {
    t.add_exact("transition", ["transition"])
        .add_prefixed("transition", "transition", [kw(&["none", "all", "colors", "opacity", "shadow", "transform"]), Arbitrary, ArbitraryVariable])
        .add_prefixed("duration", "duration", [Number, Arbitrary, ArbitraryVariable, Any])
        .add_prefixed("ease", "ease", [Any])
        .add_prefixed("delay", "delay", [Number, Arbitrary, ArbitraryVariable, Any])
        .add_prefixed("animate", "animate", [Any]);

    for group in ["scale", "scale-x", "scale-y", "rotate", "skew-x", "skew-y"] {
        t.add_prefixed(group, group, numeric());
    }
    t.add_prefixed("translate-x", "translate-x", spacing())
        .add_prefixed("translate-y", "translate-y", spacing())
        .add_prefixed(
            "transform-origin",
            "origin",
            [
                kw(&["center", "top", "top-right", "right", "bottom-right", "bottom", "bottom-left", "left", "top-left"]),
                Arbitrary,
            ],
        );
}

fn interactivity(t: &mut RuleTable) {
    t.add_prefixed("cursor", "cursor", [Any])
        .add_prefixed("pointer-events", "pointer-events", [kw(&["none", "auto"])])
        .add_exact("resize", ["resize", "resize-none", "resize-x", "resize-y"])
        .add_prefixed("select", "select", [kw(&["none", "text", "all", "auto"])])
        .add_exact("appearance", ["appearance-none", "appearance-auto"])
        .add_exact("scroll-behavior", ["scroll-auto", "scroll-smooth"])
        .add_prefixed("will-change", "will-change", [kw(&["auto", "scroll", "contents", "transform"]), Arbitrary, ArbitraryVariable])
        .add_prefixed("accent", "accent", [Any])
        .add_prefixed("caret", "caret", [Any])
        .add_prefixed("fill", "fill", [Any])
        .add_prefixed("stroke-w", "stroke", [Number, ArbitraryLength, ArbitraryNumber])
        .add_prefixed("stroke", "stroke", [Any]);
}

fn conflicts(t: &mut RuleTable) {
    t.add_conflicts("overflow", ["overflow-x", "overflow-y"])
        .add_conflicts("overscroll", ["overscroll-x", "overscroll-y"])
        .add_conflicts("inset", ["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"])
        .add_conflicts("inset-x", ["right", "left"])
        .add_conflicts("inset-y", ["top", "bottom"])
        .add_conflicts("flex", ["basis", "grow", "shrink"])
        .add_conflicts("gap", ["gap-x", "gap-y"])
        .add_conflicts("p", ["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"])
        .add_conflicts("px", ["pr", "pl"])
        .add_conflicts("py", ["pt", "pb"])
        .add_conflicts("m", ["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"])
        .add_conflicts("mx", ["mr", "ml"])
        .add_conflicts("my", ["mt", "mb"])
        .add_conflicts("size", ["w", "h"])
        .add_conflicts("line-clamp", ["display", "overflow"])
        .add_conflicts("scale", ["scale-x", "scale-y"])
        .add_conflicts(
            "rounded",
            [
                "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
                "rounded-ss", "rounded-se", "rounded-ee", "rounded-es",
                "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
            ],
        )
        .add_conflicts("rounded-s", ["rounded-ss", "rounded-es"])
        .add_conflicts("rounded-e", ["rounded-se", "rounded-ee"])
        .add_conflicts("rounded-t", ["rounded-tl", "rounded-tr"])
        .add_conflicts("rounded-r", ["rounded-tr", "rounded-br"])
        .add_conflicts("rounded-b", ["rounded-br", "rounded-bl"])
        .add_conflicts("rounded-l", ["rounded-tl", "rounded-bl"]);

    for kind in ["border-w", "border-color"] {
        let side = |s: &str| format!("{kind}-{s}");
        t.add_conflicts(kind, ["x", "y", "s", "e", "t", "r", "b", "l"].map(side))
            .add_conflicts(&side("x"), [side("r"), side("l")])
            .add_conflicts(&side("y"), [side("t"), side("b")]);
    }

    t.add_modifier_conflicts("font-size", ["leading"]);
}
