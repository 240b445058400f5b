//! Parsed utility class: variants, important flag, base, postfix modifier.

/// One class token broken into its parts. Borrows from the source token.
///
/// For `md:hover:!bg-primary/90`:
/// - `variants` = `["md", "hover"]`
/// - `important` = `true`
/// - `base` = `"bg-primary/90"`
/// - `postfix_modifier` = `Some(10)` (index of `/` within `base`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// The full token as written.
    pub raw: &'a str,
    /// Variant prefixes in source order, without the trailing `:`.
    pub variants: Vec<&'a str>,
    /// Whether the class carries the `!` important marker.
    pub important: bool,
    /// The class body after variants, with the important marker removed.
    pub base: &'a str,
    /// Byte index of the postfix modifier `/` inside `base`, if any.
    pub postfix_modifier: Option<usize>,
}

impl<'a> ParsedClass<'a> {
    /// The base with any postfix modifier cut off (`bg-primary/90` → `bg-primary`).
    pub fn base_without_modifier(&self) -> &'a str {
        match self.postfix_modifier {
            Some(pos) => &self.base[..pos],
            None => self.base,
        }
    }

    /// The postfix modifier value (`bg-primary/90` → `90`).
    pub fn modifier(&self) -> Option<&'a str> {
        self.postfix_modifier.map(|pos| &self.base[pos + 1..])
    }

    /// Canonical identity of this class's variants and important flag.
    ///
    /// Two classes only conflict when their modifier ids are equal, so
    /// `hover:focus:x` and `focus:hover:x` must produce the same id.
    pub fn modifier_id(&self) -> String {
        let mut id = sort_variants(&self.variants).join(":");
        if self.important {
            id.push('!');
        }
        id
    }
}

/// Sort variants into canonical order.
///
/// Ordinary variants commute, so runs of them are sorted. Arbitrary variants
/// (`[&>*]`) are order-sensitive and act as fixed points: runs on either side
/// are sorted independently and the arbitrary variant keeps its position.
pub fn sort_variants<'a>(variants: &[&'a str]) -> Vec<&'a str> {
    if variants.len() <= 1 {
        return variants.to_vec();
    }

    let mut sorted = Vec::with_capacity(variants.len());
    let mut run: Vec<&'a str> = Vec::new();

    for &variant in variants {
        if variant.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(variant);
        } else {
            run.push(variant);
        }
    }
    run.sort_unstable();
    sorted.append(&mut run);

    sorted
}
