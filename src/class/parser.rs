//! Depth-aware parser for a single utility class.
//!
//! Walks the tokens from [`crate::class::tokenizer`] tracking bracket and
//! parenthesis depth. Separators only count at depth 0, so
//! `[&:nth-child(3)]:underline` has one variant and `bg-[url(/a.png)]` has
//! no postfix modifier.
//!
//! Parsing is total: unbalanced input still yields a [`ParsedClass`]; it just
//! won't match any rule later on.

use crate::class::model::ParsedClass;
use crate::class::tokenizer::{tokenize, Token};

/// Marker for the important modifier, accepted at either end of the base.
const IMPORTANT: char = '!';

/// Parse one class token.
pub fn parse_class(raw: &str) -> ParsedClass<'_> {
    let mut variants = Vec::new();
    let mut bracket_depth: usize = 0;
    let mut paren_depth: usize = 0;
    let mut base_start = 0;
    let mut slash: Option<usize> = None;

    for (token, start, _end) in tokenize(raw) {
        match token {
            Token::BracketOpen => bracket_depth += 1,
            Token::BracketClose => bracket_depth = bracket_depth.saturating_sub(1),
            Token::ParenOpen => paren_depth += 1,
            Token::ParenClose => paren_depth = paren_depth.saturating_sub(1),
            Token::Colon if bracket_depth == 0 && paren_depth == 0 => {
                variants.push(&raw[base_start..start]);
                base_start = start + 1;
                // A `/` before the last variant belongs to that variant
                // (`@[30rem]/sidebar:flex`), not to the base.
                slash = None;
            }
            Token::Slash if bracket_depth == 0 && paren_depth == 0 => slash = Some(start),
            _ => {}
        }
    }

    let mut base = &raw[base_start..];
    let mut base_offset = base_start;
    let mut important = false;

    if let Some(stripped) = base.strip_prefix(IMPORTANT) {
        base = stripped;
        base_offset += 1;
        important = true;
    } else if let Some(stripped) = base.strip_suffix(IMPORTANT) {
        base = stripped;
        important = true;
    }

    let postfix_modifier = slash
        .filter(|&pos| pos >= base_offset && pos < base_offset + base.len())
        .map(|pos| pos - base_offset)
        .filter(|&pos| pos > 0);

    ParsedClass {
        raw,
        variants,
        important,
        base,
        postfix_modifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain() {
        let c = parse_class("px-4");
        assert!(c.variants.is_empty());
        assert!(!c.important);
        assert_eq!(c.base, "px-4");
        assert_eq!(c.postfix_modifier, None);
    }

    #[test]
    fn test_variants() {
        let c = parse_class("md:hover:px-4");
        assert_eq!(c.variants, vec!["md", "hover"]);
        assert_eq!(c.base, "px-4");
    }

    #[test]
    fn test_important_prefix() {
        let c = parse_class("hover:!px-4");
        assert!(c.important);
        assert_eq!(c.base, "px-4");
        assert_eq!(c.variants, vec!["hover"]);
    }

    #[test]
    fn test_important_suffix() {
        let c = parse_class("px-4!");
        assert!(c.important);
        assert_eq!(c.base, "px-4");
    }

    #[test]
    fn test_postfix_modifier() {
        let c = parse_class("hover:bg-primary/90");
        assert_eq!(c.base, "bg-primary/90");
        assert_eq!(c.base_without_modifier(), "bg-primary");
        assert_eq!(c.modifier(), Some("90"));
    }

    #[test]
    fn test_postfix_modifier_with_important() {
        let c = parse_class("!text-lg/7");
        assert!(c.important);
        assert_eq!(c.base_without_modifier(), "text-lg");
        assert_eq!(c.modifier(), Some("7"));
    }

    #[test]
    fn test_arbitrary_variant_with_colon() {
        let c = parse_class("[&:nth-child(3)]:underline");
        assert_eq!(c.variants, vec!["[&:nth-child(3)]"]);
        assert_eq!(c.base, "underline");
    }

    #[test]
    fn test_slash_inside_brackets_is_not_modifier() {
        let c = parse_class("bg-[url(/img/a.png)]");
        assert_eq!(c.postfix_modifier, None);
        assert_eq!(c.base, "bg-[url(/img/a.png)]");
    }

    #[test]
    fn test_slash_in_variant_is_not_modifier() {
        let c = parse_class("@[30rem]/field-group:grid-cols-1");
        assert_eq!(c.variants, vec!["@[30rem]/field-group"]);
        assert_eq!(c.base, "grid-cols-1");
        assert_eq!(c.postfix_modifier, None);
    }

    #[test]
    fn test_arbitrary_property() {
        let c = parse_class("[mask-type:luminance]");
        assert!(c.variants.is_empty());
        assert_eq!(c.base, "[mask-type:luminance]");
    }

    #[test]
    fn test_unbalanced_is_total() {
        let c = parse_class("bg-[oops");
        assert_eq!(c.base, "bg-[oops");
        assert!(c.variants.is_empty());
    }

    #[test]
    fn test_trailing_colon() {
        let c = parse_class("hover:");
        assert_eq!(c.variants, vec!["hover"]);
        assert_eq!(c.base, "");
    }
}
