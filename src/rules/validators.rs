//! Value validators: decide whether the remainder of a prefixed class
//! (`4` in `px-4`, `[3px]` in `border-[3px]`) belongs to a rule.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static ARBITRARY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\[(?:([a-z-]+):)?(.+)\]$").expect("valid regex"));
static ARBITRARY_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\((?:([a-z-]+):)?(.+)\)$").expect("valid regex"));
static FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+$").expect("valid regex"));
static TSHIRT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$").expect("valid regex"));
static LENGTH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$",
    )
    .expect("valid regex")
});
static COLOR_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(rgba?|hsla?|hwb|(ok)?(lab|lch)|color-mix)\(.+\)$").expect("valid regex")
});
static SHADOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)")
        .expect("valid regex")
});
static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$")
        .expect("valid regex")
});

/// A predicate over the value part of a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// Accepts anything, including the empty value.
    Any,
    /// Decimal number: `4`, `0.5`, `2.5`.
    Number,
    /// Whole number: `10`, `50`.
    Integer,
    /// Fraction: `1/2`, `2/3`.
    Fraction,
    /// Number followed by `%`.
    Percent,
    /// Number, fraction, or one of `px`, `full`, `screen`.
    Length,
    /// `xs`..`xl`, optionally numbered: `sm`, `2xl`.
    TshirtSize,
    /// Any bracketed value: `[13px]`, `[#bada55]`.
    Arbitrary,
    /// Bracketed length: `[3px]`, `[calc(100%-2rem)]`, `[length:var(--x)]`.
    ArbitraryLength,
    /// Bracketed number: `[0.95]`, `[number:var(--x)]`.
    ArbitraryNumber,
    /// Bracketed image: `[url(/a.png)]`, `[linear-gradient(...)]`.
    ArbitraryImage,
    /// Bracketed shadow: `[0_35px_60px_-15px_rgba(0,0,0,0.3)]`.
    ArbitraryShadow,
    /// Bracketed color: `[#bada55]`, `[rgb(0,0,0)]`, `[color:var(--x)]`.
    ArbitraryColor,
    /// Parenthesized CSS variable: `(--brand)`, `(color:--brand)`.
    ArbitraryVariable,
    /// One of a fixed set of words.
    Keywords(Vec<String>),
}

impl Validator {
    /// Build a keyword validator.
    pub fn keywords<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Validator::Keywords(words.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if `value` is accepted.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Validator::Any => true,
            Validator::Number => is_number(value),
            Validator::Integer => is_integer(value),
            Validator::Fraction => FRACTION.is_match(value),
            Validator::Percent => value.strip_suffix('%').is_some_and(is_number),
            Validator::Length => {
                is_number(value)
                    || FRACTION.is_match(value)
                    || matches!(value, "px" | "full" | "screen")
            }
            Validator::TshirtSize => TSHIRT.is_match(value),
            Validator::Arbitrary => ARBITRARY_VALUE.is_match(value),
            Validator::ArbitraryLength => {
                arbitrary(value, &["length", "size"], |v| LENGTH_UNIT.is_match(v))
            }
            Validator::ArbitraryNumber => arbitrary(value, &["number"], is_number),
            Validator::ArbitraryImage => {
                arbitrary(value, &["image", "url"], |v| IMAGE.is_match(v))
            }
            Validator::ArbitraryShadow => arbitrary(value, &["shadow"], |v| SHADOW.is_match(v)),
            Validator::ArbitraryColor => arbitrary(value, &["color"], |v| {
                v.starts_with('#') || COLOR_FUNCTION.is_match(v)
            }),
            Validator::ArbitraryVariable => ARBITRARY_VARIABLE.is_match(value),
            Validator::Keywords(words) => words.iter().any(|w| w == value),
        }
    }
}

/// Match a bracketed value. A label (`[length:...]`) decides on its own;
/// unlabeled values go through `test`.
fn arbitrary(value: &str, labels: &[&str], test: impl Fn(&str) -> bool) -> bool {
    let Some(caps) = ARBITRARY_VALUE.captures(value) else {
        return false;
    };
    match caps.get(1) {
        Some(label) => labels.contains(&label.as_str()),
        None => caps.get(2).is_some_and(|inner| test(inner.as_str())),
    }
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && value.parse::<f64>().is_ok()
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Error for an unrecognized validator name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validator `{0}`")]
pub struct UnknownValidator(pub String);

/// Parse kebab-case validator names as used in configuration files.
/// `keyword:a|b|c` builds a keyword list.
impl FromStr for Validator {
    type Err = UnknownValidator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(words) = s.strip_prefix("keyword:") {
            return Ok(Validator::keywords(words.split('|').filter(|w| !w.is_empty())));
        }
        Ok(match s {
            "any" => Validator::Any,
            "number" => Validator::Number,
            "integer" => Validator::Integer,
            "fraction" => Validator::Fraction,
            "percent" => Validator::Percent,
            "length" => Validator::Length,
            "tshirt-size" => Validator::TshirtSize,
            "arbitrary" => Validator::Arbitrary,
            "arbitrary-length" => Validator::ArbitraryLength,
            "arbitrary-number" => Validator::ArbitraryNumber,
            "arbitrary-image" => Validator::ArbitraryImage,
            "arbitrary-shadow" => Validator::ArbitraryShadow,
            "arbitrary-color" => Validator::ArbitraryColor,
            "arbitrary-variable" => Validator::ArbitraryVariable,
            other => return Err(UnknownValidator(other.to_owned())),
        })
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Validator::Any => "any",
            Validator::Number => "number",
            Validator::Integer => "integer",
            Validator::Fraction => "fraction",
            Validator::Percent => "percent",
            Validator::Length => "length",
            Validator::TshirtSize => "tshirt-size",
            Validator::Arbitrary => "arbitrary",
            Validator::ArbitraryLength => "arbitrary-length",
            Validator::ArbitraryNumber => "arbitrary-number",
            Validator::ArbitraryImage => "arbitrary-image",
            Validator::ArbitraryShadow => "arbitrary-shadow",
            Validator::ArbitraryColor => "arbitrary-color",
            Validator::ArbitraryVariable => "arbitrary-variable",
            Validator::Keywords(words) => return write!(f, "keyword:{}", words.join("|")),
        };
        f.write_str(name)
    }
}
