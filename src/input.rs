//! Class-name inputs: the recursive value type accepted by the merger.
//!
//! [`ClassNameInput`] is a closed sum type over everything component code
//! tends to pass when composing classes: plain tokens, conditional maps,
//! nested lists, and nothing at all. Flattening follows `clsx` rules:
//! depth-first, left to right, with empty values dropped.

/// A single class-name input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassNameInput {
    /// Contributes nothing (`None`, `false`, unit values).
    #[default]
    Empty,
    /// A class string. May hold several whitespace-separated classes.
    Token(String),
    /// Ordered `(class, enabled)` pairs; each class is included iff enabled.
    Conditional(Vec<(String, bool)>),
    /// A nested ordered sequence of inputs.
    Nested(Vec<ClassNameInput>),
}

impl ClassNameInput {
    /// Build a conditional input from `(class, enabled)` pairs.
    pub fn conditional<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, bool)>,
    {
        ClassNameInput::Conditional(pairs.into_iter().map(|(s, on)| (s.into(), on)).collect())
    }

    /// A single class included only when `enabled` is true.
    pub fn when(class: impl Into<String>, enabled: bool) -> Self {
        ClassNameInput::Conditional(vec![(class.into(), enabled)])
    }

    /// Returns `true` if flattening this input would produce no text.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassNameInput::Empty => true,
            ClassNameInput::Token(s) => s.trim().is_empty(),
            ClassNameInput::Conditional(pairs) => {
                pairs.iter().all(|(s, on)| !on || s.trim().is_empty())
            }
            ClassNameInput::Nested(items) => items.iter().all(ClassNameInput::is_empty),
        }
    }

    /// Append this input's classes to `out`, space-separated.
    pub fn write_into(&self, out: &mut String) {
        match self {
            ClassNameInput::Empty => {}
            ClassNameInput::Token(s) => push_token(out, s),
            ClassNameInput::Conditional(pairs) => {
                for (class, on) in pairs {
                    if *on {
                        push_token(out, class);
                    }
                }
            }
            ClassNameInput::Nested(items) => {
                for item in items {
                    item.write_into(out);
                }
            }
        }
    }
}

fn push_token(out: &mut String, token: &str) {
    let token = token.trim();
    if token.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(token);
}

/// Flatten a sequence of inputs into one space-joined string without any
/// conflict resolution (the `clsx` step).
pub fn join_classes<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassNameInput>,
{
    let mut out = String::new();
    for input in inputs {
        input.into().write_into(&mut out);
    }
    out
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<&str> for ClassNameInput {
    fn from(s: &str) -> Self {
        ClassNameInput::Token(s.to_owned())
    }
}

impl From<String> for ClassNameInput {
    fn from(s: String) -> Self {
        ClassNameInput::Token(s)
    }
}

impl From<&String> for ClassNameInput {
    fn from(s: &String) -> Self {
        ClassNameInput::Token(s.clone())
    }
}

impl From<&ClassNameInput> for ClassNameInput {
    fn from(input: &ClassNameInput) -> Self {
        input.clone()
    }
}

/// A bare boolean never contributes a class. This is what `cond && "x"`
/// evaluates to when `cond` is false.
impl From<bool> for ClassNameInput {
    fn from(_: bool) -> Self {
        ClassNameInput::Empty
    }
}

impl From<()> for ClassNameInput {
    fn from(_: ()) -> Self {
        ClassNameInput::Empty
    }
}

impl<T: Into<ClassNameInput>> From<Option<T>> for ClassNameInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassNameInput::Empty, Into::into)
    }
}

impl<S: Into<String>> From<(S, bool)> for ClassNameInput {
    fn from((class, enabled): (S, bool)) -> Self {
        ClassNameInput::when(class, enabled)
    }
}

impl<T: Into<ClassNameInput>> From<Vec<T>> for ClassNameInput {
    fn from(items: Vec<T>) -> Self {
        ClassNameInput::Nested(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassNameInput>, const N: usize> From<[T; N]> for ClassNameInput {
    fn from(items: [T; N]) -> Self {
        ClassNameInput::Nested(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for ClassNameInput
where
    T: Clone + Into<ClassNameInput>,
{
    fn from(items: &[T]) -> Self {
        ClassNameInput::Nested(items.iter().cloned().map(Into::into).collect())
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for ClassNameInput {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        ClassNameInput::conditional(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flat(input: impl Into<ClassNameInput>) -> String {
        let mut out = String::new();
        input.into().write_into(&mut out);
        out
    }

    #[test]
    fn test_token() {
        assert_eq!(flat("a b"), "a b");
    }

    #[test]
    fn test_token_is_trimmed() {
        assert_eq!(flat("  a  "), "a");
    }

    #[test]
    fn test_empty_variants() {
        assert_eq!(flat(ClassNameInput::Empty), "");
        assert_eq!(flat(false), "");
        assert_eq!(flat(true), "");
        assert_eq!(flat(None::<&str>), "");
        assert_eq!(flat(""), "");
    }

    #[test]
    fn test_option_some() {
        assert_eq!(flat(Some("visible")), "visible");
    }

    #[test]
    fn test_conditional_keeps_order() {
        let input = ClassNameInput::conditional([("a", true), ("b", false), ("c", true)]);
        assert_eq!(flat(input), "a c");
    }

    #[test]
    fn test_tuple_is_conditional() {
        assert_eq!(flat(("hidden", true)), "hidden");
        assert_eq!(flat(("hidden", false)), "");
    }

    #[test]
    fn test_nested_depth_first() {
        let input = ClassNameInput::Nested(vec![
            "a".into(),
            vec!["b", "c"].into(),
            ClassNameInput::Nested(vec![ClassNameInput::Empty, ["d"].into()]),
            "e".into(),
        ]);
        assert_eq!(flat(input), "a b c d e");
    }

    #[test]
    fn test_slice() {
        let classes = ["x", "y"];
        assert_eq!(flat(&classes[..]), "x y");
    }

    #[test]
    fn test_from_iterator() {
        let input: ClassNameInput = vec![("on", true), ("off", false)].into_iter().collect();
        assert_eq!(flat(input), "on");
    }

    #[test]
    fn test_is_empty() {
        assert!(ClassNameInput::Empty.is_empty());
        assert!(ClassNameInput::from("   ").is_empty());
        assert!(ClassNameInput::when("x", false).is_empty());
        assert!(ClassNameInput::from(vec![None::<&str>, None]).is_empty());
        assert!(!ClassNameInput::from(vec![None, Some("x")]).is_empty());
    }

    #[test]
    fn test_join_classes() {
        assert_eq!(
            join_classes([
                ClassNameInput::from("base"),
                ClassNameInput::from(None::<&str>),
                ClassNameInput::when("active", true),
            ]),
            "base active"
        );
    }

    #[test]
    fn test_join_classes_empty() {
        assert_eq!(join_classes(Vec::<ClassNameInput>::new()), "");
    }
}
