//! Proc macros for classmerge: `cn!` class-name composition.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on `classmerge`.

use proc_macro::TokenStream;

mod cn_macro;

/// Compose class names and resolve conflicts.
///
/// Expands to a call to `classmerge::resolve_class_names`. String literals
/// are checked at compile time for balanced `[]` and `()`.
///
/// # Syntax
///
/// - `"px-4 py-2"`: classes always included
/// - `"active" => is_active`: included only when the condition is true
/// - any other expression convertible into `ClassNameInput`
///   (`Option<&str>`, `String`, arrays, `(&str, bool)` pairs)
///
/// # Example
///
/// ```ignore
/// let classes = cn!(
///     "rounded-md px-4 py-2",
///     "opacity-50" => disabled,
///     props.class.as_deref(),
/// );
/// ```
#[proc_macro]
pub fn cn(input: TokenStream) -> TokenStream {
    cn_macro::cn_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
