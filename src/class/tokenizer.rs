//! logos-based tokenizer for the structure of a single utility class.
//!
//! A class like `md:hover:bg-[url(/a.png)]/50` is lexed into words and the
//! punctuation that carries meaning at nesting depth 0: `:` separates
//! variants, `/` introduces a postfix modifier, and brackets/parentheses
//! open arbitrary values whose contents must be skipped over.
//!
//! Every byte belongs to some token, so lexing never fails.

use logos::Logos;

/// Structural token inside one class.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `[` opening an arbitrary value, property, or variant.
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `(` opening an arbitrary variable or a function call inside brackets.
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `:` variant separator (only at depth 0).
    #[token(":")]
    Colon,

    /// `/` postfix modifier separator (only at depth 0).
    #[token("/")]
    Slash,

    /// Any run of other characters.
    #[regex(r"[^\[\]():/]+")]
    Word,
}

/// Tokenize a class into `(Token, start, end)` byte spans.
pub fn tokenize(class: &str) -> Vec<(Token, usize, usize)> {
    Token::lexer(class)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span.start, span.end)))
        .collect()
}
