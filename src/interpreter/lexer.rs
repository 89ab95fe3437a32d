use std::fmt;

use logos::Logos;

/// The fixed set of reserved words.
pub const KEYWORDS: &[&str] = &["declare", "displayln", "if", "case", "otherwise"];

/// Raw lexical classes recognized by the underlying logos automaton.
///
/// Keywords are declared as literal tokens so that they win over the
/// identifier pattern on equal-length matches, while longer identifiers such
/// as `declared` still lex as identifiers.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Lexeme {
    #[token("declare")]
    #[token("displayln")]
    #[token("if")]
    #[token("case")]
    #[token("otherwise")]
    Keyword,
    #[token("==")]
    #[token("=")]
    #[token(">")]
    #[token("<")]
    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    Operator,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[regex(r"[0-9]+")]
    Number,
    /// A quoted string. The closing quote is optional: an unterminated string
    /// runs to the end of the input.
    #[regex(r#""[^"]*"?"#, allow_greedy = true)]
    Quoted,
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so every token can report a 1-based line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the reserved words in [`KEYWORDS`].
    Keyword,
    /// `=`, `==`, `>`, `<`, `(`, `)`, `{` or `}`.
    Operator,
    /// A run of letters, digits and underscores not starting with a digit.
    Identifier,
    /// A run of decimal digits.
    Number,
    /// A quoted string; the token text excludes the quotes.
    String,
    /// Produced forever once the input is exhausted.
    EndOfInput,
    /// A single character that starts no other token.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Operator => "operator",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::EndOfInput => "end of input",
            Self::Error => "invalid character",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind, the exact matched text and the position of its
/// first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of lexeme this is.
    pub kind:   TokenKind,
    /// The matched text. String tokens have their quotes stripped.
    pub text:   String,
    /// 1-based source line.
    pub line:   usize,
    /// 1-based byte column within the line.
    pub column: usize,
}

impl Token {
    /// Returns `true` if the token's text is exactly `literal`, whatever its
    /// kind.
    #[must_use]
    pub fn is(&self, literal: &str) -> bool {
        self.text == literal
    }

    /// Returns `true` for the end-of-input token.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input at {}:{}", self.line, self.column),
            kind => write!(f, "{kind} '{}' at {}:{}", self.text, self.line, self.column),
        }
    }
}

/// Produces tokens one at a time from a single line of source.
///
/// A lexer is never reset: construct a fresh one for every line of input.
/// Once the input is exhausted, [`Lexer::next_token`] keeps returning
/// [`TokenKind::EndOfInput`].
///
/// # Example
/// ```
/// use ksm::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("declare x == 5");
/// assert_eq!(lexer.next_token().kind, TokenKind::Keyword);
/// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().text, "==");
/// assert_eq!(lexer.next_token().text, "5");
/// assert!(lexer.next_token().is_end());
/// assert!(lexer.next_token().is_end());
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Lexeme>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Lexeme::lexer(source) }
    }

    /// Returns the next token, skipping any leading whitespace.
    pub fn next_token(&mut self) -> Token {
        let token = match self.inner.next() {
            Some(Ok(lexeme)) => self.classify(lexeme),
            Some(Err(())) => self.make(TokenKind::Error, self.inner.slice().to_string()),
            None => self.end_of_input(),
        };
        tracing::trace!(kind = ?token.kind, text = %token.text, line = token.line, column = token.column, "token");
        token
    }

    fn classify(&self, lexeme: Lexeme) -> Token {
        let slice = self.inner.slice();
        match lexeme {
            Lexeme::Keyword => self.make(TokenKind::Keyword, slice.to_string()),
            Lexeme::Operator => self.make(TokenKind::Operator, slice.to_string()),
            Lexeme::Identifier => self.make(TokenKind::Identifier, slice.to_string()),
            Lexeme::Number => self.make(TokenKind::Number, slice.to_string()),
            Lexeme::Quoted => {
                let body = &slice[1..];
                let body = body.strip_suffix('"').unwrap_or(body);
                self.make(TokenKind::String, body.to_string())
            },
            // Both are skipped by their callbacks and never reach here.
            Lexeme::NewLine | Lexeme::Ignored => self.make(TokenKind::Error, slice.to_string()),
        }
    }

    fn make(&self, kind: TokenKind, text: String) -> Token {
        let extras = &self.inner.extras;
        Token { kind,
                text,
                line: extras.line,
                column: self.inner.span().start - extras.line_start + 1 }
    }

    fn end_of_input(&self) -> Token {
        let extras = &self.inner.extras;
        Token { kind:   TokenKind::EndOfInput,
                text:   String::new(),
                line:   extras.line,
                column: self.inner.source().len() - extras.line_start + 1, }
    }
}

/// Returns `true` if `text` is one of the reserved [`KEYWORDS`].
#[must_use]
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Returns `true` if `text` would lex as a single identifier token.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    && !is_keyword(text)
}
