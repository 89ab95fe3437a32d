use std::fmt;

use crate::interpreter::lexer::{Token, TokenKind};

/// The comparison applied by a [`Condition`].
///
/// The parser accepts any operator token between the two operands, so the
/// comparisons without a meaning are kept as [`Comparison::Unsupported`] and
/// evaluate to `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Equal to (`==`)
    Equal,
    /// Any other operator token, such as `=` or `(`.
    Unsupported(String),
}

impl From<&str> for Comparison {
    fn from(text: &str) -> Self {
        match text {
            ">" => Self::Greater,
            "<" => Self::Less,
            "==" => Self::Equal,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "==",
            Self::Unsupported(text) => text,
        };
        write!(f, "{operator}")
    }
}

/// A three-token comparison: `operand operator operand`.
///
/// Operands are arbitrary single tokens. Their text is resolved against the
/// variable store and compared as integers at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left-hand operand.
    pub left:  Token,
    /// The comparison.
    pub op:    Comparison,
    /// Right-hand operand.
    pub right: Token,
}

/// Renders the condition as the literal text of its three tokens separated by
/// single spaces, e.g. `x > 3`.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left.text, self.op, self.right.text)
    }
}

/// An ordered sequence of statements.
///
/// Both a whole program line and every `{ ... }` body are blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// The statements, in program order.
    pub statements: Vec<Statement>,
}

impl Block {
    /// Returns `true` if the block holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A single statement of the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `declare name = value`; declares or overwrites a variable.
    VarDecl {
        /// The variable name.
        name:  String,
        /// The single token on the right-hand side.
        value: Token,
        /// Line number in the source code.
        line:  usize,
    },
    /// `displayln(value)`; emits a resolved value.
    Print {
        /// The single token between the parentheses.
        value: Token,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if case condition { body }`.
    If {
        /// The comparison deciding whether the body runs.
        condition: Condition,
        /// The statements run when the condition holds.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `otherwise { body }`.
    ///
    /// Not linked to any preceding `if`: the body always runs.
    Otherwise {
        /// The statements to run.
        body: Block,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Returns the source line where the statement starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::VarDecl { line, .. }
            | Self::Print { line, .. }
            | Self::If { line, .. }
            | Self::Otherwise { line, .. } => *line,
        }
    }
}

/// Writes an operand token back as source, re-quoting strings.
fn write_operand(f: &mut fmt::Formatter<'_>, token: &Token) -> fmt::Result {
    match token.kind {
        TokenKind::String => write!(f, "\"{}\"", token.text),
        _ => write!(f, "{}", token.text),
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VarDecl { name, value, .. } => {
                write!(f, "declare {name} = ")?;
                write_operand(f, value)
            },
            Self::Print { value, .. } => {
                write!(f, "displayln(")?;
                write_operand(f, value)?;
                write!(f, ")")
            },
            Self::If { condition, body, .. } => {
                write!(f, "if case ")?;
                write_operand(f, &condition.left)?;
                write!(f, " {} ", condition.op)?;
                write_operand(f, &condition.right)?;
                write!(f, " {{ {body} }}")
            },
            Self::Otherwise { body, .. } => write!(f, "otherwise {{ {body} }}"),
        }
    }
}

/// Renders the statements separated by single spaces, which is itself valid
/// source for one line.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
