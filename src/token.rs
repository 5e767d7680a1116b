use log::debug;
use serde::Serialize;
use std::fmt;
use std::mem;

/// The kinds of name tokens the object model receives from the parser.
///
/// Only tokens that can name a property, a variable or the receiver reach
/// this layer, so the full lexical vocabulary is not represented here.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Serialize)]
pub enum TokenType {
    /// A user‑defined identifier
    IDENTIFIER,

    /// 'this'
    THIS,

    /// 'super'
    SUPER,
}

impl PartialEq for TokenType {
    /// Two TokenTypes are equal if they share the same variant.
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

/// A name token: its kind, the exact source text and the line it came from.
///
/// Unlike the scanner's borrowed tokens, the lexeme is owned so that tokens
/// stored in function declarations can outlive the source buffer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Token {
    /// The category of this token.
    pub token_type: TokenType,

    /// The exact substring from the source that produced this token.
    pub lexeme: String,

    /// 1‑based line number in the source.
    pub line: usize,
}

impl Token {
    /// Create a new Token with the given type, lexeme, and line.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, line: usize) -> Self {
        let lexeme: String = lexeme.into();

        debug!(
            "Creating new token: type={:?}, lexeme={}, line={}",
            token_type, lexeme, line
        );

        Self {
            token_type,
            lexeme,
            line,
        }
    }

    /// Shorthand for an `IDENTIFIER` token.
    pub fn identifier<S: Into<String>>(name: S, line: usize) -> Self {
        Self::new(TokenType::IDENTIFIER, name, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant: &'static str = match self.token_type {
            TokenType::IDENTIFIER => "IDENTIFIER",
            TokenType::THIS => "THIS",
            TokenType::SUPER => "SUPER",
        };

        write!(f, "{} {} null", variant, self.lexeme)
    }
}
