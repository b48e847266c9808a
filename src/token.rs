//! # token.rs
//!
//! Tokenizer for normalized expression text.
//!
//! The text handed to this module is expected to have gone through
//! [`crate::normalize::normalize`]: no whitespace, imaginary units already
//! rewritten to [`IMAGINARY_MARKER`], unary signs already turned into binary
//! ones. Tokens are produced lazily so that errors surface in text order.

use num_complex::Complex;

use crate::error::Error;

/// Canonical spelling of the imaginary unit in source text.
pub const IMAGINARY_UNIT: char = 'i';

/// Internal marker the normalizer writes for a recognised imaginary unit.
pub const IMAGINARY_MARKER: char = '@';

/// Character introducing a variable reference (`$name`).
pub const VARIABLE_MARKER: char = '$';

/// Returns whether `ch` belongs to the operator alphabet `+-*/^()`.
///
/// Operators end identifier and variable-name runs.
pub fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '^' | '(' | ')')
}

#[doc(hidden)]
/// Internal macro to define the binary operators.
///
/// Centralizes the enum variants, the symbol and the apply logic.
macro_rules! binary_operators {
    ($($name:ident => { symbol: $symbol:expr, apply: $apply:expr }),* $(,)?) => {
        /// Represents a binary operator in an expression.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Operator {
            $($name),*
        }

        impl Operator {
            /// Converts a character to the corresponding operator.
            pub fn from_char(ch: char) -> Option<Self> {
                match ch {
                    $($symbol => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// Returns the operator symbol.
            pub fn symbol(&self) -> char {
                match self {
                    $(Self::$name => $symbol,)*
                }
            }

            /// Applies the operator, `l` being the left-hand operand.
            pub fn apply(&self, l: Complex<f64>, r: Complex<f64>) -> Complex<f64> {
                match self {
                    $(Self::$name => $apply(l, r),)*
                }
            }
        }

        impl std::fmt::Display for Operator {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

binary_operators! {
    Add => { symbol: '+', apply: |l: Complex<f64>, r: Complex<f64>| l + r },
    Sub => { symbol: '-', apply: |l: Complex<f64>, r: Complex<f64>| l - r },
    Mul => { symbol: '*', apply: |l: Complex<f64>, r: Complex<f64>| l * r },
    Div => { symbol: '/', apply: |l: Complex<f64>, r: Complex<f64>| l / r },
    Pow => { symbol: '^', apply: |l: Complex<f64>, r: Complex<f64>| l.powc(r) },
}

/// Token enum representing the pieces of a normalized expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Real numeric literal.
    Number(Complex<f64>),

    /// Variable reference by name, without the leading `$`.
    Variable(String),

    /// The constant `0+1i`.
    ImaginaryUnit,

    /// Binary operator token.
    Operator(Operator),

    /// Left parenthesis token '('.
    LParen,

    /// Right parenthesis token ')'.
    RParen,

    /// Function name, exactly as written.
    Function(String),
}

type CharIter<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Lazy tokenizer over normalized text.
///
/// # Examples
///
/// ```
/// use complexpr::token::{Lexer, Operator, Token};
///
/// let tokens: Vec<Token> = Lexer::new("2*$x").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens[1], Token::Operator(Operator::Mul));
/// assert_eq!(tokens[2], Token::Variable("x".into()));
/// ```
pub struct Lexer<'a> {
    text: &'a str,
    chars: CharIter<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a tokenizer over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    /// Consumes characters while `accept` holds and returns the end index.
    fn scan_while(&mut self, mut end: usize, accept: impl Fn(char) -> bool) -> usize {
        while let Some(&(idx, ch)) = self.chars.peek() {
            if !accept(ch) {
                break;
            }
            self.chars.next();
            end = idx + ch.len_utf8();
        }
        end
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, ch) = self.chars.next()?;

        if let Some(oper) = Operator::from_char(ch) {
            return Some(Ok(Token::Operator(oper)));
        }

        let token = match ch {
            '(' => Ok(Token::LParen),
            ')' => Ok(Token::RParen),
            IMAGINARY_MARKER => Ok(Token::ImaginaryUnit),
            VARIABLE_MARKER => {
                let name_start = start + ch.len_utf8();
                let end = self.scan_while(name_start, |c| !is_operator(c));
                Ok(Token::Variable(self.text[name_start..end].to_string()))
            },
            '0'..='9' | '.' => {
                let end = self.scan_while(start + 1, |c| c.is_ascii_digit() || c == '.');
                let literal = &self.text[start..end];
                literal.parse::<f64>()
                    .map(|val| Token::Number(Complex::new(val, 0.0)))
                    .map_err(|_| Error::IllegalNumber(literal.to_string()))
            },
            _ => {
                let end = self.scan_while(start + ch.len_utf8(), |c| !is_operator(c));
                Ok(Token::Function(self.text[start..end].to_string()))
            },
        };

        Some(token)
    }
}

/// Tokenizes the whole of `text`, stopping at the first error.
pub fn tokenize(text: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(text).collect()
}
