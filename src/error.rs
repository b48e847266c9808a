//! # error.rs
//!
//! Error type shared by every stage of the evaluation pipeline.

/// Represents all errors that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression text is empty.
    EmptyInput,

    /// A character outside printable ASCII was found. ASCII whitespace is allowed.
    NonAsciiCharacter(char),

    /// Brackets do not pair up, or an operator meets a bracket it cannot.
    BracketMismatch,

    /// A `$name` reference has no entry in the name list.
    UndefinedVariable(String),

    /// The name was found, but the value list is too short to hold its value.
    MissingVariableValue(String),

    /// A numeric literal could not be parsed.
    IllegalNumber(String),

    /// The function name is not in the function table.
    UnknownFunction(String),

    /// More operators or functions than the operands can feed.
    StackUnderflow,

    /// More operands than the operators and functions consume.
    StackOverflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Empty expression"),
            Self::NonAsciiCharacter(ch) => write!(f, "Not an ASCII character: '{ch}'"),
            Self::BracketMismatch => write!(f, "Mismatch of brackets"),
            Self::UndefinedVariable(name) => write!(f, "Undefined variable: {name}"),
            Self::MissingVariableValue(name) => {
                write!(f, "No value given for variable: {name}")
            },
            Self::IllegalNumber(text) => write!(f, "Illegal input of number: {text}"),
            Self::UnknownFunction(name) => write!(f, "Unknown function name: {name}"),
            Self::StackUnderflow => {
                write!(f, "More operators or functions, or less numbers than expected")
            },
            Self::StackOverflow => {
                write!(f, "Less operators or functions, or more numbers than expected")
            },
        }
    }
}

impl std::error::Error for Error {}
