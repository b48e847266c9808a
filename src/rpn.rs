//! rpn.rs
//!
//! Converts normalized infix text into Reverse Polish Notation (RPN)
//! using the Shunting-yard algorithm driven by a fixed precedence table.
//!
//! Every binary operator is left associative, `^` binds tighter than `*` `/`,
//! which bind tighter than `+` `-`. A function name behaves as a prefix
//! operator that binds tighter than any binary operator.

use log::trace;
use num_complex::Complex;

use crate::error::Error;
use crate::token::{Lexer, Operator, Token};
use crate::variable::Bindings;

/// Row/column index into the precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightClass {
    Add = 0,
    Sub = 1,
    Mul = 2,
    Div = 3,
    Pow = 4,
    LParen = 5,
    RParen = 6,
    Function = 7,
}

impl From<Operator> for WeightClass {
    fn from(oper: Operator) -> Self {
        match oper {
            Operator::Add => Self::Add,
            Operator::Sub => Self::Sub,
            Operator::Mul => Self::Mul,
            Operator::Div => Self::Div,
            Operator::Pow => Self::Pow,
        }
    }
}

/// What to do with an incoming token given the token on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Push the incoming token.
    Push,
    /// Move the stack top to the output and compare again.
    Pop,
    /// `)` meets `(`: drop both.
    Match,
    /// Invalid juxtaposition.
    Error,
}

use Action::{Error as E, Match as M, Pop as O, Push as P};

/// Precedence table, rows indexed by the stack top and columns by the
/// incoming token, both in [`WeightClass`] order `+ - * / ^ ( ) function`.
static PRECEDENCE_TABLE: [[Action; 8]; 8] = [
    //  +  -  *  /  ^  (  )  f
    [O, O, P, P, P, P, O, P], // +
    [O, O, P, P, P, P, O, P], // -
    [O, O, O, O, P, P, O, P], // *
    [O, O, O, O, P, P, O, P], // /
    [O, O, O, O, O, P, O, P], // ^
    [P, P, P, P, P, P, M, P], // (
    [O, O, O, O, O, E, O, O], // )
    [O, O, O, O, O, P, O, O], // f
];

/// Looks up the action for `incoming` against the stack top `top`.
pub fn precedence(top: WeightClass, incoming: WeightClass) -> Action {
    PRECEDENCE_TABLE[top as usize][incoming as usize]
}

/// One element of an RPN sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// Literal value, already resolved.
    Value(Complex<f64>),
    /// Binary operator.
    Operator(Operator),
    /// Function name, resolved at evaluation time.
    Function(String),
}

/// An RPN sequence.
pub type Postfix = Vec<Slot>;

/// Anything that travels through the operator stack.
#[derive(Debug, Clone, PartialEq)]
enum Oper {
    Operator(Operator),
    Function(String),
    LParen,
    RParen,
}

impl Oper {
    fn class(&self) -> WeightClass {
        match self {
            Self::Operator(oper) => WeightClass::from(*oper),
            Self::Function(_) => WeightClass::Function,
            Self::LParen => WeightClass::LParen,
            Self::RParen => WeightClass::RParen,
        }
    }

    /// Converts a popped stack entry into an output slot.
    ///
    /// A parenthesis reaching the output means it was never matched.
    fn into_slot(self) -> Result<Slot, Error> {
        match self {
            Self::Operator(oper) => Ok(Slot::Operator(oper)),
            Self::Function(name) => Ok(Slot::Function(name)),
            Self::LParen | Self::RParen => Err(Error::BracketMismatch),
        }
    }
}

/// Resolves the incoming `oper` against the stack.
///
/// Pops into `rpn` while the table says so, then pushes `oper`. A `)` is
/// never pushed: it either consumes its `(` or is dropped, including when the
/// stack is already empty.
fn add_new_oper(oper: Oper, rpn: &mut Postfix, stack: &mut Vec<Oper>) -> Result<(), Error> {
    loop {
        let action = match stack.last() {
            Some(top) => precedence(top.class(), oper.class()),
            None => Action::Push,
        };
        trace!("{:?} against {:?}: {:?}", oper, stack.last(), action);

        match action {
            Action::Push => {
                if oper != Oper::RParen {
                    stack.push(oper);
                }
                return Ok(());
            },
            Action::Pop => {
                if let Some(top) = stack.pop() {
                    rpn.push(top.into_slot()?);
                }
            },
            Action::Match => {
                stack.pop();
                return Ok(());
            },
            Action::Error => return Err(Error::BracketMismatch),
        }
    }
}

/// Converts normalized infix text into Reverse Polish Notation (RPN).
///
/// Variables are resolved against `bindings` while scanning, so the result
/// holds only values, operators and function names.
///
/// # Errors
///
/// * [`Error::UndefinedVariable`] / [`Error::MissingVariableValue`] for a
///   `$name` that does not resolve.
/// * [`Error::IllegalNumber`] for a malformed literal.
/// * [`Error::BracketMismatch`] for an unclosed `(`.
///
/// # Example
///
/// ```
/// use complexpr::rpn::{to_postfix, Slot};
/// use complexpr::token::Operator;
/// use complexpr::variable::Bindings;
/// use num_complex::Complex;
///
/// let rpn = to_postfix("1+2*3", &Bindings::new()).unwrap();
/// assert_eq!(rpn.last(), Some(&Slot::Operator(Operator::Add)));
/// assert_eq!(rpn.len(), 5);
/// ```
pub fn to_postfix(normalized: &str, bindings: &Bindings) -> Result<Postfix, Error> {
    let mut rpn = Postfix::new();
    let mut stack: Vec<Oper> = Vec::new();

    for token in Lexer::new(normalized) {
        match token? {
            Token::Number(val) => rpn.push(Slot::Value(val)),
            Token::ImaginaryUnit => rpn.push(Slot::Value(Complex::i())),
            Token::Variable(name) => rpn.push(Slot::Value(bindings.resolve(&name)?)),
            Token::Operator(oper) => add_new_oper(Oper::Operator(oper), &mut rpn, &mut stack)?,
            Token::Function(name) => add_new_oper(Oper::Function(name), &mut rpn, &mut stack)?,
            Token::LParen => add_new_oper(Oper::LParen, &mut rpn, &mut stack)?,
            Token::RParen => add_new_oper(Oper::RParen, &mut rpn, &mut stack)?,
        }
    }

    // Push any remaining stack contents to the RPN output
    while let Some(oper) = stack.pop() {
        rpn.push(oper.into_slot()?);
    }
    Ok(rpn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(val: f64) -> Slot {
        Slot::Value(Complex::new(val, 0.0))
    }

    fn op(symbol: char) -> Slot {
        Slot::Operator(Operator::from_char(symbol).unwrap())
    }

    #[test]
    fn test_to_postfix_basic() {
        let rpn = to_postfix("3+4*2", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![num(3.0), num(4.0), num(2.0), op('*'), op('+')]);
    }

    #[test]
    fn test_left_to_right_within_tier() {
        let rpn = to_postfix("8-2-1", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![num(8.0), num(2.0), op('-'), num(1.0), op('-')]);

        let rpn = to_postfix("2^3^2", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![num(2.0), num(3.0), op('^'), num(2.0), op('^')]);
    }

    #[test]
    fn test_power_over_product() {
        let rpn = to_postfix("2*3^2", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![num(2.0), num(3.0), num(2.0), op('^'), op('*')]);
    }

    #[test]
    fn test_parentheses() {
        let rpn = to_postfix("(1+2)*3", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![num(1.0), num(2.0), op('+'), num(3.0), op('*')]);
    }

    #[test]
    fn test_nested_functions() {
        let rpn = to_postfix("cos(sin(1))", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![
            num(1.0),
            Slot::Function("sin".into()),
            Slot::Function("cos".into()),
        ]);
    }

    #[test]
    fn test_function_binds_tighter_than_power() {
        let rpn = to_postfix("0-sin(1)^2", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![
            num(0.0),
            num(1.0),
            Slot::Function("sin".into()),
            num(2.0),
            op('^'),
            op('-'),
        ]);
    }

    #[test]
    fn test_imaginary_and_variables() {
        let vars = Bindings::from_lists(&["x"], &[Complex::new(1.0, 2.0)]);
        let rpn = to_postfix("$x*@", &vars).unwrap();
        assert_eq!(rpn, vec![
            Slot::Value(Complex::new(1.0, 2.0)),
            Slot::Value(Complex::new(0.0, 1.0)),
            op('*'),
        ]);
    }

    #[test]
    fn test_unmatched_right_paren_is_dropped() {
        let rpn = to_postfix("2+3)", &Bindings::new()).unwrap();
        assert_eq!(rpn, vec![num(2.0), num(3.0), op('+')]);

        assert_eq!(to_postfix(")", &Bindings::new()).unwrap(), vec![]);
    }

    #[test]
    fn test_unclosed_left_paren() {
        let err = to_postfix("(1+2", &Bindings::new()).unwrap_err();
        assert_eq!(err, Error::BracketMismatch);
    }

    #[test]
    fn test_variable_errors() {
        let vars = Bindings::from_lists(&["x", "y"], &[Complex::new(1.0, 0.0)]);
        assert_eq!(to_postfix("$z+1", &vars).unwrap_err(), Error::UndefinedVariable("z".into()));
        assert_eq!(to_postfix("$y+1", &vars).unwrap_err(), Error::MissingVariableValue("y".into()));
    }

    #[test]
    fn test_illegal_number() {
        let err = to_postfix("1+2..5", &Bindings::new()).unwrap_err();
        assert_eq!(err, Error::IllegalNumber("2..5".into()));
    }

    #[test]
    fn test_table_corners() {
        assert_eq!(precedence(WeightClass::LParen, WeightClass::RParen), Action::Match);
        assert_eq!(precedence(WeightClass::RParen, WeightClass::LParen), Action::Error);
        assert_eq!(precedence(WeightClass::Function, WeightClass::LParen), Action::Push);
        assert_eq!(precedence(WeightClass::Add, WeightClass::Mul), Action::Push);
        assert_eq!(precedence(WeightClass::Mul, WeightClass::Sub), Action::Pop);
    }
}
