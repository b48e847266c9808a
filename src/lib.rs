//! # complexpr
//!
//! `complexpr` is a Rust library for evaluating arithmetic expressions over
//! **complex numbers** written as plain text.
//!
//! ## Overview
//! - Real literals, the imaginary unit `i` (also `I`, `j`, `J`) and `$name`
//!   variables bound by position.
//! - Operators `+ - * / ^`, all left associative, `^` binding tightest.
//! - Implicit multiplication: `2(1+i)`, `2$x`, `3i`.
//! - Unary signs: `-x` and `(-x)` are read as `0-x`.
//! - Any bracket family `()`, `[]`, `{}`, checked for exact pairing.
//! - Built-in functions: `exp`, `sqrt`, `square`, `ln`/`log`, `sin`, `cos`,
//!   `tan`, `asin`/`arcsin`, `acos`/`arccos`, `atan`/`arctan`, `arg`/`argz`,
//!   `abs`/`fabs`, matched case-insensitively.
//!
//! Internally the text is normalized, converted to Reverse Polish Notation
//! with the Shunting-yard algorithm and a fixed precedence table, and then
//! evaluated over a value stack.
//!
//! ## Example
//! ```rust
//! use num_complex::Complex;
//! use complexpr::evaluate_expression;
//!
//! let result = evaluate_expression(
//!     "$x + $y",
//!     &["x", "y"],
//!     &[Complex::new(1.0, 2.0), Complex::new(2.0, 3.0)],
//! );
//! assert_eq!(result.value, Complex::new(3.0, 5.0));
//! assert_eq!(result.message, None);
//!
//! let result = evaluate_expression("3 * (2+3]", &[], &[]);
//! assert_eq!(result.value, complexpr::SENTINEL);
//! assert!(result.message.unwrap().contains("brackets"));
//! ```
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

mod brackets;
mod builder;
mod error;
pub mod evaluator;
pub mod functions;
pub mod normalize;
pub mod rpn;
pub mod token;
pub mod variable;

use log::{debug, warn};
use num_complex::Complex;

pub use crate::brackets::brackets_balanced;
pub use crate::builder::Builder;
pub use crate::error::Error;
pub use crate::evaluator::evaluate;
pub use crate::normalize::normalize;
pub use crate::rpn::{to_postfix, Postfix, Slot};
pub use crate::variable::Bindings;

/// Value returned in place of a result whenever evaluation fails.
pub const SENTINEL: Complex<f64> = Complex::new(0.0, 0.0);

/// Outcome of [`evaluate_expression`].
///
/// On success `message` is `None`. On failure `value` is [`SENTINEL`] and
/// `message` holds a human-readable diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalResult {
    pub value: Complex<f64>,
    pub message: Option<String>,
}

impl EvalResult {
    /// Returns whether the evaluation succeeded.
    pub fn is_ok(&self) -> bool {
        self.message.is_none()
    }
}

impl From<Result<Complex<f64>, Error>> for EvalResult {
    fn from(result: Result<Complex<f64>, Error>) -> Self {
        match result {
            Ok(value) => Self { value, message: None },
            Err(err) => Self { value: SENTINEL, message: Some(err.to_string()) },
        }
    }
}

/// Returns whether `ch` is printable ASCII or ASCII whitespace.
fn is_accepted(ch: char) -> bool {
    ch.is_ascii() && (!ch.is_ascii_control() || ch.is_ascii_whitespace())
}

/// Rejects text the pipeline must never see.
fn check(text: &str) -> Result<(), Error> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(ch) = text.chars().find(|&ch| !is_accepted(ch)) {
        return Err(Error::NonAsciiCharacter(ch));
    }
    if !brackets_balanced(text) {
        return Err(Error::BracketMismatch);
    }
    Ok(())
}

/// Checks, normalizes and converts `text` into an RPN sequence.
pub(crate) fn prepare(text: &str, bindings: &Bindings) -> Result<Postfix, Error> {
    check(text)?;

    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(Error::EmptyInput);
    }
    debug!("normalized {:?} to {:?}", text, normalized);

    let rpn = to_postfix(&normalized, bindings)?;
    debug!("postfix of {:?}: {:?}", normalized, rpn);
    Ok(rpn)
}

/// Evaluates `text` with the given variable bindings.
///
/// # Errors
///
/// Returns the first [`Error`] raised by any stage. Checks run in this
/// order: empty text, characters outside printable ASCII, bracket pairing, then
/// conversion and evaluation.
///
/// # Example
/// ```rust
/// use complexpr::{eval, Bindings};
/// use num_complex::Complex;
///
/// let value = eval("abs(3 + 4i)", &Bindings::new()).unwrap();
/// assert_eq!(value, Complex::new(5.0, 0.0));
/// ```
pub fn eval(text: &str, bindings: &Bindings) -> Result<Complex<f64>, Error> {
    let rpn = prepare(text, bindings)?;
    evaluate(&rpn)
}

/// Evaluates `text`, binding `names[k]` to `values[k]`.
///
/// `values` may be longer than `names`. This function never panics: any
/// failure yields [`SENTINEL`] together with a diagnostic message, which is
/// also logged at `warn` level.
pub fn evaluate_expression(text: &str, names: &[&str], values: &[Complex<f64>]) -> EvalResult {
    let bindings = Bindings::from_lists(names, values);
    let result = eval(text, &bindings);
    if let Err(err) = &result {
        warn!("failed to evaluate {:?}: {}", text, err);
    }
    EvalResult::from(result)
}

#[cfg(test)]
mod evaluate_expression_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn value_of(text: &str) -> Complex<f64> {
        let result = evaluate_expression(text, &[], &[]);
        assert_eq!(result.message, None, "unexpected failure for {text}");
        result.value
    }

    fn message_of(text: &str) -> String {
        let result = evaluate_expression(text, &[], &[]);
        assert_eq!(result.value, SENTINEL);
        result.message.expect("expected a diagnostic")
    }

    #[test]
    fn test_addition() {
        let result = evaluate_expression("2+3", &[], &[]);
        assert_eq!(result, EvalResult { value: Complex::new(5.0, 0.0), message: None });
        assert!(result.is_ok());
    }

    #[test]
    fn test_variables() {
        let result = evaluate_expression(
            "$x + $y",
            &["x", "y"],
            &[Complex::new(1.0, 2.0), Complex::new(2.0, 3.0)],
        );
        assert_eq!(result.value, Complex::new(3.0, 5.0));
        assert!(result.is_ok());
    }

    #[test]
    fn test_modulus() {
        assert_eq!(value_of("abs(3 + 4i)"), Complex::new(5.0, 0.0));
    }

    #[test]
    fn test_bracket_mismatch() {
        assert_eq!(message_of("3 * (2+3]"), Error::BracketMismatch.to_string());
        assert_eq!(message_of("2+3)"), Error::BracketMismatch.to_string());
    }

    #[test]
    fn test_empty() {
        assert_eq!(message_of(""), Error::EmptyInput.to_string());
        assert_eq!(message_of("   "), Error::EmptyInput.to_string());
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(message_of("1+α"), Error::NonAsciiCharacter('α').to_string());
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(message_of("1+\u{1}"), Error::NonAsciiCharacter('\u{1}').to_string());
        assert_eq!(message_of("2*\u{7f}3"), Error::NonAsciiCharacter('\u{7f}').to_string());
        assert_eq!(value_of("1\t+\r\n2"), Complex::new(3.0, 0.0));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(value_of("2 + 3 * 4"), Complex::new(14.0, 0.0));
        assert_eq!(value_of("(2 + 3) * 4"), Complex::new(20.0, 0.0));
        assert_eq!(value_of("8 / 4 / 2"), Complex::new(1.0, 0.0));
        assert_eq!(value_of("1 - 2 - 3"), Complex::new(-4.0, 0.0));

        let result = value_of("2 * 3 ^ 2");
        assert_abs_diff_eq!(result.re, 18.0, epsilon=1.0e-9);
        assert_abs_diff_eq!(result.im, 0.0, epsilon=1.0e-9);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(value_of("-5 + 2"), Complex::new(-3.0, 0.0));
        assert_eq!(value_of("3 * (-2)"), Complex::new(-6.0, 0.0));
    }

    #[test]
    fn test_imaginary_power() {
        let result = value_of("2i^2");
        assert_abs_diff_eq!(result.re, -2.0, epsilon=1.0e-12);
        assert_abs_diff_eq!(result.im, 0.0, epsilon=1.0e-12);
    }

    #[test]
    fn test_mixed_brackets() {
        assert_eq!(value_of("{1 + [2 * (3 + 4)]}"), Complex::new(15.0, 0.0));
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(message_of("1 + foo(2) * 3"), Error::UnknownFunction("foo".into()).to_string());
    }

    #[test]
    fn test_too_many_operands() {
        assert_eq!(message_of("(1)(2)"), Error::StackOverflow.to_string());
    }
}
