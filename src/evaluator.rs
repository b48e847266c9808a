//! # evaluator.rs
//!
//! Evaluates an RPN sequence produced by [`crate::rpn::to_postfix`] over a
//! stack of complex values.

use num_complex::Complex;

use crate::error::Error;
use crate::functions;
use crate::rpn::Slot;

/// Evaluates `postfix` and returns the single value it leaves behind.
///
/// Binary operators take the first popped value as their right-hand operand.
///
/// # Errors
///
/// * [`Error::StackUnderflow`] when an operator or function finds too few
///   operands, or when nothing is left at the end.
/// * [`Error::StackOverflow`] when more than one value is left at the end.
/// * [`Error::UnknownFunction`] for a name missing from the function table.
pub fn evaluate(postfix: &[Slot]) -> Result<Complex<f64>, Error> {
    let mut stack: Vec<Complex<f64>> = Vec::with_capacity(postfix.len());

    for slot in postfix {
        match slot {
            Slot::Value(val) => stack.push(*val),
            Slot::Function(name) => {
                let arg = stack.pop().ok_or(Error::StackUnderflow)?;
                let func = functions::lookup(name)
                    .ok_or_else(|| Error::UnknownFunction(name.clone()))?;
                stack.push(func.apply(arg));
            },
            Slot::Operator(oper) => {
                let r = stack.pop().ok_or(Error::StackUnderflow)?;
                let l = stack.pop().ok_or(Error::StackUnderflow)?;
                stack.push(oper.apply(l, r));
            },
        }
    }

    let result = stack.pop().ok_or(Error::StackUnderflow)?;
    if !stack.is_empty() {
        return Err(Error::StackOverflow);
    }
    Ok(result)
}
