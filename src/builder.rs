//! # builder.rs
//!
//! This module provides the `Builder`, which collects an expression and its
//! variable bindings before running the evaluation pipeline.

use num_complex::Complex;

use crate::error::Error;
use crate::normalize::normalize;
use crate::rpn::Postfix;
use crate::variable::Bindings;

#[derive(Debug, Clone, Default)]
pub struct Builder
{
    formula: String,
    vars: Bindings,
}

impl Builder
{
    /// Creates a new `Builder` for `formula` with no variables bound.
    ///
    /// Chain `with_variable`, `with_variables` or `with_bindings` to bind
    /// `$name` references before calling `evaluate`.
    ///
    /// # Examples
    /// ```rust
    /// use complexpr::Builder;
    /// use num_complex::Complex;
    ///
    /// let value = Builder::new("2 $x + 1")
    ///     .with_variable("x", Complex::new(0.0, 1.0))
    ///     .evaluate()
    ///     .expect("Failed to evaluate '2 $x + 1'");
    /// assert_eq!(value, Complex::new(1.0, 2.0));
    /// ```
    pub fn new(formula: &str) -> Self
    {
        Self {
            formula: formula.to_string(),
            vars: Bindings::new(),
        }
    }

    /// Binds a single variable.
    ///
    /// Names are resolved by first match, so binding a name twice keeps the
    /// first value.
    pub fn with_variable(mut self, name: &str, value: Complex<f64>) -> Self
    {
        self.vars.push(name, value);
        self
    }

    /// Binds several variables at once.
    ///
    /// # Examples
    /// ```rust
    /// use complexpr::Builder;
    /// use num_complex::Complex;
    ///
    /// let value = Builder::new("$a * $b")
    ///     .with_variables(&[("a", 2.0), ("b", 3.0)])
    ///     .evaluate()
    ///     .unwrap();
    /// assert_eq!(value, Complex::new(6.0, 0.0));
    /// ```
    pub fn with_variables<V>(mut self, items: &[(&str, V)]) -> Self
    where
        V: Clone,
        Complex<f64>: From<V>,
    {
        self.vars.insert(items);
        self
    }

    /// Appends a pre-built `Bindings` table after the bindings already set.
    pub fn with_bindings(mut self, bindings: &Bindings) -> Self
    {
        for (name, value) in bindings.names().iter().zip(bindings.values()) {
            self.vars.push(name, *value);
        }
        self
    }

    /// Returns the formula text.
    pub fn formula(&self) -> &str
    {
        &self.formula
    }

    /// Returns the bindings collected so far.
    pub fn bindings(&self) -> &Bindings
    {
        &self.vars
    }

    /// Returns the formula in normalized form.
    pub fn normalized(&self) -> String
    {
        normalize(&self.formula)
    }

    /// Runs the pipeline up to the RPN sequence.
    pub fn postfix(&self) -> Result<Postfix, Error>
    {
        crate::prepare(&self.formula, &self.vars)
    }

    /// Evaluates the formula.
    pub fn evaluate(&self) -> Result<Complex<f64>, Error>
    {
        crate::eval(&self.formula, &self.vars)
    }
}
