//! # variable.rs
//!
//! This module provides the `Bindings` struct, which pairs the variable names
//! an expression may reference (`$name`) with their values.
//!
//! Names and values are two ordered lists matched by position. Lookup is a
//! linear scan for the first matching name, so a duplicated name always
//! resolves to its first occurrence. The value list may be longer than the
//! name list; extra values are simply never reached.

use num_complex::Complex;

use crate::error::Error;

/// Positional variable bindings for expression evaluation.
///
/// # Examples
///
/// ```
/// use complexpr::variable::Bindings;
/// use num_complex::Complex;
///
/// let vars = Bindings::from_lists(&["x", "y"], &[Complex::new(1.0, 2.0), Complex::new(3.0, 0.0)]);
///
/// assert!(vars.contains("x"));
/// assert_eq!(vars.resolve("y").unwrap(), Complex::new(3.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    names: Vec<String>,
    values: Vec<Complex<f64>>,
}

impl Bindings {
    /// Creates an empty `Bindings` table.
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Constructs bindings from separate name and value lists.
    ///
    /// The lists are paired by position and may differ in length.
    pub fn from_lists<S: AsRef<str>>(names: &[S], values: &[Complex<f64>]) -> Self {
        Self {
            names: names.iter().map(|name| name.as_ref().to_string()).collect(),
            values: values.to_vec(),
        }
    }

    /// Appends name/value pairs.
    ///
    /// Values can be any type convertible into `Complex<f64>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use complexpr::variable::Bindings;
    ///
    /// let mut vars = Bindings::new();
    /// vars.insert(&[("a", 1.0), ("b", 2.0)]);
    /// assert_eq!(vars.len(), 2);
    /// ```
    pub fn insert<V>(&mut self, items: &[(&str, V)])
    where
        V: Clone,
        Complex<f64>: From<V>,
    {
        for (name, val) in items {
            self.names.push(name.to_string());
            self.values.push(Complex::from(val.clone()));
        }
    }

    /// Appends a single name/value pair.
    pub fn push(&mut self, name: &str, value: Complex<f64>) {
        self.names.push(name.to_string());
        self.values.push(value);
    }

    /// Returns the position of the first binding named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    /// Checks whether `name` appears in the name list.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Resolves `name` to its bound value.
    ///
    /// # Errors
    ///
    /// * [`Error::UndefinedVariable`] if no name matches.
    /// * [`Error::MissingVariableValue`] if the value list is shorter than the
    ///   index of the first match.
    pub fn resolve(&self, name: &str) -> Result<Complex<f64>, Error> {
        let idx = self.position(name)
            .ok_or_else(|| Error::UndefinedVariable(name.to_string()))?;
        self.values.get(idx)
            .copied()
            .ok_or_else(|| Error::MissingVariableValue(name.to_string()))
    }

    /// Returns the name list.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the value list.
    pub fn values(&self) -> &[Complex<f64>] {
        &self.values
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no name is bound.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Clears both lists.
    pub fn clear(&mut self) {
        self.names.clear();
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_resolve() {
        let mut vars = Bindings::new();
        vars.insert(&[("a", Complex::new(1.0, 0.0)), ("b", Complex::new(2.0, 3.0))]);

        assert_eq!(vars.resolve("a"), Ok(Complex::new(1.0, 0.0)));
        assert_eq!(vars.resolve("b"), Ok(Complex::new(2.0, 3.0)));
        assert_eq!(vars.resolve("c"), Err(Error::UndefinedVariable("c".into())));
    }

    #[test]
    fn test_duplicate_name_resolves_to_first() {
        let vars = Bindings::from_lists(&["x", "x"], &[Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)]);
        assert_eq!(vars.resolve("x"), Ok(Complex::new(1.0, 0.0)));
        assert_eq!(vars.position("x"), Some(0));
    }

    #[test]
    fn test_more_values_than_names() {
        let vars = Bindings::from_lists(&["x"], &[Complex::new(1.0, 0.0), Complex::new(9.0, 0.0)]);
        assert_eq!(vars.resolve("x"), Ok(Complex::new(1.0, 0.0)));
    }

    #[test]
    fn test_missing_value() {
        let vars = Bindings::from_lists(&["x", "y"], &[Complex::new(1.0, 0.0)]);
        assert_eq!(vars.resolve("x"), Ok(Complex::new(1.0, 0.0)));
        assert_eq!(vars.resolve("y"), Err(Error::MissingVariableValue("y".into())));
    }

    #[test]
    fn test_from_owned_names() {
        let names = vec![String::from("p"), String::from("q")];
        let vars = Bindings::from_lists(&names, &[Complex::new(3.0, 0.0), Complex::new(4.5, 0.0)]);
        assert_eq!(vars.names(), &names[..]);
        assert_eq!(vars.values().len(), 2);
    }

    #[test]
    fn test_push_and_clear() {
        let mut vars = Bindings::default();
        assert!(vars.is_empty());

        vars.push("foo", Complex::new(1.0, 1.0));
        assert!(vars.contains("foo"));
        assert_eq!(vars.len(), 1);

        vars.clear();
        assert!(!vars.contains("foo"));
        assert!(vars.values().is_empty());
    }
}
