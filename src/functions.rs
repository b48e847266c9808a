//! # functions.rs
//!
//! Built-in mathematical functions for expression evaluation.
//!
//! Every function takes one complex argument. Names are matched
//! case-insensitively and several functions answer to an alias
//! (`ln`/`log`, `asin`/`arcsin`, ...).

use num_complex::Complex;
use phf::Map;
use phf_macros::phf_map;

/// Function pointer type alias representing a one-argument function.
pub type Func = fn(Complex<f64>) -> Complex<f64>;

/// A built-in function with its canonical name.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    /// Function pointer implementing the mathematical function.
    function: Func,
    /// Canonical name, shared by all aliases.
    name: &'static str,
}

impl Function {
    /// Executes the function.
    pub fn apply(&self, x: Complex<f64>) -> Complex<f64> {
        (self.function)(x)
    }

    /// Returns the canonical function name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        // function pointer addresses are not guaranteed to be unique
        self.name == other.name
    }
}

/// Macro to define unary functions from method names on Complex<f64>.
///
/// For example, define_unary_func!(sin) expands to
/// `fn sin(x: Complex<f64>) -> Complex<f64> { x.sin() }`.
macro_rules! define_unary_func {
    ($($name:ident),+ $(,)?) => {
        $(
            fn $name(x: Complex<f64>) -> Complex<f64> {
                x.$name()
            }
        )+
    };
}

define_unary_func!(exp, sqrt, ln, sin, cos, tan, asin, acos, atan);

/// Multiplies the argument by itself.
fn square(x: Complex<f64>) -> Complex<f64> {
    x * x
}

/// Two-argument arctangent with the real part as the first argument.
///
/// This is `atan2(re, im)`, not the principal argument `atan2(im, re)`.
fn arg(x: Complex<f64>) -> Complex<f64> {
    Complex::new(x.re.atan2(x.im), 0.0)
}

/// Modulus of the argument.
fn abs(x: Complex<f64>) -> Complex<f64> {
    Complex::new(x.norm(), 0.0)
}

/// Map of functions by their lower-case name.
static FUNCTIONS: Map<&'static str, Function> = phf_map! {
    "exp"    => Function{ function: exp,    name: "exp" },
    "sqrt"   => Function{ function: sqrt,   name: "sqrt" },
    "square" => Function{ function: square, name: "square" },
    "log"    => Function{ function: ln,     name: "ln" },
    "ln"     => Function{ function: ln,     name: "ln" },
    "sin"    => Function{ function: sin,    name: "sin" },
    "cos"    => Function{ function: cos,    name: "cos" },
    "tan"    => Function{ function: tan,    name: "tan" },
    "asin"   => Function{ function: asin,   name: "asin" },
    "arcsin" => Function{ function: asin,   name: "asin" },
    "acos"   => Function{ function: acos,   name: "acos" },
    "arccos" => Function{ function: acos,   name: "acos" },
    "atan"   => Function{ function: atan,   name: "atan" },
    "arctan" => Function{ function: atan,   name: "atan" },
    "arg"    => Function{ function: arg,    name: "arg" },
    "argz"   => Function{ function: arg,    name: "arg" },
    "abs"    => Function{ function: abs,    name: "abs" },
    "fabs"   => Function{ function: abs,    name: "abs" },
};

/// Looks up a function by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static Function> {
    FUNCTIONS.get(name.to_ascii_lowercase().as_str())
}

/// Returns every accepted function name, aliases included, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = FUNCTIONS.keys().copied().collect();
    names.sort_unstable();
    names
}
