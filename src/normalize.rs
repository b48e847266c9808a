//! # normalize.rs
//!
//! Rewrites raw expression text into the canonical form the tokenizer reads.
//!
//! The rewrite happens in passes over the character sequence:
//!
//! 1. alias substitution (`[` `{` to `(`, `]` `}` to `)`, `I` `J` `j` to `i`)
//!    and whitespace removal,
//! 2. imaginary-unit classification, turning every `i` that stands on its
//!    own into [`IMAGINARY_MARKER`],
//! 3. unary signs and implicit multiplication.
//!
//! Normalization never fails. Anything it does not understand is passed
//! through untouched and left for the converter to reject.

use crate::token::{is_operator, IMAGINARY_MARKER, IMAGINARY_UNIT, VARIABLE_MARKER};

/// Maps bracket and imaginary-unit aliases to their canonical spelling.
fn substitute_alias(ch: char) -> char {
    match ch {
        '[' | '{' => '(',
        ']' | '}' => ')',
        'I' | 'J' | 'j' => IMAGINARY_UNIT,
        _ => ch,
    }
}

/// Returns whether the `i` at `idx` is the imaginary unit rather than part
/// of an identifier.
///
/// It must follow the start of text, an operator or a digit, and be followed
/// by the end of text or an operator.
fn is_imaginary_unit(chars: &[char], idx: usize) -> bool {
    let prev_ok = idx.checked_sub(1)
        .map_or(true, |prev| is_operator(chars[prev]) || chars[prev].is_ascii_digit());
    let next_ok = chars.get(idx + 1)
        .map_or(true, |&next| is_operator(next));

    chars[idx] == IMAGINARY_UNIT && prev_ok && next_ok
}

/// Replaces every standalone imaginary unit with [`IMAGINARY_MARKER`].
fn classify_imaginary(chars: &[char]) -> Vec<char> {
    (0..chars.len())
        .map(|idx| if is_imaginary_unit(chars, idx) { IMAGINARY_MARKER } else { chars[idx] })
        .collect()
}

/// Returns the end of the exponent that follows a `<digit>i` product.
///
/// `start` points at the `^`. The run stops at the first `+-*/` outside any
/// parenthesis, or at a `)` closing a group opened before `start`.
fn exponent_end(chars: &[char], start: usize) -> usize {
    let mut depth = 0usize;
    let mut end = start;

    while let Some(&ch) = chars.get(end) {
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => break,
            ')' => depth -= 1,
            '+' | '-' | '*' | '/' if depth == 0 => break,
            _ => (),
        }
        end += 1;
    }

    end
}

/// Inserts implicit operands and operators into `out`.
///
/// `pending` holds the ends of open `*(@^...)` groups, innermost last.
fn rewrite(chars: &[char], out: &mut String) {
    let mut pending: Vec<usize> = Vec::new();
    let mut idx = 0;

    loop {
        while pending.last() == Some(&idx) {
            pending.pop();
            out.push(')');
        }
        let Some(&ch) = chars.get(idx) else { break };
        let prev = idx.checked_sub(1).map(|p| chars[p]);

        match ch {
            '+' | '-' if matches!(prev, None | Some('(')) => out.push('0'),
            '(' if prev.is_some_and(|c| c.is_ascii_digit()) => out.push('*'),
            VARIABLE_MARKER if prev.is_some_and(|c| !is_operator(c)) => out.push('*'),
            IMAGINARY_MARKER => match prev {
                Some(')') => out.push('*'),
                Some(c) if c.is_ascii_digit() => {
                    out.push('*');
                    if chars.get(idx + 1) == Some(&'^') {
                        // 2i^2 means 2*(i^2), so the power must not reach the digit
                        let limit = pending.last().copied().unwrap_or(chars.len());
                        pending.push(exponent_end(&chars[..limit], idx + 1));
                        out.push('(');
                    }
                },
                _ => (),
            },
            _ => (),
        }

        out.push(ch);
        idx += 1;
    }
}

/// Normalizes raw expression text.
///
/// # Examples
///
/// ```
/// use complexpr::normalize::normalize;
///
/// assert_eq!(normalize("-2 (3 + 4i)"), "0-2*(3+4*@)");
/// assert_eq!(normalize("[1 + $x]"), "(1+$x)");
/// ```
pub fn normalize(input: &str) -> String {
    let chars: Vec<char> = input.chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .map(substitute_alias)
        .collect();
    let chars = classify_imaginary(&chars);

    let mut out = String::with_capacity(chars.len() * 2);
    rewrite(&chars, &mut out);
    out
}
