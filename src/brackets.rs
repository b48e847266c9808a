//! # brackets.rs
//!
//! Family-exact bracket matching for `()`, `[]` and `{}`.
//!
//! The normalizer folds every bracket family into parentheses, so it cannot
//! tell `(2+3]` from `(2+3)`. This check can.

/// Returns the opener matching a closing bracket.
fn opener_of(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

/// Checks that every bracket in `text` is closed by one of its own family,
/// in nesting order. Other characters are ignored.
///
/// # Examples
///
/// ```
/// use complexpr::brackets_balanced;
///
/// assert!(brackets_balanced("(2+[3])"));
/// assert!(!brackets_balanced("(2+3]"));
/// ```
pub fn brackets_balanced(text: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();

    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            _ => {
                if let Some(opener) = opener_of(ch) {
                    if stack.pop() != Some(opener) {
                        return false;
                    }
                }
            },
        }
    }

    stack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced() {
        assert!(brackets_balanced(""));
        assert!(brackets_balanced("1+2"));
        assert!(brackets_balanced("(2+[3])"));
        assert!(brackets_balanced("{[()]}()"));
    }

    #[test]
    fn test_family_mismatch() {
        assert!(!brackets_balanced("(2+3]"));
        assert!(!brackets_balanced("{1)"));
        assert!(!brackets_balanced("[(])"));
    }

    #[test]
    fn test_unpaired() {
        assert!(!brackets_balanced("2+3)"));
        assert!(!brackets_balanced("((1)"));
        assert!(!brackets_balanced("]"));
    }
}
