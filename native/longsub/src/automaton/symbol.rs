//! Label types for automaton edges.

use crate::error::AutomatonError;

/// A label identifier: `0..26` for the letters `a..=z`, [`EPSILON`] for silent moves.
pub type Label = u8;

/// Number of distinct labels (26 letters plus epsilon).
pub const NUM_LABELS: usize = 27;

/// Label id reserved for epsilon (silent) transitions.
pub const EPSILON: Label = 26;

/// Character used for epsilon edges in textual input.
pub const EPSILON_CHAR: char = '$';

/// Check if a label is the epsilon label.
#[inline]
pub fn is_epsilon(label: Label) -> bool {
    label == EPSILON
}

/// Convert an edge label character into its id.
///
/// Only `a..=z` and [`EPSILON_CHAR`] are valid. Uppercase letters are rejected
/// like any other character.
pub fn label_of(character: char) -> Result<Label, AutomatonError> {
    match character {
        EPSILON_CHAR => Ok(EPSILON),
        'a'..='z' => Ok(character as u8 - b'a'),
        _ => Err(AutomatonError::InvalidLabel { label: character }),
    }
}

/// Label id of a byte of the target word, if it can ever match an edge.
///
/// The epsilon marker never matches input, so it maps to `None` as well.
#[inline]
pub fn letter_of_byte(byte: u8) -> Option<Label> {
    byte.is_ascii_lowercase().then(|| byte - b'a')
}

/// The character a label id stands for.
pub fn label_char(label: Label) -> char {
    if is_epsilon(label) {
        EPSILON_CHAR
    } else {
        debug_assert!((label as usize) < NUM_LABELS);
        (b'a' + label) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon() {
        assert!(is_epsilon(EPSILON));
        assert!(!is_epsilon(0));
        assert!(!is_epsilon(25));
        assert_eq!(label_of('$'), Ok(EPSILON));
    }

    #[test]
    fn test_letters() {
        assert_eq!(label_of('a'), Ok(0));
        assert_eq!(label_of('z'), Ok(25));
        assert_eq!(label_char(label_of('q').unwrap()), 'q');
        assert_eq!(label_char(EPSILON), '$');
    }

    #[test]
    fn test_invalid_labels() {
        for c in ['A', 'Z', '0', ' ', '#', 'é'] {
            assert_eq!(label_of(c), Err(AutomatonError::InvalidLabel { label: c }));
        }
    }

    #[test]
    fn test_letter_of_byte() {
        assert_eq!(letter_of_byte(b'b'), Some(1));
        assert_eq!(letter_of_byte(b'B'), None);
        assert_eq!(letter_of_byte(b'$'), None);
        assert_eq!(letter_of_byte(0xC3), None);
    }
}
