use crate::alphabet::{GROUP_LEN, PADDING_CHAR};

/// Strips spaces, right-pads with `X` to a multiple of five, then reverses
/// the characters of each five-letter block. The output length is always a
/// multiple of five.
pub fn apply_reversal(text: &str) -> String {
    let mut cleaned: Vec<u8> = text.bytes().filter(|&b| b != b' ').collect();

    let remainder = cleaned.len() % GROUP_LEN;
    if remainder != 0 {
        cleaned.resize(cleaned.len() + GROUP_LEN - remainder, PADDING_CHAR);
    }

    let mut output = String::with_capacity(cleaned.len());
    for group in cleaned.chunks(GROUP_LEN) {
        for &b in group.iter().rev() {
            output.push(b as char);
        }
    }
    output
}

/// Reverses each five-letter block back. A trailing block shorter than five
/// is reversed as-is; it signals a foreign ciphertext but is accepted.
/// Padding is left in place for the decoder to strip.
pub fn undo_reversal(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for group in text.as_bytes().chunks(GROUP_LEN) {
        for &b in group.iter().rev() {
            output.push(b as char);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_reversal_pads_and_reverses() {
        assert_eq!(apply_reversal("ABCDE"), "EDCBA");
        assert_eq!(apply_reversal("ABCDEF"), "EDCBAXXXXF");
        assert_eq!(apply_reversal("AB"), "XXXBA");
        assert_eq!(apply_reversal(""), "");
    }

    #[test]
    fn apply_reversal_strips_spaces_first() {
        assert_eq!(apply_reversal("AB CDE"), "EDCBA");
        assert_eq!(apply_reversal("A B"), "XXXBA");
    }

    #[test]
    fn output_length_is_a_multiple_of_five() {
        for text in ["", "A", "ABCD", "ABCDE", "ABCDEFGHIJK"] {
            assert_eq!(apply_reversal(text).len() % GROUP_LEN, 0);
        }
    }

    #[test]
    fn undo_reversal_restores_the_padded_form() {
        assert_eq!(undo_reversal(&apply_reversal("ABCDEF")), "ABCDEFXXXX");
        assert_eq!(undo_reversal(&apply_reversal("HELLO")), "HELLO");
    }

    #[test]
    fn undo_reversal_accepts_a_short_last_block() {
        assert_eq!(undo_reversal("EDCBAGF"), "ABCDEFG");
        assert_eq!(undo_reversal("AB"), "BA");
    }

    #[test]
    fn undo_reversal_does_not_strip_padding() {
        assert_eq!(undo_reversal("XXXBA"), "ABXXX");
    }
}
