pub(crate) const ALPHABET_LEN: u8 = 26;

pub(crate) const PADDING_CHAR: u8 = b'X';
pub(crate) const GROUP_LEN: usize = 5;

/// Returns the 1-based position of `b` in A..Z, or `None` for any other byte.
pub(crate) const fn letter_position(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A' + 1),
        _ => None,
    }
}

/// Maps a 1-based position back to its letter. The caller guarantees the
/// position is in 1..=26.
pub(crate) fn position_letter(position: u8) -> u8 {
    debug_assert!(position >= 1 && position <= ALPHABET_LEN);
    b'A' + position - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_position_covers_the_alphabet() {
        assert_eq!(letter_position(b'A'), Some(1));
        assert_eq!(letter_position(b'Z'), Some(26));
        assert_eq!(letter_position(b' '), None);
        assert_eq!(letter_position(b'a'), None);
        assert_eq!(letter_position(b'1'), None);
    }

    #[test]
    fn position_letter_is_the_inverse() {
        for b in b'A'..=b'Z' {
            let position = letter_position(b).unwrap();
            assert_eq!(position_letter(position), b);
        }
    }
}
