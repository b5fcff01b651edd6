use crate::alphabet::ALPHABET_LEN;

/// Bijective letter-to-rank table derived from a cipher key.
///
/// Distinct letters of the key take ranks 1, 2, 3, ... in order of first
/// appearance; the remaining alphabet letters take the remaining ranks in
/// A-to-Z order. Every rank in 1..=26 is used exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    // ranks[i] holds the rank of letter b'A' + i, always in 1..=26.
    ranks: [u8; ALPHABET_LEN as usize],
}

impl KeyTable {
    /// Builds the table for `key`. Bytes outside A-Z are ignored; validated
    /// keys never contain any.
    pub fn build(key: &str) -> Self {
        let mut ranks = [0u8; ALPHABET_LEN as usize];
        let mut next_rank = 1u8;

        for &b in key.as_bytes() {
            if !b.is_ascii_uppercase() {
                continue;
            }
            let slot = &mut ranks[(b - b'A') as usize];
            if *slot == 0 {
                *slot = next_rank;
                next_rank += 1;
            }
        }

        for slot in &mut ranks {
            if *slot == 0 {
                *slot = next_rank;
                next_rank += 1;
            }
        }

        Self { ranks }
    }

    /// Rank of `letter`, or `None` if it is not an uppercase A-Z byte.
    pub fn rank(&self, letter: u8) -> Option<u8> {
        if letter.is_ascii_uppercase() {
            Some(self.ranks[(letter - b'A') as usize])
        } else {
            None
        }
    }

    /// Builds the inverse rank-to-letter table.
    pub fn reverse(&self) -> ReverseKeyTable {
        let mut letters = [0u8; ALPHABET_LEN as usize];
        for (i, &rank) in self.ranks.iter().enumerate() {
            letters[(rank - 1) as usize] = b'A' + i as u8;
        }
        ReverseKeyTable { letters }
    }
}

/// Inverse of a [`KeyTable`]: maps ranks 1..=26 back to letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseKeyTable {
    letters: [u8; ALPHABET_LEN as usize],
}

impl ReverseKeyTable {
    /// Letter holding `rank`, or `None` if the rank is outside 1..=26.
    pub fn letter(&self, rank: i64) -> Option<u8> {
        if (1..=i64::from(ALPHABET_LEN)).contains(&rank) {
            Some(self.letters[(rank - 1) as usize])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_letters_rank_first() {
        let table = KeyTable::build("KOD");

        assert_eq!(table.rank(b'K'), Some(1));
        assert_eq!(table.rank(b'O'), Some(2));
        assert_eq!(table.rank(b'D'), Some(3));
        // Remaining letters fill ranks 4..=26 in A-to-Z order.
        assert_eq!(table.rank(b'A'), Some(4));
        assert_eq!(table.rank(b'B'), Some(5));
        assert_eq!(table.rank(b'E'), Some(7));
        assert_eq!(table.rank(b'T'), Some(20));
        assert_eq!(table.rank(b'Z'), Some(26));
    }

    #[test]
    fn repeated_key_letters_keep_their_first_rank() {
        let table = KeyTable::build("BANANA");

        assert_eq!(table.rank(b'B'), Some(1));
        assert_eq!(table.rank(b'A'), Some(2));
        assert_eq!(table.rank(b'N'), Some(3));
        assert_eq!(table.rank(b'C'), Some(4));
    }

    #[test]
    fn table_is_a_bijection() {
        for key in ["KOD", "BANANA", "ZEBRA", "AAA"] {
            let table = KeyTable::build(key);
            let mut seen = [false; ALPHABET_LEN as usize];
            for letter in b'A'..=b'Z' {
                let rank = table.rank(letter).unwrap();
                assert!(rank >= 1 && rank <= ALPHABET_LEN, "key {key}");
                assert!(!seen[(rank - 1) as usize], "key {key} reuses rank {rank}");
                seen[(rank - 1) as usize] = true;
            }
        }
    }

    #[test]
    fn reverse_inverts_the_table() {
        let table = KeyTable::build("KOD");
        let reverse = table.reverse();

        for letter in b'A'..=b'Z' {
            let rank = table.rank(letter).unwrap();
            assert_eq!(reverse.letter(i64::from(rank)), Some(letter));
        }
    }

    #[test]
    fn reverse_rejects_out_of_range_ranks() {
        let reverse = KeyTable::build("KOD").reverse();

        assert_eq!(reverse.letter(0), None);
        assert_eq!(reverse.letter(27), None);
        assert_eq!(reverse.letter(-5), None);
    }

    #[test]
    fn rank_of_non_letter_is_none() {
        let table = KeyTable::build("KOD");

        assert_eq!(table.rank(b' '), None);
        assert_eq!(table.rank(b'k'), None);
    }
}
