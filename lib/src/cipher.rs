use crate::alphabet::{letter_position, position_letter, ALPHABET_LEN, PADDING_CHAR};
use crate::error::CipherError;
use crate::groups;
use crate::keytable::KeyTable;
use crate::validate::validate;

/// Encrypts `message` with the cascade cipher.
///
/// Spaces are stripped before encryption and are not recoverable from the
/// ciphertext. Each letter's cipher value is the 1-indexed modular sum of
/// its key-table rank and the previous letter's cipher value, so the
/// substitution shifts with every position. With `reverse_groups` the
/// ciphertext is padded with `X` to a multiple of five and each five-letter
/// block is reversed.
pub fn encode(
    message: &str,
    key: &str,
    start_number: i64,
    reverse_groups: bool,
) -> Result<String, CipherError> {
    validate(message, key)?;

    let table = KeyTable::build(key);

    let mut output = String::with_capacity(message.len());
    // Normalizing the seed keeps the sum in range for any start number and
    // does not change the result: the cipher value only depends on the seed
    // modulo 26.
    let mut previous = start_number.rem_euclid(i64::from(ALPHABET_LEN));

    for b in message.bytes().filter(|&b| b != b' ') {
        let letter_value = table
            .rank(b)
            .ok_or(CipherError::UnknownCharacter(b as char))?;

        // 1-indexed modular addition: wraps 26 to 1, never produces 0.
        let cipher_value = (i64::from(letter_value) + previous - 1)
            .rem_euclid(i64::from(ALPHABET_LEN))
            + 1;

        output.push(position_letter(cipher_value as u8) as char);

        // Chain on the cipher output, not the plaintext value.
        previous = cipher_value;
    }

    if reverse_groups {
        output = groups::apply_reversal(&output);
    }

    Ok(output)
}

/// Decrypts `ciphertext` with the cascade cipher.
///
/// `start_number` must match the one used to encrypt. Any trailing run of
/// `X` is stripped from the decoded text whether or not block reversal was
/// used, so a plaintext that really ended in `X` loses it here.
pub fn decode(
    ciphertext: &str,
    key: &str,
    start_number: i64,
    reverse_groups: bool,
) -> Result<String, CipherError> {
    validate(ciphertext, key)?;

    let table = KeyTable::build(key);
    let reverse = table.reverse();

    let input = if reverse_groups {
        groups::undo_reversal(ciphertext)
    } else {
        ciphertext.to_owned()
    };

    let mut output = String::with_capacity(input.len());
    let mut previous = start_number;

    for (i, b) in input.bytes().enumerate() {
        let cipher_value = letter_position(b)
            .map(i64::from)
            .ok_or(CipherError::UndecodableCharacter(i))?;

        // A single wrap is enough once the chain is seeded: every previous
        // cipher value after the first step is in 1..=26. Saturating keeps
        // extreme start numbers on the error path instead of overflowing.
        let mut original_value = cipher_value.saturating_sub(previous);
        if original_value <= 0 {
            original_value += i64::from(ALPHABET_LEN);
        }

        let original = reverse
            .letter(original_value)
            .ok_or(CipherError::UndecodableCharacter(i))?;
        output.push(original as char);

        // Chain on the raw ciphertext value, mirroring the encoder.
        previous = cipher_value;
    }

    let trimmed = output.trim_end_matches(PADDING_CHAR as char).len();
    output.truncate(trimmed);

    Ok(output)
}
