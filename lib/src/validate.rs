use crate::error::CipherError;

/// Minimum accepted key length.
pub const MIN_KEY_LEN: usize = 3;

/// Checks the key and text constraints shared by both cipher directions.
///
/// The key must be non-empty uppercase A-Z and at least [`MIN_KEY_LEN`]
/// characters long; the text may only contain uppercase A-Z and spaces.
/// Case normalization is the caller's job.
pub fn validate(text: &str, key: &str) -> Result<(), CipherError> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(CipherError::InvalidKeyFormat);
    }
    if key.len() < MIN_KEY_LEN {
        return Err(CipherError::InvalidKeyLength);
    }
    if !text.bytes().all(|b| b.is_ascii_uppercase() || b == b' ') {
        return Err(CipherError::InvalidTextFormat);
    }
    Ok(())
}
