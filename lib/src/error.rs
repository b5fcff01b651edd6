/// Errors produced by cascade cipher operations.
///
/// The first three variants are caller-input problems detected before any
/// cipher arithmetic. The last two guard internal invariants and are not
/// reachable for input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    #[error("key must contain only uppercase letters A-Z")]
    InvalidKeyFormat,
    #[error("key must be at least 3 characters long")]
    InvalidKeyLength,
    #[error("text must contain only uppercase letters A-Z and spaces")]
    InvalidTextFormat,
    #[error("invalid character: {0}")]
    UnknownCharacter(char),
    #[error("cannot decrypt character at position {0}")]
    UndecodableCharacter(usize),
}

impl CipherError {
    /// True for input errors the caller can fix and resubmit, as opposed to
    /// invariant violations that indicate a construction bug.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyFormat | Self::InvalidKeyLength | Self::InvalidTextFormat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_classified() {
        assert!(CipherError::InvalidKeyFormat.is_validation());
        assert!(CipherError::InvalidKeyLength.is_validation());
        assert!(CipherError::InvalidTextFormat.is_validation());
        assert!(!CipherError::UnknownCharacter('a').is_validation());
        assert!(!CipherError::UndecodableCharacter(0).is_validation());
    }

    #[test]
    fn display_matches_the_operation_contract() {
        assert_eq!(
            CipherError::InvalidKeyLength.to_string(),
            "key must be at least 3 characters long"
        );
        assert_eq!(
            CipherError::UndecodableCharacter(4).to_string(),
            "cannot decrypt character at position 4"
        );
    }
}
