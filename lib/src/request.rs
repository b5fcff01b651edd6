use serde::{Deserialize, Serialize};

use crate::cipher;
use crate::error::CipherError;

/// Cipher direction selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// A single cipher operation as carried over the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherRequest {
    pub text: String,
    pub key: String,
    pub start_number: i64,
    #[serde(default)]
    pub reverse_groups: bool,
    pub operation: Operation,
}

/// Successful result of a cipher operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResponse {
    pub result: String,
}

/// Runs one cipher operation. Validation and invariant errors surface
/// unchanged; the transport layer decides how to render them.
pub fn run(request: &CipherRequest) -> Result<CipherResponse, CipherError> {
    tracing::debug!(
        operation = ?request.operation,
        reverse_groups = request.reverse_groups,
        "running cipher operation"
    );

    let result = match request.operation {
        Operation::Encrypt => cipher::encode(
            &request.text,
            &request.key,
            request.start_number,
            request.reverse_groups,
        )?,
        Operation::Decrypt => cipher::decode(
            &request.text,
            &request.key,
            request.start_number,
            request.reverse_groups,
        )?,
    };

    Ok(CipherResponse { result })
}
