//! Cascade cipher: a keyed, chained substitution cipher over A-Z with an
//! optional five-letter block reversal layer.
//!
//! This is a classical construction and is not cryptographically secure.

mod alphabet;

pub mod cipher;
pub mod error;
pub mod groups;
pub mod keytable;
pub mod request;
pub mod store;
pub mod validate;

pub use cipher::{decode, encode};
pub use error::CipherError;
