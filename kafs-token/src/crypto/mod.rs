pub mod conversion;
pub mod key_derivation;
pub mod parity;

use thiserror::Error;

pub const DES_KEY_SIZE: usize = 8;
pub const DES3_KEY_SIZE: usize = 24;

/// The rxkad key derivation label. It is fed to the PRF together with its
/// terminating NUL.
pub const RXKAD: &[u8; 5] = b"rxkad";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyConversionError {
    #[error("key material length {0} is not a multiple of 8")]
    InvalidLength(usize),

    #[error("no conversion to a DES key is defined for enctype {0}")]
    UnsupportedEncType(i32),

    #[error("invalid session key length {1} for enctype {0}")]
    InvalidKeyLength(i32, usize),

    #[error("no usable DES key found after 255 derivation rounds")]
    DerivationExhausted,
}

pub type KeyConversionResult<T> = Result<T, KeyConversionError>;

/// An 8-byte single-DES session key.
///
/// Keys produced by the derivation path carry odd parity on every byte and
/// are none of the weak or semi-weak DES keys. Keys taken verbatim from a
/// single-DES credential carry whatever the KDC issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesKey([u8; DES_KEY_SIZE]);

impl DesKey {
    pub fn as_bytes(&self) -> &[u8; DES_KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; DES_KEY_SIZE]> for DesKey {
    fn from(bytes: [u8; DES_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for DesKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
