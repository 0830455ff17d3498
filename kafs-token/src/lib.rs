//! Kerberos-to-rxkad session key conversion and token packaging for kAFS.
//!
//! The in-kernel AFS client authenticates its RPCs with the legacy rxkad
//! security class, which only understands single-DES session keys. This
//! crate downgrades an arbitrary-strength Kerberos session key to the
//! 8-byte DES key rxkad requires and lays the result out, together with
//! the raw service ticket, as the `rxrpc`-type key payload the kernel
//! consumes through `add_key(2)`.

pub mod constants;
pub mod crypto;
pub mod token;

pub use crypto::conversion::convert_key;
pub use crypto::{DesKey, KeyConversionError, KeyConversionResult};
pub use token::{RxkadToken, TokenError};
