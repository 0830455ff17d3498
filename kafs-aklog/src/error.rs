use std::io;

use kafs_token::{KeyConversionError, TokenError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read the credential cache '{path}': {source}")]
    CacheRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("'{0}' is not a recognizable credential cache")]
    CacheFormat(String),

    #[error("credential cache type '{0}' is not supported, only FILE caches are")]
    UnsupportedCacheType(String),

    #[error(
        "no ticket for afs/{cell}@{realm} or afs@{realm} in the credential cache; \
         obtain one with kinit/kvno first"
    )]
    NoServiceTicket { cell: String, realm: String },

    #[error("session key could not be converted to a suitable DES key: {0}")]
    KeyConversion(#[from] KeyConversionError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("assembling the token payload failed: {0}")]
    Io(#[from] io::Error),

    #[error("inserting the rxrpc key into the keyring failed: {0}")]
    Keyring(String),
}
