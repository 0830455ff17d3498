use keyutils::{KeyType, Keyring, SpecialKeyring};
use log::debug;

use crate::error::{Error, Result};

/// The kernel key type AFS security tokens are registered under.
struct Rxrpc;

impl KeyType for Rxrpc {
    /// rxrpc keys are described by `<type>@<cell>` strings.
    type Description = str;
    /// The payload is the opaque token blob.
    type Payload = [u8];

    fn name() -> &'static str {
        "rxrpc"
    }
}

/// Picks the keyring the token is installed into.
///
/// Adding a key to the session keyring of a process that has none makes the
/// kernel instantiate a fresh one, which is orphaned the moment this process
/// exits. So when no session keyring distinct from the user-session keyring
/// exists, the token goes to the user-session keyring instead.
pub fn destination() -> Result<Keyring> {
    let user_session = Keyring::attach(SpecialKeyring::UserSession)
        .map_err(|err| Error::Keyring(err.to_string()))?;

    match Keyring::attach(SpecialKeyring::Session) {
        Ok(session) if session != user_session => {
            debug!("installing into the session keyring");
            Ok(session)
        }
        _ => {
            debug!("installing into the user-session keyring");
            Ok(user_session)
        }
    }
}

/// Key description for a cell's token: `afs@<CELL>`, cell upper-cased,
/// prefix untouched.
pub fn token_description(cell: &str) -> String {
    format!("afs@{}", cell.to_ascii_uppercase())
}

/// Registers the token payload under the given description. Re-adding a
/// description the keyring already holds updates the existing key.
pub fn install(keyring: &mut Keyring, description: &str, payload: &[u8]) -> Result<()> {
    keyring
        .add_key::<Rxrpc, _, _>(description, payload)
        .map_err(|err| Error::Keyring(err.to_string()))?;

    Ok(())
}
