use std::io::{self, Read, Write};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

use crate::constants::rxkad;
use crate::crypto::{DesKey, DES_KEY_SIZE};

/// Size of the fixed token header on the wire.
pub const TOKEN_HEADER_LEN: usize = 24;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("ticket length {0} does not fit the 16-bit ticket_length field")]
    TicketTooLarge(usize),
}

/// Version 1 rxrpc security-key payload, as the kernel defines it:
///
/// ```not_rust
/// struct rxrpc_key_sec2_v1 {
///         uint32_t        kver;           /* key payload interface version */
///         uint16_t        security_index; /* RxRPC header security index */
///         uint16_t        ticket_length;  /* length of ticket[] */
///         uint32_t        expiry;         /* time at which expires */
///         uint32_t        kvno;           /* key version number */
///         uint8_t         session_key[8]; /* DES session key */
///         uint8_t         ticket[0];      /* the encrypted ticket */
/// };
/// ```
///
/// All multi-byte fields are host-endian. The payload never crosses a
/// machine boundary: it goes straight into the local kernel via
/// `add_key(2)`, which reads it with the same byte order it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RxkadToken {
    pub kver: u32,
    pub security_index: u16,
    pub expiry: u32,
    pub kvno: u32,
    pub session_key: DesKey,
    pub ticket: Vec<u8>,
}

impl RxkadToken {
    /// Assembles a token around a converted session key and the raw service
    /// ticket. The ticket must fit the header's 16-bit length field.
    pub fn new(
        session_key: DesKey,
        ticket: Vec<u8>,
        expiry: u32,
        kvno: u32,
    ) -> Result<Self, TokenError> {
        if ticket.len() > u16::MAX as usize {
            return Err(TokenError::TicketTooLarge(ticket.len()));
        }

        Ok(Self {
            kver: rxkad::KEY_INTERFACE_VERSION,
            security_index: rxkad::SECURITY_INDEX,
            expiry,
            kvno,
            session_key,
            ticket,
        })
    }

    /// Total payload size: the 24-byte header plus the trailing ticket.
    pub fn wire_len(&self) -> usize {
        TOKEN_HEADER_LEN + self.ticket.len()
    }

    pub fn encode(&self, mut to: impl Write) -> io::Result<()> {
        to.write_u32::<NativeEndian>(self.kver)?;
        to.write_u16::<NativeEndian>(self.security_index)?;
        to.write_u16::<NativeEndian>(self.ticket.len() as u16)?;
        to.write_u32::<NativeEndian>(self.expiry)?;
        to.write_u32::<NativeEndian>(self.kvno)?;
        to.write_all(self.session_key.as_ref())?;
        to.write_all(&self.ticket)?;

        Ok(())
    }

    pub fn decode(mut from: impl Read) -> io::Result<Self> {
        let kver = from.read_u32::<NativeEndian>()?;
        let security_index = from.read_u16::<NativeEndian>()?;
        let ticket_length = from.read_u16::<NativeEndian>()?;
        let expiry = from.read_u32::<NativeEndian>()?;
        let kvno = from.read_u32::<NativeEndian>()?;

        let mut session_key = [0u8; DES_KEY_SIZE];
        from.read_exact(&mut session_key)?;

        let mut ticket = vec![0u8; usize::from(ticket_length)];
        from.read_exact(&mut ticket)?;

        Ok(Self {
            kver,
            security_index,
            expiry,
            kvno,
            session_key: DesKey::from(session_key),
            ticket,
        })
    }
}
