use hmac::{Hmac, Mac};
use md5::Md5;

use crate::crypto::{DesKey, KeyConversionError, KeyConversionResult, DES_KEY_SIZE, RXKAD};

type HmacMd5 = Hmac<Md5>;

/// Bit length of the derived key (64), appended to the PRF input big-endian.
const KEY_BIT_LEN: [u8; 4] = [0, 0, 0, 64];

const WEAK_KEYS: [[u8; 8]; 4] = [
    [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01],
    [0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE],
    [0xE0, 0xE0, 0xE0, 0xE0, 0xF1, 0xF1, 0xF1, 0xF1],
    [0x1F, 0x1F, 0x1F, 0x1F, 0x0E, 0x0E, 0x0E, 0x0E],
];

const SEMI_WEAK_KEYS: [[u8; 8]; 12] = [
    [0x01, 0x1F, 0x01, 0x1F, 0x01, 0x0E, 0x01, 0x0E],
    [0x1F, 0x01, 0x1F, 0x01, 0x0E, 0x01, 0x0E, 0x01],
    [0x01, 0xE0, 0x01, 0xE0, 0x01, 0xF1, 0x01, 0xF1],
    [0xE0, 0x01, 0xE0, 0x01, 0xF1, 0x01, 0xF1, 0x01],
    [0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE],
    [0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01, 0xFE, 0x01],
    [0x1F, 0xE0, 0x1F, 0xE0, 0x0E, 0xF1, 0x0E, 0xF1],
    [0xE0, 0x1F, 0xE0, 0x1F, 0xF1, 0x0E, 0xF1, 0x0E],
    [0x1F, 0xFE, 0x1F, 0xFE, 0x0E, 0xFE, 0x0E, 0xFE],
    [0xFE, 0x1F, 0xFE, 0x1F, 0xFE, 0x0E, 0xFE, 0x0E],
    [0xE0, 0xFE, 0xE0, 0xFE, 0xF1, 0xFE, 0xF1, 0xFE],
    [0xFE, 0xE0, 0xFE, 0xE0, 0xFE, 0xF1, 0xFE, 0xF1],
];

/// Derives a usable single-DES key from arbitrary-strength key material.
///
/// HMAC-MD5 is keyed with the full input and iterated over a one-byte
/// counter. Each round macs `counter || "rxkad" || NUL || KEY_BIT_LEN`,
/// takes the first 8 digest bytes, forces odd parity, and returns the first
/// candidate that is not a weak or semi-weak DES key. The counter never
/// wraps: exhausting all 255 values means the PRF is broken.
pub fn derive_session_key(key: &[u8]) -> KeyConversionResult<DesKey> {
    let prf = HmacMd5::new_from_slice(key).expect("HMAC can take key of any size");

    for counter in 1..=u8::MAX {
        let mut prf = prf.clone();
        prf.update(&[counter]);
        prf.update(RXKAD);
        prf.update(&[0]);
        prf.update(&KEY_BIT_LEN);

        let digest = prf.finalize().into_bytes();

        let mut candidate = [0u8; DES_KEY_SIZE];
        candidate.copy_from_slice(&digest[..DES_KEY_SIZE]);
        set_odd_parity(&mut candidate);

        if !is_weak_key(&candidate) {
            return Ok(DesKey::from(candidate));
        }
    }

    Err(KeyConversionError::DerivationExhausted)
}

/// Sets the low bit of every byte so the byte's set-bit count is odd.
fn set_odd_parity(key: &mut [u8; DES_KEY_SIZE]) {
    for byte in key.iter_mut() {
        if (*byte >> 1).count_ones() % 2 == 0 {
            *byte |= 0x01;
        } else {
            *byte &= 0xFE;
        }
    }
}

fn is_weak_key(key: &[u8; DES_KEY_SIZE]) -> bool {
    WEAK_KEYS.iter().chain(SEMI_WEAK_KEYS.iter()).any(|weak| weak == key)
}
