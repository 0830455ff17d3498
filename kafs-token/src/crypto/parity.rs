use crate::crypto::{KeyConversionError, KeyConversionResult};

/// Packs DES parity-encoded key material down to raw key bytes.
///
/// Triple-DES key material spends one bit per byte on parity, plus a whole
/// trailing byte per 8-byte group that exists only to carry the parity bits
/// of the other seven. Output byte *j* of each group keeps the high 7 bits
/// of input byte *j* and takes its low bit from bit `j + 1` of the group's
/// 8th byte; the 8th byte itself is never emitted.
pub fn compress_parity_bits(input: &[u8]) -> KeyConversionResult<Vec<u8>> {
    if input.len() % 8 != 0 {
        return Err(KeyConversionError::InvalidLength(input.len()));
    }

    let mut out = Vec::with_capacity(input.len() / 8 * 7);

    for block in input.chunks_exact(8) {
        let spare = block[7];
        for (j, byte) in block[..7].iter().enumerate() {
            out.push((byte & 0xFE) | ((spare >> (j + 1)) & 0x01));
        }
    }

    Ok(out)
}
