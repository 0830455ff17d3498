use crate::constants::etypes;
use crate::crypto::key_derivation::derive_session_key;
use crate::crypto::parity::compress_parity_bits;
use crate::crypto::{DesKey, KeyConversionError, KeyConversionResult, DES3_KEY_SIZE, DES_KEY_SIZE};

/// How a given enctype's session key becomes a single-DES key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyClass {
    /// The classic single-DES enctypes already carry a usable key.
    SingleDes,
    /// Enctypes with no defined downgrade path.
    Unsupported,
    /// Triple-DES keys shed their parity bits before derivation.
    TripleDes,
    /// Every other assigned enctype goes through the rxkad derivation.
    Derived,
}

fn classify(enctype: i32) -> KeyClass {
    match enctype {
        etypes::DES_CBC_CRC | etypes::DES_CBC_MD4 | etypes::DES_CBC_MD5 => KeyClass::SingleDes,
        etypes::NULL
        | etypes::DES_CBC_RAW
        | etypes::DES3_CBC_RAW
        | etypes::DES_HMAC_SHA1
        | etypes::DSA_SHA1_CMS
        | etypes::MD5_RSA_CMS
        | etypes::SHA1_RSA_CMS
        | etypes::RC2_CBC_ENV
        | etypes::RSA_ENV
        | etypes::RSA_ES_OAEP_ENV
        | etypes::DES3_CBC_ENV => KeyClass::Unsupported,
        etypes::DES3_CBC_MD5 | etypes::DES3_CBC_SHA1 | etypes::DES3_CBC_SHA1_KD => {
            KeyClass::TripleDes
        }
        enctype if enctype < 0 => KeyClass::Unsupported,
        _ => KeyClass::Derived,
    }
}

/// Converts a Kerberos session key of the given enctype into the single-DES
/// key rxkad requires.
pub fn convert_key(enctype: i32, key: &[u8]) -> KeyConversionResult<DesKey> {
    match classify(enctype) {
        KeyClass::SingleDes => {
            if key.len() != DES_KEY_SIZE {
                return Err(KeyConversionError::InvalidKeyLength(enctype, key.len()));
            }

            // Taken verbatim: this path performs no parity or weak-key
            // fixup, unlike every derived path.
            let mut out = [0u8; DES_KEY_SIZE];
            out.copy_from_slice(key);
            Ok(DesKey::from(out))
        }
        KeyClass::Unsupported => Err(KeyConversionError::UnsupportedEncType(enctype)),
        KeyClass::TripleDes => {
            if key.len() > DES3_KEY_SIZE {
                return Err(KeyConversionError::InvalidKeyLength(enctype, key.len()));
            }

            let packed = compress_parity_bits(key)?;
            derive_from(enctype, &packed)
        }
        KeyClass::Derived => derive_from(enctype, key),
    }
}

fn derive_from(enctype: i32, key: &[u8]) -> KeyConversionResult<DesKey> {
    if key.len() < 7 {
        return Err(KeyConversionError::InvalidKeyLength(enctype, key.len()));
    }

    derive_session_key(key)
}

#[cfg(test)]
mod tests {
    use super::convert_key;
    use crate::constants::etypes;
    use crate::crypto::key_derivation::derive_session_key;
    use crate::crypto::parity::compress_parity_bits;
    use crate::crypto::KeyConversionError;

    const REJECTED: [i32; 11] = [
        etypes::NULL,
        etypes::DES_CBC_RAW,
        etypes::DES3_CBC_RAW,
        etypes::DES_HMAC_SHA1,
        etypes::DSA_SHA1_CMS,
        etypes::MD5_RSA_CMS,
        etypes::SHA1_RSA_CMS,
        etypes::RC2_CBC_ENV,
        etypes::RSA_ENV,
        etypes::RSA_ES_OAEP_ENV,
        etypes::DES3_CBC_ENV,
    ];

    #[test]
    fn direct_des_key_passes_through() {
        let key = [10, 20, 30, 40, 50, 60, 70, 80];

        for enctype in [etypes::DES_CBC_CRC, etypes::DES_CBC_MD4, etypes::DES_CBC_MD5] {
            let out = convert_key(enctype, &key).unwrap();
            assert_eq!(&key, out.as_bytes());
        }
    }

    #[test]
    fn direct_des_key_is_not_normalized() {
        // A weak key with even-parity bytes survives the direct path
        // untouched; only derived keys get parity and weak-key treatment.
        let weak = [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01];
        let out = convert_key(etypes::DES_CBC_MD5, &weak).unwrap();
        assert_eq!(&weak, out.as_bytes());

        let even_parity = [0x00, 0x03, 0x05, 0x06, 0x09, 0x0A, 0x0C, 0x0F];
        let out = convert_key(etypes::DES_CBC_CRC, &even_parity).unwrap();
        assert_eq!(&even_parity, out.as_bytes());
    }

    #[test]
    fn direct_des_requires_exactly_eight_bytes() {
        assert_eq!(
            Err(KeyConversionError::InvalidKeyLength(etypes::DES_CBC_MD5, 7)),
            convert_key(etypes::DES_CBC_MD5, &[0; 7])
        );
        assert_eq!(
            Err(KeyConversionError::InvalidKeyLength(etypes::DES_CBC_CRC, 9)),
            convert_key(etypes::DES_CBC_CRC, &[0; 9])
        );
    }

    #[test]
    fn rejected_enctypes_fail_regardless_of_key() {
        for enctype in REJECTED {
            assert_eq!(
                Err(KeyConversionError::UnsupportedEncType(enctype)),
                convert_key(enctype, &[0x42; 8])
            );
            assert_eq!(
                Err(KeyConversionError::UnsupportedEncType(enctype)),
                convert_key(enctype, &[])
            );
        }
    }

    #[test]
    fn negative_enctypes_are_unsupported() {
        for enctype in [-1, -133, i32::MIN] {
            assert_eq!(
                Err(KeyConversionError::UnsupportedEncType(enctype)),
                convert_key(enctype, &[0x42; 16])
            );
        }
    }

    #[test]
    fn triple_des_key_is_compressed_then_derived() {
        let key: Vec<u8> = (1..=24).collect();

        for enctype in [etypes::DES3_CBC_MD5, etypes::DES3_CBC_SHA1, etypes::DES3_CBC_SHA1_KD] {
            let expected = derive_session_key(&compress_parity_bits(&key).unwrap()).unwrap();
            assert_eq!(expected, convert_key(enctype, &key).unwrap());
        }
    }

    #[test]
    fn triple_des_key_over_24_bytes_is_rejected() {
        assert_eq!(
            Err(KeyConversionError::InvalidKeyLength(etypes::DES3_CBC_SHA1_KD, 32)),
            convert_key(etypes::DES3_CBC_SHA1_KD, &[0; 32])
        );
    }

    #[test]
    fn triple_des_key_must_be_parity_encoded_blocks() {
        // 20 bytes is within the 24-byte bound but not 8-byte aligned
        assert_eq!(
            Err(KeyConversionError::InvalidLength(20)),
            convert_key(etypes::DES3_CBC_SHA1_KD, &[0; 20])
        );
    }

    #[test]
    fn modern_enctypes_take_the_derived_path() {
        let aes_key = [0x5C; 32];
        assert_eq!(
            derive_session_key(&aes_key).unwrap(),
            convert_key(etypes::AES256_CTS_HMAC_SHA1_96, &aes_key).unwrap()
        );

        let rc4_key = [0x33; 16];
        assert_eq!(
            derive_session_key(&rc4_key).unwrap(),
            convert_key(etypes::RC4_HMAC, &rc4_key).unwrap()
        );
    }

    #[test]
    fn derived_path_requires_at_least_seven_bytes() {
        assert_eq!(
            Err(KeyConversionError::InvalidKeyLength(etypes::AES128_CTS_HMAC_SHA1_96, 6)),
            convert_key(etypes::AES128_CTS_HMAC_SHA1_96, &[0; 6])
        );
    }
}
