//= [Assigned Numbers](https://datatracker.ietf.org/doc/html/rfc3961#section-8) =//
pub mod etypes {
    pub const NULL: i32 = 0;
    pub const DES_CBC_CRC: i32 = 1;
    pub const DES_CBC_MD4: i32 = 2;
    pub const DES_CBC_MD5: i32 = 3;
    pub const DES_CBC_RAW: i32 = 4;
    pub const DES3_CBC_MD5: i32 = 5;
    pub const DES3_CBC_RAW: i32 = 6;
    pub const DES3_CBC_SHA1: i32 = 7;
    pub const DES_HMAC_SHA1: i32 = 8;
    pub const DES3_CBC_SHA1_KD: i32 = 16;
    pub const AES128_CTS_HMAC_SHA1_96: i32 = 17;
    pub const AES256_CTS_HMAC_SHA1_96: i32 = 18;
    pub const RC4_HMAC: i32 = 23;

    //= [PKINIT Algorithm Identifiers](https://datatracker.ietf.org/doc/html/rfc4556#section-3.1.3) =//
    pub const DSA_SHA1_CMS: i32 = 9;
    pub const MD5_RSA_CMS: i32 = 10;
    pub const SHA1_RSA_CMS: i32 = 11;
    pub const RC2_CBC_ENV: i32 = 12;
    pub const RSA_ENV: i32 = 13;
    pub const RSA_ES_OAEP_ENV: i32 = 14;
    pub const DES3_CBC_ENV: i32 = 15;
}

//= [AFS-3 rxkad and the kernel rxrpc key format](https://www.kernel.org/doc/html/latest/networking/rxrpc.html) =//
pub mod rxkad {
    /// Version of the `rxrpc` key payload interface.
    pub const KEY_INTERFACE_VERSION: u32 = 1;

    /// RxRPC header security index claimed by rxkad.
    pub const SECURITY_INDEX: u16 = 2;

    /// Ticket-type discriminator for Kerberos v5 service tickets.
    pub const TKT_TYPE_KERBEROS_V5: u32 = 256;
}
