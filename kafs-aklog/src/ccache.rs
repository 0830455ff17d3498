use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use kerberos_ccache::{CCache, Credential, Principal};
use log::debug;

use crate::config::KRB5_CCNAME_ENV;
use crate::error::{Error, Result};

/// Everything the token builder needs out of one cache credential.
pub struct ServiceCredential {
    pub enctype: i32,
    pub session_key: Vec<u8>,
    pub ticket: Vec<u8>,
    pub endtime: u32,
}

/// Resolves the credential cache path the way libkrb5 resolves file caches:
/// `KRB5CCNAME` first (with an optional `FILE:` prefix), then the
/// conventional per-uid default.
pub fn default_ccache_path() -> Result<PathBuf> {
    match env::var(KRB5_CCNAME_ENV) {
        Ok(name) => parse_ccname(&name),
        Err(_) => {
            let uid = unsafe { libc::getuid() };
            Ok(PathBuf::from(format!("/tmp/krb5cc_{}", uid)))
        }
    }
}

fn parse_ccname(name: &str) -> Result<PathBuf> {
    match name.split_once(':') {
        Some(("FILE", path)) => Ok(PathBuf::from(path)),
        // a colon inside a bare path is not a cache-type prefix
        Some((cache_type, _)) if !cache_type.contains('/') => {
            Err(Error::UnsupportedCacheType(cache_type.to_owned()))
        }
        _ => Ok(PathBuf::from(name)),
    }
}

/// Finds the service credential for the cell in the cache.
///
/// The cell-qualified principal `afs/<cell>` is preferred; the older
/// cell-wide `afs` form is accepted when the qualified one is absent, the
/// same order the ticket would have been requested in.
pub fn service_credential(path: &Path, cell: &str, realm: &str) -> Result<ServiceCredential> {
    let data = fs::read(path).map_err(|err| Error::CacheRead {
        path: path.display().to_string(),
        source: err,
    })?;

    let ccache = match CCache::parse(&data) {
        Ok((_, ccache)) => ccache,
        Err(_) => return Err(Error::CacheFormat(path.display().to_string())),
    };

    for components in [&["afs", cell][..], &["afs"][..]] {
        if let Some(credential) = find_credential(&ccache, realm, components) {
            debug!("using ticket for {}@{}", components.join("/"), realm);
            return Ok(extract(credential));
        }
    }

    Err(Error::NoServiceTicket {
        cell: cell.to_owned(),
        realm: realm.to_owned(),
    })
}

fn find_credential<'a>(
    ccache: &'a CCache,
    realm: &str,
    components: &[&str],
) -> Option<&'a Credential> {
    ccache
        .credentials
        .iter()
        .find(|credential| principal_matches(&credential.server, realm, components))
}

fn principal_matches(principal: &Principal, realm: &str, components: &[&str]) -> bool {
    principal.realm.data == realm.as_bytes()
        && principal.components.len() == components.len()
        && principal
            .components
            .iter()
            .zip(components)
            .all(|(have, want)| have.data == want.as_bytes())
}

fn extract(credential: &Credential) -> ServiceCredential {
    ServiceCredential {
        enctype: i32::from(credential.key.keytype),
        session_key: credential.key.keyvalue.clone(),
        ticket: credential.ticket.data.clone(),
        endtime: credential.time.endtime,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_ccname, principal_matches};
    use crate::error::Error;
    use kerberos_ccache::{CountedOctetString, Principal};
    use std::path::PathBuf;

    fn principal(realm: &str, components: &[&str]) -> Principal {
        Principal::new(
            1,
            CountedOctetString::new(realm.as_bytes().to_vec()),
            components
                .iter()
                .map(|c| CountedOctetString::new(c.as_bytes().to_vec()))
                .collect(),
        )
    }

    #[test]
    fn ccname_without_prefix_is_a_path() {
        assert_eq!(
            PathBuf::from("/tmp/krb5cc_1000"),
            parse_ccname("/tmp/krb5cc_1000").unwrap()
        );
    }

    #[test]
    fn ccname_file_prefix_is_stripped() {
        assert_eq!(
            PathBuf::from("/run/user/1000/krb5cc"),
            parse_ccname("FILE:/run/user/1000/krb5cc").unwrap()
        );
    }

    #[test]
    fn ccname_foreign_cache_types_are_rejected() {
        for name in ["KEYRING:session:foo", "DIR:/tmp/ccdir", "MEMORY:x"] {
            match parse_ccname(name) {
                Err(Error::UnsupportedCacheType(_)) => {}
                other => panic!("expected UnsupportedCacheType, got {:?}", other),
            }
        }
    }

    #[test]
    fn ccname_colon_in_path_is_not_a_prefix() {
        assert_eq!(
            PathBuf::from("/tmp/odd:name"),
            parse_ccname("/tmp/odd:name").unwrap()
        );
    }

    #[test]
    fn principal_matching_is_exact() {
        let qualified = principal("EXAMPLE.ORG", &["afs", "example.org"]);
        assert!(principal_matches(&qualified, "EXAMPLE.ORG", &["afs", "example.org"]));
        assert!(!principal_matches(&qualified, "EXAMPLE.ORG", &["afs"]));
        assert!(!principal_matches(&qualified, "OTHER.ORG", &["afs", "example.org"]));

        let bare = principal("EXAMPLE.ORG", &["afs"]);
        assert!(principal_matches(&bare, "EXAMPLE.ORG", &["afs"]));
        assert!(!principal_matches(&bare, "EXAMPLE.ORG", &["afs", "example.org"]));
    }
}
