mod ccache;
mod config;
mod error;
mod keyring;
mod logging;

use std::process;

use kafs_token::constants::rxkad;
use kafs_token::{convert_key, RxkadToken};
use log::debug;

use crate::config::Config;
use crate::error::Result;

fn main() {
    let config = Config::startup_init();
    logging::init_logs(config.log_level);

    if let Err(err) = run(&config) {
        eprintln!("aklog-kafs: {}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let path = ccache::default_ccache_path()?;
    debug!("reading credential cache {}", path.display());

    let credential = ccache::service_credential(&path, &config.cell, &config.realm)?;

    let session_key = convert_key(credential.enctype, &credential.session_key)?;

    let token = RxkadToken::new(
        session_key,
        credential.ticket,
        credential.endtime,
        rxkad::TKT_TYPE_KERBEROS_V5,
    )?;

    let mut payload = Vec::with_capacity(token.wire_len());
    token.encode(&mut payload)?;

    let mut dest = keyring::destination()?;
    keyring::install(&mut dest, &keyring::token_description(&config.cell), &payload)?;

    debug!("installed {} byte token for cell {}", payload.len(), config.cell);

    Ok(())
}
