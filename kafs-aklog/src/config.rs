use std::env;
use std::process;

use clap::{App, Arg, ErrorKind};
use log::LevelFilter;

pub const KRB5_CCNAME_ENV: &str = "KRB5CCNAME";
pub const AKLOG_LOG_LEVEL_ENV: &str = "AKLOG_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct Config {
    pub cell: String,
    pub realm: String,
    pub log_level: LevelFilter,
}

fn parse_level_filter(s: &str) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

impl Config {
    /// Reads the command line and ambient environment. Usage errors exit
    /// with status 2; help and version requests exit with status 0.
    pub fn startup_init() -> Self {
        let matches = App::new("aklog-kafs")
            .about("Obtain an rxkad token for an AFS cell and install it for the kAFS client")
            .arg(
                Arg::with_name("cell")
                    .help("AFS cell to authenticate to")
                    .required(true),
            )
            .arg(
                Arg::with_name("realm")
                    .help("Kerberos realm holding the cell's afs service principal")
                    .required(true),
            )
            .get_matches_safe()
            .unwrap_or_else(|err| match err.kind {
                ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                    println!("{}", err.message);
                    process::exit(0);
                }
                _ => {
                    eprintln!("{}", err.message);
                    process::exit(2);
                }
            });

        let log_level = env::var(AKLOG_LOG_LEVEL_ENV)
            .map(|level| parse_level_filter(&level))
            .unwrap_or(LevelFilter::Warn);

        Config {
            cell: matches.value_of("cell").expect("cell is required").to_owned(),
            realm: matches.value_of("realm").expect("realm is required").to_owned(),
            log_level,
        }
    }
}
