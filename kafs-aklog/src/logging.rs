use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::Config as LoggerConfig;
use log4rs::Handle;

/// Logs go to stderr only: stdout stays silent so the success contract
/// (exit 0, no output) holds.
pub fn init_logs(level: LevelFilter) -> Handle {
    let config = build_logger_config(level).expect("unable to configure logger");
    log4rs::init_config(config).expect("can't init log4rs")
}

fn build_logger_config(level: LevelFilter) -> Result<LoggerConfig, log4rs::config::runtime::ConfigErrors> {
    use log4rs::config::{Appender, Root};

    LoggerConfig::builder()
        .appender(Appender::builder().build(
            "stderr",
            Box::new(ConsoleAppender::builder().target(Target::Stderr).build()),
        ))
        .build(Root::builder().appender("stderr").build(level))
}
