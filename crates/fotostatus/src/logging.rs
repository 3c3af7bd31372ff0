use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const STDERR_APPENDER: &str = "stderr";
const FILE_APPENDER: &str = "file";

const STDERR_PATTERN: &str = "{h({l})} {m}{n}";
const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Console output goes to stderr so it never mixes with the rendered tables.
pub fn build_logger_config(level: LevelFilter, log_file: Option<&Path>) -> Result<Config> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let mut config =
        Config::builder().appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)));
    let mut root = Root::builder().appender(STDERR_APPENDER);

    if let Some(log_file) = log_file {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
            .build(log_file)
            .context(format!("could not open the log file {}", log_file.display()))?;

        config = config.appender(Appender::builder().build(FILE_APPENDER, Box::new(file)));
        root = root.appender(FILE_APPENDER);
    }

    config
        .build(root.build(level))
        .context("invalid logger configuration")
}

pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let config = build_logger_config(level, log_file)?;
    log4rs::init_config(config).context("the logger is already initialized")?;

    Ok(())
}
