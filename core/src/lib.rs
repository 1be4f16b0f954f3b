use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::{pattern::PatternEncoder, Encode},
    filter::threshold::ThresholdFilter,
};
use std::{backtrace, env, str::FromStr};

pub mod letter_set;
pub mod string_operations;

/// Environment variable holding the stderr log level (`error`, `warn`, `info`, ...).
pub const LOG_LEVEL_VAR: &str = "HW_LOG_LEVEL";
/// Environment variable naming an optional log file.
pub const LOG_FILE_VAR: &str = "HW_LOG_FILE";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug)]
struct BacktracePatternEncoder {
    pattern_encoder: PatternEncoder,
    is_backtrace_enabled: bool,
}

impl BacktracePatternEncoder {
    fn new(pattern: &str) -> Self {
        BacktracePatternEncoder {
            pattern_encoder: PatternEncoder::new(pattern),
            is_backtrace_enabled: env::var("RUST_BACKTRACE").is_ok()
                || env::var("RUST_LIB_BACKTRACE").is_ok(),
        }
    }
}

impl Encode for BacktracePatternEncoder {
    fn encode(
        &self,
        w: &mut dyn log4rs::encode::Write,
        record: &log::Record<'_>,
    ) -> anyhow::Result<()> {
        if record.level() == log::Level::Error && self.is_backtrace_enabled {
            let backtrace = backtrace::Backtrace::capture();
            self.pattern_encoder.encode(
                w,
                &log::Record::builder()
                    .args(format_args!("{}\nBacktrace:\n{}", record.args(), backtrace))
                    .level(record.level())
                    .target(record.target())
                    .module_path(record.module_path())
                    .file(record.file())
                    .line(record.line())
                    .build(),
            )?;
        } else {
            self.pattern_encoder.encode(w, record)?;
        }
        Ok(())
    }
}

/// Installs the global logger: stderr at `log_level`, plus `file_path` when given.
///
/// Nothing is written to stdout.
pub fn initialize_logger(log_level: LevelFilter, file_path: Option<&str>) -> anyhow::Result<()> {
    const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(BacktracePatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        // Pattern: https://docs.rs/log4rs/*/log4rs/encode/pattern/index.html
        let logfile = FileAppender::builder()
            .encoder(Box::new(BacktracePatternEncoder::new(LOGGING_PATTERN)))
            .build(path)
            .with_context(|| format!("failed to open log file {path}"))?;

        config_builder =
            config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root_builder = root_builder.appender("logfile");
    }

    let config = config_builder
        .build(root_builder.build(log_level))
        .context("invalid logger configuration")?;

    let _handle = log4rs::init_config(config)?;

    Ok(())
}

/// Parses an optional raw setting, falling back to `default` when it is absent.
///
/// A present but unparsable value is an error naming the setting.
pub fn parse_or<T>(name: &str, raw: Option<&str>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .with_context(|| format!("{name}={value:?} is not a valid value")),
    }
}

/// Reads `name` from the environment through [`parse_or`].
pub fn env_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env::var(name).ok();
    parse_or(name, raw.as_deref(), default)
}

/// Log level from `HW_LOG_LEVEL`. Runs before the logger exists, so a bad
/// value is reported on stderr directly.
pub fn log_level_from_env() -> LevelFilter {
    env_or(LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL).unwrap_or_else(|e| {
        eprintln!("{e:#}; using {DEFAULT_LOG_LEVEL}");
        DEFAULT_LOG_LEVEL
    })
}

pub fn log_file_from_env() -> Option<String> {
    env::var(LOG_FILE_VAR).ok().filter(|path| !path.trim().is_empty())
}
