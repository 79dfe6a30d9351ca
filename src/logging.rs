//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to a rolling file.
//! A `config/log4rs.yaml` under the deck root takes precedence over the
//! programmatic setup.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::DeckSettings;

pub const YAML_CONFIG_PATH: &str = "config/log4rs.yaml";

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l:<5} {t} - {m}{n}";
const ROLL_SIZE_BYTES: u64 = 1024 * 1024;
const ROLL_WINDOW: u32 = 3;

/// Installs the global logger.
pub fn init(root: &Path, settings: &DeckSettings) -> Result<()> {
    let yaml = root.join(YAML_CONFIG_PATH);
    if yaml.exists() {
        log4rs::init_file(&yaml, Default::default())
            .with_context(|| format!("failed to load log config: {}", yaml.display()))?;
        return Ok(());
    }
    let config = build_config(settings)?;
    log4rs::init_config(config).context("failed to install logger")?;
    Ok(())
}

/// The level named by `raw`, if it names one.
pub fn level_name(raw: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(raw.trim()).ok()
}

/// Like [`level_name`], falling back to `Info`.
pub fn parse_level(raw: &str) -> LevelFilter {
    level_name(raw).unwrap_or(LevelFilter::Info)
}

fn build_config(settings: &DeckSettings) -> Result<Config> {
    let log_file = &settings.log_file;
    let archive = log_file.with_extension("{}.log.gz");
    let archive_pattern = archive
        .to_str()
        .context("log file path is not valid UTF-8")?;
    let roller = FixedWindowRoller::builder()
        .build(archive_pattern, ROLL_WINDOW)
        .context("failed to build log roller")?;
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(ROLL_SIZE_BYTES)),
        Box::new(roller),
    );
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file, Box::new(policy))
        .with_context(|| format!("failed to open log file: {}", log_file.display()))?;

    Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(
            Root::builder()
                .appender("file")
                .build(parse_level(&settings.log_level)),
        )
        .context("invalid logger configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert!(level_name("chatty").is_none());
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }

    #[test]
    fn programmatic_config_creates_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DeckSettings {
            log_file: dir.path().join("logs/folio.log"),
            ..DeckSettings::default()
        };
        build_config(&settings).unwrap();
        assert!(dir.path().join("logs/folio.log").exists());
    }
}
