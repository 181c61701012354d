use std::str::FromStr;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use tournament_config::logging::LoggingConfig;

pub mod block;
pub mod entity;
pub mod item;
pub mod ship;
pub mod world;

pub const NAMESPACE: &str = "tournament";

/// Installs the terminal logger at the level picked by [`log_level`].
pub fn init_log(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    if !config.enabled {
        return Ok(());
    }

    let mut builder = ConfigBuilder::new();
    if config.timestamp {
        builder.set_time_level(LevelFilter::Error);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }
    if config.threads {
        builder.set_thread_level(LevelFilter::Info);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }
    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let env = std::env::var("RUST_LOG").ok();
    let level = log_level(env.as_deref(), &config.level);

    TermLogger::init(level, builder.build(), TerminalMode::Mixed, color)
}

/// `env` wins when it names a level, then the configured level, then `info`.
pub fn log_level(env: Option<&str>, configured: &str) -> LevelFilter {
    env.and_then(|level| LevelFilter::from_str(level.trim()).ok())
        .or_else(|| LevelFilter::from_str(configured.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod test {
    use log::LevelFilter;
    use tournament_config::logging::LoggingConfig;

    use super::{init_log, log_level};

    #[test]
    fn disabled_logging_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(init_log(&config).is_ok());
    }

    #[test]
    fn env_overrides_configured_level() {
        assert_eq!(log_level(Some("trace"), "warn"), LevelFilter::Trace);
        assert_eq!(log_level(Some("OFF"), "debug"), LevelFilter::Off);
    }

    #[test]
    fn unset_or_garbage_env_uses_configured_level() {
        assert_eq!(log_level(None, "debug"), LevelFilter::Debug);
        assert_eq!(log_level(Some("tournament=loud"), "error"), LevelFilter::Error);
        assert_eq!(log_level(Some(""), "warn"), LevelFilter::Warn);
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(log_level(None, "chatty"), LevelFilter::Info);
        assert_eq!(log_level(Some("nope"), ""), LevelFilter::Info);
    }
}
