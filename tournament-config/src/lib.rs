use log::warn;
use logging::LoggingConfig;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use std::{
    fs,
    path::{Path, PathBuf},
};
#[cfg(not(feature = "test_helper"))]
use std::sync::LazyLock;

pub mod logging;
pub mod thruster;

pub use thruster::ThrusterConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Couldn't access configuration at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Couldn't parse config at {path:?}. Reason: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Couldn't serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Loads the configuration under `exec_dir`, falling back to the defaults when it can't be used.
pub fn load_or_default(exec_dir: &Path) -> TournamentConfiguration {
    TournamentConfiguration::load(exec_dir).unwrap_or_else(|err| {
        log::error!("{err}; using the default thruster configuration");
        TournamentConfiguration::default()
    })
}

#[cfg(not(feature = "test_helper"))]
fn load_from_current_dir() -> TournamentConfiguration {
    match std::env::current_dir() {
        Ok(exec_dir) => load_or_default(&exec_dir),
        Err(err) => {
            log::error!("Couldn't resolve the working directory: {err}; using the default thruster configuration");
            TournamentConfiguration::default()
        }
    }
}

#[cfg(not(feature = "test_helper"))]
static TOURNAMENT_CONFIG: LazyLock<TournamentConfiguration> = LazyLock::new(load_from_current_dir);

#[cfg(not(feature = "test_helper"))]
pub fn tournament_config() -> &'static TournamentConfiguration {
    &TOURNAMENT_CONFIG
}

#[cfg(feature = "test_helper")]
use std::cell::RefCell;

// Leaked on purpose so the accessor keeps returning `&'static` like the non-test build.
#[cfg(feature = "test_helper")]
thread_local! {
    static TOURNAMENT_CONFIG: RefCell<&'static TournamentConfiguration> = RefCell::new(Box::leak(Box::new(TournamentConfiguration::default())));
}

#[cfg(feature = "test_helper")]
pub fn override_config_for_testing(config: TournamentConfiguration) {
    TOURNAMENT_CONFIG.with_borrow_mut(|ref_config| {
        *ref_config = Box::leak(Box::new(config));
    });
}

#[cfg(feature = "test_helper")]
pub fn tournament_config() -> &'static TournamentConfiguration {
    TOURNAMENT_CONFIG.with_borrow(|config| *config)
}

/// Settings for the thruster blocks. Defaults match the values the mod ships with.
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TournamentConfiguration {
    pub logging: LoggingConfig,
    pub thruster: ThrusterConfig,
}

pub trait LoadConfiguration {
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir(&config_dir).map_err(|source| ConfigError::Io {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            let content = Self::default();

            if let Err(err) = fs::write(&path, toml::to_string(&content)?) {
                warn!(
                    "Couldn't write default config to {:?}. Reason: {}",
                    &path, err
                );
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for TournamentConfiguration {
    fn get_path() -> &'static Path {
        Path::new("tournament.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.thruster.validate()
    }
}
