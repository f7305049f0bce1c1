//! Layered configuration for the benchmark tooling.
//!
//! Values are resolved from built-in defaults, then an optional `.config.env`
//! file in the working directory, then the process environment.

use std::{
    io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

mod error;

pub mod commands;

pub use commands::GeneratorConfig;
pub use error::Error;

const CONFIG_ENV_FILE: &str = ".config.env";
const CONFIG_ENV_PREFIX: &str = "BENCH";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    /// Key/value pairs used when neither the env file nor the environment set a key.
    const DEFAULTS: &'static [(&'static str, &'static str)] = &[];

    fn from_env() -> Result<Self, Error> {
        load_env_file(&config_env_path())?;

        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);
        let mut builder = config::Config::builder();
        for (key, value) in Self::DEFAULTS {
            builder = builder.set_default(*key, *value)?;
        }

        Ok(builder
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?)
    }
}

/// Loads `path` into the process environment. A missing file is not an error.
fn load_env_file(path: &Path) -> Result<(), Error> {
    match dotenvy::from_path(path) {
        Err(dotenvy::Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        result => Ok(result?),
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    PathBuf::from(CONFIG_ENV_FILE)
}
