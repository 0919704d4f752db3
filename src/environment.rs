// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic), Spore (@s-cerevisiae)

use std::sync::OnceLock;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};

use crate::{
    config::{self, Config},
    path_utils,
};

pub struct Environment {
    /// Directory of the configuration file, or the working directory when
    /// running without one. Relative paths in the config resolve against it.
    pub root: Utf8PathBuf,
    /// The configuration file in use, if any.
    pub config_file: Option<Utf8PathBuf>,
    pub config: Config,
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

fn get_environment() -> &'static Environment {
    ENVIRONMENT.get().expect("environment must be initialized")
}

pub fn config() -> &'static Config {
    &get_environment().config
}

pub fn root_dir() -> &'static Utf8Path {
    &get_environment().root
}

pub fn config_file() -> Option<&'static Utf8Path> {
    get_environment().config_file.as_deref()
}

/// An explicitly given config file must exist; the default one is optional.
pub fn init_environment(toml_file: Option<Utf8PathBuf>) -> eyre::Result<()> {
    let explicit = toml_file.is_some();
    let toml_file = toml_file.unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.into());

    let environment = match config::find_config(&toml_file) {
        Some(found) => {
            let (root, _file_name) =
                path_utils::split_file_name(&found).ok_or_else(|| eyre!("empty config path"))?;
            let toml = std::fs::read_to_string(&found)
                .wrap_err_with(|| eyre!("failed to read config file `{}`", found))?;
            log::debug!("using config `{}`", found);
            Environment {
                root: root.to_owned(),
                config: config::parse_config(&toml)?,
                config_file: Some(found),
            }
        }
        None if explicit => return Err(eyre!("cannot find configuration file: {}", toml_file)),
        None => Environment {
            root: "./".into(),
            config_file: None,
            config: Config::default(),
        },
    };

    _ = ENVIRONMENT.set(environment);
    Ok(())
}

/// Output directory from `[build] output`, resolved against the root.
pub fn output_dir() -> Utf8PathBuf {
    root_dir().join(&config().build.output)
}

/// Mock environment for testing purposes.
#[cfg(test)]
pub fn mock_environment() {
    _ = ENVIRONMENT.set(Environment {
        root: "./".into(),
        config_file: None,
        config: Config::default(),
    });
}
