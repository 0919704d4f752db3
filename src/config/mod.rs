// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic), Spore (@s-cerevisiae)

pub mod build;
pub mod normalize;
pub mod render;
pub mod text;

use build::Build;
use camino::{Utf8Path, Utf8PathBuf};
use normalize::Normalize;
use render::Render;
use serde::{Deserialize, Serialize};
use text::Text;

pub const DEFAULT_CONFIG_PATH: &str = "./MathQuiz.toml";
pub const CONFIG_FILE_NAME: &str = "MathQuiz.toml";

#[derive(Deserialize, Debug, Default, Serialize)]
pub struct Config {
    #[serde(default)]
    pub render: Render,

    #[serde(default)]
    pub text: Text,

    #[serde(default)]
    pub build: Build,

    #[serde(default)]
    pub normalize: Normalize,
}

/// Try to find toml file at the given path or in the parent directory.
pub fn find_config(toml_file: &Utf8Path) -> Option<Utf8PathBuf> {
    if toml_file.is_file() {
        return Some(toml_file.to_owned());
    }
    let parent = toml_file.parent()?.canonicalize_utf8().ok()?;
    let candidate = parent.parent()?.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre::eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}
