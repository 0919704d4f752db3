// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_DIR: &str = "./publish";

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Build {
    pub output: String,
    /// Wrap every question file in a complete HTML page.
    pub standalone: bool,
    pub inline_css: bool,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT_DIR.to_string(),
            standalone: false,
            inline_css: true,
        }
    }
}
