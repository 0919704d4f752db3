// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Normalize {
    pub rules: Vec<Rule>,
}

/// A regex rewrite applied to every field before segmentation.
/// `replacement` may refer to capture groups as `$1`, `${name}`.
#[derive(Deserialize, Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Rule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}
