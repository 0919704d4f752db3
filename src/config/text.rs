// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Text {
    pub title: String,
    pub answer: String,
    pub solution: String,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            title: "Questions".to_string(),
            answer: "Answer".to_string(),
            solution: "Solution".to_string(),
        }
    }
}
