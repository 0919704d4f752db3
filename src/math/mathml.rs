// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use math_core::{LatexToMathML, MathCoreConfig, MathDisplay};

use super::{DisplayMode, MathError, MathRenderer};

/// Server-side MathML through `math-core`. The page needs no script.
pub struct MathCore {
    converter: LatexToMathML,
}

impl MathCore {
    pub fn new() -> Result<Self, MathError> {
        let converter = LatexToMathML::new(&MathCoreConfig::default())
            .map_err(|err| MathError::Convert(format!("{:?}", err)))?;
        Ok(Self { converter })
    }
}

impl MathRenderer for MathCore {
    fn render(&self, expression: &str, mode: DisplayMode) -> Result<String, MathError> {
        let display = match mode {
            DisplayMode::Inline => MathDisplay::Inline,
            DisplayMode::Block => MathDisplay::Block,
        };
        self.converter
            .convert_with_local_counter(expression, display)
            .map_err(|err| MathError::Convert(format!("{:?}", err)))
    }
}
