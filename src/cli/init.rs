// Copyright (c) 2025 Kodama Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Kokic (@kokic)

use camino::Utf8PathBuf;
use eyre::{eyre, WrapErr};

use crate::config::{self, Config};

pub const SAMPLE_QUESTION_PATH: &str = "questions/sample.toml";

pub const SAMPLE_QUESTION: &str = r#"[[question]]
type = "single-choice"
statement = 'Which value solves $x^2 = 4$ with $x > 0$?'
options = ["$-2$", "$2$", "$4$", '$\sqrt{2}$']
answer = "B"
solution = '''
Taking square roots gives $x = \pm 2$.
Only $x = 2$ is positive.'''

[[question]]
type = "computation"
statement = '\frac{1}{2} + \frac{1}{3}'
answer = '$\frac{5}{6}$'
solution = '$$\frac{1}{2} + \frac{1}{3} = \frac{3}{6} + \frac{2}{6} = \frac{5}{6}$$'
"#;

#[derive(clap::Args)]
pub struct InitCommand {
    /// Directory to initialize.
    #[arg(default_value = "./")]
    pub path: Utf8PathBuf,
}

pub fn init(command: &InitCommand) -> eyre::Result<()> {
    let root = &command.path;
    if !root.exists() {
        return Err(eyre!("Does not exist: {}", root));
    }

    let config_path = root.join(config::CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(eyre!("Already exists: {}", config_path));
    }
    let toml = toml::to_string(&Config::default()).wrap_err("failed to serialize default config")?;
    std::fs::write(&config_path, toml).wrap_err("failed to create default config file")?;
    println!("Created new config at: {}", config_path);

    let sample_path = root.join(SAMPLE_QUESTION_PATH);
    if sample_path.exists() {
        color_print::ceprintln!("<y>Warning: `{}` already exists, skipping.</>", sample_path);
        return Ok(());
    }
    if let Some(parent) = sample_path.parent() {
        std::fs::create_dir_all(parent).wrap_err("failed to create questions directory")?;
    }
    std::fs::write(&sample_path, SAMPLE_QUESTION).wrap_err("failed to create sample question")?;
    println!("Created sample question at: {}", sample_path);
    Ok(())
}
