use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use calcpad::cli::{CliArgs, StartupMode};
use calcpad::config::CalcConfig;
use calcpad::model::AppModel;
use calcpad::runtime::{evaluate_once, App};
use calcpad::view::RenderOptions;

fn main() -> Result<ExitCode> {
    calcpad::tracing::init();

    let startup = match CliArgs::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if let StartupMode::Eval(expr) = &startup.mode {
        return Ok(match evaluate_once(expr) {
            Ok(result) => {
                println!("{}", result);
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("{}", error);
                ExitCode::FAILURE
            }
        });
    }

    let mut config = CalcConfig::load();
    if let Some(theme) = startup.theme {
        tracing::info!("Theme overridden for this run: {}", theme);
        config.theme = theme;
    }
    let model = AppModel::new(config);

    let stdout = io::stdout();
    let options = RenderOptions {
        color: startup.color && stdout.is_terminal(),
    };

    let mut app = App::new(model, stdout.lock(), options)
        .with_config_path(calcpad::config_paths::config_file());
    app.run(io::stdin().lock())?;

    Ok(ExitCode::SUCCESS)
}
