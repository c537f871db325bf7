mod app;
mod cli;
mod config;
mod effects;
mod ui;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clipform_logging::clip_info;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();

    clipform_logging::initialize(
        clipform_logging::level_for_verbosity(cli.verbose),
        cli.log_destination(),
    );

    let settings =
        config::load_settings(cli.config.as_deref())?.with_endpoint_override(cli.endpoint.clone());
    clip_info!("Submitting to {}", settings.endpoint);

    let runner = effects::EffectRunner::new(settings.submit_settings())
        .context("failed to start submission engine")?;
    let mut app = app::App::new(runner, settings.endpoint.clone(), io::stdout());

    match cli.url {
        Some(url) => {
            let start = cli.start.unwrap_or_default();
            let end = cli.end.unwrap_or_default();
            let produced_media = app::run_once(&mut app, url, start, end)?;
            Ok(if produced_media {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            let stdin = io::stdin();
            let mut prompter = ui::prompt::Prompter::new(stdin.lock(), io::stdout());
            app::run_interactive(&mut app, &mut prompter)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
