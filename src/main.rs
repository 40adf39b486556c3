use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use lokitrace::http::build_http_client;
use lokitrace::logging::init_logging;
use lokitrace::output::should_color;
use lokitrace::types::Cli;
use lokitrace::utils::TimeWindow;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let colored = should_color(cli.no_color, io::stderr().is_terminal());
    colored::control::set_override(colored);

    let client = build_http_client()?;
    let window = TimeWindow::ending_now(cli.minutes);

    let outcome = lokitrace::run(
        &cli,
        &client,
        window,
        colored,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await?;

    Ok(ExitCode::from(outcome.exit_code()))
}
