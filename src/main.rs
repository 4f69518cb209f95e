use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use bhasha_cli::cli::commands::translate::{self, SessionOutcome};
use bhasha_cli::cli::commands::configure;
use bhasha_cli::cli::{Args, Command, exit_code_for};
use bhasha_cli::output::{self, OutputConfig};
use bhasha_cli::translation::print_languages;
use bhasha_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_logging(args.verbose);

    match run(args).await {
        Ok(code) => to_exit_code(code),
        Err(err) => {
            eprintln!("{} {err}", Style::error("Error:"));
            output::flush_stderr();
            to_exit_code(exit_code_for(&err))
        }
    }
}

async fn run(args: Args) -> Result<exitcode::ExitCode> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                to: args.to,
                endpoint: args.endpoint,
                model: args.model,
                timeout_secs: args.timeout,
            };

            if let SessionOutcome::InvalidChoice(choice) = translate::run_translate(options).await? {
                tracing::debug!(%choice, "invalid language choice");
                return Ok(exitcode::USAGE);
            }
        }
    }

    Ok(exitcode::OK)
}

fn to_exit_code(code: exitcode::ExitCode) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
