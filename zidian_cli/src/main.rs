mod cli;
pub mod errors;
mod handlers;
mod ui;

use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zidian::common::DataLayout;
use crate::cli::{Cli, Commands};
use crate::errors::CliError;
use crate::handlers::{archive, lowercase, rename, words};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// 日志输出到 stderr，默认只显示警告，可通过 `RUST_LOG` 调整
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let layout = DataLayout::new(cli.data_dir);

    match cli.command {
        Commands::AddWords { file } => {
            words::handle_add_words(&file.unwrap_or_else(|| layout.words_file()))
        }
        Commands::LowercasePinyin { file } => {
            lowercase::handle_lowercase(&file.unwrap_or_else(|| layout.dictionary_file()))
        }
        Commands::Pack { input, output, level } => archive::handle_pack(
            &input.unwrap_or_else(|| layout.dictionary_file()),
            &output.unwrap_or_else(|| layout.dictionary_archive()),
            level,
        ),
        Commands::Unpack { input, output } => archive::handle_unpack(
            &input.unwrap_or_else(|| layout.dictionary_archive()),
            &output.unwrap_or_else(|| layout.dictionary_file()),
        ),
        Commands::RenameTones { dir, jobs, dry_run } => {
            let jobs = jobs
                .map(usize::try_from)
                .transpose()
                .map_err(|e| CliError::Unexpected(e.to_string()))?;
            rename::handle_rename_tones(&dir.unwrap_or_else(|| layout.tones_dir()), jobs, dry_run)
        }
    }
}
