use std::io::Read;

use anyhow::{bail, Context};
use clap::Parser;

mod backend;
mod cli;
mod config;
mod prompt;
mod render;
mod report;
mod session;
mod upload;
mod validate;

use backend::RemoteBackend;
use config::Config;
use session::{Session, SubmitOutcome, Tab};
use upload::FileUpload;

fn print_outcome(session: &Session, outcome: SubmitOutcome, json: bool) -> anyhow::Result<()> {
    match outcome {
        SubmitOutcome::Success => {
            if let Some(report) = &session.state().results {
                if json {
                    println!("{}", serde_json::to_string_pretty(report).unwrap());
                } else {
                    print!("{}", render::render_report(report));
                }
            }
            Ok(())
        }
        SubmitOutcome::Rejected(message) | SubmitOutcome::Failed(message) => bail!(message),
        SubmitOutcome::Stale => bail!("submission was superseded"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("claimcheck=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    let config = Config::load()?;
    let backend = RemoteBackend::new(&config.api_url, config.request_timeout())?;

    match args.command {
        cli::Command::Youtube { url, json } => {
            let mut session = Session::new();
            session.set_youtube_url(url);

            let outcome =
                prompt::submit_with_spinner(&mut session, &backend, Session::submit_youtube);
            print_outcome(&session, outcome, json)
        }

        cli::Command::Text { text, json } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("could not read text from stdin")?;
                    buf
                }
            };

            let mut session = Session::new();
            session.set_tab(Tab::Text);
            session.set_text_input(text);

            let outcome =
                prompt::submit_with_spinner(&mut session, &backend, Session::submit_text);
            print_outcome(&session, outcome, json)
        }

        cli::Command::File { path, json } => {
            let upload = FileUpload::from_path(&path)
                .with_context(|| format!("could not read {}", path.display()))?;
            log::info!("staged {} ({})", upload.name, upload::format_size(upload.size));

            let mut session = Session::new();
            session.set_tab(Tab::File);
            session.set_file(Some(upload));

            let outcome =
                prompt::submit_with_spinner(&mut session, &backend, Session::submit_file);
            print_outcome(&session, outcome, json)
        }

        cli::Command::Interactive {} => prompt::run(&backend),
    }
}
