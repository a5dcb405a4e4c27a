//! Interactive session: pick an input kind, enter it, read the report.

use std::path::Path;
use std::time::Duration;

use inquire::validator::Validation;
use inquire::InquireError;

use crate::backend::FactCheckBackend;
use crate::render;
use crate::session::{AppState, Session, SubmitOutcome, Tab};
use crate::upload::{format_size, FileUpload};
use crate::validate::{validate_text_input, validate_youtube_url};

/// Run one blocking submission behind the "Analyzing content..." spinner.
pub fn submit_with_spinner(
    session: &mut Session,
    backend: &dyn FactCheckBackend,
    submit: fn(&mut Session, &dyn FactCheckBackend) -> SubmitOutcome,
) -> SubmitOutcome {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message("Analyzing content...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let outcome = submit(session, backend);

    spinner.finish_and_clear();
    outcome
}

/// The video line belongs to the YouTube tab. The player state itself
/// survives tab switches, so the current tab gates the print.
fn video_line(state: &AppState) -> Option<String> {
    if state.tab != Tab::Youtube || !state.show_video_player || state.video_id.is_empty() {
        return None;
    }
    Some(format!(
        "Checked video: https://www.youtube.com/watch?v={}",
        state.video_id
    ))
}

fn print_outcome(session: &mut Session, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Success => {
            let state = session.state();
            if let Some(line) = video_line(state) {
                println!("{line}");
            }
            if let Some(report) = &state.results {
                println!();
                print!("{}", render::render_report(report));
            }
        }
        SubmitOutcome::Rejected(message) | SubmitOutcome::Failed(message) => {
            // one-shot notice; dismissed once shown
            eprintln!("error: {message}");
            session.clear_error();
        }
        SubmitOutcome::Stale => {}
    }
}

fn prompt_youtube(session: &mut Session, backend: &dyn FactCheckBackend) -> anyhow::Result<()> {
    let url = match inquire::Text::new("YouTube URL:")
        .with_initial_value(&session.state().youtube_url)
        .with_validator(|input: &str| {
            let validation = validate_youtube_url(input);
            if validation.is_valid {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    validation.message.unwrap_or_default().into(),
                ))
            }
        })
        .prompt()
    {
        Ok(url) => url,
        Err(InquireError::OperationCanceled) => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    session.set_youtube_url(url);
    let outcome = submit_with_spinner(session, backend, Session::submit_youtube);
    print_outcome(session, outcome);
    Ok(())
}

fn prompt_text(session: &mut Session, backend: &dyn FactCheckBackend) -> anyhow::Result<()> {
    let text = match inquire::Text::new("Text to fact-check:")
        .with_initial_value(&session.state().text_input)
        .with_validator(|input: &str| {
            let validation = validate_text_input(input);
            if validation.is_valid {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    validation.message.unwrap_or_default().into(),
                ))
            }
        })
        .prompt()
    {
        Ok(text) => text,
        Err(InquireError::OperationCanceled) => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    session.set_text_input(text);
    let outcome = submit_with_spinner(session, backend, Session::submit_text);
    print_outcome(session, outcome);
    Ok(())
}

fn prompt_file(session: &mut Session, backend: &dyn FactCheckBackend) -> anyhow::Result<()> {
    let path = match inquire::Text::new("Path to the document:")
        .with_help_message("PDF, DOCX or TXT, up to 5MB")
        .prompt()
    {
        Ok(path) => path,
        Err(InquireError::OperationCanceled) => return Ok(()),
        Err(err) => return Err(err.into()),
    };

    let upload = match FileUpload::from_path(Path::new(&path)) {
        Ok(upload) => upload,
        Err(err) => {
            eprintln!("error: could not read {path}: {err}");
            return Ok(());
        }
    };
    println!("Selected: {} ({})", upload.name, format_size(upload.size));
    session.set_file(Some(upload));

    let outcome = submit_with_spinner(session, backend, Session::submit_file);
    print_outcome(session, outcome);
    Ok(())
}

pub fn run(backend: &dyn FactCheckBackend) -> anyhow::Result<()> {
    let mut session = Session::new();

    loop {
        let tab = match inquire::Select::new(
            "What do you want to fact-check?",
            vec![Tab::Youtube, Tab::Text, Tab::File],
        )
        .prompt()
        {
            Ok(tab) => tab,
            Err(InquireError::OperationCanceled)
            | Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };
        session.set_tab(tab);

        match tab {
            Tab::Youtube => prompt_youtube(&mut session, backend)?,
            Tab::Text => prompt_text(&mut session, backend)?,
            Tab::File => prompt_file(&mut session, backend)?,
        }

        match inquire::Confirm::new("Check something else?")
            .with_default(true)
            .prompt()
        {
            Ok(true) => {}
            Ok(false) => break,
            Err(InquireError::OperationCanceled)
            | Err(InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::FactReport;

    #[test]
    fn test_video_line_only_on_youtube_tab() {
        let mut session = Session::new();
        session.set_youtube_url("https://youtu.be/abc");
        let ticket = session.begin_youtube().unwrap();
        assert_eq!(
            session.finish(ticket, Ok(FactReport::default())),
            SubmitOutcome::Success
        );
        assert_eq!(
            video_line(session.state()).as_deref(),
            Some("Checked video: https://www.youtube.com/watch?v=abc")
        );

        // the player state survives the switch; the line must not follow it
        session.set_tab(Tab::Text);
        session.set_text_input("the earth is flat");
        let ticket = session.begin_text().unwrap();
        assert_eq!(
            session.finish(ticket, Ok(FactReport::default())),
            SubmitOutcome::Success
        );
        assert!(session.state().show_video_player);
        assert_eq!(video_line(session.state()), None);
    }

    #[test]
    fn test_video_line_absent_without_player_state() {
        let session = Session::new();
        assert_eq!(video_line(session.state()), None);
    }
}
