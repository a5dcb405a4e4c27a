//! Session state and the submission flow.
//!
//! A [`Session`] owns the whole application state and is the only thing
//! that mutates it. Every submission runs validate -> call -> apply;
//! completions are applied through a generation-tagged [`Ticket`], so a
//! response that arrives after the session moved on (tab switched, URL
//! edited, newer submission started) is dropped instead of clobbering
//! newer state.

use crate::backend::{BackendError, FactCheckBackend};
use crate::report::FactReport;
use crate::upload::FileUpload;
use crate::validate::{
    validate_file_input, validate_text_input, validate_youtube_url, ValidationResult,
};

/// Input kinds, one per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Youtube,
    Text,
    File,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Youtube => "YouTube Link",
            Tab::Text => "Text Input",
            Tab::File => "File Upload",
        }
    }

    /// Fallback error text for a failure that produced no message.
    fn default_error(&self) -> &'static str {
        match self {
            Tab::Youtube => "Failed to process YouTube URL",
            Tab::Text => "Failed to process text",
            Tab::File => "Failed to process file",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the presentation layer reads. Mutated only by [`Session`].
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tab: Tab,
    pub youtube_url: String,
    pub text_input: String,
    pub file: Option<FileUpload>,
    pub results: Option<FactReport>,
    pub loading: bool,
    pub show_results: bool,
    pub show_video_player: bool,
    pub video_id: String,
    pub error: Option<String>,
}

/// Claim a submission holds while its network call runs. [`Session::finish`]
/// uses the generation stamp to tell a live completion from a stale one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    kind: Tab,
    generation: u64,
    video_id: Option<String>,
}

/// What one submission attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed locally; no request was issued.
    Rejected(String),
    /// The report was stored and is showing.
    Success,
    /// The call failed; the message is also in the error slot.
    Failed(String),
    /// The session moved on while the call was in flight; the payload
    /// was dropped.
    Stale,
}

pub struct Session {
    state: AppState,
    generation: u64,
    in_flight: Option<u64>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            state: AppState::default(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Switch tabs. Results, their visibility and the error notice are
    /// cleared; inputs and the video state survive until the URL itself
    /// changes.
    pub fn set_tab(&mut self, tab: Tab) {
        if self.state.tab == tab {
            return;
        }
        log::debug!("tab {} -> {}", self.state.tab, tab);
        self.state.tab = tab;
        self.state.results = None;
        self.state.show_results = false;
        self.state.error = None;
        self.generation += 1;
    }

    /// Every URL edit re-derives the video state and error notice
    /// synchronously, and drops any previous report: the old answer no
    /// longer matches the input.
    pub fn set_youtube_url(&mut self, url: impl Into<String>) {
        self.state.youtube_url = url.into();

        let validation = validate_youtube_url(&self.state.youtube_url);
        if validation.is_valid {
            self.state.video_id = validation.video_id.unwrap_or_default();
            self.state.show_video_player = true;
            self.state.error = None;
        } else {
            self.state.video_id.clear();
            self.state.show_video_player = false;
            // an emptied field is not an error, just nothing to show
            self.state.error = if self.state.youtube_url.is_empty() {
                None
            } else {
                validation.message
            };
        }

        self.state.results = None;
        self.state.show_results = false;
        self.generation += 1;
    }

    pub fn set_text_input(&mut self, text: impl Into<String>) {
        self.state.text_input = text.into();
    }

    pub fn set_file(&mut self, file: Option<FileUpload>) {
        self.state.file = file;
    }

    /// Dismiss the error notice.
    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Record a validation failure in the error slot, handing back its
    /// message.
    fn fail(&mut self, validation: ValidationResult) -> String {
        let message = validation.message.unwrap_or_default();
        self.state.error = Some(message.clone());
        message
    }

    /// Steps shared by every submission: on a valid input, mark the
    /// session loading and hand out a generation-stamped ticket.
    fn begin(&mut self, kind: Tab, validation: ValidationResult) -> Result<Ticket, String> {
        if !validation.is_valid {
            return Err(self.fail(validation));
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.state.loading = true;
        self.state.error = None;

        Ok(Ticket {
            kind,
            generation: self.generation,
            video_id: validation.video_id,
        })
    }

    pub fn begin_youtube(&mut self) -> Result<Ticket, String> {
        let validation = validate_youtube_url(&self.state.youtube_url);
        self.begin(Tab::Youtube, validation)
    }

    pub fn begin_text(&mut self) -> Result<Ticket, String> {
        let validation = validate_text_input(&self.state.text_input);
        self.begin(Tab::Text, validation)
    }

    /// The file flow needs the staged upload itself, so this returns the
    /// ticket together with a copy of the file the call should send; the
    /// copy stays coherent with the ticket even if the slot is swapped
    /// while the call runs.
    pub fn begin_file(&mut self) -> Result<(Ticket, FileUpload), String> {
        match self.state.file.clone() {
            Some(upload) => {
                let ticket = self.begin(Tab::File, validate_file_input(Some(&upload)))?;
                Ok((ticket, upload))
            }
            None => Err(self.fail(validate_file_input(None))),
        }
    }

    /// Apply a completed call. The newest request owns the loading flag;
    /// a ticket from an earlier generation has its payload dropped.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<FactReport, BackendError>,
    ) -> SubmitOutcome {
        if self.in_flight != Some(ticket.generation) {
            log::debug!("dropping completion of superseded request #{}", ticket.generation);
            return SubmitOutcome::Stale;
        }
        self.in_flight = None;
        self.state.loading = false;

        if ticket.generation != self.generation {
            log::debug!("dropping stale completion #{}", ticket.generation);
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(report) => {
                if ticket.kind == Tab::Youtube {
                    // the id comes from our own extraction, not the response
                    self.state.video_id = ticket.video_id.unwrap_or_default();
                    self.state.show_video_player = true;
                }
                self.state.results = Some(report);
                self.state.show_results = true;
                SubmitOutcome::Success
            }
            Err(err) => {
                let message = match err.to_string() {
                    m if m.is_empty() => ticket.kind.default_error().to_string(),
                    m => m,
                };
                log::warn!("{} check failed: {message}", ticket.kind);
                self.state.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Validate, call, apply, in one blocking sequence.
    pub fn submit_youtube(&mut self, backend: &dyn FactCheckBackend) -> SubmitOutcome {
        let ticket = match self.begin_youtube() {
            Ok(ticket) => ticket,
            Err(message) => return SubmitOutcome::Rejected(message),
        };
        let result = backend.check_youtube(&self.state.youtube_url);
        self.finish(ticket, result)
    }

    pub fn submit_text(&mut self, backend: &dyn FactCheckBackend) -> SubmitOutcome {
        let ticket = match self.begin_text() {
            Ok(ticket) => ticket,
            Err(message) => return SubmitOutcome::Rejected(message),
        };
        let result = backend.check_text(&self.state.text_input);
        self.finish(ticket, result)
    }

    pub fn submit_file(&mut self, backend: &dyn FactCheckBackend) -> SubmitOutcome {
        let (ticket, upload) = match self.begin_file() {
            Ok(pair) => pair,
            Err(message) => return SubmitOutcome::Rejected(message),
        };
        let result = backend.check_file(&upload);
        self.finish(ticket, result)
    }
}
