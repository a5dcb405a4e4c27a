use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::report::FactReport;
use crate::upload::FileUpload;

use super::{errors::BackendError, FactCheckBackend};

/// Blocking HTTP client for the fact-checking service.
pub struct RemoteBackend {
    remote_addr: String,
    client: reqwest::blocking::Client,
}

impl RemoteBackend {
    /// `addr` is the service base URL, with or without a trailing slash.
    /// A request waits on the service indefinitely unless `timeout` is
    /// given; slow checks (whole videos get transcribed) are normal.
    pub fn new(addr: &str, timeout: Option<Duration>) -> Result<RemoteBackend, BackendError> {
        let remote_addr = addr.strip_suffix('/').unwrap_or(addr).to_string();

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(RemoteBackend {
            remote_addr,
            client,
        })
    }

    fn post(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        log::info!("{}{}", self.remote_addr, path);
        let url = format!("{}{}", self.remote_addr, path);

        self.client.post(&url)
    }
}

/// Best-effort extraction of a human-readable message from an error
/// body: `detail`, then `message`, skipping empty strings. Bodies that
/// are not JSON at all yield "Unknown error".
fn error_message(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(body) => body
            .get("detail")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .or_else(|| {
                body.get("message")
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
            })
            .unwrap_or("API request failed")
            .to_string(),
        Err(_) => "Unknown error".to_string(),
    }
}

fn handle_response<T>(response: reqwest::blocking::Response) -> Result<T, BackendError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let text = response.text()?;

    if !status.is_success() {
        let message = error_message(&text);
        log::warn!("service returned {status}: {message}");
        return Err(BackendError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let data = serde_json::from_str::<T>(&text).map_err(|err| {
        log::error!("{err}. tried to parse: {text:?}");
        err
    })?;

    Ok(data)
}

impl FactCheckBackend for RemoteBackend {
    fn check_youtube(&self, url: &str) -> anyhow::Result<FactReport, BackendError> {
        let resp = self
            .post("/youtube")
            .json(&json!({
                "url": url,
            }))
            .send()?;

        handle_response(resp)
    }

    fn check_text(&self, text: &str) -> anyhow::Result<FactReport, BackendError> {
        let resp = self
            .post("/text")
            .json(&json!({
                "text": text,
            }))
            .send()?;

        handle_response(resp)
    }

    fn check_file(&self, upload: &FileUpload) -> anyhow::Result<FactReport, BackendError> {
        let part = reqwest::blocking::multipart::Part::bytes(upload.data.clone())
            .file_name(upload.name.clone())
            .mime_str(&upload.mime)?;
        let form = reqwest::blocking::multipart::Form::new().part("file", part);

        let resp = self.post("/file").multipart(form).send()?;

        handle_response(resp)
    }
}
