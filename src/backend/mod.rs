pub mod errors;
pub mod remote;

pub use errors::BackendError;
pub use remote::RemoteBackend;

use crate::report::FactReport;
use crate::upload::FileUpload;

/// The fact-checking service as the client sees it: one endpoint per
/// input kind, one attempt per call, no retries.
pub trait FactCheckBackend {
    fn check_youtube(&self, url: &str) -> anyhow::Result<FactReport, BackendError>;

    fn check_text(&self, text: &str) -> anyhow::Result<FactReport, BackendError>;

    fn check_file(&self, upload: &FileUpload) -> anyhow::Result<FactReport, BackendError>;
}
