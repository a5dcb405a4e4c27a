//! Input validation for the three submission kinds.
//!
//! Validators are pure: they look at the input and return a fresh
//! [`ValidationResult`], never touching session state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::upload::FileUpload;

/// Largest accepted upload, 5 MiB. A file of exactly this size passes.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Content types the service accepts for document uploads.
pub const ACCEPTED_FILE_TYPES: [&str; 3] = [
    "application/pdf",
    "text/plain",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

// Shape check: scheme and www. optional, host must be youtube.com or
// youtu.be. Deliberately loose about the path; extraction decides
// whether a video id is actually present.
static YOUTUBE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/(watch\?v=|embed/|v/|.+\?v=)?([^&\n?#]+)")
        .expect("youtube url pattern compiles")
});

// The id ends at the first `&`, newline, `?` or `#`.
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([^&\n?#]+)")
        .expect("video id pattern compiles")
});

/// Outcome of validating one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: Option<String>,
    pub video_id: Option<String>,
}

impl ValidationResult {
    fn ok() -> ValidationResult {
        ValidationResult {
            is_valid: true,
            message: None,
            video_id: None,
        }
    }

    fn ok_with_video(video_id: String) -> ValidationResult {
        ValidationResult {
            is_valid: true,
            message: None,
            video_id: Some(video_id),
        }
    }

    fn fail(message: &str) -> ValidationResult {
        ValidationResult {
            is_valid: false,
            message: Some(message.to_string()),
            video_id: None,
        }
    }
}

/// True when the string has a recognizable YouTube URL shape. The input
/// is matched as-is: no trimming, case-sensitive host.
pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL_REGEX.is_match(url)
}

/// Extract the video id from a watch, embed or short-link URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_REGEX
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// A URL is valid only if it both looks like YouTube and yields a video
/// id; URL-shaped strings without one (playlists, channel pages) fail
/// with a distinct message.
pub fn validate_youtube_url(url: &str) -> ValidationResult {
    if url.is_empty() {
        return ValidationResult::fail("Please enter a YouTube URL");
    }
    if !is_youtube_url(url) {
        return ValidationResult::fail("Please enter a valid YouTube URL");
    }
    match extract_video_id(url) {
        Some(video_id) => ValidationResult::ok_with_video(video_id),
        None => ValidationResult::fail("Could not extract video ID from URL"),
    }
}

pub fn validate_text_input(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::fail("Please enter some text to fact-check");
    }
    ValidationResult::ok()
}

/// Checks run in a fixed order: presence, then declared type, then size,
/// reporting the first failure only.
pub fn validate_file_input(file: Option<&FileUpload>) -> ValidationResult {
    let file = match file {
        Some(file) => file,
        None => return ValidationResult::fail("Please select a file"),
    };
    if !ACCEPTED_FILE_TYPES.contains(&file.mime.as_str()) {
        return ValidationResult::fail("Only PDF, DOCX, or TXT files are supported");
    }
    if file.size > MAX_FILE_SIZE {
        return ValidationResult::fail("File size must be less than 5MB");
    }
    ValidationResult::ok()
}
