use std::io::Read;
use std::path::Path;

use crate::validate::MAX_FILE_SIZE;

/// A document staged for upload: name, declared content type, size and
/// bytes, mirroring what a browser file picker hands over.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub data: Vec<u8>,
}

impl FileUpload {
    /// Read a document from disk. The content type is declared from the
    /// file extension, not sniffed from the bytes; the validator decides
    /// whether the declared type is acceptable.
    ///
    /// A file whose metadata already shows it over [`MAX_FILE_SIZE`] is
    /// staged with an empty body; the size check rejects it without the
    /// bytes ever being read.
    pub fn from_path(path: &Path) -> std::io::Result<FileUpload> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_for_extension(path).to_string();

        let size = std::fs::metadata(path)?.len();
        if size > MAX_FILE_SIZE {
            return Ok(FileUpload {
                name,
                mime,
                size,
                data: Vec::new(),
            });
        }

        // pipes and device files report a zero metadata size; the cap
        // bounds how much of one gets read before the size check trips
        let mut data = Vec::new();
        std::fs::File::open(path)?
            .take(MAX_FILE_SIZE + 1)
            .read_to_end(&mut data)?;

        Ok(FileUpload {
            name,
            mime,
            size: data.len() as u64,
            data,
        })
    }
}

/// Declared MIME type for the document extensions the service accepts.
/// Anything else maps to a generic type the validator rejects.
pub fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Human-readable byte count, e.g. "2.5 MB".
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    // two decimals, trailing zeros trimmed (2.50 -> 2.5)
    format!("{} {}", (value * 100.0).round() / 100.0, UNITS[exp])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension(Path::new("notes.txt")), "text/plain");
        assert_eq!(mime_for_extension(Path::new("paper.PDF")), "application/pdf");
        assert_eq!(
            mime_for_extension(Path::new("report.docx")),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(
            mime_for_extension(Path::new("photo.png")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_extension(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_size(2_621_440), "2.5 MB");
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claims.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"the earth is round").unwrap();

        let upload = FileUpload::from_path(&path).unwrap();
        assert_eq!(upload.name, "claims.txt");
        assert_eq!(upload.mime, "text/plain");
        assert_eq!(upload.size, 18);
        assert_eq!(upload.data, b"the earth is round");
    }

    #[test]
    fn test_from_path_oversized_file_skips_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        std::fs::File::create(&path)
            .unwrap()
            .set_len(MAX_FILE_SIZE + 1)
            .unwrap();

        let upload = FileUpload::from_path(&path).unwrap();
        assert_eq!(upload.size, MAX_FILE_SIZE + 1);
        assert!(upload.data.is_empty());

        // the staged entry still lands on the size rejection
        let validation = crate::validate::validate_file_input(Some(&upload));
        assert!(!validation.is_valid);
        assert_eq!(
            validation.message.as_deref(),
            Some("File size must be less than 5MB")
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(FileUpload::from_path(Path::new("/nonexistent/claims.txt")).is_err());
    }
}
