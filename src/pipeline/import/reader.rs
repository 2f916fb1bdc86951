use std::path::Path;

use super::ImportError;
use crate::config::MAX_REPORT_BYTES;

/// Read extracted report text from disk.
///
/// Invalid UTF-8 is replaced rather than refused: OCR output often carries
/// stray bytes that should not sink a whole report.
pub fn read_report_text(path: &Path) -> Result<String, ImportError> {
    read_report_text_with_limit(path, MAX_REPORT_BYTES)
}

pub fn read_report_text_with_limit(path: &Path, max_bytes: u64) -> Result<String, ImportError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Report file not found");
        return Err(ImportError::FileNotFound(path.to_path_buf()));
    }

    let size_bytes = std::fs::metadata(path)?.len();
    if size_bytes > max_bytes {
        tracing::warn!(
            path = %path.display(),
            size_bytes,
            max_bytes,
            "Refusing oversized report file"
        );
        return Err(ImportError::FileTooLarge {
            size_bytes,
            max_bytes,
        });
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    if text.trim().is_empty() {
        return Err(ImportError::EmptyReport);
    }

    tracing::debug!(path = %path.display(), size_bytes, "Read report text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_utf8_text() {
        let file = write_temp("Biochemistry\nGlucose 92 mg/dL".as_bytes());
        let text = read_report_text(file.path()).unwrap();
        assert_eq!(text, "Biochemistry\nGlucose 92 mg/dL");
    }

    #[test]
    fn replaces_invalid_utf8() {
        let file = write_temp(b"Hematology\nHemoglobin 13.8 g/dL \xff\xfe");
        let text = read_report_text(file.path()).unwrap();
        assert!(text.contains("Hemoglobin 13.8 g/dL"));
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_report_text(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn oversized_file_is_refused() {
        let file = write_temp(&[b'a'; 64]);
        let result = read_report_text_with_limit(file.path(), 32);
        assert!(matches!(
            result,
            Err(ImportError::FileTooLarge {
                size_bytes: 64,
                max_bytes: 32
            })
        ));
    }

    #[test]
    fn whitespace_only_file_is_empty() {
        let file = write_temp(b"  \n\r\n\t ");
        let result = read_report_text(file.path());
        assert!(matches!(result, Err(ImportError::EmptyReport)));
    }
}
