/*!
 * Tests for loading typed text and uploaded files
 */

use anyhow::Result;
use textpulse::errors::AnalysisError;
use textpulse::input::{preview, require_text, FileManager, InputSource};
use crate::common;

/// Each supported extension is read as text
#[test]
fn test_readUpload_withSupportedExtensions_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    for name in ["review.txt", "rows.csv", "notes.md"] {
        let path = common::create_test_file(temp_dir.path(), name, "Hola mundo.")?;
        assert_eq!(FileManager::read_upload(&path)?, "Hola mundo.");
    }
    Ok(())
}

/// Invalid UTF-8 aborts with a decode error
#[test]
fn test_readUpload_withInvalidUtf8_shouldReturnDecodeError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_bytes(temp_dir.path(), "latin1.txt", b"caf\xe9 con leche")?;

    let err = FileManager::read_upload(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::Decode(_)), "unexpected error: {:?}", err);
    Ok(())
}

/// Other extensions are rejected before reading
#[test]
fn test_readUpload_withUnsupportedExtension_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "slides.pdf", "not really a pdf")?;

    assert!(matches!(FileManager::read_upload(&path), Err(AnalysisError::UnsupportedFile(_))));
    Ok(())
}

/// A missing file surfaces the io error
#[test]
fn test_readUpload_withMissingFile_shouldReturnFileError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("missing.txt");

    assert!(matches!(FileManager::read_upload(&path), Err(AnalysisError::File(_))));
    Ok(())
}

/// Both sources load through the same call
#[test]
fn test_inputSource_load_shouldReadTextAndFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "input.md", "# Título\nTexto.")?;

    let typed = InputSource::Text("Hola".to_string());
    assert_eq!(typed.load()?, "Hola");
    assert!(!typed.is_file());

    let uploaded = InputSource::File(path);
    assert_eq!(uploaded.load()?, "# Título\nTexto.");
    assert!(uploaded.is_file());
    Ok(())
}

/// Blank text asks the user for input
#[test]
fn test_requireText_withBlankText_shouldReturnEmptyInput() {
    let err = require_text("   \n").unwrap_err();
    assert_eq!(err.to_string(), "Please provide some text to analyze");
}

/// Preview keeps the first characters and marks the cut
#[test]
fn test_preview_withLongContent_shouldTruncateWithEllipsis() {
    let content = "ñ".repeat(1500);
    let shown = preview(&content, 1000);
    assert_eq!(shown.chars().count(), 1003);
    assert!(shown.ends_with("..."));
}
