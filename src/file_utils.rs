use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::text_stats::normalize_newlines;

// @module: File utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @returns: Size of the file in bytes
    pub fn file_size<P: AsRef<Path>>(path: P) -> Result<u64, AppError> {
        let path = path.as_ref();
        fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|e| AppError::IoFailure(format!("Failed to stat {:?}: {}", path, e)))
    }

    // @generates: Output path for a translated text file
    // @params: input_file, target_language
    // `dir/text.txt` + `uk` -> `dir/text_uk.txt`; files without extension get `.txt`
    pub fn generate_output_path<P: AsRef<Path>>(input_file: P, target_language: &str) -> PathBuf {
        let input_file = input_file.as_ref();

        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();
        let extension = input_file
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_else(|| ".txt".to_string());

        let output_filename = format!("{}_{}{}", stem, target_language, extension);
        match input_file.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        }
    }

    /// Read a file to a string with `\r\n` and `\r` line breaks as `\n`
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(AppError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::IoFailure(format!("Failed to read file {:?}: {}", path, e)))?;
        Ok(normalize_newlines(&content).into_owned())
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), AppError> {
        let path = path.as_ref();
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(path, content)
            .map_err(|e| AppError::IoFailure(format!("Failed to write to file {:?}: {}", path, e)))
    }
}
