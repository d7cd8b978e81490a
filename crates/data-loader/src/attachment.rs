//! Reading CSV attachments from disk.
//!
//! - Check that a file looks like CSV (extension or MIME type)
//! - Read it as UTF-8 text
//! - Load several files in parallel with Rayon

use crate::error::{DataLoadError, Result};
use crate::parser::parse_movie_csv_bytes;
use crate::types::MovieRecord;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// MIME types browsers report for CSV uploads
pub const CSV_MIME_TYPES: [&str; 3] = ["text/csv", "application/vnd.ms-excel", "application/csv"];

/// Whether a file should be accepted as a CSV attachment
///
/// Accepted if the MIME type is one of [`CSV_MIME_TYPES`] or the name ends
/// with `.csv` (any case).
pub fn is_valid_csv_file(name: &str, mime_type: Option<&str>) -> bool {
    let valid_type = mime_type.is_some_and(|mime| CSV_MIME_TYPES.contains(&mime));
    let valid_extension = name.to_lowercase().ends_with(".csv");
    valid_type || valid_extension
}

/// Read a CSV file as text
pub fn read_csv_file(path: &Path) -> Result<String> {
    let bytes = read_checked(path)?;
    String::from_utf8(bytes).map_err(|e| DataLoadError::InvalidInput {
        reason: format!("{} is not valid UTF-8: {}", path.display(), e.utf8_error()),
    })
}

/// Read and parse a single CSV file into movie records
pub fn load_csv_file(path: &Path) -> Result<Vec<MovieRecord>> {
    let bytes = read_checked(path)?;
    let movies = parse_movie_csv_bytes(&bytes)?;
    debug!("Loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Reject non-CSV names and missing files before reading the bytes
fn read_checked(path: &Path) -> Result<Vec<u8>> {
    let name = path.display().to_string();
    if !is_valid_csv_file(&name, None) {
        return Err(DataLoadError::UnsupportedFile { name });
    }
    if !path.exists() {
        return Err(DataLoadError::FileNotFound { path: name });
    }
    Ok(std::fs::read(path)?)
}

/// Load several CSV files IN PARALLEL and concatenate their records
///
/// Records keep file order (argument order), then row order within a file.
/// The first failing file aborts the whole load.
pub fn load_csv_files(paths: &[PathBuf]) -> Result<Vec<MovieRecord>> {
    // Indexed parallel iterators keep their order on collect
    let per_file: Vec<Vec<MovieRecord>> = paths
        .par_iter()
        .map(|path| load_csv_file(path))
        .collect::<Result<_>>()?;

    let movies: Vec<MovieRecord> = per_file.into_iter().flatten().collect();
    info!("Loaded {} movies from {} CSV files", movies.len(), paths.len());
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// A `.csv` temp file, removed when dropped
    fn temp_csv(contents: &[u8]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_is_valid_csv_file() {
        assert!(is_valid_csv_file("movies.csv", None));
        assert!(is_valid_csv_file("MOVIES.CSV", None));
        assert!(is_valid_csv_file("export", Some("text/csv")));
        assert!(is_valid_csv_file("export.dat", Some("application/vnd.ms-excel")));
        assert!(!is_valid_csv_file("movies.json", Some("application/json")));
        assert!(!is_valid_csv_file("movies.txt", None));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_csv_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_rejects_non_csv_name() {
        let err = load_csv_file(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedFile { .. }));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let file = temp_csv(&[b't', b'i', b't', b'l', b'e', b'\n', 0xe9]);
        let err = read_csv_file(file.path()).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidInput { .. }));
    }

    #[test]
    fn test_load_csv_files_keeps_order() {
        let first = temp_csv(b"id,title\n1,Alien\n2,Aliens");
        let second = temp_csv(b"id,title\n3,Alien 3");

        let paths = [first.path().to_path_buf(), second.path().to_path_buf()];
        let movies = load_csv_files(&paths).unwrap();
        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();

        assert_eq!(titles, vec!["Alien", "Aliens", "Alien 3"]);
    }

    #[test]
    fn test_load_csv_files_propagates_errors() {
        let good = temp_csv(b"title\nHeat");
        let missing = PathBuf::from("missing/nowhere.csv");

        assert!(load_csv_files(&[good.path().to_path_buf(), missing]).is_err());
    }

    #[test]
    fn test_load_csv_file_with_byte_order_mark() {
        let file = temp_csv(b"\xEF\xBB\xBFid,title\n10,Alien\n20,Heat");

        let movies = load_csv_file(file.path()).unwrap();
        let ids: Vec<u32> = movies.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![10, 20]);
    }
}
