//! # Data Loader Crate
//!
//! This crate turns CSV text into movie records and supplies the demo catalog.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and its field defaults
//! - **parser**: Parse CSV documents into records, generate the CSV template
//! - **attachment**: Validate and read CSV files from disk
//! - **sample**: The built-in demo catalog
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{parse_movie_csv, sample_csv_template};
//!
//! let movies = parse_movie_csv(sample_csv_template());
//! assert_eq!(movies.len(), 2);
//! println!("{} ({})", movies[1].title, movies[1].release_date);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod attachment;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    MovieId,
    MovieRecord,
    DEFAULT_GENRE,
    DEFAULT_OVERVIEW,
    DEFAULT_POSTER_PATH,
    DEFAULT_TITLE,
};
pub use parser::{parse_movie_csv, parse_movie_csv_bytes, sample_csv_template, RecordField};
pub use attachment::{is_valid_csv_file, load_csv_file, load_csv_files, read_csv_file};
pub use sample::sample_movies;
