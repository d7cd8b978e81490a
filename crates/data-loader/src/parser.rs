//! Parser for movie CSV documents.
//!
//! Format: a mandatory header row followed by data rows, one per line.
//!
//! ```text
//! id,title,overview,releaseDate,posterPath,voteAverage,genres,duration,director,cast
//! 1,"Inception","A thief ...","2010-07-15","/p.jpg",8.3,"Action|Sci-Fi","2h 28m","Christopher Nolan","Leonardo DiCaprio|Ellen Page"
//! ```
//!
//! - Columns may appear in any order; header names are matched case-insensitively
//! - A double quote toggles a quoted span in which commas are literal
//! - `genres` and `cast` hold pipe-separated values
//!
//! Parsing never fails on row content: a field that is missing or can't be
//! read falls back to the default documented on [`MovieRecord`].

use crate::error::{DataLoadError, Result};
use crate::types::*;
use tracing::{debug, warn};

// =============================================================================
// Column mapping
// =============================================================================

/// The record fields a CSV column can populate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Title,
    Overview,
    ReleaseDate,
    PosterPath,
    VoteAverage,
    Genres,
    Duration,
    Director,
    Cast,
}

const FIELD_COUNT: usize = 10;

/// Normalized (lowercase) header name -> field
const HEADER_TABLE: [(&str, RecordField); FIELD_COUNT] = [
    ("id", RecordField::Id),
    ("title", RecordField::Title),
    ("overview", RecordField::Overview),
    ("releasedate", RecordField::ReleaseDate),
    ("posterpath", RecordField::PosterPath),
    ("voteaverage", RecordField::VoteAverage),
    ("genres", RecordField::Genres),
    ("duration", RecordField::Duration),
    ("director", RecordField::Director),
    ("cast", RecordField::Cast),
];

impl RecordField {
    /// Look up a header cell. Surrounding whitespace and case are ignored.
    ///
    /// Example: " ReleaseDate " -> Some(RecordField::ReleaseDate)
    ///          "rating" -> None
    pub fn from_header(header: &str) -> Option<Self> {
        let normalized = header.trim().to_lowercase();
        HEADER_TABLE
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|&(_, field)| field)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Which column index feeds each field, resolved once from the header row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: [Option<usize>; FIELD_COUNT],
}

impl ColumnMap {
    /// Build the mapping from a header row
    ///
    /// Header cells are split on plain commas. Unrecognized names are
    /// skipped; when a name repeats, the first column wins.
    pub fn from_header_row(header_row: &str) -> Self {
        let mut map = ColumnMap::default();
        for (index, cell) in header_row.split(',').enumerate() {
            if let Some(field) = RecordField::from_header(cell) {
                map.columns[field.slot()].get_or_insert(index);
            }
        }
        map
    }

    /// Column index for `field`, if the header named it
    pub fn index_of(&self, field: RecordField) -> Option<usize> {
        self.columns[field.slot()]
    }

    /// Number of recognized columns
    pub fn len(&self) -> usize {
        self.columns.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a whole CSV document into movie records
///
/// Returns one record per non-blank data row, in input order.
pub fn parse_movie_csv(text: &str) -> Vec<MovieRecord> {
    let mut rows = text.split('\n');
    // Spreadsheet exports often start with a UTF-8 byte-order mark
    let header_row = rows
        .next()
        .unwrap_or_default()
        .trim_start_matches('\u{feff}');
    let columns = ColumnMap::from_header_row(header_row);

    if columns.is_empty() && !header_row.trim().is_empty() {
        warn!(
            "CSV header has no recognized columns, every record will use defaults: {:?}",
            header_row.trim()
        );
    }

    let movies: Vec<MovieRecord> = rows
        .filter(|row| !row.trim().is_empty()) // Skip blank rows
        .enumerate()
        .map(|(index, row)| parse_record(row, &columns, index + 1))
        .collect();

    debug!(
        "Parsed {} movie records from {} recognized columns",
        movies.len(),
        columns.len()
    );
    movies
}

/// Parse CSV bytes, rejecting input that isn't UTF-8 text
pub fn parse_movie_csv_bytes(bytes: &[u8]) -> Result<Vec<MovieRecord>> {
    let text = std::str::from_utf8(bytes).map_err(|e| DataLoadError::InvalidInput {
        reason: format!("CSV content is not valid UTF-8: {}", e),
    })?;
    Ok(parse_movie_csv(text))
}

/// Build one record from a data row
///
/// `position` is the 1-based index among non-blank data rows and doubles as
/// the id when the row doesn't carry a usable one.
fn parse_record(row: &str, columns: &ColumnMap, position: usize) -> MovieRecord {
    let values = split_row(row);

    // Empty cells count as missing
    let value = |field: RecordField| {
        columns
            .index_of(field)
            .and_then(|i| values.get(i))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    };
    let text = |field: RecordField, default: &'static str| {
        value(field).unwrap_or(default).to_string()
    };

    let id = value(RecordField::Id)
        .and_then(parse_leading_int)
        .or_else(|| MovieId::try_from(position).ok())
        .unwrap_or(0);

    MovieRecord {
        id,
        title: text(RecordField::Title, DEFAULT_TITLE),
        overview: text(RecordField::Overview, DEFAULT_OVERVIEW),
        release_date: value(RecordField::ReleaseDate)
            .map(str::to_string)
            .unwrap_or_else(today),
        poster_path: text(RecordField::PosterPath, DEFAULT_POSTER_PATH),
        vote_average: value(RecordField::VoteAverage)
            .and_then(parse_leading_float)
            .unwrap_or(0.0),
        genres: value(RecordField::Genres)
            .map(split_multi_value)
            .unwrap_or_else(|| vec![DEFAULT_GENRE.to_string()]),
        duration: value(RecordField::Duration).map(str::to_string),
        director: value(RecordField::Director).map(str::to_string),
        cast: value(RecordField::Cast).map(split_multi_value),
    }
}

/// Split one CSV row into trimmed fields
///
/// A double quote flips an "inside quotes" flag and is dropped; while the
/// flag is set, commas are kept as content. Escaped quotes (`""`) and
/// quoted newlines are not supported.
///
/// Example: `1,"Action, Adventure", x` -> ["1", "Action, Adventure", "x"]
pub fn split_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in row.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    // Last field
    fields.push(current.trim().to_string());
    fields
}

/// Split a pipe-separated cell: "Drama| Crime" -> ["Drama", "Crime"]
fn split_multi_value(cell: &str) -> Vec<String> {
    cell.split('|').map(|part| part.trim().to_string()).collect()
}

/// Read the integer at the start of `s`, ignoring trailing text
///
/// Example: "42" -> Some(42), "12abc" -> Some(12), "abc" -> None, "-3" -> None
fn parse_leading_int(s: &str) -> Option<MovieId> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Read the decimal number at the start of `s`, ignoring trailing text
///
/// Example: "8.3" -> Some(8.3), "7.5/10" -> Some(7.5), ".5" -> Some(0.5), "n/a" -> None
fn parse_leading_float(s: &str) -> Option<f32> {
    let bytes = s.trim_start().as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    std::str::from_utf8(&bytes[..end]).ok()?.parse().ok()
}

// =============================================================================
// Template
// =============================================================================

const SAMPLE_CSV_TEMPLATE: &str = concat!(
    "id,title,overview,releaseDate,posterPath,voteAverage,genres,duration,director,cast\n",
    r#"1,"The Shawshank Redemption","Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.","1994-09-23","/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",8.7,"Drama|Crime","2h 22m","Frank Darabont","Tim Robbins|Morgan Freeman|Bob Gunton""#,
    "\n",
    r#"2,"Inception","A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.","2010-07-15","/8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg",8.3,"Action|Adventure|Sci-Fi|Thriller","2h 28m","Christopher Nolan","Leonardo DiCaprio|Joseph Gordon-Levitt|Ellen Page""#,
);

/// A ready-to-fill CSV document: the canonical header plus two example rows
///
/// Parsing the template yields exactly the two example records.
pub fn sample_csv_template() -> &'static str {
    SAMPLE_CSV_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "id,title,overview,releaseDate,posterPath,voteAverage,genres,duration,director,cast";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_template_round_trip() {
        let movies = parse_movie_csv(sample_csv_template());
        assert_eq!(movies.len(), 2);

        let shawshank = MovieRecord {
            id: 1,
            title: "The Shawshank Redemption".to_string(),
            overview: "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.".to_string(),
            release_date: "1994-09-23".to_string(),
            poster_path: "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg".to_string(),
            vote_average: 8.7,
            genres: strings(&["Drama", "Crime"]),
            duration: Some("2h 22m".to_string()),
            director: Some("Frank Darabont".to_string()),
            cast: Some(strings(&["Tim Robbins", "Morgan Freeman", "Bob Gunton"])),
        };
        let inception = MovieRecord {
            id: 2,
            title: "Inception".to_string(),
            overview: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.".to_string(),
            release_date: "2010-07-15".to_string(),
            poster_path: "/8IB2e4r4oVhHnANbnm7O3Tj6tF8.jpg".to_string(),
            vote_average: 8.3,
            genres: strings(&["Action", "Adventure", "Sci-Fi", "Thriller"]),
            duration: Some("2h 28m".to_string()),
            director: Some("Christopher Nolan".to_string()),
            cast: Some(strings(&["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Ellen Page"])),
        };

        assert_eq!(movies, vec![shawshank, inception]);
    }

    #[test]
    fn test_quoted_row_with_multi_values() {
        let csv = format!(
            "{}\n{}",
            HEADER,
            r#"1,"Test Movie","An overview, with a comma","2020-01-01","/p.jpg",7.5,"Drama|Comedy","1h 30m","Dir","A|B""#
        );
        let movies = parse_movie_csv(&csv);

        assert_eq!(movies.len(), 1);
        let movie = &movies[0];
        assert_eq!(movie.title, "Test Movie");
        assert_eq!(movie.overview, "An overview, with a comma");
        assert_eq!(movie.genres, strings(&["Drama", "Comedy"]));
        assert_eq!(movie.cast, Some(strings(&["A", "B"])));
        assert_eq!(movie.vote_average, 7.5);
        assert_eq!(movie.duration.as_deref(), Some("1h 30m"));
    }

    #[test]
    fn test_non_numeric_vote_average_defaults_to_zero() {
        let csv = "id,title,voteAverage,genres\n3,Heat,not rated,Crime|Drama";
        let movies = parse_movie_csv(csv);

        assert_eq!(movies[0].vote_average, 0.0);
        assert_eq!(movies[0].id, 3);
        assert_eq!(movies[0].title, "Heat");
        assert_eq!(movies[0].genres, strings(&["Crime", "Drama"]));
    }

    #[test]
    fn test_blank_lines_are_skipped_and_not_counted() {
        let csv = "title\nFirst\n\n   \nSecond\n";
        let movies = parse_movie_csv(csv);

        assert_eq!(movies.len(), 2);
        // ids fall back to position among emitted rows
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[1].id, 2);
        assert_eq!(movies[1].title, "Second");
    }

    #[test]
    fn test_id_fallbacks() {
        let csv = "id,title\n,No Id\nabc,Bad Id\n12abc,Prefix Id\n40,Good Id";
        let ids: Vec<MovieId> = parse_movie_csv(csv).iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![1, 2, 12, 40]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let csv = "id,title\n5,A\n5,B";
        let movies = parse_movie_csv(csv);

        assert_eq!(movies.len(), 2);
        assert!(movies.iter().all(|m| m.id == 5));
    }

    #[test]
    fn test_headers_case_insensitive_reordered_and_unknown() {
        let csv = "GENRES, Rating ,TITLE,VoteAverage\nHorror|Thriller,R,Alien,8.5";
        let movies = parse_movie_csv(csv);
        let movie = &movies[0];

        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.vote_average, 8.5);
        assert_eq!(movie.genres, strings(&["Horror", "Thriller"]));
        assert_eq!(movie.overview, DEFAULT_OVERVIEW);
        assert_eq!(movie.poster_path, DEFAULT_POSTER_PATH);
        assert_eq!(movie.director, None);
        assert_eq!(movie.cast, None);
    }

    #[test]
    fn test_missing_and_empty_fields_use_defaults() {
        let csv = "id,title,overview,genres,director\n9,,  ,";
        let movie = &parse_movie_csv(csv)[0];

        assert_eq!(movie.id, 9);
        assert_eq!(movie.title, DEFAULT_TITLE);
        assert_eq!(movie.overview, DEFAULT_OVERVIEW);
        assert_eq!(movie.genres, strings(&[DEFAULT_GENRE]));
        assert_eq!(movie.director, None);
        assert_eq!(movie.release_date, today());
    }

    #[test]
    fn test_crlf_line_endings() {
        let csv = "id,title,voteAverage\r\n1,Up,8.2\r\n\r\n2,Coco,8.4\r\n";
        let movies = parse_movie_csv(csv);

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].vote_average, 8.2);
        assert_eq!(movies[1].title, "Coco");
    }

    #[test]
    fn test_empty_and_header_only_input() {
        assert!(parse_movie_csv("").is_empty());
        assert!(parse_movie_csv(HEADER).is_empty());
        assert!(parse_movie_csv(&format!("{}\n\n", HEADER)).is_empty());
    }

    #[test]
    fn test_byte_order_mark_before_header() {
        let csv = "\u{feff}id,title,voteAverage\n10,Alien,8.5\n20,Heat,8.3";
        let movies = parse_movie_csv(csv);

        let ids: Vec<MovieId> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 20]);
        assert_eq!(movies[0].title, "Alien");
    }

    #[test]
    fn test_split_row_quote_toggle() {
        assert_eq!(
            split_row(r#"1, "Action, Adventure" ,x"#),
            strings(&["1", "Action, Adventure", "x"])
        );
        // Unterminated quote swallows the rest of the row
        assert_eq!(split_row(r#"a,"b,c"#), strings(&["a", "b,c"]));
        assert_eq!(split_row(""), strings(&[""]));
    }

    #[test]
    fn test_column_map_first_duplicate_wins() {
        let columns = ColumnMap::from_header_row("title,Title,cast");

        assert_eq!(columns.index_of(RecordField::Title), Some(0));
        assert_eq!(columns.index_of(RecordField::Cast), Some(2));
        assert_eq!(columns.index_of(RecordField::Id), None);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn test_template_header_maps_every_field() {
        let header = sample_csv_template().lines().next().unwrap_or_default();
        let columns = ColumnMap::from_header_row(header);

        assert_eq!(columns.len(), FIELD_COUNT);
        for (index, (_, field)) in HEADER_TABLE.into_iter().enumerate() {
            assert_eq!(columns.index_of(field), Some(index));
        }
    }

    #[test]
    fn test_leading_number_parsing() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("7.9"), Some(7));
        assert_eq!(parse_leading_int("-3"), None);
        assert_eq!(parse_leading_int(""), None);

        assert_eq!(parse_leading_float("8.3"), Some(8.3));
        assert_eq!(parse_leading_float("7.5/10"), Some(7.5));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("1e1x"), Some(10.0));
        assert_eq!(parse_leading_float("6e"), Some(6.0));
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("n/a"), None);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = parse_movie_csv_bytes(&[b't', b'i', 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidInput { .. }));

        let movies = parse_movie_csv_bytes(b"title\nArrival").unwrap();
        assert_eq!(movies[0].title, "Arrival");
    }
}
