//! Final ordering of filtered movies.

use data_loader::MovieRecord;
use std::cmp::Ordering;

/// Sort movies by vote average, highest first.
///
/// The sort is stable: movies with equal ratings keep their input order.
pub fn rank_by_rating(mut movies: Vec<MovieRecord>) -> Vec<MovieRecord> {
    movies.sort_by(by_rating_desc);
    movies
}

/// Descending comparison on `vote_average`; NaN ratings sort last
pub fn by_rating_desc(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    match (a.vote_average.is_nan(), b.vote_average.is_nan()) {
        (false, false) => b.vote_average.total_cmp(&a.vote_average),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}
