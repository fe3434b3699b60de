//! Resolution of multi-valued, possibly disagreeing metadata.
//!
//! Media files ripped or tagged by different tools frequently disagree on
//! external identifiers and duplicate genre tags; these helpers collapse
//! the candidates into canonical values. Malformed or empty input is
//! never an error here, it just degrades to an empty result.

use chorus_core::types::{Genre, Genres};
use std::collections::{HashMap, HashSet};

/// Pick the most frequent MusicBrainz id among up to three
/// whitespace-delimited candidate lists.
///
/// Ties break toward the first token (in input order) to reach the
/// winning count, so the result is deterministic regardless of map
/// internals.
pub fn most_frequent_mbz_id(source_a: &str, source_b: &str, source_c: &str) -> String {
    let all = format!("{source_a} {source_b} {source_c}");
    let ids: Vec<&str> = all.split_whitespace().collect();

    match ids.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        _ => {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            let mut winner = "";
            let mut winner_count = 0;
            for &id in &ids {
                let count = counts.entry(id).or_insert(0);
                *count += 1;
                if *count > winner_count {
                    winner_count = *count;
                    winner = id;
                }
            }
            winner.to_string()
        }
    }
}

/// Parse a whitespace-delimited genre string into a deduplicated list.
///
/// Output order is first-occurrence order; each genre carries the raw
/// token as its id and is named later, when linked to a stored genre row.
pub fn parse_genres(genres: &str) -> Genres {
    let mut seen = HashSet::new();
    let mut out = Genres::new();
    for token in genres.split_whitespace() {
        if seen.insert(token) {
            out.push(Genre {
                id: token.to_string(),
                name: String::new(),
            });
        }
    }
    out
}
