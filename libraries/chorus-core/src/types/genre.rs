//! Genre types

use serde::{Deserialize, Serialize};

/// A music genre.
///
/// Genres parsed out of delimited tag strings carry only their `id` (the
/// raw token); `name` is filled when the genre is read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
}

pub type Genres = Vec<Genre>;
