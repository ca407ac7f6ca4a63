//! # Album Entries
//!
//! An album entry is a single `Artist - Album` string. Nothing beyond the
//! string is stored; the artist/album split exists only for validation.
//!
//! Two entries are the same album when their trimmed, lower-cased full
//! strings are equal. [`DuplicateIndex`] applies that rule across the
//! current queue and any batch being merged into it.

use std::collections::HashSet;

const SEPARATOR: char = '-';

/// Splits `raw` into trimmed `(artist, album)` at the first `-`.
///
/// Returns `None` when the input is blank, has no separator, or either side
/// of the first separator is blank. Later dashes belong to the album part.
///
/// ```
/// use tolisten::album::split_artist_album;
///
/// assert_eq!(split_artist_album("A - B - C"), Some(("A", "B - C")));
/// assert_eq!(split_artist_album("Artist -"), None);
/// ```
#[must_use]
pub fn split_artist_album(raw: &str) -> Option<(&str, &str)> {
    let trimmed = raw.trim();
    let idx = trimmed.find(SEPARATOR)?;
    if idx == 0 || idx == trimmed.len() - SEPARATOR.len_utf8() {
        return None;
    }

    let artist = trimmed[..idx].trim();
    let album = trimmed[idx + SEPARATOR.len_utf8()..].trim();
    if artist.is_empty() || album.is_empty() {
        return None;
    }
    Some((artist, album))
}

/// Whether `raw` has the `Artist - Album` shape.
#[must_use]
pub fn is_valid_format(raw: &str) -> bool {
    split_artist_album(raw).is_some()
}

/// Key used for duplicate detection.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive set of albums seen so far in one operation.
#[derive(Debug, Default, Clone)]
pub struct DuplicateIndex {
    seen: HashSet<String>,
}

impl DuplicateIndex {
    /// Seeds the index from the albums already in the queue.
    pub fn from_albums<I, S>(albums: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            seen: albums.into_iter().map(|a| normalize(a.as_ref())).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, album: &str) -> bool {
        self.seen.contains(&normalize(album))
    }

    /// Records `album`. Returns `false` if an equivalent entry was already present.
    pub fn insert(&mut self, album: &str) -> bool {
        self.seen.insert(normalize(album))
    }
}
