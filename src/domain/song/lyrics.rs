//! Verse pagination for song lyrics.

/// Verses are separated by a blank line.
pub const VERSE_DELIMITER: &str = "\n\n";

pub const DEFAULT_VERSES_PER_PAGE: i64 = 3;

/// Returns page `page` (1-based) of `lyrics`, `per_page` verses at a time,
/// joined back with [`VERSE_DELIMITER`].
///
/// `page < 1` reads as the first page and `per_page < 1` as
/// [`DEFAULT_VERSES_PER_PAGE`]. A window past the last verse yields an
/// empty string.
pub fn paginate_verses(lyrics: &str, page: i64, per_page: i64) -> String {
    if lyrics.is_empty() {
        return String::new();
    }

    let page = page.max(1);
    let per_page = if per_page < 1 {
        DEFAULT_VERSES_PER_PAGE
    } else {
        per_page
    };

    let start = usize::try_from((page - 1).saturating_mul(per_page)).unwrap_or(usize::MAX);
    let take = usize::try_from(per_page).unwrap_or(usize::MAX);

    lyrics
        .split(VERSE_DELIMITER)
        .skip(start)
        .take(take)
        .collect::<Vec<_>>()
        .join(VERSE_DELIMITER)
}
