//! Filtered listing query construction.

use sqlx::{Postgres, QueryBuilder};

/// Recognized filter keys and the columns they match, in predicate order.
pub const FILTER_COLUMNS: [(&str, &str); 5] = [
    ("group", "group_name"),
    ("song", "song_title"),
    ("release", "release_date"),
    ("lyrics", "lyrics"),
    ("link", "youtube_link"),
];

pub const DEFAULT_LIMIT: i64 = 10;

const SELECT_SONGS: &str =
    "SELECT id, group_name, song_title, release_date, lyrics, youtube_link, created_at FROM songs";

/// Equality predicates for the song listing.
///
/// Only non-empty values for keys in [`FILTER_COLUMNS`] are kept. Conditions
/// are stored in `FILTER_COLUMNS` order regardless of input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    conditions: Vec<(&'static str, String)>,
}

impl SongFilter {
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut values: [Option<String>; FILTER_COLUMNS.len()] = Default::default();
        for (key, value) in params {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            if let Some(idx) = FILTER_COLUMNS
                .iter()
                .position(|(param, _)| *param == key.as_ref())
            {
                values[idx] = Some(value.to_string());
            }
        }

        let conditions = FILTER_COLUMNS
            .iter()
            .zip(values)
            .filter_map(|((_, column), value)| value.map(|v| (*column, v)))
            .collect();
        Self { conditions }
    }

    /// `(column, value)` pairs in predicate order.
    pub fn conditions(&self) -> &[(&'static str, String)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Appends ` AND column = $n` for every condition.
    pub fn push_predicates(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (column, value) in &self.conditions {
            qb.push(" AND ");
            qb.push(*column);
            qb.push(" = ");
            qb.push_bind(value.clone());
        }
    }
}

/// Offset/limit window for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Page {
    /// `limit` falls back to 10 when absent or not positive, `offset` to 0
    /// when absent or negative.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT),
            offset: offset.filter(|o| *o >= 0).unwrap_or(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Builds the parameterized listing query for `filter` windowed by `page`.
pub fn build_list_query(filter: &SongFilter, page: Page) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_SONGS);
    qb.push(" WHERE 1=1");
    filter.push_predicates(&mut qb);
    qb.push(" ORDER BY id LIMIT ");
    qb.push_bind(page.limit);
    qb.push(" OFFSET ");
    qb.push_bind(page.offset);
    qb
}
