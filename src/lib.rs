pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::song_service::{ServiceError, SongService};
pub use domain::song::{Page, Song, SongDetail, SongFilter, SongPayload};
pub use infra::config::Config;
pub use infra::song_info::{LookupError, SongInfoClient, SongInfoLookup};
pub use storage::songs::{PgSongStore, SongRepository, StoreError};
