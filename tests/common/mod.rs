//! In-memory stand-ins for the song store and the song info service.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use music_library_api::{
    LookupError, Page, Song, SongDetail, SongFilter, SongInfoLookup, SongPayload, SongRepository,
    SongService, StoreError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct InMemorySongStore {
    songs: Mutex<Vec<Song>>,
    next_id: AtomicUsize,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl InMemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.songs.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<Song> {
        self.songs.lock().unwrap().clone()
    }

    fn column<'a>(song: &'a Song, column: &str) -> &'a str {
        match column {
            "group_name" => &song.group_name,
            "song_title" => &song.song_title,
            "release_date" => &song.release_date,
            "lyrics" => &song.lyrics,
            "youtube_link" => &song.youtube_link,
            other => panic!("unexpected filter column {}", other),
        }
    }
}

#[async_trait]
impl SongRepository for InMemorySongStore {
    async fn list(&self, filter: &SongFilter, page: Page) -> Result<Vec<Song>, StoreError> {
        let mut songs: Vec<Song> = self
            .songs
            .lock()
            .unwrap()
            .iter()
            .filter(|s| {
                filter
                    .conditions()
                    .iter()
                    .all(|(column, value)| Self::column(s, column) == value)
            })
            .cloned()
            .collect();
        songs.sort_by_key(|s| s.id);
        Ok(songs
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Song, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.songs
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn insert(&self, song: &SongPayload) -> Result<i32, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        self.songs.lock().unwrap().push(Song {
            id,
            group_name: song.group_name.clone(),
            song_title: song.song_title.clone(),
            release_date: song.release_date.clone(),
            lyrics: song.lyrics.clone(),
            youtube_link: song.youtube_link.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update(&self, id: i32, song: &SongPayload) -> Result<u64, StoreError> {
        let mut songs = self.songs.lock().unwrap();
        match songs.iter_mut().find(|s| s.id == id) {
            Some(existing) => {
                existing.group_name = song.group_name.clone();
                existing.song_title = song.song_title.clone();
                existing.release_date = song.release_date.clone();
                existing.lyrics = song.lyrics.clone();
                existing.youtube_link = song.youtube_link.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let mut songs = self.songs.lock().unwrap();
        let before = songs.len();
        songs.retain(|s| s.id != id);
        Ok((before - songs.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Canned song info service answer.
pub enum StubAnswer {
    Detail(SongDetail),
    Status(u16),
    Malformed,
}

pub struct StubLookup {
    answer: StubAnswer,
    calls: AtomicUsize,
    pub last_query: Mutex<Option<(String, String)>>,
}

impl StubLookup {
    pub fn new(answer: StubAnswer) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn muse() -> Self {
        Self::new(StubAnswer::Detail(muse_detail()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SongInfoLookup for StubLookup {
    async fn fetch(&self, group: &str, song: &str) -> Result<SongDetail, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some((group.to_string(), song.to_string()));
        match &self.answer {
            StubAnswer::Detail(detail) => Ok(detail.clone()),
            StubAnswer::Status(code) => Err(LookupError::Status(*code)),
            StubAnswer::Malformed => Err(LookupError::Decode(
                serde_json::from_str::<SongDetail>("not json").unwrap_err(),
            )),
        }
    }
}

pub fn muse_detail() -> SongDetail {
    SongDetail {
        release_date: "16.07.2006".to_string(),
        text: "Ooh baby, don't you know I suffer?\n\nYou set my soul alight\n\nGlaciers melting"
            .to_string(),
        link: "https://youtu.be/Xsp3_a-PMTw".to_string(),
    }
}

pub fn service(
    store: Arc<InMemorySongStore>,
    lookup: Arc<StubLookup>,
) -> SongService {
    SongService::new(store, lookup)
}

/// Inserts a song directly into the store, bypassing enrichment.
pub async fn seed(store: &InMemorySongStore, group: &str, title: &str, release: &str) -> i32 {
    let mut payload = SongPayload::new(group, title);
    payload.release_date = release.to_string();
    payload.lyrics = format!("{} verse one\n\n{} verse two", title, title);
    store.insert(&payload).await.unwrap()
}
