pub mod config;
pub mod song_info;
