pub mod song_service;
