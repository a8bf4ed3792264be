pub mod audio_state;
pub mod config;
pub mod error;
