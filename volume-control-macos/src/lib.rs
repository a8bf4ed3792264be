//! # volume-control-macos
//!
//! macOS Core Audio backend for volume-control.
//!
//! Provides:
//! - `CoreAudioController` — master volume and mute of the default output device
//! - `hal` — the audio-object calls the controller depends on
//! - `status` — `OSStatus` four-char-code rendering
//!
//! The controller is generic over `AudioObjectApi`; on macOS,
//! `CoreAudioController::system()` binds it to the real HAL.
//!
//! ## Usage
//! ```ignore
//! use volume_control_core::AudioManager;
//! use volume_control_macos::CoreAudioController;
//!
//! let manager = AudioManager::new(CoreAudioController::system());
//! let state = manager.audio_state()?;
//! ```

pub mod controller;
pub mod hal;
pub mod status;
#[cfg(target_os = "macos")]
pub mod system;

pub use controller::CoreAudioController;
pub use hal::{AudioObjectApi, DeviceProperty};
#[cfg(target_os = "macos")]
pub use system::SystemAudioObjects;
