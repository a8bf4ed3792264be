//! # volume-control-core
//!
//! Platform-agnostic core for controlling the system default audio output.
//!
//! Provides the `AudioState` value object, the `AudioControllerError`
//! enumeration, volume clamping, and the `AudioManager` orchestrator.
//! Platform-specific backends (macOS Core Audio, Windows WASAPI) implement
//! the `VolumeController` trait and plug into the generic `AudioManager`.
//!
//! ## Architecture
//!
//! ```text
//! volume-control-core (this crate)
//! ├── traits/       ← VolumeController
//! ├── models/       ← AudioControllerError, AudioState, ManagerConfiguration
//! ├── processing/   ← volume clamping and stepping
//! └── session/      ← AudioManager (generic orchestrator)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::audio_state::AudioState;
pub use models::config::ManagerConfiguration;
pub use models::error::AudioControllerError;
pub use processing::volume::{bound_volume, VolumeStep};
pub use session::manager::AudioManager;
pub use traits::volume_controller::VolumeController;
