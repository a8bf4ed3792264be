//! # volume-control-windows
//!
//! Windows WASAPI backend for volume-control.
//!
//! Provides:
//! - `EndpointVolumeController` — master volume and mute via `IAudioEndpointVolume`
//! - `DeviceEnumerator` — default render endpoint lookup via MMDevice API
//! - `hresult` — status code rendering
//!
//! ## Usage
//! ```ignore
//! use volume_control_core::AudioManager;
//! use volume_control_windows::EndpointVolumeController;
//!
//! let manager = AudioManager::new(EndpointVolumeController::new());
//! let state = manager.audio_state()?;
//! ```

pub mod hresult;

#[cfg(target_os = "windows")]
mod com;
#[cfg(target_os = "windows")]
pub mod device_enumerator;
#[cfg(target_os = "windows")]
pub mod endpoint_volume;

#[cfg(target_os = "windows")]
pub use device_enumerator::DeviceEnumerator;
#[cfg(target_os = "windows")]
pub use endpoint_volume::EndpointVolumeController;
