//! Default render endpoint lookup via the MMDevice API.
//!
//! Wraps `IMMDeviceEnumerator` to find the system default output
//! (speaker/headphone) endpoint.

use windows::Win32::Media::Audio::*;
use windows::Win32::System::Com::*;

use volume_control_core::models::error::AudioControllerError;

/// Audio device enumerator using the Windows MMDevice API.
pub struct DeviceEnumerator {
    enumerator: IMMDeviceEnumerator,
}

impl DeviceEnumerator {
    /// Create a new device enumerator.
    ///
    /// Requires COM to be initialized on the calling thread.
    pub fn new() -> Result<Self, AudioControllerError> {
        unsafe {
            let enumerator: IMMDeviceEnumerator =
                CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL).map_err(|e| {
                    log::warn!("Failed to create device enumerator: {}", e);
                    AudioControllerError::CannotGetDefaultAudioDevice
                })?;
            Ok(Self { enumerator })
        }
    }

    /// The default render endpoint for the console role.
    ///
    /// A system with no active output endpoint reports `AudioDeviceUnknown`.
    pub fn default_render_device(&self) -> Result<IMMDevice, AudioControllerError> {
        unsafe {
            self.enumerator
                .GetDefaultAudioEndpoint(eRender, eConsole)
                .map_err(|e| {
                    log::warn!("Unable to get default output device: {}", e);
                    AudioControllerError::AudioDeviceUnknown
                })
        }
    }

    /// Endpoint ID string of a device.
    pub fn device_id(device: &IMMDevice) -> Option<String> {
        unsafe {
            let id = device.GetId().ok()?;
            let text = id.to_string().ok();
            CoTaskMemFree(Some(id.0 as *const _));
            text
        }
    }
}
