//! Core Audio volume controller for the default output device.

use parking_lot::Mutex;

use volume_control_core::models::error::AudioControllerError;
use volume_control_core::processing::volume::bound_volume;
use volume_control_core::traits::volume_controller::VolumeController;

use crate::hal::{AudioObjectApi, AudioObjectId, DeviceProperty, SYSTEM_OBJECT, UNKNOWN_OBJECT};
use crate::status;

/// Volume and mute access for the system default output device.
///
/// The device is resolved once at construction. If resolution fails the
/// id stays `kAudioObjectUnknown` and every operation returns
/// `AudioDeviceUnknown` until `refresh_default_device` succeeds.
pub struct CoreAudioController<A: AudioObjectApi> {
    api: A,
    device_id: Mutex<AudioObjectId>,
}

#[cfg(target_os = "macos")]
impl CoreAudioController<crate::system::SystemAudioObjects> {
    /// Controller backed by the real Core Audio HAL.
    pub fn system() -> Self {
        Self::new(crate::system::SystemAudioObjects)
    }
}

impl<A: AudioObjectApi> CoreAudioController<A> {
    pub fn new(api: A) -> Self {
        let controller = Self {
            api,
            device_id: Mutex::new(UNKNOWN_OBJECT),
        };
        // Failure is already logged; the unknown id is reported per operation.
        let _ = controller.resolve_default_device();
        controller
    }

    /// The currently resolved device id (`0` when unknown).
    pub fn device_id(&self) -> AudioObjectId {
        *self.device_id.lock()
    }

    fn resolve_default_device(&self) -> Result<AudioObjectId, AudioControllerError> {
        if !self
            .api
            .has_property(SYSTEM_OBJECT, DeviceProperty::DefaultOutputDevice)
        {
            log::warn!("System object has no default output device property");
        }

        match self
            .api
            .get_u32(SYSTEM_OBJECT, DeviceProperty::DefaultOutputDevice)
        {
            Ok(id) => {
                *self.device_id.lock() = id;
                log::debug!("Default output device: {:#x}", id);
                Ok(id)
            }
            Err(status) => {
                *self.device_id.lock() = UNKNOWN_OBJECT;
                log::warn!(
                    "Unable to get default output device: {}",
                    status::describe(status)
                );
                Err(AudioControllerError::CannotGetDefaultAudioDevice)
            }
        }
    }

    fn known_device(&self) -> Result<AudioObjectId, AudioControllerError> {
        let id = self.device_id();
        if id == UNKNOWN_OBJECT {
            return Err(AudioControllerError::AudioDeviceUnknown);
        }
        Ok(id)
    }

    fn check_volume_control(&self, device: AudioObjectId) -> Result<(), AudioControllerError> {
        if !self
            .api
            .has_property(device, DeviceProperty::VirtualMainVolume)
        {
            log::warn!("No volume control for device {:#x}", device);
            return Err(AudioControllerError::AudioDeviceHasNoVolumeControl);
        }
        Ok(())
    }

    /// The device has a mute control and it accepts writes.
    fn can_mute(&self, device: AudioObjectId) -> bool {
        if !self.api.has_property(device, DeviceProperty::Mute) {
            return false;
        }
        matches!(
            self.api.is_property_settable(device, DeviceProperty::Mute),
            Ok(true)
        )
    }
}

impl<A: AudioObjectApi> VolumeController for CoreAudioController<A> {
    fn system_volume(&self) -> Result<f32, AudioControllerError> {
        let device = self.known_device()?;
        self.check_volume_control(device)?;

        match self
            .api
            .get_f32(device, DeviceProperty::VirtualMainVolume)
        {
            Ok(volume) => Ok(bound_volume(volume)),
            Err(status) => {
                log::warn!(
                    "Unable to read volume for device {:#x}: {}",
                    device,
                    status::describe(status)
                );
                Err(AudioControllerError::CannotReadVolumeControl)
            }
        }
    }

    fn is_system_audio_muted(&self) -> Result<bool, AudioControllerError> {
        let device = self.known_device()?;
        if !self.can_mute(device) {
            return Ok(false);
        }

        match self.api.get_u32(device, DeviceProperty::Mute) {
            Ok(muted) => Ok(muted != 0),
            Err(status) => {
                log::debug!(
                    "Unable to read mute for device {:#x}: {}",
                    device,
                    status::describe(status)
                );
                Ok(false)
            }
        }
    }

    fn set_system_volume(&self, volume: f32) -> Result<(), AudioControllerError> {
        let volume = bound_volume(volume);
        let device = self.known_device()?;
        self.check_volume_control(device)?;

        self.api
            .set_f32(device, DeviceProperty::VirtualMainVolume, volume)
            .map_err(|status| {
                log::error!(
                    "Error setting volume on device {:#x}: {}",
                    device,
                    status::describe(status)
                );
                AudioControllerError::UnknownOsError { status }
            })
    }

    fn set_system_audio_muted(&self, muted: bool) -> Result<(), AudioControllerError> {
        let device = self.known_device()?;
        if !self.can_mute(device) {
            return Err(AudioControllerError::AudioDeviceHasNoMuteControl);
        }

        self.api
            .set_u32(device, DeviceProperty::Mute, u32::from(muted))
            .map_err(|status| {
                log::error!(
                    "Error muting device {:#x}: {}",
                    device,
                    status::describe(status)
                );
                AudioControllerError::UnknownOsError { status }
            })
    }

    fn refresh_default_device(&self) -> Result<(), AudioControllerError> {
        self.resolve_default_device().map(|_| ())
    }
}
