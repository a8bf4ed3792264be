//! Master volume and mute of the default render endpoint via
//! `IAudioEndpointVolume`.

use windows::Win32::Media::Audio::Endpoints::IAudioEndpointVolume;
use windows::Win32::System::Com::CLSCTX_ALL;

use volume_control_core::models::error::AudioControllerError;
use volume_control_core::processing::volume::bound_volume;
use volume_control_core::traits::volume_controller::VolumeController;

use crate::com::ComApartment;
use crate::device_enumerator::DeviceEnumerator;
use crate::hresult;

/// Volume controller for the system default output endpoint.
///
/// Holds no COM objects: every call joins a COM apartment, looks up the
/// current default endpoint and activates its `IAudioEndpointVolume`, so the
/// controller follows default-device changes and can be shared across threads.
#[derive(Debug, Default)]
pub struct EndpointVolumeController;

impl EndpointVolumeController {
    pub fn new() -> Self {
        Self
    }

    /// Run `f` against the default endpoint's volume interface.
    ///
    /// `no_control` is returned when the endpoint cannot provide
    /// `IAudioEndpointVolume`.
    fn with_endpoint<T>(
        &self,
        no_control: AudioControllerError,
        f: impl FnOnce(&IAudioEndpointVolume) -> Result<T, AudioControllerError>,
    ) -> Result<T, AudioControllerError> {
        let _com = ComApartment::enter()?;

        let enumerator = DeviceEnumerator::new()?;
        let device = enumerator.default_render_device()?;

        let endpoint: IAudioEndpointVolume = unsafe { device.Activate(CLSCTX_ALL, None) }
            .map_err(|e| {
                log::warn!(
                    "No endpoint volume for device {}: {}",
                    DeviceEnumerator::device_id(&device).unwrap_or_default(),
                    e
                );
                no_control
            })?;

        f(&endpoint)
    }
}

fn os_error(action: &str, e: windows::core::Error) -> AudioControllerError {
    let status = e.code().0;
    log::error!("Error {}: {}", action, hresult::describe(status));
    AudioControllerError::UnknownOsError { status }
}

impl VolumeController for EndpointVolumeController {
    fn system_volume(&self) -> Result<f32, AudioControllerError> {
        self.with_endpoint(
            AudioControllerError::AudioDeviceHasNoVolumeControl,
            |endpoint| {
                let level = unsafe { endpoint.GetMasterVolumeLevelScalar() }.map_err(|e| {
                    log::warn!("Unable to read volume: {}", hresult::describe(e.code().0));
                    AudioControllerError::CannotReadVolumeControl
                })?;
                Ok(bound_volume(level))
            },
        )
    }

    fn is_system_audio_muted(&self) -> Result<bool, AudioControllerError> {
        let result = self.with_endpoint(
            AudioControllerError::AudioDeviceHasNoMuteControl,
            |endpoint| match unsafe { endpoint.GetMute() } {
                Ok(muted) => Ok(muted.as_bool()),
                Err(e) => {
                    log::debug!("Unable to read mute: {}", hresult::describe(e.code().0));
                    Ok(false)
                }
            },
        );
        match result {
            Err(AudioControllerError::AudioDeviceHasNoMuteControl) => Ok(false),
            other => other,
        }
    }

    fn set_system_volume(&self, volume: f32) -> Result<(), AudioControllerError> {
        let volume = bound_volume(volume);
        self.with_endpoint(
            AudioControllerError::AudioDeviceHasNoVolumeControl,
            |endpoint| {
                unsafe { endpoint.SetMasterVolumeLevelScalar(volume, std::ptr::null()) }
                    .map_err(|e| os_error("setting volume", e))
            },
        )
    }

    fn set_system_audio_muted(&self, muted: bool) -> Result<(), AudioControllerError> {
        self.with_endpoint(
            AudioControllerError::AudioDeviceHasNoMuteControl,
            |endpoint| {
                unsafe { endpoint.SetMute(muted, std::ptr::null()) }
                    .map_err(|e| os_error("muting device", e))
            },
        )
    }
}
