use crate::models::error::AudioControllerError;

/// Interface for platform-specific access to the default output device.
///
/// Implemented by:
/// - `CoreAudioController` (macOS)
/// - `EndpointVolumeController` (Windows)
///
/// Every implementation follows the same guard order: the device must be
/// known, then the control must exist, then the OS call is made.
pub trait VolumeController: Send + Sync {
    /// Master volume of the default output device, clamped to [0.0, 1.0].
    ///
    /// Fails with `AudioDeviceUnknown`, `AudioDeviceHasNoVolumeControl`
    /// or `CannotReadVolumeControl`.
    fn system_volume(&self) -> Result<f32, AudioControllerError>;

    /// Mute flag of the default output device.
    ///
    /// A device without a settable mute control, or whose mute control
    /// cannot be read, reports `false`. Only an unknown device is an error.
    fn is_system_audio_muted(&self) -> Result<bool, AudioControllerError>;

    /// Set the master volume. The value is clamped before it reaches the OS.
    fn set_system_volume(&self, volume: f32) -> Result<(), AudioControllerError>;

    /// Set the mute flag. Fails with `AudioDeviceHasNoMuteControl` when the
    /// device has no settable mute control.
    fn set_system_audio_muted(&self, muted: bool) -> Result<(), AudioControllerError>;

    /// Re-resolve the system default output device.
    ///
    /// Backends that look the device up on every call need not override this.
    fn refresh_default_device(&self) -> Result<(), AudioControllerError> {
        Ok(())
    }
}
