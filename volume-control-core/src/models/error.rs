use thiserror::Error;

/// Errors that can occur while reading or writing the default output device.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AudioControllerError {
    #[error("default audio device is unknown")]
    AudioDeviceUnknown,

    #[error("cannot get default audio output device")]
    CannotGetDefaultAudioDevice,

    #[error("audio device has no volume control")]
    AudioDeviceHasNoVolumeControl,

    #[error("cannot read volume control")]
    CannotReadVolumeControl,

    #[error("audio device has no mute control")]
    AudioDeviceHasNoMuteControl,

    #[error("unknown OS error (status {status})")]
    UnknownOsError { status: i32 },

    #[error("invalid audio state: {0}")]
    InvalidState(String),

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("no volume backend for this platform")]
    UnsupportedPlatform,
}

impl AudioControllerError {
    /// Whether the error comes from a missing or unresolvable device rather
    /// than a failed call against a known one.
    pub fn is_device_error(&self) -> bool {
        matches!(
            self,
            Self::AudioDeviceUnknown | Self::CannotGetDefaultAudioDevice
        )
    }
}
