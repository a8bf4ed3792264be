//! Minimal view of the Core Audio HAL audio-object API.
//!
//! `CoreAudioController` talks to the HAL only through [`AudioObjectApi`],
//! which keeps its guard logic independent of the FFI layer.

/// Core Audio object id (`AudioObjectID`).
pub type AudioObjectId = u32;

/// Core Audio status code (`OSStatus`). Zero is success.
pub type OsStatus = i32;

/// `kAudioObjectUnknown`.
pub const UNKNOWN_OBJECT: AudioObjectId = 0;

/// `kAudioObjectSystemObject`.
pub const SYSTEM_OBJECT: AudioObjectId = 1;

/// The properties this crate reads and writes. All are addressed in the
/// output scope on the main element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceProperty {
    /// `kAudioHardwarePropertyDefaultOutputDevice` on the system object (`UInt32`).
    DefaultOutputDevice,
    /// Virtual main volume (`'vmvc'`) on a device (`Float32`).
    VirtualMainVolume,
    /// `kAudioDevicePropertyMute` on a device (`UInt32`).
    Mute,
}

/// Audio-object calls used by the controller.
pub trait AudioObjectApi: Send + Sync {
    /// `AudioObjectHasProperty`.
    fn has_property(&self, object: AudioObjectId, property: DeviceProperty) -> bool;

    /// `AudioObjectIsPropertySettable`.
    fn is_property_settable(
        &self,
        object: AudioObjectId,
        property: DeviceProperty,
    ) -> Result<bool, OsStatus>;

    fn get_u32(&self, object: AudioObjectId, property: DeviceProperty) -> Result<u32, OsStatus>;

    fn get_f32(&self, object: AudioObjectId, property: DeviceProperty) -> Result<f32, OsStatus>;

    fn set_u32(
        &self,
        object: AudioObjectId,
        property: DeviceProperty,
        value: u32,
    ) -> Result<(), OsStatus>;

    fn set_f32(
        &self,
        object: AudioObjectId,
        property: DeviceProperty,
        value: f32,
    ) -> Result<(), OsStatus>;
}
