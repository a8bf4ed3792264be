//! `AudioObjectApi` over the real Core Audio HAL.

use std::ffi::c_void;
use std::mem;
use std::ptr;

use coreaudio_sys::{
    kAudioDevicePropertyMute, kAudioDevicePropertyScopeOutput,
    kAudioHardwarePropertyDefaultOutputDevice, kAudioObjectPropertyElementMain,
    AudioObjectGetPropertyData, AudioObjectHasProperty, AudioObjectIsPropertySettable,
    AudioObjectPropertyAddress, AudioObjectPropertySelector, AudioObjectSetPropertyData, Boolean,
};

use crate::hal::{AudioObjectApi, AudioObjectId, DeviceProperty, OsStatus};
use crate::status::four_cc;

/// `kAudioHardwareServiceDeviceProperty_VirtualMainVolume` ('vmvc').
const VIRTUAL_MAIN_VOLUME: AudioObjectPropertySelector = four_cc(b"vmvc") as u32;

const ELEMENT_MAIN: u32 = kAudioObjectPropertyElementMain as u32;

/// Stateless handle onto the process-wide Core Audio HAL.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAudioObjects;

fn address(property: DeviceProperty) -> AudioObjectPropertyAddress {
    let selector = match property {
        DeviceProperty::DefaultOutputDevice => kAudioHardwarePropertyDefaultOutputDevice,
        DeviceProperty::VirtualMainVolume => VIRTUAL_MAIN_VOLUME,
        DeviceProperty::Mute => kAudioDevicePropertyMute,
    };
    AudioObjectPropertyAddress {
        mSelector: selector,
        mScope: kAudioDevicePropertyScopeOutput,
        mElement: ELEMENT_MAIN,
    }
}

fn get<T: Copy + Default>(object: AudioObjectId, property: DeviceProperty) -> Result<T, OsStatus> {
    let address = address(property);
    let mut value = T::default();
    let mut size = mem::size_of::<T>() as u32;
    // SAFETY: `value` is a plain `T` of exactly `size` bytes, and both
    // pointers outlive the call.
    let status = unsafe {
        AudioObjectGetPropertyData(
            object,
            &address,
            0,
            ptr::null(),
            &mut size,
            &mut value as *mut T as *mut c_void,
        )
    };
    if status != 0 {
        return Err(status);
    }
    Ok(value)
}

fn set<T: Copy>(object: AudioObjectId, property: DeviceProperty, value: T) -> Result<(), OsStatus> {
    let address = address(property);
    let size = mem::size_of::<T>() as u32;
    // SAFETY: `value` lives on the stack for the duration of the call and
    // the HAL only reads `size` bytes from it.
    let status = unsafe {
        AudioObjectSetPropertyData(
            object,
            &address,
            0,
            ptr::null(),
            size,
            &value as *const T as *const c_void,
        )
    };
    if status != 0 {
        return Err(status);
    }
    Ok(())
}

impl AudioObjectApi for SystemAudioObjects {
    fn has_property(&self, object: AudioObjectId, property: DeviceProperty) -> bool {
        let address = address(property);
        // SAFETY: `address` is a valid property address that outlives the call.
        unsafe { AudioObjectHasProperty(object, &address) != 0 }
    }

    fn is_property_settable(
        &self,
        object: AudioObjectId,
        property: DeviceProperty,
    ) -> Result<bool, OsStatus> {
        let address = address(property);
        let mut settable: Boolean = 0;
        // SAFETY: `address` and `settable` are live stack values for the
        // duration of the call; the HAL writes one `Boolean` to `settable`.
        let status = unsafe { AudioObjectIsPropertySettable(object, &address, &mut settable) };
        if status != 0 {
            return Err(status);
        }
        Ok(settable != 0)
    }

    fn get_u32(&self, object: AudioObjectId, property: DeviceProperty) -> Result<u32, OsStatus> {
        get::<u32>(object, property)
    }

    fn get_f32(&self, object: AudioObjectId, property: DeviceProperty) -> Result<f32, OsStatus> {
        get::<f32>(object, property)
    }

    fn set_u32(
        &self,
        object: AudioObjectId,
        property: DeviceProperty,
        value: u32,
    ) -> Result<(), OsStatus> {
        set(object, property, value)
    }

    fn set_f32(
        &self,
        object: AudioObjectId,
        property: DeviceProperty,
        value: f32,
    ) -> Result<(), OsStatus> {
        set(object, property, value)
    }
}
