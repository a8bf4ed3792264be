//! Rendering of Core Audio `OSStatus` values.
//!
//! HAL errors are four-char codes packed big-endian into an `i32`
//! (e.g. `'who?'` for an unknown property). Classic negative codes such
//! as `-50` are printed as plain numbers.

use crate::hal::OsStatus;

/// `kAudioHardwareNotRunningError`.
pub const NOT_RUNNING: OsStatus = four_cc(b"stop");
/// `kAudioHardwareUnknownPropertyError`.
pub const UNKNOWN_PROPERTY: OsStatus = four_cc(b"who?");
/// `kAudioHardwareBadObjectError`.
pub const BAD_OBJECT: OsStatus = four_cc(b"!obj");
/// `kAudioHardwareIllegalOperationError`.
pub const ILLEGAL_OPERATION: OsStatus = four_cc(b"nope");
/// `kAudioHardwareUnsupportedOperationError`.
pub const UNSUPPORTED_OPERATION: OsStatus = four_cc(b"unop");
/// `kAudioDevicePermissionsError`.
pub const PERMISSIONS: OsStatus = four_cc(b"!hog");

pub const fn four_cc(code: &[u8; 4]) -> OsStatus {
    i32::from_be_bytes(*code)
}

/// Human-readable form of a status, e.g. `'who?' (unknown property)`.
pub fn describe(status: OsStatus) -> String {
    let bytes = status.to_be_bytes();
    let code = if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        format!("'{}'", String::from_utf8_lossy(&bytes))
    } else {
        status.to_string()
    };

    match name(status) {
        Some(name) => format!("{} ({})", code, name),
        None => code,
    }
}

fn name(status: OsStatus) -> Option<&'static str> {
    match status {
        NOT_RUNNING => Some("hardware not running"),
        UNKNOWN_PROPERTY => Some("unknown property"),
        BAD_OBJECT => Some("bad object"),
        ILLEGAL_OPERATION => Some("illegal operation"),
        UNSUPPORTED_OPERATION => Some("unsupported operation"),
        PERMISSIONS => Some("permissions"),
        _ => None,
    }
}
