//! Rendering of `HRESULT` status codes carried by `UnknownOsError`.

/// `E_ACCESSDENIED`.
pub const E_ACCESSDENIED: i32 = 0x8007_0005_u32 as i32;
/// `E_INVALIDARG`.
pub const E_INVALIDARG: i32 = 0x8007_0057_u32 as i32;
/// `HRESULT_FROM_WIN32(ERROR_NOT_FOUND)`, returned when no endpoint exists.
pub const E_NOTFOUND: i32 = 0x8007_0490_u32 as i32;
/// `AUDCLNT_E_DEVICE_INVALIDATED`, the endpoint went away mid-call.
pub const AUDCLNT_E_DEVICE_INVALIDATED: i32 = 0x8889_0004_u32 as i32;

/// Hex form of an `HRESULT`, with its name when known.
pub fn describe(status: i32) -> String {
    let code = format!("{:#010x}", status as u32);
    match name(status) {
        Some(name) => format!("{} ({})", code, name),
        None => code,
    }
}

fn name(status: i32) -> Option<&'static str> {
    match status {
        E_ACCESSDENIED => Some("access denied"),
        E_INVALIDARG => Some("invalid argument"),
        E_NOTFOUND => Some("not found"),
        AUDCLNT_E_DEVICE_INVALIDATED => Some("device invalidated"),
        _ => None,
    }
}
