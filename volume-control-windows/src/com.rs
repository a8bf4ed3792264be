//! Per-call COM apartment handling.

use windows::Win32::Foundation::RPC_E_CHANGED_MODE;
use windows::Win32::System::Com::*;

use volume_control_core::models::error::AudioControllerError;

/// Keeps COM initialized on the current thread while alive.
///
/// Joins the multithreaded apartment. If the thread already belongs to a
/// single-threaded apartment, that apartment is used as-is and nothing is
/// torn down on drop.
pub(crate) struct ComApartment {
    owned: bool,
}

impl ComApartment {
    pub(crate) fn enter() -> Result<Self, AudioControllerError> {
        let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };
        if hr == RPC_E_CHANGED_MODE {
            return Ok(Self { owned: false });
        }
        hr.ok().map_err(|e| {
            log::error!("CoInitializeEx failed: {}", e);
            AudioControllerError::UnknownOsError { status: e.code().0 }
        })?;
        Ok(Self { owned: true })
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        if self.owned {
            unsafe {
                CoUninitialize();
            }
        }
    }
}
