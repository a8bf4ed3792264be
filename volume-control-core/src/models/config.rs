/// Configuration for an [`AudioManager`](crate::AudioManager).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerConfiguration {
    /// Amount added or removed by one volume step (default: 1/16).
    /// Must be in (0.0, 1.0].
    pub volume_step: f32,

    /// Re-resolve the default output device before every operation
    /// (default: false). When off, the device resolved at construction is
    /// used until `refresh_default_device` is called.
    pub refresh_device_per_call: bool,
}

impl ManagerConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(format!("volume step out of range: {}", self.volume_step));
        }
        Ok(())
    }
}

impl Default for ManagerConfiguration {
    fn default() -> Self {
        Self {
            volume_step: 1.0 / 16.0,
            refresh_device_per_call: false,
        }
    }
}
