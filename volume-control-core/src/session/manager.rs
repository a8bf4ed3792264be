use parking_lot::Mutex;

use crate::models::audio_state::AudioState;
use crate::models::config::ManagerConfiguration;
use crate::models::error::AudioControllerError;
use crate::processing::volume::{self, VolumeStep};
use crate::traits::volume_controller::VolumeController;

/// Reads and writes the default output device as a single [`AudioState`].
///
/// Generic over the platform backend via the `VolumeController` trait.
/// Every operation holds the controller lock, so a `set_audio_state` call
/// and its read-back are never interleaved with another caller.
pub struct AudioManager<C: VolumeController> {
    controller: Mutex<C>,
    config: ManagerConfiguration,
}

impl<C: VolumeController> AudioManager<C> {
    pub fn new(controller: C) -> Self {
        Self {
            controller: Mutex::new(controller),
            config: ManagerConfiguration::default(),
        }
    }

    pub fn with_config(
        controller: C,
        config: ManagerConfiguration,
    ) -> Result<Self, AudioControllerError> {
        config
            .validate()
            .map_err(AudioControllerError::ConfigurationFailed)?;
        Ok(Self {
            controller: Mutex::new(controller),
            config,
        })
    }

    /// Current volume and mute state.
    pub fn audio_state(&self) -> Result<AudioState, AudioControllerError> {
        let controller = self.controller.lock();
        self.prepare(&*controller);
        Self::read_state(&*controller)
    }

    /// Apply `state` (volume first, then mute) and return the state the
    /// device reports afterwards.
    pub fn set_audio_state(&self, state: &AudioState) -> Result<AudioState, AudioControllerError> {
        let controller = self.controller.lock();
        self.prepare(&*controller);
        controller.set_system_volume(state.volume as f32)?;
        controller.set_system_audio_muted(state.muted)?;
        Self::read_state(&*controller)
    }

    /// Set only the master volume. Returns the clamped volume written.
    pub fn set_volume(&self, volume: f32) -> Result<f32, AudioControllerError> {
        let controller = self.controller.lock();
        self.prepare(&*controller);
        let volume = volume::bound_volume(volume);
        controller.set_system_volume(volume)?;
        Ok(volume)
    }

    /// Set only the mute flag. Returns the flag written.
    pub fn set_muted(&self, muted: bool) -> Result<bool, AudioControllerError> {
        let controller = self.controller.lock();
        self.prepare(&*controller);
        controller.set_system_audio_muted(muted)?;
        Ok(muted)
    }

    /// Flip the mute flag. Returns the new flag.
    pub fn toggle_mute(&self) -> Result<bool, AudioControllerError> {
        let controller = self.controller.lock();
        self.prepare(&*controller);
        let muted = !controller.is_system_audio_muted()?;
        controller.set_system_audio_muted(muted)?;
        Ok(muted)
    }

    /// Move the volume one configured step up or down. Returns the new volume.
    pub fn step_volume(&self, direction: VolumeStep) -> Result<f32, AudioControllerError> {
        let controller = self.controller.lock();
        self.prepare(&*controller);
        let current = controller.system_volume()?;
        let next = volume::step_volume(current, self.config.volume_step, direction);
        controller.set_system_volume(next)?;
        Ok(next)
    }

    /// Re-resolve the default output device now.
    pub fn refresh_default_device(&self) -> Result<(), AudioControllerError> {
        self.controller.lock().refresh_default_device()
    }

    fn prepare(&self, controller: &C) {
        if !self.config.refresh_device_per_call {
            return;
        }
        // A failed lookup leaves the device unknown; the operation itself reports it.
        if let Err(e) = controller.refresh_default_device() {
            log::warn!("Failed to refresh default output device: {}", e);
        }
    }

    fn read_state(controller: &C) -> Result<AudioState, AudioControllerError> {
        let volume = controller.system_volume()?;
        let muted = controller.is_system_audio_muted()?;
        log::debug!("Audio state: volume={:.3} muted={}", volume, muted);
        Ok(AudioState::new(f64::from(volume), muted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Refresh,
        GetVolume,
        GetMuted,
        SetVolume(f32),
        SetMuted(bool),
    }

    /// In-memory controller that records every call.
    struct MockController {
        volume: Mutex<f32>,
        muted: Mutex<bool>,
        has_mute: bool,
        has_volume: bool,
        device_known: bool,
        refresh_fails: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl MockController {
        fn new(volume: f32, muted: bool) -> Self {
            Self {
                volume: Mutex::new(volume),
                muted: Mutex::new(muted),
                has_mute: true,
                has_volume: true,
                device_known: true,
                refresh_fails: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }

        fn check_device(&self) -> Result<(), AudioControllerError> {
            if self.device_known {
                Ok(())
            } else {
                Err(AudioControllerError::AudioDeviceUnknown)
            }
        }
    }

    impl VolumeController for MockController {
        fn system_volume(&self) -> Result<f32, AudioControllerError> {
            self.calls.lock().push(Call::GetVolume);
            self.check_device()?;
            if !self.has_volume {
                return Err(AudioControllerError::AudioDeviceHasNoVolumeControl);
            }
            Ok(*self.volume.lock())
        }

        fn is_system_audio_muted(&self) -> Result<bool, AudioControllerError> {
            self.calls.lock().push(Call::GetMuted);
            self.check_device()?;
            Ok(self.has_mute && *self.muted.lock())
        }

        fn set_system_volume(&self, volume: f32) -> Result<(), AudioControllerError> {
            self.calls.lock().push(Call::SetVolume(volume));
            self.check_device()?;
            if !self.has_volume {
                return Err(AudioControllerError::AudioDeviceHasNoVolumeControl);
            }
            *self.volume.lock() = volume::bound_volume(volume);
            Ok(())
        }

        fn set_system_audio_muted(&self, muted: bool) -> Result<(), AudioControllerError> {
            self.calls.lock().push(Call::SetMuted(muted));
            self.check_device()?;
            if !self.has_mute {
                return Err(AudioControllerError::AudioDeviceHasNoMuteControl);
            }
            *self.muted.lock() = muted;
            Ok(())
        }

        fn refresh_default_device(&self) -> Result<(), AudioControllerError> {
            self.calls.lock().push(Call::Refresh);
            if self.refresh_fails {
                return Err(AudioControllerError::CannotGetDefaultAudioDevice);
            }
            Ok(())
        }
    }

    #[test]
    fn audio_state_reads_volume_then_mute() {
        let manager = AudioManager::new(MockController::new(0.3, true));

        let state = manager.audio_state().unwrap();

        assert_relative_eq!(state.volume, 0.3, epsilon = 1e-6);
        assert!(state.muted);
        assert_eq!(manager.controller.lock().calls(), vec![Call::GetVolume, Call::GetMuted]);
    }

    #[test]
    fn set_audio_state_writes_then_reads_back() {
        let manager = AudioManager::new(MockController::new(0.3, false));

        let state = manager.set_audio_state(&AudioState::new(0.8, true)).unwrap();

        assert_relative_eq!(state.volume, 0.8, epsilon = 1e-6);
        assert!(state.muted);
        assert_eq!(
            manager.controller.lock().calls(),
            vec![
                Call::SetVolume(0.8),
                Call::SetMuted(true),
                Call::GetVolume,
                Call::GetMuted,
            ]
        );
    }

    #[test]
    fn set_audio_state_reports_clamped_volume() {
        let manager = AudioManager::new(MockController::new(0.3, false));

        let state = manager.set_audio_state(&AudioState::new(4.0, false)).unwrap();

        assert_eq!(state.volume, 1.0);
    }

    #[test]
    fn set_audio_state_stops_at_first_failure() {
        let mut controller = MockController::new(0.3, false);
        controller.has_mute = false;
        let manager = AudioManager::new(controller);

        let result = manager.set_audio_state(&AudioState::new(0.6, true));

        assert_eq!(result, Err(AudioControllerError::AudioDeviceHasNoMuteControl));
        assert_eq!(
            manager.controller.lock().calls(),
            vec![Call::SetVolume(0.6), Call::SetMuted(true)]
        );
    }

    #[test]
    fn unknown_device_propagates() {
        let mut controller = MockController::new(0.3, false);
        controller.device_known = false;
        let manager = AudioManager::new(controller);

        assert_eq!(manager.audio_state(), Err(AudioControllerError::AudioDeviceUnknown));
    }

    #[test]
    fn toggle_mute_flips_flag() {
        let manager = AudioManager::new(MockController::new(0.5, false));

        assert_eq!(manager.toggle_mute(), Ok(true));
        assert_eq!(manager.toggle_mute(), Ok(false));
    }

    #[test]
    fn step_volume_uses_configured_step() {
        let config = ManagerConfiguration {
            volume_step: 0.25,
            ..Default::default()
        };
        let manager = AudioManager::with_config(MockController::new(0.5, false), config).unwrap();

        assert_relative_eq!(manager.step_volume(VolumeStep::Up).unwrap(), 0.75);
        assert_eq!(manager.step_volume(VolumeStep::Up).unwrap(), 1.0);
        assert_relative_eq!(manager.step_volume(VolumeStep::Down).unwrap(), 0.75);
    }

    #[test]
    fn refresh_per_call_resolves_before_each_operation() {
        let config = ManagerConfiguration {
            refresh_device_per_call: true,
            ..Default::default()
        };
        let manager = AudioManager::with_config(MockController::new(0.5, false), config).unwrap();

        manager.audio_state().unwrap();

        assert_eq!(
            manager.controller.lock().calls(),
            vec![Call::Refresh, Call::GetVolume, Call::GetMuted]
        );
    }

    #[test]
    fn with_config_rejects_invalid_step() {
        let config = ManagerConfiguration {
            volume_step: 0.0,
            ..Default::default()
        };

        let result = AudioManager::with_config(MockController::new(0.5, false), config);

        assert!(matches!(result, Err(AudioControllerError::ConfigurationFailed(_))));
    }

    #[test]
    fn failed_refresh_is_swallowed_and_operation_reports_device() {
        let mut controller = MockController::new(0.5, false);
        controller.refresh_fails = true;
        controller.device_known = false;
        let config = ManagerConfiguration {
            refresh_device_per_call: true,
            ..Default::default()
        };
        let manager = AudioManager::with_config(controller, config).unwrap();

        assert_eq!(manager.audio_state(), Err(AudioControllerError::AudioDeviceUnknown));
        assert_eq!(
            manager.controller.lock().calls(),
            vec![Call::Refresh, Call::GetVolume]
        );
    }

    #[test]
    fn failed_refresh_still_runs_operation_on_known_device() {
        let mut controller = MockController::new(0.5, false);
        controller.refresh_fails = true;
        let config = ManagerConfiguration {
            refresh_device_per_call: true,
            ..Default::default()
        };
        let manager = AudioManager::with_config(controller, config).unwrap();

        assert_eq!(manager.set_muted(true), Ok(true));
        assert_eq!(
            manager.controller.lock().calls(),
            vec![Call::Refresh, Call::SetMuted(true)]
        );
    }

    #[test]
    fn toggle_mute_without_mute_control_writes_nothing() {
        let mut controller = MockController::new(0.5, false);
        controller.has_mute = false;
        let manager = AudioManager::new(controller);

        assert_eq!(
            manager.toggle_mute(),
            Err(AudioControllerError::AudioDeviceHasNoMuteControl)
        );
        assert!(!*manager.controller.lock().muted.lock());
    }

    #[test]
    fn set_volume_touches_only_volume() {
        let mut controller = MockController::new(0.5, false);
        controller.has_mute = false;
        let manager = AudioManager::new(controller);

        assert_eq!(manager.set_volume(1.4), Ok(1.0));
        assert_eq!(manager.controller.lock().calls(), vec![Call::SetVolume(1.0)]);
    }

    #[test]
    fn set_muted_touches_only_mute() {
        let mut controller = MockController::new(0.5, false);
        controller.has_volume = false;
        let manager = AudioManager::new(controller);

        assert_eq!(manager.set_muted(true), Ok(true));
        assert_eq!(manager.controller.lock().calls(), vec![Call::SetMuted(true)]);
        assert!(*manager.controller.lock().muted.lock());
    }
}
