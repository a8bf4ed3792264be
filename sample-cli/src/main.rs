mod commands;

use std::process::ExitCode;

use volume_control_core::{AudioControllerError, AudioManager, VolumeController};

use commands::Command;

#[cfg_attr(not(any(target_os = "macos", target_os = "windows")), allow(dead_code))]
fn run<C: VolumeController>(controller: C, command: &Command) -> Result<(), AudioControllerError> {
    let manager = AudioManager::new(controller);
    let output = commands::execute(&manager, command)?;
    println!("{}", output);
    Ok(())
}

#[cfg(target_os = "macos")]
fn run_platform(command: &Command) -> Result<(), AudioControllerError> {
    run(volume_control_macos::CoreAudioController::system(), command)
}

#[cfg(target_os = "windows")]
fn run_platform(command: &Command) -> Result<(), AudioControllerError> {
    run(volume_control_windows::EndpointVolumeController::new(), command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn run_platform(_command: &Command) -> Result<(), AudioControllerError> {
    Err(AudioControllerError::UnsupportedPlatform)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run_platform(&command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?} failed: {:?}", command, e);
            eprintln!("error: {}", e);
            ExitCode::from(commands::exit_code(&e))
        }
    }
}
