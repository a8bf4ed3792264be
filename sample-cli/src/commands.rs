use serde_json::{json, Value};

use volume_control_core::{AudioControllerError, AudioManager, AudioState, VolumeController, VolumeStep};

pub const USAGE: &str = "usage: volume-sample <get | set <json> | volume <0..1> | mute | unmute | toggle | up | down>";

/// A command given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Get,
    Set(AudioState),
    Volume(f32),
    Mute(bool),
    Toggle,
    Step(VolumeStep),
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let (name, rest) = args.split_first().ok_or_else(|| USAGE.to_string())?;
        let command = match (name.as_str(), rest) {
            ("get", []) => Command::Get,
            ("set", [json]) => {
                Command::Set(AudioState::from_json_str(json).map_err(|e| e.to_string())?)
            }
            ("volume", [level]) => Command::Volume(
                level
                    .parse()
                    .map_err(|_| format!("invalid volume: {}", level))?,
            ),
            ("mute", []) => Command::Mute(true),
            ("unmute", []) => Command::Mute(false),
            ("toggle", []) => Command::Toggle,
            ("up", []) => Command::Step(VolumeStep::Up),
            ("down", []) => Command::Step(VolumeStep::Down),
            _ => return Err(USAGE.to_string()),
        };
        Ok(command)
    }
}

/// Exit status for a failed command: 3 when no default output device
/// could be resolved, 1 for every other failure.
pub fn exit_code(error: &AudioControllerError) -> u8 {
    if error.is_device_error() {
        3
    } else {
        1
    }
}

/// Run `command` and return what it read or wrote as a JSON dictionary.
///
/// Single-field commands report only the field they wrote.
pub fn execute<C: VolumeController>(
    manager: &AudioManager<C>,
    command: &Command,
) -> Result<Value, AudioControllerError> {
    let output = match command {
        Command::Get => Value::from(manager.audio_state()?),
        Command::Set(state) => Value::from(manager.set_audio_state(state)?),
        Command::Volume(level) => {
            let volume = manager.set_volume(*level)?;
            json!({ "volume": volume })
        }
        Command::Mute(muted) => {
            let muted = manager.set_muted(*muted)?;
            json!({ "muted": muted })
        }
        Command::Toggle => {
            let muted = manager.toggle_mute()?;
            json!({ "muted": muted })
        }
        Command::Step(direction) => {
            let volume = manager.step_volume(*direction)?;
            json!({ "volume": volume })
        }
    };
    log::info!("{:?} -> {}", command, output);
    Ok(output)
}
