use std::path::PathBuf;

use serde::Deserialize;

use crate::midi::{self, MessageFormat};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Fallback pin assignment when neither the embedded config nor the user
/// override names one.
const DEFAULT_PINS: [u8; 6] = [2, 3, 4, 5, 6, 7];

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    midi: MidiConfig,
    #[serde(default)]
    pins: PinsConfig,
}

#[derive(Deserialize, Default)]
struct MidiConfig {
    format: Option<String>,
    note: Option<u8>,
    velocity: Option<u8>,
    port: Option<String>,
}

#[derive(Deserialize, Default)]
struct PinsConfig {
    switches: Option<[u8; 6]>,
}

pub struct Config {
    midi: MidiConfig,
    pins: PinsConfig,
}

impl Config {
    pub fn load() -> Self {
        Self::load_with_override(user_config_path())
    }

    fn load_with_override(user_path: Option<PathBuf>) -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_path {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => {
                            merge_midi(&mut base.midi, user.midi);
                            merge_pins(&mut base.pins, user.pins);
                        }
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            midi: base.midi,
            pins: base.pins,
        }
    }

    /// Message shape for the wire, status-only unless overridden.
    pub fn message_format(&self) -> MessageFormat {
        match self.midi.format.as_deref() {
            Some("full") => MessageFormat::Full {
                note: self.midi.note.unwrap_or(midi::DEFAULT_NOTE),
                velocity: self.midi.velocity.unwrap_or(midi::DEFAULT_VELOCITY),
            },
            Some("status-only") | None => MessageFormat::StatusOnly,
            Some(other) => {
                log::warn!(target: "config", "unknown midi format '{}', using status-only", other);
                MessageFormat::StatusOnly
            }
        }
    }

    /// Preferred MIDI output port, matched by substring.
    pub fn preferred_port(&self) -> Option<&str> {
        self.midi.port.as_deref()
    }

    /// Hardware pin wired to each switch, channels 0-5 in order. Wiring
    /// metadata for deployment; the host core never touches pins itself.
    pub fn switch_pins(&self) -> [u8; 6] {
        self.pins.switches.unwrap_or(DEFAULT_PINS)
    }
}

fn merge_midi(base: &mut MidiConfig, user: MidiConfig) {
    if user.format.is_some() {
        base.format = user.format;
    }
    if user.note.is_some() {
        base.note = user.note;
    }
    if user.velocity.is_some() {
        base.velocity = user.velocity;
    }
    if user.port.is_some() {
        base.port = user.port;
    }
}

fn merge_pins(base: &mut PinsConfig, user: PinsConfig) {
    if user.switches.is_some() {
        base.switches = user.switches;
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hexpedal").join("config.toml"))
}
