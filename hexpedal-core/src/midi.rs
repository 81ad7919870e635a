//! MIDI wire encoding for footswitch events.
//!
//! The pedal hardware emits a bare status byte per toggle at the MIDI
//! standard baud rate. A spec-compliant Note On/Off additionally carries a
//! note number and velocity; whether those two data bytes belong on the
//! wire is a receiver contract, so the message shape is configurable
//! rather than fixed.

use hexpedal_types::{Channel, MidiEventKind, PedalEvent};

/// Note On status nibble.
pub const NOTE_ON: u8 = 0x90;
/// Note Off status nibble.
pub const NOTE_OFF: u8 = 0x80;
/// MIDI standard serial baud rate.
pub const MIDI_BAUD: u32 = 31250;

/// Note number used when emitting full three-byte messages.
pub const DEFAULT_NOTE: u8 = 60;
/// Velocity used for full Note On messages.
pub const DEFAULT_VELOCITY: u8 = 127;

/// On-wire shape of an emitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    /// Status byte only, `0x90|ch` / `0x80|ch`.
    StatusOnly,
    /// Complete three-byte Note On/Off: status, note number, velocity.
    Full { note: u8, velocity: u8 },
}

impl Default for MessageFormat {
    fn default() -> Self {
        MessageFormat::StatusOnly
    }
}

pub fn note_on_status(channel: Channel) -> u8 {
    NOTE_ON | channel.get()
}

pub fn note_off_status(channel: Channel) -> u8 {
    NOTE_OFF | channel.get()
}

/// Encode an event for the wire. Returns the byte image, one or three
/// bytes depending on `format`.
pub fn encode(event: PedalEvent, format: MessageFormat) -> Vec<u8> {
    let status = match event.kind {
        MidiEventKind::NoteOn => note_on_status(event.channel),
        MidiEventKind::NoteOff => note_off_status(event.channel),
    };
    match format {
        MessageFormat::StatusOnly => vec![status],
        MessageFormat::Full { note, velocity } => {
            // A Note Off's third byte is release velocity; a footswitch
            // has none, so send zero.
            let velocity = match event.kind {
                MidiEventKind::NoteOn => velocity,
                MidiEventKind::NoteOff => 0,
            };
            vec![status, note, velocity]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(ch: u8) -> PedalEvent {
        PedalEvent {
            channel: Channel::new(ch),
            kind: MidiEventKind::NoteOn,
        }
    }

    fn off(ch: u8) -> PedalEvent {
        PedalEvent {
            channel: Channel::new(ch),
            kind: MidiEventKind::NoteOff,
        }
    }

    #[test]
    fn test_status_bytes_carry_channel_in_low_nibble() {
        for ch in 0..6 {
            assert_eq!(note_on_status(Channel::new(ch)), 0x90 | ch);
            assert_eq!(note_off_status(Channel::new(ch)), 0x80 | ch);
        }
    }

    #[test]
    fn test_status_only_encodes_single_byte() {
        assert_eq!(encode(on(2), MessageFormat::StatusOnly), vec![0x92]);
        assert_eq!(encode(off(2), MessageFormat::StatusOnly), vec![0x82]);
    }

    #[test]
    fn test_full_format_encodes_three_bytes() {
        let format = MessageFormat::Full {
            note: 60,
            velocity: 127,
        };
        assert_eq!(encode(on(4), format), vec![0x94, 60, 127]);
        assert_eq!(encode(off(4), format), vec![0x84, 60, 0]);
    }

    #[test]
    fn test_default_format_is_status_only() {
        assert_eq!(MessageFormat::default(), MessageFormat::StatusOnly);
    }
}
