//! # hexpedal-types
//!
//! Shared type definitions for the hexpedal footswitch controller.
//! This crate contains the plain data types used across hexpedal-core and
//! hexpedal-ui, with no transport or hardware dependencies.

use serde::{Deserialize, Serialize};

/// Number of footswitch lines the controller owns.
pub const LINE_COUNT: usize = 6;

/// A footswitch channel index. Channels are fixed at initialization: line
/// `n` always speaks on MIDI channel `n`, for `n` in 0..=5.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Channel(u8);

impl Channel {
    /// Create a Channel. Panics if index >= LINE_COUNT.
    pub fn new(index: u8) -> Self {
        assert!(
            (index as usize) < LINE_COUNT,
            "channel index out of range: {}",
            index
        );
        Self(index)
    }

    /// Fallible construction for indices that come from user input.
    pub fn try_from_index(index: u8) -> Result<Self, String> {
        if (index as usize) < LINE_COUNT {
            Ok(Self(index))
        } else {
            Err(format!(
                "invalid channel index: {} (expected 0-{})",
                index,
                LINE_COUNT - 1
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// All six channels in index order.
    pub fn all() -> impl Iterator<Item = Channel> {
        (0..LINE_COUNT as u8).map(Channel)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The message type a line toggle produces. A line that was off sends
/// Note On; a line that was on sends Note Off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MidiEventKind {
    NoteOn,
    NoteOff,
}

/// One observed footswitch event, as published on the feedback channel.
/// Ephemeral: produced by a toggle, encoded for the wire, not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedalEvent {
    pub channel: Channel,
    pub kind: MidiEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accepts_valid_indices() {
        for i in 0..6 {
            assert_eq!(Channel::try_from_index(i).unwrap().get(), i);
        }
    }

    #[test]
    fn test_channel_rejects_out_of_range() {
        assert!(Channel::try_from_index(6).is_err());
        assert!(Channel::try_from_index(255).is_err());
    }

    #[test]
    fn test_channel_display_is_bare_index() {
        assert_eq!(Channel::new(2).to_string(), "2");
    }

    #[test]
    fn test_all_yields_six_channels_in_order() {
        let indices: Vec<u8> = Channel::all().map(Channel::get).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }
}
