//! The footswitch event controller.
//!
//! Six lines, one shared MIDI output. Every edge on a line toggles that
//! line's state and emits exactly one Note On/Off message plus one
//! diagnostic log line. There is no debounce and no polling: the
//! controller does nothing between edges.

use std::sync::Arc;

use crossbeam_channel::Sender;

use hexpedal_types::{Channel, MidiEventKind, PedalEvent, LINE_COUNT};

use crate::line::Line;
use crate::midi::{self, MessageFormat};
use crate::transport::SharedTransport;

pub struct Controller {
    lines: [Line; LINE_COUNT],
    transport: SharedTransport,
    format: MessageFormat,
    feedback_tx: Option<Sender<PedalEvent>>,
}

impl Controller {
    /// Create the controller with all six lines off.
    pub fn new(transport: SharedTransport, format: MessageFormat) -> Self {
        let lines = std::array::from_fn(|i| Line::new(Channel::new(i as u8)));
        Self {
            lines,
            transport,
            format,
            feedback_tx: None,
        }
    }

    /// Attach a feedback channel; every handled edge publishes one event.
    pub fn with_feedback(mut self, tx: Sender<PedalEvent>) -> Self {
        self.feedback_tx = Some(tx);
        self
    }

    /// Current logical state of one line. `true` means off.
    pub fn is_off(&self, channel: Channel) -> bool {
        self.lines[channel.get() as usize].is_off()
    }

    /// Handle one edge on `channel`: emit Note On if the line was off,
    /// Note Off if it was on. Every edge toggles, rising or falling alike;
    /// contact bounce is not filtered. The state flip is a single atomic
    /// read-modify-write, so a racing edge on the same channel cannot
    /// observe a half-updated line.
    pub fn handle_edge(&self, channel: Channel) {
        let line = &self.lines[channel.get() as usize];
        let was_off = line.toggle();
        let kind = if was_off {
            MidiEventKind::NoteOn
        } else {
            MidiEventKind::NoteOff
        };
        let event = PedalEvent { channel, kind };

        let message = midi::encode(event, self.format);
        if let Err(e) = self.transport.send(&message) {
            // Fire-and-forget output: nothing to retry, nothing to surface.
            log::warn!(target: "midi", "message dropped on channel {}: {}", channel, e);
        }

        match kind {
            MidiEventKind::NoteOn => {
                log::info!(target: "midi", "MIDI Note On Sent Channel {}", channel)
            }
            MidiEventKind::NoteOff => {
                log::info!(target: "midi", "MIDI Note Off Sent Channel {}", channel)
            }
        }

        if let Some(tx) = &self.feedback_tx {
            let _ = tx.send(event);
        }
    }

    /// One parameterized handler bound to a channel. Registering this
    /// closure once per line replaces six near-duplicate per-pin routines;
    /// the edge source (pins, keys, test threads) just calls it.
    pub fn handler(self: Arc<Self>, channel: Channel) -> impl Fn() + Send + 'static {
        move || self.handle_edge(channel)
    }
}
