//! Per-line switch state.
//!
//! Each `Line` owns exactly one boolean cell. Only that channel's own
//! handler context flips it; any thread may read it. The cell is atomic so
//! reads never take a lock and a flip is a single indivisible operation.

use std::sync::atomic::{AtomicBool, Ordering};

use hexpedal_types::Channel;

/// One footswitch input line. Created once at startup, lives for the
/// process lifetime, starts logically off.
pub struct Line {
    channel: Channel,
    is_off: AtomicBool,
}

impl Line {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            is_off: AtomicBool::new(true),
        }
    }

    /// The MIDI channel this line speaks on. Fixed at initialization.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Current logical state. `true` means off (no note sounding).
    pub fn is_off(&self) -> bool {
        self.is_off.load(Ordering::SeqCst)
    }

    /// Flip the stored state and return what it was before the flip.
    /// Single-writer invariant: only the owning handler context calls this.
    pub fn toggle(&self) -> bool {
        self.is_off.fetch_xor(true, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts_off() {
        let line = Line::new(Channel::new(0));
        assert!(line.is_off());
    }

    #[test]
    fn test_toggle_returns_previous_state() {
        let line = Line::new(Channel::new(3));
        assert!(line.toggle());
        assert!(!line.is_off());
        assert!(!line.toggle());
        assert!(line.is_off());
    }

    #[test]
    fn test_channel_is_fixed() {
        let line = Line::new(Channel::new(5));
        line.toggle();
        assert_eq!(line.channel(), Channel::new(5));
    }
}
