//! Raw-mode key loop: keys 1-6 stand in for the six footswitch lines.
//!
//! Each key fires the bound edge handler for its line, exactly as a pin
//! interrupt would; the loop then drains the feedback channel and prints
//! one line per emitted event.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::controller::Controller;
use crate::midi::MIDI_BAUD;
use hexpedal_types::{Channel, MidiEventKind, PedalEvent};

pub fn run(
    controller: &Arc<Controller>,
    feedback_rx: &Receiver<PedalEvent>,
    json: bool,
) -> io::Result<()> {
    // One bound handler per line, the keyboard standing in for the pins.
    let handlers: Vec<_> = Channel::all()
        .map(|ch| Arc::clone(controller).handler(ch))
        .collect();

    println!(
        "hexpedal monitor: keys 1-6 toggle lines 0-5, q quits (wire rate {} baud)",
        MIDI_BAUD
    );

    enable_raw_mode()?;
    let result = event_loop(&handlers, feedback_rx, json);
    disable_raw_mode()?;
    result
}

fn event_loop<F: Fn()>(
    handlers: &[F],
    feedback_rx: &Receiver<PedalEvent>,
    json: bool,
) -> io::Result<()> {
    loop {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(c @ '1'..='6') => {
                        let index = c as usize - '1' as usize;
                        handlers[index]();
                    }
                    _ => {}
                },
                _ => {}
            }
        }
        for event in feedback_rx.try_iter() {
            print_event(event, json)?;
        }
    }
    Ok(())
}

fn print_event(event: PedalEvent, json: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if json {
        match serde_json::to_string(&event) {
            Ok(line) => write!(stdout, "{}\r\n", line)?,
            Err(e) => log::warn!(target: "monitor", "could not serialize event: {}", e),
        }
    } else {
        let kind = match event.kind {
            MidiEventKind::NoteOn => "Note On",
            MidiEventKind::NoteOff => "Note Off",
        };
        write!(stdout, "MIDI {} Sent Channel {}\r\n", kind, event.channel)?;
    }
    stdout.flush()
}
