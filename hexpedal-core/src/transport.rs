//! Output transports for encoded MIDI bytes.
//!
//! All six handler contexts write to one output. `SharedTransport` holds
//! the message guard: one lock acquisition per complete message, so a
//! multi-byte message from one channel is never interleaved with another
//! channel's bytes.

use std::sync::{Arc, Mutex};

use midir::{MidiOutput, MidiOutputConnection};

/// A write-only sink for complete encoded MIDI messages.
pub trait MidiTransport: Send {
    fn send(&mut self, message: &[u8]) -> Result<(), String>;
}

/// Handle to the single shared output. Cloning shares the underlying sink.
#[derive(Clone)]
pub struct SharedTransport {
    inner: Arc<Mutex<dyn MidiTransport>>,
}

impl SharedTransport {
    pub fn new<T: MidiTransport + 'static>(transport: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(transport)),
        }
    }

    /// Write one complete message under the output guard. A poisoned lock
    /// means a writer panicked mid-send; the sink itself is still usable.
    pub fn send(&self, message: &[u8]) -> Result<(), String> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        guard.send(message)
    }
}

/// Information about an available MIDI output port
#[derive(Debug, Clone)]
pub struct MidiPortInfo {
    pub index: usize,
    pub name: String,
}

/// midir-backed output connection to a real MIDI port.
pub struct MidirTransport {
    connection: MidiOutputConnection,
    port_name: String,
}

impl MidirTransport {
    /// List available MIDI output ports.
    pub fn list_ports() -> Result<Vec<MidiPortInfo>, String> {
        let midi_out = MidiOutput::new("hexpedal").map_err(|e| e.to_string())?;
        let ports = midi_out.ports();
        let mut out = Vec::new();
        for (index, port) in ports.iter().enumerate() {
            if let Ok(name) = midi_out.port_name(port) {
                out.push(MidiPortInfo { index, name });
            }
        }
        Ok(out)
    }

    /// Connect to an output port by index.
    pub fn connect(port_index: usize) -> Result<Self, String> {
        let midi_out = MidiOutput::new("hexpedal").map_err(|e| e.to_string())?;
        let ports = midi_out.ports();

        if port_index >= ports.len() {
            return Err(format!("Invalid port index: {}", port_index));
        }

        let port = &ports[port_index];
        let port_name = midi_out
            .port_name(port)
            .unwrap_or_else(|_| "Unknown".to_string());

        let connection = midi_out
            .connect(port, "hexpedal-output")
            .map_err(|e| e.to_string())?;

        Ok(Self {
            connection,
            port_name,
        })
    }

    /// Connect to the first output port whose name contains `needle`.
    pub fn connect_by_name(needle: &str) -> Result<Self, String> {
        let ports = Self::list_ports()?;
        let port = ports
            .iter()
            .find(|p| p.name.contains(needle))
            .ok_or_else(|| format!("no MIDI output port matching '{}'", needle))?;
        Self::connect(port.index)
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

impl MidiTransport for MidirTransport {
    fn send(&mut self, message: &[u8]) -> Result<(), String> {
        self.connection.send(message).map_err(|e| e.to_string())
    }
}

/// In-memory sink for tests and dry runs. Bytes are retained in emit order.
#[derive(Clone, Default)]
pub struct MemoryTransport {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in emit order.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl MidiTransport for MemoryTransport {
    fn send(&mut self, message: &[u8]) -> Result<(), String> {
        self.bytes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_transport_retains_emit_order() {
        let sink = MemoryTransport::new();
        let shared = SharedTransport::new(sink.clone());
        shared.send(&[0x90]).unwrap();
        shared.send(&[0x85, 60, 0]).unwrap();
        assert_eq!(sink.bytes(), vec![0x90, 0x85, 60, 0]);
    }

    #[test]
    fn test_shared_transport_clones_share_one_sink() {
        let sink = MemoryTransport::new();
        let a = SharedTransport::new(sink.clone());
        let b = a.clone();
        a.send(&[0x90]).unwrap();
        b.send(&[0x80]).unwrap();
        assert_eq!(sink.bytes(), vec![0x90, 0x80]);
    }
}
