//! # hexpedal-core
//!
//! Backend library for the hexpedal footswitch controller. Owns the six
//! line states, MIDI wire encoding, and the shared output transport,
//! independent of any input frontend.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hexpedal_core::config::Config;
//! use hexpedal_core::controller::Controller;
//! use hexpedal_core::transport::{MidirTransport, SharedTransport};
//! use hexpedal_types::Channel;
//!
//! // 1. Load config (embedded defaults + user override)
//! let config = Config::load();
//!
//! // 2. Open the shared MIDI output
//! let transport = SharedTransport::new(MidirTransport::connect(0)?);
//!
//! // 3. Create the controller: six lines, all off
//! let controller = Arc::new(Controller::new(transport, config.message_format()));
//!
//! // 4. Bind one handler per line and hand them to the edge source
//! let handler = controller.handler(Channel::new(2));
//! handler(); // one edge: Note On, state flips
//! handler(); // next edge: Note Off
//! ```
//!
//! ## Module Overview
//!
//! - [`controller`]: `Controller`, the edge-handling entry point; per-line
//!   toggle state, emission, feedback
//! - [`line`]: `Line`, one switch channel's exclusively-owned state cell
//! - [`midi`]: status-byte constants, message formats, wire encoding
//! - [`transport`]: `MidiTransport` trait, midir-backed and in-memory
//!   sinks, the serialized `SharedTransport` guard
//! - [`config`]: TOML configuration (embedded default + user override)

pub mod config;
pub mod controller;
pub mod line;
pub mod midi;
pub mod transport;
