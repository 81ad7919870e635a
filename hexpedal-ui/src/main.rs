// Re-export core crate modules so crate::controller, crate::transport, etc.
// resolve throughout the binary
pub use hexpedal_core::config;
pub use hexpedal_core::controller;
pub use hexpedal_core::midi;
pub use hexpedal_core::transport;

mod monitor;

use std::fs::File;
use std::sync::Arc;

use controller::Controller;
use transport::{MemoryTransport, MidirTransport, SharedTransport};

fn init_logging(verbose: bool) {
    use simplelog::*;

    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("hexpedal")
        .join("hexpedal.log");

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = File::create(&log_path)
        .unwrap_or_else(|_| File::create("/tmp/hexpedal.log").expect("Cannot create log file"));

    WriteLogger::init(log_level, Config::default(), log_file)
        .expect("Failed to initialize logger");

    log::info!("hexpedal starting (log level: {:?})", log_level);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    init_logging(verbose);

    if args.iter().any(|a| a == "--list-ports") {
        match MidirTransport::list_ports() {
            Ok(ports) if ports.is_empty() => println!("No MIDI output ports available"),
            Ok(ports) => {
                for p in &ports {
                    println!("{}: {}", p.index, p.name);
                }
            }
            Err(e) => {
                eprintln!("Could not list MIDI ports: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let dry_run = args.iter().any(|a| a == "--dry-run");
    let json = args.iter().any(|a| a == "--json");
    let port_arg: Option<usize> = args
        .iter()
        .position(|a| a == "--port")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok());

    let config = config::Config::load();
    let format = config.message_format();
    log::debug!("switch pin map: {:?}", config.switch_pins());

    let transport = if dry_run {
        log::info!("dry run: MIDI output goes to an in-memory sink");
        SharedTransport::new(MemoryTransport::new())
    } else {
        let midir = match port_arg {
            Some(index) => MidirTransport::connect(index),
            None => match config.preferred_port() {
                Some(name) => MidirTransport::connect_by_name(name),
                None => MidirTransport::connect(0),
            },
        };
        match midir {
            Ok(t) => {
                log::info!("connected to MIDI output '{}'", t.port_name());
                SharedTransport::new(t)
            }
            Err(e) => {
                eprintln!(
                    "Could not open MIDI output: {} (use --list-ports, or --dry-run to run without one)",
                    e
                );
                std::process::exit(1);
            }
        }
    };

    let (feedback_tx, feedback_rx) = crossbeam_channel::unbounded();
    let controller = Arc::new(Controller::new(transport, format).with_feedback(feedback_tx));

    if let Err(e) = monitor::run(&controller, &feedback_rx, json) {
        eprintln!("monitor error: {}", e);
        std::process::exit(1);
    }
}
