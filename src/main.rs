// src/main.rs
use std::io;

use coreria::{CoreriaConfig, CoreriaEngine};

fn main() {
    let config = CoreriaConfig::default();
    if let Err(e) = config.log.init_logger() {
        eprintln!("{}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Write failures never change the exit status.
    if let Err(e) = CoreriaEngine::new().run(&mut out) {
        log::error!("Failed to write greeting: {}", e);
    }
}
