// ============================================================================
// FILE: src/lib.rs - Library Root
// ============================================================================
pub mod audio;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod renderer;

pub use audio::{AudioSubsystem, AudioSystem};
pub use config::{CoreriaConfig, LogConfig};
pub use crate::core::{CoreSubsystem, CoreSystem, SubsystemState};
pub use engine::{CoreriaEngine, GREETING};
pub use errors::CoreriaError;
pub use renderer::{RenderSubsystem, Renderer};
