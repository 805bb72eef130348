// src/core/mod.rs
use std::time::{Duration, Instant};

use crate::errors::CoreriaError;

/// Lifecycle of the built-in subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsystemState {
    Uninitialized,
    Ready,
}

/// Capability brought up first by [`crate::CoreriaEngine::run`].
///
/// Implement this to put a real core behind the engine; the engine only ever
/// calls [`CoreSubsystem::init`], once.
pub trait CoreSubsystem {
    fn init(&mut self) -> Result<(), CoreriaError>;
}

/// Default core. Tracks its state and the instant it came up.
#[derive(Debug)]
pub struct CoreSystem {
    state: SubsystemState,
    started_at: Option<Instant>,
}

impl CoreSystem {
    pub fn new() -> Self {
        Self {
            state: SubsystemState::Uninitialized,
            started_at: None,
        }
    }

    pub fn state(&self) -> SubsystemState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == SubsystemState::Ready
    }

    /// Time elapsed since `init`, or `None` before it.
    pub fn uptime(&self) -> Option<Duration> {
        self.started_at.map(|start| start.elapsed())
    }
}

impl Default for CoreSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreSubsystem for CoreSystem {
    fn init(&mut self) -> Result<(), CoreriaError> {
        if self.is_initialized() {
            return Err(CoreriaError::AlreadyInitialized("core"));
        }

        log::info!("Initializing core...");
        self.started_at = Some(Instant::now());
        self.state = SubsystemState::Ready;
        Ok(())
    }
}
