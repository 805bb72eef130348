// src/renderer/mod.rs
use crate::{core::SubsystemState, errors::CoreriaError};

/// Capability brought up second, after the core.
pub trait RenderSubsystem {
    fn init(&mut self) -> Result<(), CoreriaError>;
}

/// Headless default renderer. Nothing is drawn.
#[derive(Debug)]
pub struct Renderer {
    state: SubsystemState,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            state: SubsystemState::Uninitialized,
        }
    }

    pub fn state(&self) -> SubsystemState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == SubsystemState::Ready
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSubsystem for Renderer {
    fn init(&mut self) -> Result<(), CoreriaError> {
        if self.is_initialized() {
            return Err(CoreriaError::AlreadyInitialized("renderer"));
        }

        log::info!("Initializing renderer...");
        self.state = SubsystemState::Ready;
        Ok(())
    }
}
