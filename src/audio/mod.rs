// src/audio/mod.rs
use crate::{core::SubsystemState, errors::CoreriaError};

pub trait AudioSubsystem {
    fn init(&mut self) -> Result<(), CoreriaError>;
}

#[derive(Debug)]
pub struct AudioSystem {
    state: SubsystemState,
}

impl AudioSystem {
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

impl Default for AudioSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSubsystem for AudioSystem {
    fn init(&mut self) -> Result<(), CoreriaError> {
        if self.is_initialized() {
            return Err(CoreriaError::AlreadyInitialized("audio"));
        }

        log::info!("Initializing audio...");
        self.state = SubsystemState::Ready;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_once() {
        let mut audio = AudioSystem::default();
        audio.init().unwrap();
        assert!(audio.is_initialized());

        let err = audio.init().unwrap_err();
        assert_eq!(err.to_string(), "Subsystem 'audio' is already initialized");
    }
}
