// src/engine/mod.rs
use std::io::Write;

use uuid::Uuid;

use crate::{
    audio::{AudioSubsystem, AudioSystem},
    core::{CoreSubsystem, CoreSystem},
    errors::CoreriaError,
    renderer::{RenderSubsystem, Renderer},
};

pub const GREETING: &str = "Hello, world";

/// Brings up core, renderer and audio, in that order, then greets.
///
/// Every subsystem sits behind its own trait, so any of them can be swapped
/// with `with_core`, `with_renderer` or `with_audio` before calling
/// [`CoreriaEngine::run`].
pub struct CoreriaEngine {
    run_id: Uuid,
    core: Box<dyn CoreSubsystem>,
    renderer: Box<dyn RenderSubsystem>,
    audio: Box<dyn AudioSubsystem>,
}

impl CoreriaEngine {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            core: Box::new(CoreSystem::new()),
            renderer: Box::new(Renderer::new()),
            audio: Box::new(AudioSystem::new()),
        }
    }

    pub fn with_core<C: CoreSubsystem + 'static>(mut self, core: C) -> Self {
        self.core = Box::new(core);
        self
    }

    pub fn with_renderer<R: RenderSubsystem + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_audio<A: AudioSubsystem + 'static>(mut self, audio: A) -> Self {
        self.audio = Box::new(audio);
        self
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Runs the engine once and writes the greeting line to `out`.
    ///
    /// Subsystem failures are logged and skipped; only a failed write is
    /// returned.
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<(), CoreriaError> {
        log::info!("Starting Coreria Engine (run {})...", self.run_id);

        let run_id = self.run_id;
        report(run_id, "core", self.core.init());
        report(run_id, "renderer", self.renderer.init());
        report(run_id, "audio", self.audio.init());

        writeln!(out, "{}", GREETING)?;
        out.flush()?;

        log::debug!("Run {} finished", run_id);
        Ok(())
    }
}

impl Default for CoreriaEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn report(run_id: Uuid, subsystem: &str, result: Result<(), CoreriaError>) {
    match result {
        Ok(()) => log::debug!("[{}] {} ready", run_id, subsystem),
        Err(e) => log::warn!("[{}] {} initialization failed: {}", run_id, subsystem, e),
    }
}
