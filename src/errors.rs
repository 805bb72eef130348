use std::fmt;

#[derive(Debug)]
pub enum CoreriaError {
    IoError(std::io::Error),
    ConfigError(String),
    // The built-in subsystems never fail; these are for implementations
    // swapped in through `CoreriaEngine::with_*`.
    CoreError(String),
    RenderError(String),
    AudioError(String),
    /// A subsystem was asked to initialize a second time.
    AlreadyInitialized(&'static str),
}

impl fmt::Display for CoreriaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreriaError::IoError(err) => write!(f, "IO Error: {}", err),
            CoreriaError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            CoreriaError::CoreError(msg) => write!(f, "Core Error: {}", msg),
            CoreriaError::RenderError(msg) => write!(f, "Render Error: {}", msg),
            CoreriaError::AudioError(msg) => write!(f, "Audio Error: {}", msg),
            CoreriaError::AlreadyInitialized(name) => {
                write!(f, "Subsystem '{}' is already initialized", name)
            }
        }
    }
}

impl std::error::Error for CoreriaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoreriaError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CoreriaError {
    fn from(err: std::io::Error) -> Self {
        CoreriaError::IoError(err)
    }
}

impl From<serde_json::Error> for CoreriaError {
    fn from(err: serde_json::Error) -> Self {
        CoreriaError::ConfigError(format!("Failed to parse config: {}", err))
    }
}
