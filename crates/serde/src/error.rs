/// Error types for value serialization.
#[derive(Debug)]
pub enum SerdeError {
    /// JSON serialization or deserialization error
    Json(serde_json::Error),

    /// IO error while writing output, including XML writer failures
    Io(std::io::Error),

    /// A key cannot be used as an XML element name
    InvalidElementName(String),

    /// XML output needs a mapping or sequence at the root
    NotAContainer(&'static str),

    /// Custom error message
    Custom(String),
}

impl std::fmt::Display for SerdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeError::Json(e) => write!(f, "JSON error: {}", e),
            SerdeError::Io(e) => write!(f, "IO error: {}", e),
            SerdeError::InvalidElementName(name) => {
                write!(f, "\"{}\" is not a valid XML element name", name)
            }
            SerdeError::NotAContainer(kind) => {
                write!(f, "XML root must be a mapping or sequence, got {}", kind)
            }
            SerdeError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SerdeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerdeError::Json(e) => Some(e),
            SerdeError::Io(e) => Some(e),
            SerdeError::InvalidElementName(_)
            | SerdeError::NotAContainer(_)
            | SerdeError::Custom(_) => None,
        }
    }
}

impl From<serde_json::Error> for SerdeError {
    fn from(err: serde_json::Error) -> Self {
        SerdeError::Json(err)
    }
}

impl From<std::io::Error> for SerdeError {
    fn from(err: std::io::Error) -> Self {
        SerdeError::Io(err)
    }
}

impl From<std::string::FromUtf8Error> for SerdeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SerdeError::Custom(err.to_string())
    }
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for serialization operations
pub type Result<T> = std::result::Result<T, SerdeError>;
