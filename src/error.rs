//! Error handling for the weather exporter crate.

/// A specialized `Result` type for weather exporter operations.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// The main error type for weather exporter operations.
///
/// Malformed readings from a station never produce one of these; they are
/// absorbed during parsing. Errors here are about the process itself.
#[derive(Debug, thiserror::Error)]
pub enum ExporterError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Metric registration or gathering failed
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// The text exposition was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExporterError {
    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExporterError::web_server_error("connection reset");
        assert_eq!(err.to_string(), "Web server error: connection reset");

        let err = ExporterError::config_error("Invalid bind address");
        assert_eq!(err.to_string(), "Configuration error: Invalid bind address");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: ExporterError = io.into();
        assert!(matches!(err, ExporterError::Io(_)));
        assert!(err.to_string().contains("address in use"));
    }
}
