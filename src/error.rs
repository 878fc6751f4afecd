//! Error types and handling for the Wayfarer application

use thiserror::Error;

/// Main error type for the Wayfarer application
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Configuration-related errors (missing or malformed keys, bad settings)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Weather service communication errors
    #[error("Weather service error: {message}")]
    Weather { message: String },

    /// Itinerary-generation service errors (quota, network, malformed response)
    #[error("Itinerary generation failed: {message}")]
    Generation { message: String },

    /// A report font could not be loaded. Fatal for the export that needed it.
    #[error("Report font unavailable ({font}): {message}")]
    FontUnavailable { font: String, message: String },

    /// PDF assembly errors other than font resolution
    #[error("Report rendering error: {message}")]
    Render { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WayfarerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new weather service error
    pub fn weather<S: Into<String>>(message: S) -> Self {
        Self::Weather {
            message: message.into(),
        }
    }

    /// Create a new generation service error
    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a new font-resolution error
    pub fn font_unavailable<S: Into<String>, M: Into<String>>(font: S, message: M) -> Self {
        Self::FontUnavailable {
            font: font.into(),
            message: message.into(),
        }
    }

    /// Create a new rendering error
    pub fn render<S: Into<String>>(message: S) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WayfarerError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            WayfarerError::Weather { .. } => {
                "Unable to reach the weather service. Weather will be shown as unavailable."
                    .to_string()
            }
            WayfarerError::Generation { message } => {
                format!("일정 생성 실패: {message}")
            }
            WayfarerError::FontUnavailable { font, .. } => {
                format!(
                    "Report font '{font}' could not be loaded. Set report.font_path to a valid TTF file."
                )
            }
            WayfarerError::Render { .. } => {
                "Report export failed while assembling the PDF.".to_string()
            }
            WayfarerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WayfarerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
