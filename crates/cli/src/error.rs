//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generation error (bad palette data, malformed filters)
//! - 11: I/O error (file write, output directory)
//! - 12: input error (bad brand name, unknown filter value)
//! - 13: serialization error
//! - 14: rendering error (bad size, rasterization failure)

use logo_forge_core::LogoError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// Configuration generation failed for a reason other than user input.
    Generation(LogoError),
    /// An I/O error (file write, directory creation).
    Io(String),
    /// A user input error (empty name, unknown filter value).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// Rasterization failed or the requested size was unusable.
    Rendering(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Generation(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Rendering(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Generation(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Rendering(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<LogoError> for CliError {
    fn from(e: LogoError) -> Self {
        match e {
            LogoError::InvalidInput(msg) => CliError::Input(msg),
            LogoError::Io(msg) => CliError::Io(msg),
            LogoError::InvalidDimensions | LogoError::Rendering(_) => {
                CliError::Rendering(e.to_string())
            }
            other => CliError::Generation(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_exit_code_is_10() {
        let err = CliError::Generation(LogoError::MalformedFilters("x".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("unknown shape".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn rendering_error_exit_code_is_14() {
        let err = CliError::Rendering("no pixels".into());
        assert_eq!(err.exit_code(), 14);
    }

    #[test]
    fn from_logo_error_invalid_input_routes_to_input() {
        let cli_err = CliError::from(LogoError::InvalidInput("name is required".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert_eq!(cli_err.to_string(), "name is required");
    }

    #[test]
    fn from_logo_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(LogoError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_logo_error_dimensions_routes_to_rendering() {
        let cli_err = CliError::from(LogoError::InvalidDimensions);
        assert_eq!(cli_err.exit_code(), 14);
    }

    #[test]
    fn from_logo_error_color_routes_to_generation() {
        let cli_err = CliError::from(LogoError::InvalidColor("#zz".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("#zz"));
    }

    #[test]
    fn from_io_error_routes_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(CliError::from(io).exit_code(), 11);
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
