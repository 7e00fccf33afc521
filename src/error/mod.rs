//! Error handling for the map benchmark

use thiserror::Error;

/// Custom error types for the map benchmark
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (numbers, enum values, JSON)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Benchmark setup or execution errors
    #[error("Benchmark error: {0}")]
    Benchmark(String),

    /// Result formatting errors
    #[error("Output error: {0}")]
    Output(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new benchmark error
    pub fn benchmark<S: Into<String>>(message: S) -> Self {
        Self::Benchmark(message.into())
    }

    /// Create a new output error
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Benchmark(_) => "BENCH",
            Self::Output(_) => "OUTPUT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Run with --help-topic config to see accepted values.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check file permissions and disk space.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse value: {}\n\nSuggestion: Check the format of your environment variables and flags.", msg)
            }
            Self::Benchmark(msg) => {
                format!("Benchmark failed: {}\n\nSuggestion: Reduce --length or --threads and try again.", msg)
            }
            Self::Output(msg) => {
                format!("Could not format results: {}\n\nSuggestion: Try --format text.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1,  // Invalid configuration/usage
            Self::Io(_) => 5,
            Self::Benchmark(_) => 6,
            Self::Output(_) => 7,
            Self::Internal(_) => 99,
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Io(_) | Self::Output(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Benchmark(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Conversions for errors raised by the benchmark stack
impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::output(format!("JSON serialization error: {}", error))
    }
}

impl From<rayon::ThreadPoolBuildError> for AppError {
    fn from(error: rayon::ThreadPoolBuildError) -> Self {
        Self::benchmark(format!("Failed to build thread pool: {}", error))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_panic() {
            Self::benchmark(format!("Benchmark task panicked: {}", error))
        } else {
            Self::internal(format!("Benchmark task was cancelled: {}", error))
        }
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error reporter for user feedback on stderr
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", error.format_for_console(self.use_color));

        if self.verbose {
            eprintln!();
            eprintln!("{}", error.user_friendly_message());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_error = AppError::config("Invalid length");
        assert_eq!(config_error.category(), "CONFIG");
        assert_eq!(config_error.exit_code(), 1);
        assert_eq!(config_error.to_string(), "Configuration error: Invalid length");

        let bench_error = AppError::benchmark("pool failed");
        assert_eq!(bench_error.category(), "BENCH");
        assert_eq!(bench_error.exit_code(), 6);
    }

    #[test]
    fn test_error_conversions() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_error: AppError = json_error.into();
        assert_eq!(app_error.category(), "OUTPUT");

        let pool_error = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .spawn_handler(|_| Err(std::io::Error::new(std::io::ErrorKind::Other, "no threads")))
            .build()
            .unwrap_err();
        let app_error: AppError = pool_error.into();
        assert_eq!(app_error.category(), "BENCH");
        assert!(app_error.to_string().contains("thread pool"));
    }

    #[tokio::test]
    async fn test_join_error_conversion() {
        let join_error = tokio::task::spawn_blocking(|| panic!("boom")).await.unwrap_err();
        let app_error: AppError = join_error.into();
        assert_eq!(app_error.category(), "BENCH");
        assert_eq!(app_error.exit_code(), 6);
    }

    #[test]
    fn test_user_friendly_messages() {
        let message = AppError::config("bad BENCH_LENGTH").user_friendly_message();
        assert!(message.contains("Configuration problem"));
        assert!(message.contains("Suggestion"));

        let message = AppError::internal("oops").user_friendly_message();
        assert!(message.contains("likely a bug"));
    }

    #[test]
    fn test_console_formatting() {
        let error = AppError::validation("threads out of range");
        let plain = error.format_for_console(false);
        assert_eq!(plain, "[VALIDATION] Validation error: threads out of range");

        let colored = error.format_for_console(true);
        assert!(colored.contains("VALIDATION"));
        assert!(colored.contains("threads out of range"));
    }

    #[test]
    fn test_exit_codes_are_distinct_per_family() {
        assert_eq!(AppError::parse("x").exit_code(), AppError::validation("x").exit_code());
        assert_ne!(AppError::io("x").exit_code(), AppError::benchmark("x").exit_code());
        assert_eq!(AppError::internal("x").exit_code(), 99);
    }
}
