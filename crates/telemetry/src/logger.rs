use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum TelemetryError {
	#[error("Invalid log level '{0}', expected one of: trace, debug, info, warn, error")]
	InvalidLogLevel(String),

	#[error("Logger already initialized: {0}")]
	AlreadyInitialized(String),
}

/// Custom time formatter that displays time as "YYYY-MM-DD HH:MM:SS.micros"
struct CustomTimeFormat;

impl FormatTime for CustomTimeFormat {
	fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
		let now = std::time::SystemTime::now();
		let datetime: chrono::DateTime<chrono::Local> = now.into();
		write!(w, "{}", datetime.format("[%Y-%m-%d %H:%M:%S%.6f]"))
	}
}

/// Normalize and validate a log level string (case-insensitive)
pub fn parse_level(level: &str) -> Result<String, TelemetryError> {
	let level_lower = level.to_lowercase();
	if !VALID_LEVELS.contains(&level_lower.as_str()) {
		return Err(TelemetryError::InvalidLogLevel(level.to_string()));
	}
	Ok(level_lower)
}

/// Initialize the logger with the provided log level
///
/// This sets up a console logger with:
/// - The log level from the `level` parameter
/// - Timestamps in format: YYYY-MM-DD HH:MM:SS.micros
/// - Records emitted through the `log` facade forwarded to the subscriber
///
/// # Example
///
/// ```no_run
/// telemetry::init("info")?;
/// # Ok::<(), telemetry::TelemetryError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the level is invalid or a global subscriber is
/// already installed.
pub fn init(level: &str) -> Result<(), TelemetryError> {
	let level = parse_level(level)?;

	tracing_subscriber::registry()
		.with(EnvFilter::new(level))
		.with(
			fmt::layer()
				.with_timer(CustomTimeFormat)
				.with_target(false)
				.with_thread_ids(true)
				.with_line_number(false)
				.with_file(false),
		)
		.try_init()
		.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("trace", "trace")]
	#[case("debug", "debug")]
	#[case("info", "info")]
	#[case("warn", "warn")]
	#[case("error", "error")]
	#[case("TRACE", "trace")] // Test case insensitivity
	#[case("DeBuG", "debug")] // Mixed case
	fn test_valid_log_levels(#[case] level: &str, #[case] expected: &str) {
		assert_eq!(parse_level(level).unwrap(), expected);
	}

	#[rstest]
	#[case("invalid")]
	#[case("")]
	#[case("warning")] // Common mistake (should be "warn")
	#[case("critical")] // Not a standard Rust log level
	fn test_invalid_log_levels(#[case] level: &str) {
		let result = parse_level(level);
		assert!(
			matches!(result, Err(TelemetryError::InvalidLogLevel(_))),
			"Expected InvalidLogLevel for: {}",
			level
		);
	}

	#[test]
	fn test_init_rejects_invalid_level_before_installing() {
		assert!(matches!(
			init("loud"),
			Err(TelemetryError::InvalidLogLevel(_))
		));
	}
}
