use std::error::Error;
use std::path::PathBuf;
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

/// Initialize file logging so stdout carries only program output
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".codontab")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("codontab_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map a `CODONTAB_LOG_LEVEL` value to an env_logger filter level
fn parse_log_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Set logging level based on environment variable or default
pub fn set_log_level() {
    let level = std::env::var("CODONTAB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = parse_log_level(&level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{level}', defaulting to 'info'");
        "info"
    });

    std::env::set_var("RUST_LOG", format!("codontab={env_filter}"));
}

pub fn log_system_info() {
    info!("=== Codontab Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("CODONTAB_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown() {
    info!("=== Codontab Shutting Down ===");
    info!("Terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Report an error to the log and to stderr, since the logger may be unavailable
pub fn log_critical_error(error: &str, context: Option<&str>) {
    let message = match context {
        Some(ctx) => format!("CRITICAL ERROR [{ctx}]: {error}"),
        None => format!("CRITICAL ERROR: {error}"),
    };

    error!("{message}");
    eprintln!("[{}] {message}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());

        let result = init_logging();
        assert!(result.is_ok());

        let log_file = result.unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(temp_dir.path().join(".codontab").join("logs")));
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some("debug"));
        assert_eq!(parse_log_level("WARN"), Some("warn"));
        assert_eq!(parse_log_level("Trace"), Some("trace"));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }
}
