pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Installs error reporting and logging for the roster service.
///
/// Turns on library backtraces for [`color_eyre`] reports and, unless
/// `RUST_LOG` is already set, logs the backend at `debug` and HTTP request
/// spans from `tower_http` at `debug`. Only the first call in a process can
/// succeed; later calls fail with [`LogError`] because both hooks are global.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    // Reports carry a backtrace unless the caller opted out
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(|e: color_eyre::Report| LogError::ColorEyre(e))?;

    // Default filter for the service binary
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var(
                "RUST_LOG",
                "tracing=info,tower_http=debug,roster_backend=debug",
            )
        }
    }
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_installs_once() {
        setup().unwrap();

        assert!(std::env::var("RUST_LOG").is_ok());
        info!("logging installed");

        // color_eyre refuses a second install before the subscriber is touched
        assert!(matches!(setup(), Err(LogError::ColorEyre(_))));
    }
}
