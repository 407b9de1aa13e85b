//! Subscriber installation.
//!
//! Composes an `EnvFilter` with an optional fmt layer writing to stderr.
//! Installing twice is a no-op.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::error::ObservabilityError;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber for the given configuration
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = EnvFilter::try_new(config.filter_directive())
        .map_err(|e| ObservabilityError::Config(e.to_string()))?;

    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    // Build layers first (build separately, then compose once to avoid type mismatch)
    let fmt_layer = config.enable_console.then(|| {
        let base = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(config.ansi)
            .with_target(true);
        match config.format {
            LogFormat::Pretty => base.compact().boxed(),
            LogFormat::Json => base.json().boxed(),
        }
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let _ = INITIALIZED.set(());
    tracing::debug!(
        service.name = %config.service_name,
        filter = %config.filter_directive(),
        "logging initialized"
    );
    Ok(())
}

/// Initialize with configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_filter_is_config_error() {
        let config = ObservabilityConfig::new("shade").with_log_level("shade=notalevel[");
        let err = init(config).unwrap_err();
        assert!(matches!(err, ObservabilityError::Config(_)));
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = ObservabilityConfig::new("shade").with_console(false);
        init(config.clone()).unwrap();
        assert!(is_initialized());
        init(config).unwrap();
    }
}
