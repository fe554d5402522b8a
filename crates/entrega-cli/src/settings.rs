use std::path::Path;

use anyhow::Context;
use entrega_core::{load_delivery_config, DeliveryConfig};

/// Loads the delivery config, falling back to the built-in store only when
/// the file does not exist. A file that exists but is invalid or unreadable
/// is an error.
pub(crate) fn load_delivery_settings(path: &Path) -> anyhow::Result<DeliveryConfig> {
    let exists = path
        .try_exists()
        .with_context(|| format!("failed to check delivery config at {}", path.display()))?;
    if !exists {
        tracing::warn!(
            path = %path.display(),
            "delivery config not found; using built-in store address and pricing"
        );
        return Ok(DeliveryConfig::builtin_default());
    }

    let config = load_delivery_config(path)
        .with_context(|| format!("failed to load delivery config from {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        store = %config.store.address.full_text(&config.country),
        "delivery config loaded"
    );
    Ok(config)
}
