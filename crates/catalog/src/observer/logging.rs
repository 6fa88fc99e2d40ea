use super::{ObserverError, ProductAction, ProductObserver};
use crate::model::Product;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

/// Writes one structured log event per product change.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        Self
    }

    /// Human-readable form of the event, as it appears in the log message.
    pub fn format_line(product: &Product, action: ProductAction, at: DateTime<Utc>) -> String {
        format!(
            "[{}] Product {}: ID={}, Name=\"{}\", Price={}",
            at.to_rfc3339_opts(SecondsFormat::Millis, true),
            action,
            product.id_label(),
            product.name,
            product.price
        )
    }
}

impl ProductObserver for LoggingObserver {
    fn update(&self, product: &Product, action: ProductAction) -> Result<(), ObserverError> {
        let now = Utc::now();
        info!(
            timestamp = %now.to_rfc3339_opts(SecondsFormat::Millis, true),
            %action,
            id = %product.id_label(),
            name = %product.name,
            price = product.price,
            "{}",
            Self::format_line(product, action, now)
        );
        Ok(())
    }
}
