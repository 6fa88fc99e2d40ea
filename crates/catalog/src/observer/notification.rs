use super::{ObserverError, ProductAction, ProductObserver};
use crate::model::Product;
use std::sync::Mutex;
use tracing::info;

/// Formats a customer-facing message per product change and "sends" it.
///
/// There is no real transport: sending means emitting an `info` event and appending the message
/// to an in-process outbox, which [`NotificationObserver::sent`] exposes.
#[derive(Debug, Default)]
pub struct NotificationObserver {
    outbox: Mutex<Vec<String>>,
}

impl NotificationObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(product: &Product, action: ProductAction) -> String {
        let verb = match action {
            ProductAction::Created => "created",
            ProductAction::Updated => "updated",
            ProductAction::Deleted => "removed",
        };
        format!(
            "Product \"{}\" was {} in the system. Price: $ {}",
            product.name, verb, product.price
        )
    }

    /// Messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }

    fn send(&self, message: String) -> Result<(), ObserverError> {
        info!(%message, "Notification sent");
        self.outbox
            .lock()
            .map_err(|_| ObserverError::new("notification outbox is poisoned"))?
            .push(message);
        Ok(())
    }
}

impl ProductObserver for NotificationObserver {
    fn update(&self, product: &Product, action: ProductAction) -> Result<(), ObserverError> {
        self.send(Self::message(product, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn mouse() -> Product {
        Product::new("Mouse", 50.0, Category::new("Peripherals"))
    }

    #[test]
    fn test_message_per_action() {
        assert_eq!(
            NotificationObserver::message(&mouse(), ProductAction::Created),
            "Product \"Mouse\" was created in the system. Price: $ 50"
        );
        assert!(NotificationObserver::message(&mouse(), ProductAction::Deleted)
            .contains("was removed in the system"));
    }

    #[test]
    fn test_sent_messages_accumulate_in_order() {
        let observer = NotificationObserver::new();
        observer.update(&mouse(), ProductAction::Created).unwrap();
        observer.update(&mouse(), ProductAction::Updated).unwrap();

        let sent = observer.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].contains("created"));
        assert!(sent[1].contains("updated"));
    }
}
