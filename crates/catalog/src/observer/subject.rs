use super::{ProductAction, ProductObserver};
use crate::model::Product;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Holds the attached observers and dispatches product events to them.
///
/// The list sits behind a `RwLock` so observers can be attached or detached through a shared
/// reference. Dispatch works on a snapshot of the list, so an observer may attach or detach
/// others while being notified; the change applies from the next notification on.
#[derive(Default)]
pub struct ProductSubject {
    observers: RwLock<Vec<Arc<dyn ProductObserver>>>,
}

fn same_observer<O: ProductObserver + ?Sized>(a: &Arc<dyn ProductObserver>, b: &Arc<O>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl ProductSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer` unless this exact handle is already attached.
    ///
    /// Returns `true` if the observer was added.
    pub fn attach(&self, observer: Arc<dyn ProductObserver>) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        if observers.iter().any(|o| same_observer(o, &observer)) {
            info!(observer = observer.name(), "Observer already attached");
            return false;
        }
        info!(observer = observer.name(), "Observer attached");
        observers.push(observer);
        true
    }

    /// Removes `observer` if it is attached.
    ///
    /// Returns `true` if an entry was removed.
    pub fn detach<O: ProductObserver + ?Sized>(&self, observer: &Arc<O>) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        match observers.iter().position(|o| same_observer(o, observer)) {
            Some(index) => {
                let removed = observers.remove(index);
                info!(observer = removed.name(), "Observer detached");
                true
            }
            None => {
                info!(observer = observer.name(), "Observer not found");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls every attached observer once, in attachment order.
    ///
    /// Returns the number of observers that failed.
    pub fn notify(&self, product: &Product, action: ProductAction) -> usize {
        let snapshot: Vec<Arc<dyn ProductObserver>> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        info!(
            %action,
            product = %product.name,
            observers = snapshot.len(),
            "Notifying observers"
        );

        let mut failures = 0;
        for observer in &snapshot {
            match observer.update(product, action) {
                Ok(()) => debug!(observer = observer.name(), %action, "Observer notified"),
                Err(e) => {
                    failures += 1;
                    warn!(observer = observer.name(), %action, error = %e, "Observer failed");
                }
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::observer::ObserverError;
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<(String, Option<u32>, ProductAction)>>>;

    /// Appends `(label, product id, action)` to a shared log.
    struct Recorder {
        label: &'static str,
        log: Log,
    }

    impl ProductObserver for Recorder {
        fn update(&self, product: &Product, action: ProductAction) -> Result<(), ObserverError> {
            self.log.lock().unwrap().push((
                self.label.to_string(),
                product.id.map(|id| id.0),
                action,
            ));
            Ok(())
        }
    }

    struct Failing;

    impl ProductObserver for Failing {
        fn update(&self, _: &Product, _: ProductAction) -> Result<(), ObserverError> {
            Err(ObserverError::new("mailbox unavailable"))
        }
    }

    fn recorder(label: &'static str, log: &Log) -> Arc<Recorder> {
        Arc::new(Recorder {
            label,
            log: log.clone(),
        })
    }

    fn product() -> Product {
        let mut product = Product::new("Mouse", 50.0, Category::new("Peripherals"));
        product.id = Some(7.into());
        product
    }

    #[test]
    fn test_attach_is_idempotent_by_identity() {
        let subject = ProductSubject::new();
        let log = Log::default();
        let first = recorder("first", &log);

        assert!(subject.attach(first.clone()));
        assert!(!subject.attach(first.clone()));
        assert_eq!(subject.len(), 1);

        // same type, different allocation: a second entry
        assert!(subject.attach(recorder("first", &log)));
        assert_eq!(subject.len(), 2);
    }

    #[test]
    fn test_detach_removes_one_entry_or_is_noop() {
        let subject = ProductSubject::new();
        let log = Log::default();
        let first = recorder("first", &log);
        let second = recorder("second", &log);
        subject.attach(first.clone());
        subject.attach(second.clone());

        assert!(subject.detach(&first));
        assert_eq!(subject.len(), 1);
        assert!(!subject.detach(&first));
        assert_eq!(subject.len(), 1);

        subject.notify(&product(), ProductAction::Updated);
        let log = log.lock().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].0, "second");
    }

    #[test]
    fn test_notify_calls_each_observer_once_in_order() {
        let subject = ProductSubject::new();
        let log = Log::default();
        for label in ["a", "b", "c"] {
            subject.attach(recorder(label, &log));
        }

        let failures = subject.notify(&product(), ProductAction::Created);

        assert_eq!(failures, 0);
        let log = log.lock().unwrap();
        let labels: Vec<_> = log.iter().map(|(label, _, _)| label.as_str()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        assert!(log
            .iter()
            .all(|(_, id, action)| *id == Some(7) && *action == ProductAction::Created));
    }

    #[test]
    fn test_failing_observer_does_not_block_others() {
        let subject = ProductSubject::new();
        let log = Log::default();
        subject.attach(recorder("before", &log));
        subject.attach(Arc::new(Failing));
        subject.attach(recorder("after", &log));

        let failures = subject.notify(&product(), ProductAction::Deleted);

        assert_eq!(failures, 1);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_notify_without_observers() {
        let subject = ProductSubject::new();
        assert!(subject.is_empty());
        assert_eq!(subject.notify(&product(), ProductAction::Created), 0);
    }
}
