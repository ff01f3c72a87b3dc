//! Tracks which icon identifiers have been registered with the external
//! rendering surface, so each registration call happens at most once.

pub mod catalog;

use crate::Result;
use fxhash::FxHashSet;
use std::sync::Mutex;

/// The seam to the external rendering surface. Implementations perform the
/// actual asset registration (for a Mapbox-style renderer this is the
/// add-image call on the style).
pub trait IconSink: Send + Sync {
    /// Register the icon identified by `key` with the rendering surface.
    fn add_icon(&self, key: &str) -> Result<()>;
}

/// Sink for hosts that manage icon assets themselves
pub struct NoopSink;

impl IconSink for NoopSink {
    fn add_icon(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// Remembers which icon keys the sink has accepted.
///
/// The registered set is the only shared mutable state on the query path; it
/// is mutex-guarded, and the lock is held across the sink call so concurrent
/// registrations of the same key coalesce into a single external call.
pub struct IconRegistry {
    sink: Box<dyn IconSink>,
    registered: Mutex<FxHashSet<String>>,
}

impl IconRegistry {
    pub fn new(sink: Box<dyn IconSink>) -> Self {
        Self {
            sink,
            registered: Mutex::new(FxHashSet::default()),
        }
    }

    /// Idempotent registration. The sink is called at most once per key; on
    /// sink failure the key stays unregistered, a warning is logged, and the
    /// enclosing query continues.
    pub fn ensure_registered(&self, key: &str) {
        if let Ok(mut registered) = self.registered.lock() {
            if registered.contains(key) {
                return;
            }

            if !catalog::is_known(key) {
                log::warn!("icon '{}' is not in the marker catalog", key);
            }

            match self.sink.add_icon(key) {
                Ok(()) => {
                    registered.insert(key.to_owned());
                }
                Err(e) => log::warn!("failed to register icon '{}': {}", key, e),
            }
        }
    }

    /// Bulk pre-registration, e.g. the whole marker catalog at startup
    pub fn ensure_all<'a>(&self, keys: impl IntoIterator<Item = &'a str>) {
        for key in keys {
            self.ensure_registered(key);
        }
    }

    pub fn is_registered(&self, key: &str) -> bool {
        self.registered
            .lock()
            .map(|registered| registered.contains(key))
            .unwrap_or(false)
    }

    /// Number of successfully registered keys
    pub fn len(&self) -> usize {
        self.registered.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every registered key. Hosts call this when the rendering
    /// surface drops its images, e.g. on a style reload.
    pub fn reset(&self) {
        if let Ok(mut registered) = self.registered.lock() {
            registered.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSink {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl IconSink for CountingSink {
        fn add_icon(&self, key: &str) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(format!("no asset for '{}'", key).into())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_registration_is_idempotent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = IconRegistry::new(Box::new(CountingSink {
            calls: calls.clone(),
            fail: false,
        }));

        registry.ensure_registered("pin");
        registry.ensure_registered("pin");
        registry.ensure_registered("pin");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(registry.is_registered("pin"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_failed_registration_is_not_recorded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = IconRegistry::new(Box::new(CountingSink {
            calls: calls.clone(),
            fail: true,
        }));

        registry.ensure_registered("pin");
        assert!(!registry.is_registered("pin"));

        // still unregistered, so the next call retries the sink
        registry.ensure_registered("pin");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reset_forgets_registrations() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = IconRegistry::new(Box::new(CountingSink {
            calls: calls.clone(),
            fail: false,
        }));

        registry.ensure_registered("campsite");
        registry.reset();
        assert!(!registry.is_registered("campsite"));

        registry.ensure_registered("campsite");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_bulk_registration() {
        let registry = IconRegistry::new(Box::new(NoopSink));
        registry.ensure_all(catalog::MARKER_CATALOG.iter().copied());
        assert_eq!(registry.len(), catalog::MARKER_CATALOG.len());
        assert!(registry.is_registered("trailhead"));
        assert!(registry.is_registered("ranger-station"));
    }
}
