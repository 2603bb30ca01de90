//! Change listener registry.
//!
//! Listeners are held by weak reference: the application owns each listener
//! as an `Arc`, and once the last `Arc` is dropped the registry stops
//! notifying it. No explicit unregistration is needed.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Observer notified when the recent files list changed. The new contents are
/// not passed along; re-query the tracker if they are needed.
pub trait RecentFilesListener: Send + Sync {
    fn recent_files_changed(&self);
}

/// Weakly-referenced listeners, notified in registration order.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Mutex<Vec<Weak<dyn RecentFilesListener>>>,
}

/// Address of the listener object, ignoring vtable metadata.
fn addr(listener: &Weak<dyn RecentFilesListener>) -> *const () {
    listener.as_ptr() as *const ()
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Weak<dyn RecentFilesListener>>> {
        // A panicking listener never runs under this lock, so the list is intact.
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register a listener. Registering the same listener twice has no effect.
    pub fn add(&self, listener: &Arc<dyn RecentFilesListener>) {
        let weak = Arc::downgrade(listener);
        let mut listeners = self.lock();
        listeners.retain(|l| l.strong_count() > 0);
        if listeners.iter().any(|l| addr(l) == addr(&weak)) {
            return;
        }
        listeners.push(weak);
    }

    /// Remove every listener.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of registered listeners that are still alive.
    pub fn live_count(&self) -> usize {
        self.lock().iter().filter(|l| l.strong_count() > 0).count()
    }

    /// Notify every live listener; dead entries are pruned.
    pub fn notify_all(&self) {
        let live: Vec<Arc<dyn RecentFilesListener>> = {
            let mut listeners = self.lock();
            listeners.retain(|l| l.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        tracing::trace!("notifying {} recent files listener(s)", live.len());
        for listener in live {
            listener.recent_files_changed();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl RecentFilesListener for Counter {
        fn recent_files_changed(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Counter {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn counter() -> (Arc<Counter>, Arc<dyn RecentFilesListener>) {
        let c = Arc::new(Counter::default());
        let dynamic: Arc<dyn RecentFilesListener> = c.clone();
        (c, dynamic)
    }

    #[test]
    fn notifies_each_live_listener_once() {
        let registry = ListenerRegistry::new();
        let (a, a_dyn) = counter();
        let (b, b_dyn) = counter();
        registry.add(&a_dyn);
        registry.add(&b_dyn);

        registry.notify_all();
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn duplicate_registration_is_ignored() {
        let registry = ListenerRegistry::new();
        let (a, a_dyn) = counter();
        registry.add(&a_dyn);
        registry.add(&a_dyn.clone());
        assert_eq!(registry.live_count(), 1);

        registry.notify_all();
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn dropped_listener_stops_receiving() {
        let registry = ListenerRegistry::new();
        let (a, a_dyn) = counter();
        registry.add(&a_dyn);
        registry.notify_all();
        assert_eq!(a.get(), 1);

        let weak = Arc::downgrade(&a);
        drop(a_dyn);
        drop(a);
        assert!(weak.upgrade().is_none());
        assert_eq!(registry.live_count(), 0);
        registry.notify_all();
    }

    #[test]
    fn clear_removes_everything() {
        let registry = ListenerRegistry::new();
        let (a, a_dyn) = counter();
        registry.add(&a_dyn);
        registry.clear();
        registry.notify_all();
        assert_eq!(a.get(), 0);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn notification_order_follows_registration() {
        struct Recorder {
            id: usize,
            log: Arc<Mutex<Vec<usize>>>,
        }
        impl RecentFilesListener for Recorder {
            fn recent_files_changed(&self) {
                self.log.lock().unwrap().push(self.id);
            }
        }

        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = ListenerRegistry::new();
        let listeners: Vec<Arc<dyn RecentFilesListener>> = (0..3)
            .map(|id| {
                Arc::new(Recorder {
                    id,
                    log: Arc::clone(&log),
                }) as Arc<dyn RecentFilesListener>
            })
            .collect();
        for l in &listeners {
            registry.add(l);
        }
        registry.notify_all();
        assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn listener_may_register_during_notification() {
        struct Reentrant {
            registry: Arc<ListenerRegistry>,
            extra: Arc<dyn RecentFilesListener>,
        }
        impl RecentFilesListener for Reentrant {
            fn recent_files_changed(&self) {
                self.registry.add(&self.extra);
            }
        }

        let registry = Arc::new(ListenerRegistry::new());
        let (extra, extra_dyn) = counter();
        let reentrant: Arc<dyn RecentFilesListener> = Arc::new(Reentrant {
            registry: Arc::clone(&registry),
            extra: extra_dyn,
        });
        registry.add(&reentrant);

        registry.notify_all();
        assert_eq!(extra.get(), 0);
        assert_eq!(registry.live_count(), 2);

        registry.notify_all();
        assert_eq!(extra.get(), 1);
    }
}
