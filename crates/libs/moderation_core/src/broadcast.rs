use crate::event::BroadcastEvent;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::mpsc;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 64;

/// Registry of currently-connected observers with fire-and-forget fan-out.
///
/// Every observer gets its own bounded queue, so a slow consumer drops its
/// own copy of an event instead of stalling delivery to the rest. Emission
/// never reports failure back to the caller: delivery is best-effort,
/// at-most-once, with no replay for observers that connect later.
#[derive(Clone)]
pub struct Broadcaster {
    inner: Arc<Inner>,
}

struct Inner {
    observers: Mutex<HashMap<u64, mpsc::Sender<BroadcastEvent>>>,
    next_id: AtomicU64,
    capacity: usize,
}

impl Broadcaster {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                observers: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
                capacity: capacity.max(1),
            }),
        }
    }

    /// Registers a new observer. It receives events emitted from this point
    /// on; nothing emitted earlier is delivered.
    #[must_use]
    pub fn connect(&self) -> Observer {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel(self.inner.capacity);
        self.inner
            .observers
            .lock()
            .expect("observer registry poisoned")
            .insert(id, tx);
        debug!(observer = id, "observer connected");
        Observer {
            id,
            rx,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Delivers `event` to every currently-registered observer.
    ///
    /// Non-blocking: a full observer queue drops that observer's copy, a
    /// closed one deregisters the observer.
    pub fn emit(&self, event: &BroadcastEvent) {
        let mut observers = self
            .inner
            .observers
            .lock()
            .expect("observer registry poisoned");
        let mut dead = Vec::new();
        for (id, tx) in observers.iter() {
            match tx.try_send(event.clone()) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    debug!(observer = *id, "dropping event for slow observer");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => dead.push(*id),
            }
        }
        for id in dead {
            observers.remove(&id);
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner
            .observers
            .lock()
            .expect("observer registry poisoned")
            .len()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Handle held by one connected observer. Dropping it deregisters the
/// observer; events still in its queue are discarded silently.
pub struct Observer {
    id: u64,
    rx: mpsc::Receiver<BroadcastEvent>,
    registry: Weak<Inner>,
}

impl Observer {
    /// Next event, or `None` once the broadcaster itself is gone.
    pub async fn recv(&mut self) -> Option<BroadcastEvent> {
        self.rx.recv().await
    }

    /// Non-blocking variant of [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Option<BroadcastEvent> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade()
            && let Ok(mut observers) = inner.observers.lock()
        {
            observers.remove(&self.id);
            debug!(observer = self.id, "observer disconnected");
        }
    }
}
