//! Channel-backed bus used by a mounted table and its renderers.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{ChangeBus, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChangeBusError {
    /// A thread panicked while holding the subscriber list.
    #[error("change bus lock poisoned")]
    Poisoned,
}

/// Fans each message out to one `mpsc` channel per subscription.
///
/// A renderer that unmounts just drops its `Subscription`; the matching
/// sender is discarded the next time something is published.
#[derive(Debug)]
pub struct InMemoryChangeBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryChangeBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscribers still registered (dead ones linger until the next publish).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryChangeBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> ChangeBus<M> for InMemoryChangeBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = ChangeBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| ChangeBusError::Poisoned)?;

        let before = subs.len();
        subs.retain(|tx| tx.send(message.clone()).is_ok());
        if subs.len() != before {
            tracing::trace!(dropped = before - subs.len(), "pruned closed subscribers");
        }

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}
