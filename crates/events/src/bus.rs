//! Change notification contract between a view store and its renderers.
//!
//! A store such as the product table publishes one message per mutation that
//! changed what a user would see, and publishes nothing for no-ops. Messages
//! say *what kind* of thing changed; a renderer drains its subscription once
//! per frame and then re-reads the store's current state, so coalescing a
//! burst of messages into one redraw is always correct.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

/// One renderer's queue of pending change messages.
///
/// ```ignore
/// let changes = table.subscribe();
/// // render tick
/// if !changes.drain().is_empty() {
///     redraw(table.result());
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Next pending message, if any. Never blocks.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Everything queued since the last call, oldest first.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Where a store sends its change messages.
///
/// `publish` runs on the mutating call's thread and returns once every live
/// subscription has the message queued, so a renderer that drains right after
/// a mutation returns always sees it. The store has already committed its new
/// state when it publishes; an `Err` here is reported, never rolled back.
pub trait ChangeBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> ChangeBus<M> for Arc<B>
where
    B: ChangeBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
