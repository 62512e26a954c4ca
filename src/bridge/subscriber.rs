//! Component-side contracts: construction and change notification.

use std::sync::Arc;

use crate::bridge::envelope::PropsEnvelope;
use crate::document::Snapshot;

/// Observer for inbound snapshot changes.
///
/// The bridge holds a single subscriber and calls [`Subscriber::notify`]
/// after every successful persist, once the envelope already carries the
/// new snapshot. A failed persist never produces a notification.
pub trait Subscriber: Send + Sync {
    fn notify(&self, snapshot: &Snapshot);
}

/// A live UI component bound to a document.
///
/// Components are constructed exactly once per binding and refreshed
/// through [`Subscriber::notify`] rather than being remounted.
pub trait Component: Subscriber {}

/// Builds the component for a binding.
pub trait ComponentFactory {
    type Output: Component + 'static;

    /// Construct the component from its props. Called exactly once per
    /// bind; the envelope is the component's only channel to the
    /// document.
    fn create(&self, props: PropsEnvelope) -> Arc<Self::Output>;
}
