use smallvec::SmallVec;

use crate::types::SubscriptionId;

/// Ordered list of boxed callbacks.
pub(crate) struct ListenerList<L: ?Sized> {
    entries: SmallVec<[(SubscriptionId, Box<L>); 2]>,
}

impl<L: ?Sized> Default for ListenerList<L> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }
}

impl<L: ?Sized> ListenerList<L> {
    pub(crate) fn push(&mut self, id: SubscriptionId, listener: Box<L>) {
        self.entries.push((id, listener));
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.entries.iter().position(|(entry, _)| *entry == id) else {
            return false;
        };
        self.entries.remove(pos);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Listeners in registration order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<L>> {
        self.entries.iter_mut().map(|(_, listener)| listener)
    }
}
