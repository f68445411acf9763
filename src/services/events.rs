use std::fmt::{Debug, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener<T> = Box<dyn Fn(&T)>;

/// Synchronous in-process notifications.
///
/// Listeners run inline inside [`EventHub::emit`], in the order they were registered.
/// A panicking listener is not isolated from the emitter.
pub struct EventHub<T> {
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_id: u64,
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for EventHub<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T> EventHub<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    pub fn on(&mut self, listener: impl Fn(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    pub fn emit(&self, payload: &T) {
        for (_, listener) in &self.listeners {
            listener(payload);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
