//! Synchronous notification lists.

/// Handle returned on subscription, used to remove the handler later.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ListenerId(pub(crate) u64);

type Handler<E> = Box<dyn FnMut(&E)>;

pub(crate) struct Listeners<E> {
    handlers: Vec<(ListenerId, Handler<E>)>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<E> Listeners<E> {
    pub fn subscribe(&mut self, id: ListenerId, handler: Handler<E>) {
        self.handlers.push((id, handler));
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    /// Calls every handler in subscription order.
    pub fn emit(&mut self, event: &E) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}
