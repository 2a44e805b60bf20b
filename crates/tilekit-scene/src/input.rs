//! Input event dispatch.
//!
//! The windowing collaborator feeds [`InputEvent`]s into an
//! [`InputHandler`], which fans them out to registered callbacks. A scene
//! registers its resize callback here when it is initialized.

use tilekit_types::input::InputEvent;

type Callback = Box<dyn FnMut(&InputEvent) + Send>;

/// Identifies a group of callbacks for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackKey(pub u64);

struct Registration {
    key: Option<CallbackKey>,
    callback: Callback,
}

/// Fan-out of input events to registered callbacks.
#[derive(Default)]
pub struct InputHandler {
    callbacks: Vec<Registration>,
    cursor: (i32, i32),
    next_key: u64,
}

impl std::fmt::Debug for InputHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHandler")
            .field("callbacks", &self.callbacks.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback that lives as long as the handler.
    pub fn register(&mut self, callback: impl FnMut(&InputEvent) + Send + 'static) {
        self.callbacks.push(Registration {
            key: None,
            callback: Box::new(callback),
        });
    }

    /// Register a callback under a fresh key and return the key.
    pub fn register_keyed(
        &mut self,
        callback: impl FnMut(&InputEvent) + Send + 'static,
    ) -> CallbackKey {
        let key = CallbackKey(self.next_key);
        self.next_key += 1;
        self.callbacks.push(Registration {
            key: Some(key),
            callback: Box::new(callback),
        });
        key
    }

    /// Drop every callback registered under `key`. Returns how many were
    /// removed.
    pub fn remove(&mut self, key: CallbackKey) -> usize {
        let before = self.callbacks.len();
        self.callbacks.retain(|r| r.key != Some(key));
        before - self.callbacks.len()
    }

    /// Deliver an event to every callback in registration order.
    pub fn dispatch(&mut self, event: &InputEvent) {
        if let Some(cursor) = event.cursor() {
            self.cursor = cursor;
        }
        for registration in &mut self.callbacks {
            (registration.callback)(event);
        }
    }

    /// Last cursor position seen by [`dispatch`](Self::dispatch).
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use tilekit_types::input::MouseButton;

    #[test]
    fn dispatch_reaches_callbacks_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut input = InputHandler::new();
        for id in 0..3 {
            let seen = Arc::clone(&seen);
            input.register(move |_| seen.lock().unwrap().push(id));
        }
        input.dispatch(&InputEvent::Quit);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn remove_by_key() {
        let hits = Arc::new(Mutex::new(0));
        let mut input = InputHandler::new();
        let counter = Arc::clone(&hits);
        let key = input.register_keyed(move |_| *counter.lock().unwrap() += 1);
        input.register(|_| {});
        assert_eq!(input.remove(key), 1);
        assert_eq!(input.remove(key), 0);
        input.dispatch(&InputEvent::Quit);
        assert_eq!(*hits.lock().unwrap(), 0);
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn keys_are_unique() {
        let mut input = InputHandler::new();
        let a = input.register_keyed(|_| {});
        let b = input.register_keyed(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn tracks_cursor() {
        let mut input = InputHandler::new();
        input.dispatch(&InputEvent::CursorMove { x: 12, y: -4 });
        assert_eq!(input.cursor(), (12, -4));
        input.dispatch(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
            x: 3,
            y: 3,
        });
        assert_eq!(input.cursor(), (3, 3));
        input.dispatch(&InputEvent::WindowResize {
            width: 1,
            height: 1,
        });
        assert_eq!(input.cursor(), (3, 3));
    }
}
