// ============================================================================
// EVENT HANDLING
// ============================================================================
// Los listeners de un render se guardan en un `Listeners`. App conserva el del
// último render y lo reemplaza en el siguiente: al soltarlo, cada listener se
// desregistra y su closure se libera.
// ============================================================================

use std::cell::RefCell;
use gloo_events::EventListener;
use web_sys::{Event, EventTarget};

/// Listeners registrados durante un render
pub struct Listeners<L = EventListener> {
    active: RefCell<Vec<L>>,
}

impl<L> Listeners<L> {
    pub fn new() -> Self {
        Self {
            active: RefCell::new(Vec::new()),
        }
    }

    /// Mantener vivo un listener mientras viva este render
    pub fn keep(&self, listener: L) {
        self.active.borrow_mut().push(listener);
    }

    pub fn len(&self) -> usize {
        self.active.borrow().len()
    }
}

impl<L> Default for Listeners<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl Listeners<EventListener> {
    /// Registrar handler sobre cualquier EventTarget
    pub fn listen<F>(&self, target: &EventTarget, event_type: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.keep(EventListener::new(target, event_type, handler));
    }
}

/// Listener para toda la vida de la página. Registrar una sola vez.
pub fn on_global_event<F>(target: &EventTarget, event_type: &'static str, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event_type, handler).forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn replacing_a_render_releases_its_handlers() {
        let view_model = Rc::new(());
        let current: RefCell<Listeners<Box<dyn Fn()>>> = RefCell::new(Listeners::new());

        for _ in 0..4 {
            let next = Listeners::new();
            for _ in 0..2 {
                let held = view_model.clone();
                next.keep(Box::new(move || drop(held.clone())) as Box<dyn Fn()>);
            }
            *current.borrow_mut() = next;
            assert_eq!(Rc::strong_count(&view_model), 3);
        }

        assert_eq!(current.borrow().len(), 2);
        drop(current);
        assert_eq!(Rc::strong_count(&view_model), 1);
    }
}
