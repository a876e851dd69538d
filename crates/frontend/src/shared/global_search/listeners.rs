//! Window/document event subscriptions owned by a component.
//!
//! An `EventSubscription` adds its listener when created and removes it when
//! dropped, so a component keeps the subscriptions for its lifetime and drops
//! them in `on_cleanup`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent};

/// A listener registered on `target` for `event`.
///
/// The listener is attached by `subscribe` and detached by `Drop` with the
/// same `Closure`, so it never outlives the subscription and no closure is
/// leaked with `forget`. Moving the value keeps the listener attached; only
/// dropping it (e.g. clearing the owner's `Vec` in `on_cleanup`) detaches it.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn subscribe(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, String> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| format!("cannot subscribe to '{}': {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// `keydown` on the window.
pub fn on_window_keydown(
    mut handler: impl FnMut(KeyboardEvent) + 'static,
) -> Result<EventSubscription, String> {
    let window = web_sys::window().ok_or("no window")?;
    EventSubscription::subscribe(window.as_ref(), "keydown", move |event: Event| {
        if let Ok(keyboard_event) = event.dyn_into::<KeyboardEvent>() {
            handler(keyboard_event);
        }
    })
}

/// `mousedown` on the document.
pub fn on_document_mousedown(
    mut handler: impl FnMut(MouseEvent) + 'static,
) -> Result<EventSubscription, String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    EventSubscription::subscribe(document.as_ref(), "mousedown", move |event: Event| {
        if let Ok(mouse_event) = event.dyn_into::<MouseEvent>() {
            handler(mouse_event);
        }
    })
}
