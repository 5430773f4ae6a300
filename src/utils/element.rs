use std::{fmt, rc::Rc};

use gpui::{AnyElement, App, IntoElement, Window};

/// Caller-supplied content for a component slot (toast body, dialog body).
///
/// The component never inspects it; it only asks for an element when painting.
#[derive(Clone)]
pub struct ContentSlot(Rc<dyn Fn(&mut Window, &mut App) -> AnyElement>);

impl ContentSlot {
    pub fn new<E: IntoElement>(content: impl Fn(&mut Window, &mut App) -> E + 'static) -> Self {
        Self(Rc::new(move |window, cx| {
            content(window, cx).into_any_element()
        }))
    }

    pub fn render(&self, window: &mut Window, cx: &mut App) -> AnyElement {
        (self.0)(window, cx)
    }
}

impl fmt::Debug for ContentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentSlot(..)")
    }
}
