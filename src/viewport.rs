use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollToOptions,
};

use folio_core::reveal::ObservedSection;
use folio_core::{PageAction, ThemePreference};

use crate::app_core::AppCore;

pub(crate) const OBSERVE_ATTR: &str = "data-observe";

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

pub(crate) fn apply_theme(theme: ThemePreference) {
    let Some(body) = body() else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
}

pub(crate) fn set_scroll_lock(locked: bool) {
    let Some(body) = body() else {
        return;
    };
    let value = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", value);
}

pub(crate) fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// `offsetTop` of the element an in-page `#id` href points at.
pub(crate) fn anchor_offset_top(href: &str) -> Option<f64> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    let document = web_sys::window()?.document()?;
    let target = document.get_element_by_id(id)?;
    let target = target.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(target.offset_top()))
}

/// Window-level listeners and the section observer. Dropping it detaches
/// everything.
pub(crate) struct ViewportBindings {
    _listeners: Vec<EventListener>,
    observer: Option<IntersectionObserver>,
    _observer_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl ViewportBindings {
    pub(crate) fn install(core: &Rc<AppCore>) -> Self {
        let mut listeners = Vec::new();
        if let Some(window) = web_sys::window() {
            let passive = EventListenerOptions::default();

            let core_for_scroll = Rc::clone(core);
            listeners.push(EventListener::new_with_options(&window, "scroll", passive, move |_| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                core_for_scroll.dispatch(PageAction::Scrolled { scroll_y });
            }));

            let core_for_pointer = Rc::clone(core);
            listeners.push(EventListener::new_with_options(
                &window,
                "mousemove",
                passive,
                move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let (viewport_w, viewport_h) = viewport_size();
                    core_for_pointer.dispatch(PageAction::PointerMoved {
                        client_x: f64::from(event.client_x()),
                        client_y: f64::from(event.client_y()),
                        viewport_w,
                        viewport_h,
                    });
                },
            ));
        }
        let (observer, callback) = match observe_sections(core) {
            Some((observer, callback)) => (Some(observer), Some(callback)),
            None => (None, None),
        };
        Self {
            _listeners: listeners,
            observer,
            _observer_callback: callback,
        }
    }
}

impl Drop for ViewportBindings {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

fn observe_sections(
    core: &Rc<AppCore>,
) -> Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)> {
    let document = web_sys::window()?.document()?;
    let threshold = core.snapshot().config.reveal_threshold;
    let core = Rc::clone(core);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(section) = section_of(&entry.target()) else {
                    continue;
                };
                core.dispatch(PageAction::SectionIntersected {
                    section,
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                });
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    let targets = document
        .query_selector_all(&format!("[{OBSERVE_ATTR}]"))
        .ok()?;
    let mut observed = 0u32;
    for index in 0..targets.length() {
        let Some(node) = targets.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        observer.observe(&element);
        observed += 1;
    }
    gloo::console::log!("viewport: observing sections", observed);
    Some((observer, callback))
}

fn section_of(element: &Element) -> Option<ObservedSection> {
    let raw = element.get_attribute(OBSERVE_ATTR)?;
    ObservedSection::from_attr(&raw)
}
