use super::tasks::millis;
use crate::{
    logging::Logger,
    reveal::{Observation, RevealGroup, RevealTracker, GROUPS, PROGRESS_ATTRIBUTE, REVEALED_CLASS},
};
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::{cell::RefCell, collections::HashMap, rc::Rc, time::Duration};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};

const REVEAL_KEY_ATTRIBUTE: &str = "data-reveal-key";
const HOVER_SELECTOR: &str = "a, button, .hover-effect";
const HOVER_READY_ATTRIBUTE: &str = "data-hover-ready";
const HOVER_TRANSITION: &str = "all 0.2s ease";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct GroupObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

struct HoverDelegate {
    document: Document,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

/// Owns every observer and listener it installs; dropping it detaches them.
pub struct ViewController {
    observers: Vec<GroupObserver>,
    hover: Option<HoverDelegate>,
}

impl ViewController {
    pub fn attach(document: &Document, reduced_motion: bool, logger: Logger) -> Self {
        let mut observers = Vec::new();

        for group in GROUPS {
            match observe_group(document, group, reduced_motion) {
                Some((observer, count)) => {
                    logger.debug("reveal_group_observed", json!({ "group": group.name, "elements": count }));
                    observers.push(observer);
                }
                None => logger.debug("reveal_group_skipped", json!({ "group": group.name })),
            }
        }

        let hover = install_hover_delegate(document);
        if hover.is_none() {
            logger.debug("hover_delegate_skipped", json!({}));
        }

        Self { observers, hover }
    }
}

impl Drop for ViewController {
    fn drop(&mut self) {
        for group in &self.observers {
            group.observer.disconnect();
        }

        if let Some(hover) = self.hover.take() {
            let _ = hover
                .document
                .remove_event_listener_with_callback("mouseover", hover.listener.as_ref().unchecked_ref());
        }
    }
}

fn observe_group(
    document: &Document,
    group: RevealGroup,
    reduced_motion: bool,
) -> Option<(GroupObserver, usize)> {
    let nodes = document.query_selector_all(group.selector).ok()?;
    let mut elements = Vec::new();

    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if element.has_attribute(REVEAL_KEY_ATTRIBUTE) {
            continue;
        }

        let _ = element.set_attribute(REVEAL_KEY_ATTRIBUTE, &format!("{}-{index}", group.name));
        if group.progress_bars {
            set_width(&element, "0");
        }
        elements.push(element);
    }

    if elements.is_empty() {
        return None;
    }

    let tracker = if reduced_motion {
        RevealTracker::new(group).immediate()
    } else {
        RevealTracker::new(group)
    };
    let tracker = Rc::new(RefCell::new(tracker));

    let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let mut batch = Vec::new();
        let mut targets = HashMap::new();

        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let Some(key) = target.get_attribute(REVEAL_KEY_ATTRIBUTE) else {
                continue;
            };

            batch.push(Observation {
                key: key.clone(),
                intersecting: entry.is_intersecting(),
                progress: target.get_attribute(PROGRESS_ATTRIBUTE),
            });
            targets.insert(key, target);
        }

        let actions = tracker.borrow_mut().process(&batch);
        for action in actions {
            let Some(element) = targets.remove(&action.key) else {
                continue;
            };
            observer.unobserve(&element);
            reveal_after(element, action.delay, action.width);
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(group.threshold));
    options.set_root_margin(group.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for element in &elements {
        observer.observe(element);
    }

    Some((
        GroupObserver {
            observer,
            _callback: callback,
        },
        elements.len(),
    ))
}

fn reveal_after(element: Element, delay: Duration, width: Option<String>) {
    let apply = move || {
        let _ = element.class_list().add_1(REVEALED_CLASS);
        if let Some(width) = width.as_deref() {
            set_width(&element, width);
        }
    };

    if delay.is_zero() {
        apply();
    } else {
        let _ = Timeout::new(millis(delay), apply).forget();
    }
}

fn set_width(element: &Element, width: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("width", width);
    }
}

fn install_hover_delegate(document: &Document) -> Option<HoverDelegate> {
    let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(interactive)) = target.closest(HOVER_SELECTOR) else {
            return;
        };
        if interactive.has_attribute(HOVER_READY_ATTRIBUTE) {
            return;
        }

        if let Some(element) = interactive.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property("transition", HOVER_TRANSITION);
        }
        let _ = interactive.set_attribute(HOVER_READY_ATTRIBUTE, "");
    });

    document
        .add_event_listener_with_callback("mouseover", listener.as_ref().unchecked_ref())
        .ok()?;

    Some(HoverDelegate {
        document: document.clone(),
        listener,
    })
}
