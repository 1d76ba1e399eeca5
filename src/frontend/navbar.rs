use super::{dom, PageContext};
use crate::{
    content::NAV_LINKS,
    navbar::{NavbarState, NavbarTracker},
    schedule::FrameGate,
};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        dom::scroll_to_anchor(href);
    })
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let page = use_context::<PageContext>().unwrap_or_default();
    let state = use_state_eq(|| NavbarState::AtTop);
    let logo_hover = use_state_eq(|| false);

    {
        let state = state.clone();
        let threshold = page.config.nav_threshold;
        let top_offset = page.config.nav_top_offset;
        use_effect_with((), move |_| {
            let tracker = Rc::new(RefCell::new(NavbarTracker::with_limits(
                dom::scroll_y(),
                top_offset,
                threshold,
            )));
            let gate = Rc::new(RefCell::new(FrameGate::default()));
            state.set(tracker.borrow().state());

            let listener = Closure::<dyn FnMut()>::new(move || {
                if !gate.borrow_mut().request() {
                    return;
                }
                let Some(win) = window() else {
                    gate.borrow_mut().complete();
                    return;
                };

                let frame_tracker = tracker.clone();
                let frame_gate = gate.clone();
                let frame_state = state.clone();
                let frame = Closure::once_into_js(move || {
                    let next = frame_tracker.borrow_mut().observe(dom::scroll_y());
                    frame_gate.borrow_mut().complete();
                    frame_state.set(next);
                });
                if win.request_animation_frame(frame.unchecked_ref()).is_err() {
                    gate.borrow_mut().complete();
                }
            });

            let win = window();
            if let Some(win) = win.as_ref() {
                let _ = win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
                drop(listener);
            }
        });
    }

    let on_logo_enter = {
        let logo_hover = logo_hover.clone();
        Callback::from(move |_: MouseEvent| logo_hover.set(true))
    };
    let on_logo_leave = {
        let logo_hover = logo_hover.clone();
        Callback::from(move |_: MouseEvent| logo_hover.set(false))
    };

    let nav_style = format!("transform: {};", state.transform());
    let logo_style = if *logo_hover {
        "transform: scale(1.05); transition: transform 0.3s ease;"
    } else {
        "transform: scale(1); transition: transform 0.3s ease;"
    };

    html! {
        <nav class={classes!("navbar", state.scrolled().then_some("scrolled"))} style={nav_style}>
            <a
                class="navbar-brand-container"
                href="#home"
                style={logo_style}
                onclick={anchor_click("#home")}
                onmouseenter={on_logo_enter}
                onmouseleave={on_logo_leave}
            >
                <span class="navbar-brand">{"JR"}</span>
            </a>
            <ul class="navbar-links">
                { for NAV_LINKS.iter().map(|link| html! {
                    <li key={link.href}>
                        <a class="nav-link" href={link.href} onclick={anchor_click(link.href)}>{link.label}</a>
                    </li>
                }) }
            </ul>
        </nav>
    }
}
