//! Host-page side effects behind the `Page` seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site's HTML is authored by hand; this crate only reaches into a fixed
//! set of hook elements. Every lookup tolerates a missing element so the same
//! bundle can be loaded on pages that carry only part of the nav bar.

#[cfg(feature = "csr")]
use std::any::Any;
#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::collections::HashMap;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;
#[cfg(feature = "csr")]
use web_sys::{Document, HtmlElement};

use crate::config::NavConfig;
#[cfg(feature = "csr")]
use crate::state::nav::{Display, EventCardAccess, NavAction, NavControl};
use crate::state::nav::NavState;
use crate::state::team::TeamView;

/// Everything the controller does to the page besides networking.
pub trait Page {
    /// Write a full nav bar state to the hook elements.
    fn apply_nav(&self, state: &NavState);

    /// Blocking user-facing notice.
    fn notify(&self, message: &str);

    /// Blocking text prompt; `None` when the user cancels.
    fn prompt(&self, message: &str) -> Option<String>;

    fn navigate(&self, href: &str);

    /// Open the join-team dialog provided by the page.
    fn open_join_team(&self);

    /// Replace the team display region with `team` and scroll to it.
    /// Returns `false` when the page has no display region.
    fn render_team(&self, team: &TeamView) -> bool;
}

#[cfg(feature = "csr")]
thread_local! {
    static CLICK_HANDLERS: RefCell<HashMap<NavControl, Closure<dyn FnMut()>>> = RefCell::new(HashMap::new());
    static TEAM_MOUNT: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
}

/// `Page` over the live browser document.
#[derive(Clone, Debug)]
pub struct BrowserPage {
    config: NavConfig,
}

impl BrowserPage {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }
}

impl Page for BrowserPage {
    fn apply_nav(&self, state: &NavState) {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = document() else {
                return;
            };
            for (control, control_state) in state.controls() {
                let Some(el) = query_html(&doc, control.selector(&self.config.selectors)) else {
                    continue;
                };
                set_display(&el, control_state.display);
                if control == NavControl::User {
                    if let Some(label) = &state.user_label {
                        el.set_text_content(Some(label));
                    }
                }
                if control.is_wired() {
                    bind_click(control, &el, control_state.on_click);
                }
            }
            apply_event_cards(&doc, &self.config.selectors.event_card, state.event_cards);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, state);
        }
    }

    fn notify(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("alert failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            web_sys::window()?.prompt_with_message(message).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            None
        }
    }

    fn navigate(&self, href: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(href) {
                    log::error!("navigation to {href} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = href;
        }
    }

    fn open_join_team(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let hook_name = &self.config.join_team_hook;
            let hook = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(hook_name))
                .ok()
                .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
            match hook {
                Some(hook) => {
                    if let Err(e) = hook.call0(&window) {
                        log::error!("{hook_name} threw: {e:?}");
                    }
                }
                None => log::warn!("join-team hook `{hook_name}` is not defined on this page"),
            }
        }
    }

    fn render_team(&self, team: &TeamView) -> bool {
        #[cfg(feature = "csr")]
        {
            use leptos::prelude::*;

            use crate::components::team_display::TeamDisplay;

            let region = self::document()
                .and_then(|doc| doc.get_element_by_id(&self.config.team_display_id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            let Some(region) = region else {
                return false;
            };

            // Unmount the previous card before clearing any static placeholder.
            TEAM_MOUNT.with(|slot| slot.borrow_mut().take());
            region.set_inner_html("");
            let team = team.clone();
            let handle = leptos::mount::mount_to(region.clone(), move || view! { <TeamDisplay team=team/> });
            TEAM_MOUNT.with(|slot| *slot.borrow_mut() = Some(Box::new(handle)));

            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            region.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = team;
            false
        }
    }
}

#[cfg(feature = "csr")]
fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "csr")]
fn query_html(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

#[cfg(feature = "csr")]
fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("setting {property} failed: {e:?}");
    }
}

#[cfg(feature = "csr")]
fn clear_style(el: &HtmlElement, property: &str) {
    if let Err(e) = el.style().remove_property(property) {
        log::warn!("clearing {property} failed: {e:?}");
    }
}

#[cfg(feature = "csr")]
fn set_display(el: &HtmlElement, display: Display) {
    set_style(el, "display", display.css_value());
}

#[cfg(feature = "csr")]
fn apply_event_cards(doc: &Document, selector: &str, access: EventCardAccess) {
    let cards = match doc.query_selector_all(selector) {
        Ok(cards) => cards,
        Err(e) => {
            log::warn!("bad event card selector {selector}: {e:?}");
            return;
        }
    };
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        match access {
            EventCardAccess::Restricted => {
                set_style(&card, "opacity", "0.5");
                set_style(&card, "pointer-events", "none");
            }
            EventCardAccess::Open => {
                clear_style(&card, "opacity");
                clear_style(&card, "pointer-events");
            }
        }
    }
}

/// Replace the control's click handler. The closure is kept alive in
/// `CLICK_HANDLERS` until the next refresh rebinds the same control.
#[cfg(feature = "csr")]
fn bind_click(control: NavControl, el: &HtmlElement, action: Option<NavAction>) {
    match action {
        Some(action) => {
            let handler = Closure::<dyn FnMut()>::new(move || crate::entry::dispatch(action));
            el.set_onclick(Some(handler.as_ref().unchecked_ref()));
            CLICK_HANDLERS.with(|handlers| handlers.borrow_mut().insert(control, handler));
        }
        None => {
            el.set_onclick(None);
            CLICK_HANDLERS.with(|handlers| handlers.borrow_mut().remove(&control));
        }
    }
}
