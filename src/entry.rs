//! WASM start-up and the functions exported to page scripts.
//!
//! Exported names match what existing markup calls (`refreshNav`,
//! `showCreateTeamModal`, `viewTeam`, ...). Every export builds a fresh
//! controller from the page's config so handlers never share state.

use wasm_bindgen::prelude::*;

use crate::config::NavConfig;
use crate::controller::NavController;
use crate::net::api::HttpApi;
use crate::state::nav::NavAction;
use crate::util::page::BrowserPage;

type PageController = NavController<HttpApi, BrowserPage>;

fn page_controller() -> PageController {
    let config = NavConfig::from_page();
    NavController::new(HttpApi::new(config.clone()), BrowserPage::new(config.clone()), config)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = NavConfig::from_page();
    // A second bundle on the same page may already own the logger.
    let _ = console_log::init_with_level(config.log_level());

    on_dom_ready(|| {
        leptos::task::spawn_local(async {
            page_controller().refresh_navigation().await;
        });
    });
}

/// Run `f` once the document is parsed.
fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) = doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref()) {
        log::error!("could not wait for DOMContentLoaded: {e:?}");
    }
}

/// Click handler target for nav controls.
pub(crate) fn dispatch(action: NavAction) {
    leptos::task::spawn_local(async move {
        page_controller().run(action).await;
    });
}

#[wasm_bindgen(js_name = refreshNav)]
pub async fn refresh_nav() {
    page_controller().refresh_navigation().await;
}

#[wasm_bindgen]
pub async fn logout() {
    page_controller().logout().await;
}

#[wasm_bindgen(js_name = showCreateTeamModal)]
pub async fn show_create_team_modal() {
    page_controller().prompt_create_team().await;
}

#[wasm_bindgen(js_name = createTeam)]
pub async fn create_team(name: String, description: Option<String>, motto: Option<String>) {
    page_controller()
        .create_team(name, description.unwrap_or_default(), motto.unwrap_or_default())
        .await;
}

#[wasm_bindgen(js_name = viewTeam)]
pub async fn view_team(team_id: String) {
    page_controller().view_team(&team_id).await;
}
