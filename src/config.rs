//! Page-level configuration: endpoints, navigation targets, and hook selectors.
//!
//! Every field has a default matching the stock site markup. A page can
//! override any subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="nav-config">
//!   { "pages": { "home": "/" }, "log_level": "debug" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "nav-config";

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// REST endpoints consumed by the controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub session: String,
    pub logout: String,
    pub team_create: String,
    /// Prefix for `GET {team_detail}/{team_id}`.
    pub team_detail: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            session: "/session".to_owned(),
            logout: "/logout".to_owned(),
            team_create: "/teams/create".to_owned(),
            team_detail: "/teams".to_owned(),
        }
    }
}

/// Navigation targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pages {
    pub home: String,
    pub team_management: String,
}

impl Default for Pages {
    fn default() -> Self {
        Self {
            home: "/index.html".to_owned(),
            team_management: "undersites/team-management.html".to_owned(),
        }
    }
}

/// CSS selectors for the hook elements in the page markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub login: String,
    pub signup: String,
    pub user: String,
    pub admin: String,
    pub chat: String,
    pub tickets: String,
    pub create_team: String,
    pub join_team: String,
    pub view_team: String,
    pub logout: String,
    pub event_card: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            login: ".nav-login".to_owned(),
            signup: ".nav-signup".to_owned(),
            user: ".nav-user".to_owned(),
            admin: ".nav-admin".to_owned(),
            chat: ".nav-chat".to_owned(),
            tickets: ".nav-tickets".to_owned(),
            create_team: ".nav-create-team".to_owned(),
            join_team: ".nav-join-team".to_owned(),
            view_team: ".nav-view-team".to_owned(),
            logout: ".nav-logout".to_owned(),
            event_card: ".event-card".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub endpoints: Endpoints,
    pub pages: Pages,
    pub selectors: Selectors,
    /// Element id of the region that receives rendered team cards.
    pub team_display_id: String,
    /// Name of the page-provided global function that opens the join dialog.
    pub join_team_hook: String,
    pub log_level: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            pages: Pages::default(),
            selectors: Selectors::default(),
            team_display_id: "teamDisplay".to_owned(),
            join_team_hook: "openJoinTeamModal".to_owned(),
            log_level: DEFAULT_LOG_LEVEL.as_str().to_owned(),
        }
    }
}

impl NavConfig {
    /// Parse a (possibly partial) JSON override block.
    ///
    /// # Errors
    ///
    /// Returns `NavError::Decode` if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, NavError> {
        serde_json::from_str(raw).map_err(|e| NavError::Decode(e.to_string()))
    }

    /// Build config for the current page, applying the `#nav-config` block
    /// when present. Invalid overrides fall back to defaults.
    pub fn from_page() -> Self {
        #[cfg(feature = "csr")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                    log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                    Self::default()
                }),
                _ => Self::default(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Console log level; unrecognised names fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn team_detail_url(&self, team_id: &str) -> String {
        format!("{}/{team_id}", self.endpoints.team_detail.trim_end_matches('/'))
    }
}
