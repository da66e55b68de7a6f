//! Navigation controller: session refresh plus the logout and team actions.
//!
//! ERROR HANDLING
//! ==============
//! No operation returns an error or panics. Transport and decode failures are
//! logged and leave the page as it was; server rejections are shown to the
//! user as a notice. Nothing is retried.
//!
//! Each operation awaits its requests one after another. Two actions started
//! back to back (a double-clicked create button) run independently and the
//! last response to land wins.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::NavConfig;
use crate::error::NavError;
use crate::net::api::SessionApi;
use crate::net::types::{CreateTeamRequest, Team};
use crate::state::nav::{NavAction, compute_visibility};
use crate::state::team::TeamView;
use crate::util::page::Page;

pub const BANNED_NOTICE: &str = "Your account has been banned. You will be logged out.";
pub const CREATE_FAILED_NOTICE: &str = "Failed to create team";
pub const LOAD_TEAM_FAILED_NOTICE: &str = "Failed to load team";

pub const TEAM_NAME_PROMPT: &str = "Enter team name:";
pub const TEAM_DESCRIPTION_PROMPT: &str = "Enter team description (optional):";
pub const TEAM_MOTTO_PROMPT: &str = "Enter team motto (optional):";

/// Confirmation shown after a team is created.
pub fn created_notice(name: &str, invite_code: &str) -> String {
    format!(
        "Team \"{name}\" created successfully!\nInvite Code: {invite_code}\n\nShare this code with your friends to invite them!"
    )
}

/// Team name exactly as entered, or `None` when the prompt was cancelled or
/// left empty.
pub fn required_team_name(raw: Option<String>) -> Option<String> {
    raw.filter(|name| !name.is_empty())
}

pub struct NavController<A, P> {
    api: A,
    page: P,
    config: NavConfig,
}

impl<A: SessionApi, P: Page> NavController<A, P> {
    pub fn new(api: A, page: P, config: NavConfig) -> Self {
        Self { api, page, config }
    }

    /// Fetch the session and rewrite the nav bar from scratch.
    ///
    /// A banned account is notified and logged out straight after the nav
    /// bar is applied.
    pub async fn refresh_navigation(&self) {
        let session = match self.api.fetch_session().await {
            Ok(session) => session,
            Err(e) => {
                log::error!("error refreshing nav: {e}");
                return;
            }
        };
        let state = compute_visibility(&session);
        self.page.apply_nav(&state);

        if state.force_logout {
            self.page.notify(BANNED_NOTICE);
            self.logout().await;
        }
    }

    /// End the session and go home. On transport failure the user stays put.
    pub async fn logout(&self) {
        match self.api.logout().await {
            Ok(()) => self.page.navigate(&self.config.pages.home),
            Err(e) => log::error!("error logging out: {e}"),
        }
    }

    pub fn open_team_page(&self) {
        self.page.navigate(&self.config.pages.team_management);
    }

    pub fn open_join_team(&self) {
        self.page.open_join_team();
    }

    /// Collect name, description, and motto from the user, then create.
    pub async fn prompt_create_team(&self) {
        let Some(name) = required_team_name(self.page.prompt(TEAM_NAME_PROMPT)) else {
            return;
        };
        let description = self.page.prompt(TEAM_DESCRIPTION_PROMPT).unwrap_or_default();
        let motto = self.page.prompt(TEAM_MOTTO_PROMPT).unwrap_or_default();
        self.create_team(name, description, motto).await;
    }

    /// Create a team, refresh the nav bar, and open team management.
    pub async fn create_team(&self, name: String, description: String, motto: String) {
        let request = CreateTeamRequest { name, description, motto };
        match self.api.create_team(&request).await {
            Ok(created) => {
                self.page.notify(&created_notice(&request.name, &created.invite_code));
                self.refresh_navigation().await;
                self.open_team_page();
            }
            Err(e) => match e.user_message() {
                Some(message) => self.page.notify(message),
                None => {
                    log::error!("error creating team: {e}");
                    self.page.notify(CREATE_FAILED_NOTICE);
                }
            },
        }
    }

    /// Load a team and render it into the display region.
    pub async fn view_team(&self, team_id: &str) {
        match self.api.fetch_team(team_id).await {
            Ok(team) => self.display_team(&team),
            Err(e @ NavError::Rejected(_)) => {
                log::error!("error viewing team {team_id}: {e}");
                self.page.notify(LOAD_TEAM_FAILED_NOTICE);
            }
            Err(e) => log::error!("error viewing team {team_id}: {e}"),
        }
    }

    /// Render `team`; a page without a display region is left alone.
    pub fn display_team(&self, team: &Team) {
        if !self.page.render_team(&TeamView::from(team)) {
            log::debug!("no #{} region on this page", self.config.team_display_id);
        }
    }

    /// Run the handler bound to a nav control.
    pub async fn run(&self, action: NavAction) {
        match action {
            NavAction::ShowCreateTeam => self.prompt_create_team().await,
            NavAction::OpenJoinTeam => self.open_join_team(),
            NavAction::OpenTeamPage => self.open_team_page(),
            NavAction::Logout => self.logout().await,
        }
    }
}
