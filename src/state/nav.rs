//! Navigation bar view model derived from the session.
//!
//! DESIGN
//! ======
//! `compute_visibility` is a pure function of the latest `Session`; the page
//! layer writes the result to the DOM in one pass. Nothing from a previous
//! refresh is consulted, so applying the same session twice yields the same
//! page.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::Selectors;
use crate::net::types::{AccountStatus, Session, SessionUser};

/// CSS `display` value written to a hook element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Hidden,
    Inline,
    InlineBlock,
}

impl Display {
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Inline => "inline",
            Self::InlineBlock => "inline-block",
        }
    }

    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}

/// Click behavior attached to a nav control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// Prompt for team details, then create it.
    ShowCreateTeam,
    /// Hand off to the page's own join dialog.
    OpenJoinTeam,
    /// Navigate to the team-management page.
    OpenTeamPage,
    Logout,
}

/// Hook elements in the nav bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavControl {
    Login,
    Signup,
    User,
    Admin,
    Chat,
    Tickets,
    CreateTeam,
    JoinTeam,
    ViewTeam,
    Logout,
}

impl NavControl {
    pub fn selector(self, selectors: &Selectors) -> &str {
        match self {
            Self::Login => &selectors.login,
            Self::Signup => &selectors.signup,
            Self::User => &selectors.user,
            Self::Admin => &selectors.admin,
            Self::Chat => &selectors.chat,
            Self::Tickets => &selectors.tickets,
            Self::CreateTeam => &selectors.create_team,
            Self::JoinTeam => &selectors.join_team,
            Self::ViewTeam => &selectors.view_team,
            Self::Logout => &selectors.logout,
        }
    }

    /// Controls whose click handler this crate owns. Others keep whatever
    /// the page markup gives them.
    pub fn is_wired(self) -> bool {
        matches!(self, Self::CreateTeam | Self::JoinTeam | Self::ViewTeam | Self::Logout)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub display: Display,
    pub on_click: Option<NavAction>,
}

impl ControlState {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(display: Display) -> Self {
        Self { display, on_click: None }
    }

    fn shown_if(visible: bool) -> Self {
        if visible { Self::shown(Display::InlineBlock) } else { Self::hidden() }
    }

    #[must_use]
    pub fn with_action(mut self, action: NavAction) -> Self {
        self.on_click = Some(action);
        self
    }
}

/// Whether event cards accept interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventCardAccess {
    #[default]
    Open,
    /// Dimmed and non-interactive.
    Restricted,
}

/// Complete nav bar state for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub login: ControlState,
    pub signup: ControlState,
    pub user: ControlState,
    pub admin: ControlState,
    pub chat: ControlState,
    pub tickets: ControlState,
    pub create_team: ControlState,
    pub join_team: ControlState,
    pub view_team: ControlState,
    pub logout: ControlState,
    /// Text for the user label; `None` leaves the label's text alone.
    pub user_label: Option<String>,
    pub event_cards: EventCardAccess,
    /// The account is banned: notify, then end the session.
    pub force_logout: bool,
}

impl NavState {
    /// Every control with its state, in nav-bar order.
    pub fn controls(&self) -> [(NavControl, ControlState); 10] {
        [
            (NavControl::Login, self.login),
            (NavControl::Signup, self.signup),
            (NavControl::User, self.user),
            (NavControl::Admin, self.admin),
            (NavControl::Chat, self.chat),
            (NavControl::Tickets, self.tickets),
            (NavControl::CreateTeam, self.create_team),
            (NavControl::JoinTeam, self.join_team),
            (NavControl::ViewTeam, self.view_team),
            (NavControl::Logout, self.logout),
        ]
    }
}

/// Derive the nav bar from a session.
pub fn compute_visibility(session: &Session) -> NavState {
    match session {
        Session::Anonymous => NavState {
            login: ControlState::shown(Display::InlineBlock),
            signup: ControlState::shown(Display::InlineBlock),
            ..NavState::default()
        },
        Session::SignedIn(user) => signed_in(user),
    }
}

fn signed_in(user: &SessionUser) -> NavState {
    let has_team = user.team_id.is_some();
    NavState {
        login: ControlState::hidden(),
        signup: ControlState::hidden(),
        user: ControlState::shown(Display::Inline),
        admin: ControlState::shown_if(user.is_admin),
        chat: ControlState::shown(Display::InlineBlock),
        tickets: ControlState::shown(Display::InlineBlock),
        create_team: wired_if(!has_team, NavAction::ShowCreateTeam),
        join_team: wired_if(!has_team, NavAction::OpenJoinTeam),
        view_team: wired_if(has_team, NavAction::OpenTeamPage),
        logout: ControlState::shown(Display::InlineBlock).with_action(NavAction::Logout),
        user_label: Some(user.username.clone()),
        event_cards: match user.status {
            AccountStatus::Suspended => EventCardAccess::Restricted,
            AccountStatus::Active | AccountStatus::Banned => EventCardAccess::Open,
        },
        force_logout: user.status == AccountStatus::Banned,
    }
}

fn wired_if(visible: bool, action: NavAction) -> ControlState {
    if visible {
        ControlState::shown(Display::InlineBlock).with_action(action)
    } else {
        ControlState::hidden()
    }
}
