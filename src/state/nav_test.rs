use super::*;

// =============================================================
// Helpers
// =============================================================

fn user(team_id: Option<&str>, is_admin: bool, status: AccountStatus) -> Session {
    Session::SignedIn(SessionUser {
        username: "ana".to_owned(),
        is_admin,
        team_id: team_id.map(str::to_owned),
        status,
    })
}

fn visible(state: &NavState) -> Vec<NavControl> {
    state
        .controls()
        .into_iter()
        .filter(|(_, c)| c.display.is_visible())
        .map(|(control, _)| control)
        .collect()
}

// =============================================================
// Logged out
// =============================================================

#[test]
fn anonymous_shows_only_login_and_signup() {
    let state = compute_visibility(&Session::Anonymous);
    assert_eq!(visible(&state), [NavControl::Login, NavControl::Signup]);
    assert_eq!(state.login.display, Display::InlineBlock);
    assert_eq!(state.user_label, None);
    assert_eq!(state.event_cards, EventCardAccess::Open);
    assert!(!state.force_logout);
}

#[test]
fn anonymous_wires_no_actions() {
    let state = compute_visibility(&Session::Anonymous);
    assert!(state.controls().iter().all(|(_, c)| c.on_click.is_none()));
}

// =============================================================
// Logged in
// =============================================================

#[test]
fn signed_in_hides_login_and_labels_user() {
    let state = compute_visibility(&user(None, false, AccountStatus::Active));
    assert!(!state.login.display.is_visible());
    assert!(!state.signup.display.is_visible());
    assert_eq!(state.user.display, Display::Inline);
    assert_eq!(state.user_label.as_deref(), Some("ana"));
    assert!(state.chat.display.is_visible());
    assert!(state.tickets.display.is_visible());
    assert_eq!(state.logout.on_click, Some(NavAction::Logout));
}

#[test]
fn admin_link_follows_admin_flag() {
    let admin = compute_visibility(&user(None, true, AccountStatus::Active));
    let member = compute_visibility(&user(None, false, AccountStatus::Active));
    assert_eq!(admin.admin.display, Display::InlineBlock);
    assert_eq!(member.admin.display, Display::Hidden);
}

#[test]
fn without_team_offers_create_and_join() {
    let state = compute_visibility(&user(None, false, AccountStatus::Active));
    assert_eq!(state.create_team.on_click, Some(NavAction::ShowCreateTeam));
    assert_eq!(state.join_team.on_click, Some(NavAction::OpenJoinTeam));
    assert!(state.create_team.display.is_visible());
    assert!(state.join_team.display.is_visible());
    assert!(!state.view_team.display.is_visible());
}

#[test]
fn with_team_offers_view_team_only() {
    let state = compute_visibility(&user(Some("T1"), false, AccountStatus::Active));
    assert!(state.view_team.display.is_visible());
    assert_eq!(state.view_team.on_click, Some(NavAction::OpenTeamPage));
    assert_eq!(state.create_team, ControlState::hidden());
    assert_eq!(state.join_team, ControlState::hidden());
}

// =============================================================
// Account status
// =============================================================

#[test]
fn suspended_restricts_event_cards() {
    let state = compute_visibility(&user(None, false, AccountStatus::Suspended));
    assert_eq!(state.event_cards, EventCardAccess::Restricted);
    assert!(!state.force_logout);
}

#[test]
fn banned_forces_logout() {
    let state = compute_visibility(&user(Some("T1"), true, AccountStatus::Banned));
    assert!(state.force_logout);
    assert_eq!(state.event_cards, EventCardAccess::Open);
}

#[test]
fn recompute_is_stable() {
    let session = user(Some("T1"), true, AccountStatus::Suspended);
    assert_eq!(compute_visibility(&session), compute_visibility(&session));
}

// =============================================================
// Controls
// =============================================================

#[test]
fn css_values_match_display_modes() {
    assert_eq!(Display::Hidden.css_value(), "none");
    assert_eq!(Display::Inline.css_value(), "inline");
    assert_eq!(Display::InlineBlock.css_value(), "inline-block");
}

#[test]
fn only_team_and_logout_controls_are_wired() {
    let wired: Vec<_> = NavState::default()
        .controls()
        .into_iter()
        .map(|(control, _)| control)
        .filter(|c| c.is_wired())
        .collect();
    assert_eq!(
        wired,
        [NavControl::CreateTeam, NavControl::JoinTeam, NavControl::ViewTeam, NavControl::Logout]
    );
}

#[test]
fn selectors_resolve_from_config() {
    let selectors = Selectors::default();
    assert_eq!(NavControl::Login.selector(&selectors), ".nav-login");
    assert_eq!(NavControl::ViewTeam.selector(&selectors), ".nav-view-team");
    assert_eq!(NavControl::Logout.selector(&selectors), ".nav-logout");
}
