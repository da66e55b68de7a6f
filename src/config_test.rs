use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_markup() {
    let config = NavConfig::default();
    assert_eq!(config.endpoints.session, "/session");
    assert_eq!(config.endpoints.logout, "/logout");
    assert_eq!(config.endpoints.team_create, "/teams/create");
    assert_eq!(config.pages.home, "/index.html");
    assert_eq!(config.pages.team_management, "undersites/team-management.html");
    assert_eq!(config.selectors.event_card, ".event-card");
    assert_eq!(config.team_display_id, "teamDisplay");
    assert_eq!(config.join_team_hook, "openJoinTeamModal");
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_page_without_browser_is_default() {
    assert_eq!(NavConfig::from_page(), NavConfig::default());
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn partial_override_keeps_remaining_defaults() {
    let config = NavConfig::from_json(r##"{ "pages": { "home": "/" }, "selectors": { "user": "#who" } }"##)
        .unwrap();
    assert_eq!(config.pages.home, "/");
    assert_eq!(config.pages.team_management, "undersites/team-management.html");
    assert_eq!(config.selectors.user, "#who");
    assert_eq!(config.selectors.login, ".nav-login");
    assert_eq!(config.endpoints, Endpoints::default());
}

#[test]
fn empty_object_is_default() {
    assert_eq!(NavConfig::from_json("{}").unwrap(), NavConfig::default());
}

#[test]
fn malformed_override_is_decode_error() {
    assert!(matches!(NavConfig::from_json("{ pages: "), Err(NavError::Decode(_))));
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn log_level_parses_case_insensitively() {
    let config = NavConfig { log_level: "DEBUG".to_owned(), ..NavConfig::default() };
    assert_eq!(config.log_level(), log::Level::Debug);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = NavConfig { log_level: "chatty".to_owned(), ..NavConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn team_detail_url_joins_prefix_and_id() {
    let config = NavConfig::default();
    assert_eq!(config.team_detail_url("T1"), "/teams/T1");

    let mut trailing = NavConfig::default();
    trailing.endpoints.team_detail = "/api/teams/".to_owned();
    assert_eq!(trailing.team_detail_url("T1"), "/api/teams/T1");
}
