use super::*;
use futures::executor::block_on;

#[test]
fn transport_error_names_endpoint() {
    assert_eq!(
        transport_error("/session", "NetworkError"),
        NavError::Transport("/session: NetworkError".to_owned())
    );
}

#[test]
fn decode_error_names_endpoint() {
    assert_eq!(
        decode_error("/teams/T1", "expected value at line 1"),
        NavError::Decode("/teams/T1: expected value at line 1".to_owned())
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    let api = HttpApi::new(NavConfig::default());
    assert_eq!(block_on(api.fetch_session()), Err(NavError::Unavailable));
    assert_eq!(block_on(api.logout()), Err(NavError::Unavailable));
    assert_eq!(block_on(api.fetch_team("T1")), Err(NavError::Unavailable));
    let request = CreateTeamRequest {
        name: "Alpha".to_owned(),
        description: String::new(),
        motto: String::new(),
    };
    assert_eq!(block_on(api.create_team(&request)), Err(NavError::Unavailable));
}
