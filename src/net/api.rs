//! REST calls against the session and team endpoints.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call returns `NavError::Unavailable` so the rest of
//! the crate compiles and tests against the `SessionApi` trait.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are parsed regardless of HTTP status: the backend reports
//! application failures as `{ ok: false, message }` on 4xx responses, and
//! that message must reach the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::NavConfig;
use crate::error::NavError;

use super::types::{CreateTeamRequest, CreatedTeam, Session, Team};
#[cfg(feature = "csr")]
use super::types::{SessionInfo, TeamEnvelope};

/// Remote operations the navigation controller depends on.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// `GET /session`.
    async fn fetch_session(&self) -> Result<Session, NavError>;

    /// `GET /logout`. Succeeds once the server answers, whatever the status.
    async fn logout(&self) -> Result<(), NavError>;

    /// `POST /teams/create`.
    async fn create_team(&self, request: &CreateTeamRequest) -> Result<CreatedTeam, NavError>;

    /// `GET /teams/{team_id}`.
    async fn fetch_team(&self, team_id: &str) -> Result<Team, NavError>;
}

/// `SessionApi` over same-origin HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: NavConfig,
}

impl HttpApi {
    pub fn new(config: NavConfig) -> Self {
        Self { config }
    }
}

#[cfg(any(test, feature = "csr"))]
fn transport_error(endpoint: &str, detail: impl std::fmt::Display) -> NavError {
    NavError::Transport(format!("{endpoint}: {detail}"))
}

#[cfg(any(test, feature = "csr"))]
fn decode_error(endpoint: &str, detail: impl std::fmt::Display) -> NavError {
    NavError::Decode(format!("{endpoint}: {detail}"))
}

impl SessionApi for HttpApi {
    async fn fetch_session(&self) -> Result<Session, NavError> {
        #[cfg(feature = "csr")]
        {
            let url = &self.config.endpoints.session;
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| transport_error(url, e))?;
            let info: SessionInfo = resp.json().await.map_err(|e| decode_error(url, e))?;
            Session::try_from(info)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &self.config;
            Err(NavError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), NavError> {
        #[cfg(feature = "csr")]
        {
            let url = &self.config.endpoints.logout;
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| transport_error(url, e))?;
            if !resp.ok() {
                log::debug!("{url} answered {}", resp.status());
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(NavError::Unavailable)
        }
    }

    async fn create_team(&self, request: &CreateTeamRequest) -> Result<CreatedTeam, NavError> {
        #[cfg(feature = "csr")]
        {
            let url = &self.config.endpoints.team_create;
            let resp = gloo_net::http::Request::post(url)
                .json(request)
                .map_err(|e| decode_error(url, e))?
                .send()
                .await
                .map_err(|e| transport_error(url, e))?;
            let envelope: TeamEnvelope<CreatedTeam> =
                resp.json().await.map_err(|e| decode_error(url, e))?;
            envelope.into_result()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(NavError::Unavailable)
        }
    }

    async fn fetch_team(&self, team_id: &str) -> Result<Team, NavError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.team_detail_url(team_id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| transport_error(&url, e))?;
            let envelope: TeamEnvelope<Team> = resp.json().await.map_err(|e| decode_error(&url, e))?;
            envelope.into_result()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = team_id;
            Err(NavError::Unavailable)
        }
    }
}
