//! Wire DTOs for the session and team endpoints.
//!
//! DESIGN
//! ======
//! The server speaks camelCase JSON produced by a dynamically typed backend,
//! so the deserializers here absorb its loose edges (null strings and
//! booleans, numeric ids, falsy "absent" ids) and hand the rest of the crate clean
//! Rust types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NavError;

/// Shown when the server rejects a request without saying why.
pub const REJECTED_WITHOUT_MESSAGE: &str = "Request was rejected";

/// Raw body of `GET /session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// The signed-in user as reported by the session endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_bool_or_null")]
    pub is_admin: bool,
    /// Team the user belongs to. `null`, `false`, `0`, and `""` mean "no team".
    #[serde(default, deserialize_with = "deserialize_team_id")]
    pub team_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: AccountStatus,
}

/// Moderation state of an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Suspended,
    Banned,
    /// Also absorbs statuses this client does not know about.
    #[default]
    #[serde(other)]
    Active,
}

/// Validated session: `loggedIn: true` always carries a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    SignedIn(SessionUser),
}

impl TryFrom<SessionInfo> for Session {
    type Error = NavError;

    fn try_from(info: SessionInfo) -> Result<Self, Self::Error> {
        match (info.logged_in, info.user) {
            (false, _) => Ok(Self::Anonymous),
            (true, Some(user)) => Ok(Self::SignedIn(user)),
            (true, None) => Err(NavError::Decode("`loggedIn: true` without `user`".to_owned())),
        }
    }
}

/// A team as returned by `GET /teams/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub motto: Option<String>,
    pub invite_code: String,
    /// Members in server order.
    #[serde(default)]
    pub member_details: Vec<TeamMember>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_bool_or_null")]
    pub is_captain: bool,
}

/// Body of `POST /teams/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub description: String,
    pub motto: String,
}

/// The part of a freshly created team the client cares about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTeam {
    pub invite_code: String,
}

/// `{ ok, team?, message? }` envelope shared by the team endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TeamEnvelope<T> {
    pub ok: bool,
    pub team: Option<T>,
    pub message: Option<String>,
}

impl<T> TeamEnvelope<T> {
    /// Turn the envelope into the team or an explicit error.
    ///
    /// # Errors
    ///
    /// `NavError::Rejected` for `ok: false`, `NavError::Decode` for
    /// `ok: true` without a team.
    pub fn into_result(self) -> Result<T, NavError> {
        if !self.ok {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| REJECTED_WITHOUT_MESSAGE.to_owned());
            return Err(NavError::Rejected(message));
        }
        self.team
            .ok_or_else(|| NavError::Decode("`ok: true` without `team`".to_owned()))
    }
}

fn deserialize_team_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null | serde_json::Value::Bool(false)) => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(serde_json::Value::Number(n)) if n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected string or number team id, got {other}"))),
    }
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<AccountStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AccountStatus>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
