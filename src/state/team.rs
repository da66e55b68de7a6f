//! Presentation model for a rendered team card.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use crate::net::types::{Team, TeamMember};

pub const INVITE_HINT: &str = "Share this code with players to join your team";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberCard {
    pub username: String,
    pub is_captain: bool,
}

impl MemberCard {
    pub fn class(&self) -> &'static str {
        if self.is_captain { "member-card captain" } else { "member-card" }
    }
}

impl From<&TeamMember> for MemberCard {
    fn from(member: &TeamMember) -> Self {
        Self { username: member.username.clone(), is_captain: member.is_captain }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamView {
    pub name: String,
    pub description: String,
    /// Motto wrapped in quotes, absent when the team has none.
    pub motto_line: Option<String>,
    pub members: Vec<MemberCard>,
    pub invite_code: String,
}

impl From<&Team> for TeamView {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            description: team.description.clone(),
            motto_line: team.motto.as_deref().map(|m| format!("\"{m}\"")),
            members: team.member_details.iter().map(MemberCard::from).collect(),
            invite_code: team.invite_code.clone(),
        }
    }
}
