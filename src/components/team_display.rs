//! Team card rendered into the page's team display region.

use leptos::prelude::*;

use crate::state::team::{INVITE_HINT, MemberCard as MemberCardModel, TeamView};

/// Team header, member cards, and invite-code block.
#[component]
pub fn TeamDisplay(team: TeamView) -> impl IntoView {
    let TeamView { name, description, motto_line, members, invite_code } = team;

    view! {
        <div class="team-container">
            <div class="team-header">
                <h2>{name}</h2>
                <p>{description}</p>
                {motto_line.map(|motto| view! { <p><em>{motto}</em></p> })}
            </div>
            <div class="team-members">
                {members
                    .into_iter()
                    .map(|member| view! { <MemberCard member=member/> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="invite-section">
                <h3>"Invite Code"</h3>
                <div class="invite-code">{invite_code}</div>
                <p>{INVITE_HINT}</p>
            </div>
        </div>
    }
}

#[component]
fn MemberCard(member: MemberCardModel) -> impl IntoView {
    let class = member.class();
    let is_captain = member.is_captain;

    view! {
        <div class=class>
            <p>{member.username}</p>
            {is_captain.then(|| view! { <small>"Captain"</small> })}
        </div>
    }
}
