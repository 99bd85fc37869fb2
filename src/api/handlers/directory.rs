use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;
use crate::api::AppState;
use crate::directory::{render, roster, MemberList};
use crate::error::AppResult;

/// GET /: fetch the workspace member list and render the face grid.
///
/// The steps run in order on every request: fetch, filter, sort, render.
/// Nothing is cached between requests.
pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let fetched = state.slack.users_list().await?;
    let fetched_count = fetched.members.len();

    let mut members = roster::visible(fetched.members, &state.email_filter);
    roster::sort_by_real_name(&mut members);
    tracing::debug!("Serving {} of {} fetched members", members.len(), fetched_count);

    let list = MemberList {
        team: state.team.clone(),
        members,
    };
    let page = render::index_page(&list)?;

    Ok(Html(page))
}
