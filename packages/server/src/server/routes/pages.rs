//! Server-rendered HTML pages

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domains::agenda::actions::{get_agenda_page_data, get_event_by_id, get_featured_event};
use crate::domains::member::actions::{
    get_all_members, get_member_by_id, search_members, submit_talent, SubmissionError,
};
use crate::domains::success_story::actions::get_featured_success_stories;
use crate::server::app::AppState;
use crate::views::{
    render_agenda, render_event_details, render_home, render_member_profile, render_not_found,
    render_submit, render_talent, FieldError, HomePageData, SubmitFormValues, SubmitPageData,
    SubmitStatus, TalentPageData,
};

pub fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
}

/// Router fallback for unknown paths
pub async fn not_found_handler() -> Response {
    not_found_page()
}

pub async fn home_handler(Extension(state): Extension<AppState>) -> Html<String> {
    let deps = &state.deps;

    let (featured_event, success_stories) = tokio::join!(
        get_featured_event(deps.events.as_ref()),
        get_featured_success_stories(deps.stories.as_ref(), deps.members.as_ref()),
    );

    Html(render_home(HomePageData {
        featured_event,
        success_stories,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct TalentQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn talent_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<TalentQuery>,
) -> Html<String> {
    let members = get_all_members(state.deps.members.as_ref()).await;
    let members = search_members(members, &params.q);
    debug!(query = %params.q, results = members.len(), "Talent search");

    Html(render_talent(TalentPageData {
        members,
        query: params.q,
    }))
}

pub async fn member_profile_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match get_member_by_id(state.deps.members.as_ref(), &id).await {
        Some(member) => Html(render_member_profile(member)).into_response(),
        None => not_found_page(),
    }
}

pub async fn agenda_handler(Extension(state): Extension<AppState>) -> Html<String> {
    let data = get_agenda_page_data(state.deps.events.as_ref()).await;
    Html(render_agenda(data))
}

pub async fn event_details_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Response {
    match get_event_by_id(state.deps.events.as_ref(), &id).await {
        Some(event) => Html(render_event_details(event)).into_response(),
        None => not_found_page(),
    }
}

pub async fn submit_form_handler() -> Html<String> {
    Html(render_submit(SubmitPageData::default()))
}

/// Form post fallback for the JSON endpoint; re-renders the form with the
/// outcome
pub async fn submit_form_post_handler(
    Extension(state): Extension<AppState>,
    Form(values): Form<SubmitFormValues>,
) -> Response {
    let deps = &state.deps;
    let result = submit_talent(
        values.to_input(),
        deps.mailer.as_ref(),
        &deps.submission_recipient,
    )
    .await;

    let (status, data) = match result {
        Ok(profile) => {
            info!(slug = %profile.slug, "Talent form submitted");
            (
                StatusCode::OK,
                SubmitPageData {
                    status: SubmitStatus::Success,
                    ..Default::default()
                },
            )
        }
        Err(SubmissionError::Invalid(issues)) => (
            StatusCode::BAD_REQUEST,
            SubmitPageData {
                values,
                errors: issues.into_iter().map(FieldError::from).collect(),
                status: SubmitStatus::Idle,
            },
        ),
        Err(SubmissionError::Delivery(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            SubmitPageData {
                values,
                errors: Vec::new(),
                status: SubmitStatus::Failed,
            },
        ),
    };

    (status, Html(render_submit(data))).into_response()
}
