use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        group::{CreateGroupDto, GroupDto, GroupMemberDto},
    },
    server::{
        error::AppError,
        extract::{JsonBody, Path},
        middleware::auth::AuthGuard,
        model::group::CreateGroupParam,
        service::group::GroupService,
        state::AppState,
    },
};

pub static GROUP_TAG: &str = "group";

#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups with members, newest first", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    let dto: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/groups/my",
    tag = GROUP_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Groups the caller belongs to", body = Vec<GroupDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let groups = GroupService::new(&state.db)
        .get_user_groups(user.id)
        .await?;

    let dto: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group with members", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    security(("bearer" = [])),
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created with the caller as admin", body = GroupDto),
        (status = 400, description = "Empty name or invalid capacity", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let group = GroupService::new(&state.db)
        .create(user.id, CreateGroupParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    post,
    path = "/groups/{id}/join",
    tag = GROUP_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 201, description = "Joined the group", body = GroupMemberDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Group is full or caller is already a member", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let member = GroupService::new(&state.db).join(id, user.id).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/groups/{id}/leave",
    tag = GROUP_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Left the group"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Membership not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    GroupService::new(&state.db).leave(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
