use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        course::{self, COURSE_TAG},
        group::{self, GROUP_TAG},
        lesson::{self, LESSON_TAG},
        progress::{self, PROGRESS_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Coursehub API"),
    modifiers(&BearerSecurity),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = USER_TAG, description = "Account profile"),
        (name = COURSE_TAG, description = "Course catalog and enrollment"),
        (name = LESSON_TAG, description = "Course lessons"),
        (name = PROGRESS_TAG, description = "Lesson progress and dashboard"),
        (name = GROUP_TAG, description = "Study groups"),
    )
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by guarded endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router with Swagger UI at `/swagger-ui` and the OpenAPI document at
/// `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(user::get_me))
        .routes(routes!(course::get_courses))
        .routes(routes!(course::get_course))
        .routes(routes!(course::enroll))
        .routes(routes!(course::get_my_enrollments))
        .routes(routes!(lesson::get_course_lessons))
        .routes(routes!(lesson::get_lesson))
        .routes(routes!(progress::update_lesson_progress))
        .routes(routes!(progress::get_course_progress))
        .routes(routes!(progress::get_dashboard))
        .routes(routes!(group::get_groups, group::create_group))
        .routes(routes!(group::get_my_groups))
        .routes(routes!(group::get_group))
        .routes(routes!(group::join_group))
        .routes(routes!(group::leave_group))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
