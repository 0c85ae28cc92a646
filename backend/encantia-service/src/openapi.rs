/// OpenAPI documentation for the Encantia service
use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::handlers::{auth, books, events, games, home, inbox, notes, profiles, projects, warnings};
use crate::models::evaluation::EvaluationEntry;
use crate::models::profile::ProfileCard;
use crate::models::status::MaintenanceView;
use crate::services::countdown::TimeRemaining;
use crate::services::navigation::NavButton;

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home,
        auth::login,
        auth::logout,
        auth::session,
        notes::notes,
        inbox::inbox,
        warnings::warnings,
        events::events,
        projects::list,
        projects::create,
        projects::remove,
        profiles::profile_view,
        profiles::follow,
        profiles::update_description,
        profiles::save_profile,
        profiles::users,
        books::catalog,
        books::detail,
        games::games,
    ),
    components(schemas(
        home::SignInForm,
        home::SignedOutView,
        home::UserAreaView,
        auth::LoginRequest,
        auth::LoginResponse,
        auth::SessionView,
        notes::EvaluationView,
        notes::NotesView,
        inbox::InboxMessageView,
        inbox::InboxView,
        warnings::WarningView,
        warnings::WarningsView,
        events::EventView,
        events::EventsView,
        projects::ProjectView,
        projects::ProjectsView,
        projects::CreateProjectRequest,
        profiles::ProfileDetails,
        profiles::ProfileView,
        profiles::FollowResponse,
        profiles::UpdateDescriptionRequest,
        profiles::SaveProfileRequest,
        profiles::StaffUserView,
        profiles::UsersView,
        books::CoverView,
        books::BookCardView,
        books::BooksView,
        books::ChapterView,
        books::BookDetailView,
        games::LiveView,
        games::LivesByPlatform,
        games::GamesView,
        EvaluationEntry,
        ProfileCard,
        MaintenanceView,
        TimeRemaining,
        NavButton,
    )),
    tags(
        (name = "home", description = "Home page view"),
        (name = "auth", description = "Session management"),
        (name = "pages", description = "Member page views"),
        (name = "profiles", description = "Profiles, follows and the staff list"),
        (name = "projects", description = "Project board"),
        (name = "books", description = "Book catalog")
    ),
    info(
        title = "Encantia Service API",
        version = "0.1.0",
        description = "Page views and actions for the Encantia community site"
    )
)]
pub struct ApiDoc;

/// GET /api/v1/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
