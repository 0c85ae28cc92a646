/// Games page: live streams grouped by platform plus the photo carousel
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::handlers::signed_out_view;
use crate::middleware::MaybeUser;
use crate::models::live::{LiveRow, PhotoRow};
use crate::services::navigation::{NavButton, NAV_BUTTONS};
use crate::services::streams::{youtube_embed, youtube_thumbnail, PLACEHOLDER_THUMBNAIL};
use crate::AppState;

pub const LIVES_PLACEHOLDER: &str = "No hay transmisiones en vivo en este momento.";

#[derive(Debug, Serialize, ToSchema)]
pub struct LiveView {
    pub author: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub thumbnail: String,
    /// Embed URL, derived for YouTube watch links only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<String>,
}

impl From<LiveRow> for LiveView {
    fn from(row: LiveRow) -> Self {
        let is_youtube = row.platform.as_deref() == Some("youtube");
        let derived = if is_youtube {
            row.link.as_deref().and_then(youtube_thumbnail)
        } else {
            None
        };
        Self {
            thumbnail: derived
                .or_else(|| row.thumbnail.filter(|t| !t.is_empty()))
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
            embed: is_youtube
                .then(|| row.link.as_deref().and_then(youtube_embed))
                .flatten(),
            author: row.author,
            title: row.title,
            link: row.link,
        }
    }
}

/// Streams grouped under the three supported platforms, display order.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct LivesByPlatform {
    pub twitch: Vec<LiveView>,
    pub youtube: Vec<LiveView>,
    pub kick: Vec<LiveView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GamesView {
    pub lives: LivesByPlatform,
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub nav: &'static [NavButton],
}

/// GET /api/v1/games
///
/// Either section failing to load is logged and rendered empty; the page
/// never errors over it.
#[utoipa::path(
    get,
    path = "/api/v1/games",
    tag = "pages",
    responses((status = 200, description = "Live streams and photos", body = GamesView))
)]
pub async fn games(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    let rows = match state
        .supabase
        .from("lives")
        .auth(&current.access_token)
        .fetch::<Vec<LiveRow>>()
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "failed to load live streams");
            Vec::new()
        }
    };

    let mut lives = LivesByPlatform::default();
    for row in rows {
        let bucket = match row.platform.as_deref() {
            Some("twitch") => &mut lives.twitch,
            Some("youtube") => &mut lives.youtube,
            Some("kick") => &mut lives.kick,
            _ => continue,
        };
        bucket.push(LiveView::from(row));
    }

    let photos = match state
        .supabase
        .from("photos")
        .select("linkpt")
        .auth(&current.access_token)
        .fetch::<Vec<PhotoRow>>()
        .await
    {
        Ok(rows) => rows.into_iter().filter_map(|r| r.linkpt).collect(),
        Err(e) => {
            tracing::error!(error = %e, "failed to load photo carousel");
            Vec::new()
        }
    };

    let empty =
        lives.twitch.is_empty() && lives.youtube.is_empty() && lives.kick.is_empty();
    Ok(HttpResponse::Ok().json(GamesView {
        lives,
        photos,
        placeholder: empty.then_some(LIVES_PLACEHOLDER),
        nav: NAV_BUTTONS,
    }))
}
