/// Book catalog and single-book detail pages
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, Result};
use crate::handlers::signed_out_view;
use crate::middleware::MaybeUser;
use crate::models::book::{is_valid_image_url, BookRow, ChapterRow, LibroRow};
use crate::models::display_value;
use crate::services::navigation::{NavButton, NAV_BUTTONS};
use crate::AppState;

pub const BOOKS_PLACEHOLDER: &str = "No hay libros disponibles.";
pub const CHAPTERS_PLACEHOLDER: &str = "No hay capítulos disponibles.";
pub const COVER_MISSING: &str = "Sin portada";
pub const COVER_INVALID: &str = "Portada no válida";

/// Integrity failure: the detail table holds duplicate ids.
pub const DUPLICATE_BOOK_ERROR: &str =
    "Se encontraron varios libros con el mismo id. Esto debería corregirse en la base de datos.";

#[derive(Debug, Serialize, ToSchema)]
pub struct CoverView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Set when no renderable cover exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl CoverView {
    fn from_url(url: Option<String>) -> Self {
        if is_valid_image_url(url.as_deref()) {
            return Self {
                url,
                placeholder: None,
            };
        }
        // An empty cover column counts as missing, not invalid.
        let missing = url.as_deref().map_or(true, str::is_empty);
        Self {
            url: None,
            placeholder: Some(if missing { COVER_MISSING } else { COVER_INVALID }),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookCardView {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover: CoverView,
    /// External link to read the book, when one is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_link: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BooksView {
    pub books: Vec<BookCardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub nav: &'static [NavButton],
}

/// GET /api/v1/books
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    responses((status = 200, description = "Book catalog", body = BooksView))
)]
pub async fn catalog(state: web::Data<AppState>, session: MaybeUser) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };

    let rows = match state
        .supabase
        .from("books")
        .auth(&current.access_token)
        .fetch::<Vec<BookRow>>()
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "failed to load book catalog");
            Vec::new()
        }
    };

    let books: Vec<BookCardView> = rows
        .into_iter()
        .map(|row| BookCardView {
            id: row.id,
            title: row.title,
            description: row.description,
            cover: CoverView::from_url(row.portada_url),
            read_link: row
                .cover_url
                .filter(|l| is_valid_image_url(Some(l.as_str()))),
        })
        .collect();

    let placeholder = books.is_empty().then_some(BOOKS_PLACEHOLDER);
    Ok(HttpResponse::Ok().json(BooksView {
        books,
        placeholder,
        nav: NAV_BUTTONS,
    }))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChapterView {
    pub heading: String,
    pub content: Option<String>,
}

impl From<ChapterRow> for ChapterView {
    fn from(row: ChapterRow) -> Self {
        let number = row
            .number
            .as_ref()
            .map(display_value)
            .unwrap_or_else(|| "?".to_string());
        Self {
            heading: format!("Capítulo {number}"),
            content: row.content,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookDetailView {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub chapters: Vec<ChapterView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters_placeholder: Option<&'static str>,
}

/// GET /api/v1/books/{id}
///
/// Zero matching rows is a not-found; more than one is a data integrity
/// error surfaced as such, never rendered as a book.
#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = "books",
    responses(
        (status = 200, description = "Book detail", body = BookDetailView),
        (status = 404, description = "No book with that id"),
        (status = 500, description = "Duplicate ids in the detail table")
    )
)]
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    session: MaybeUser,
) -> Result<HttpResponse> {
    let Some(current) = session.0 else {
        return Ok(HttpResponse::Ok().json(signed_out_view()));
    };
    let id = path.into_inner();

    let mut rows = state
        .supabase
        .from("libros")
        .eq("id", id)
        .auth(&current.access_token)
        .fetch::<Vec<LibroRow>>()
        .await?;

    let book = match rows.len() {
        0 => {
            return Err(AppError::NotFound(format!(
                "No se encontró el libro con el id: {id}"
            )))
        }
        1 => rows.remove(0),
        _ => return Err(AppError::Store(DUPLICATE_BOOK_ERROR.to_string())),
    };

    let chapters: Vec<ChapterView> = book
        .chapters
        .unwrap_or_default()
        .into_iter()
        .map(ChapterView::from)
        .collect();

    let view = BookDetailView {
        id: book.id,
        title: book.title,
        description: book.description,
        cover_image: book.cover_image,
        chapters_placeholder: chapters.is_empty().then_some(CHAPTERS_PLACEHOLDER),
        chapters,
    };
    Ok(HttpResponse::Ok().json(view))
}
