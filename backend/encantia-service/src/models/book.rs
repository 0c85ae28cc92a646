/// Book catalog rows (`books` listing, `libros` detail)
use serde::Deserialize;

/// Row in the `books` catalog table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookRow {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Cover image shown on the catalog card.
    pub portada_url: Option<String>,
    /// External link to read the book.
    pub cover_url: Option<String>,
}

/// Row in the `libros` detail table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibroRow {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub chapters: Option<Vec<ChapterRow>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChapterRow {
    pub number: Option<serde_json::Value>,
    pub content: Option<String>,
}

/// A cover URL is renderable only when it is an absolute http(s) URL.
pub fn is_valid_image_url(url: Option<&str>) -> bool {
    matches!(url, Some(u) if u.starts_with("http://") || u.starts_with("https://"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_validity() {
        assert!(is_valid_image_url(Some("https://images.encantia.lat/x.png")));
        assert!(is_valid_image_url(Some("http://images.encantia.lat/x.png")));
        assert!(!is_valid_image_url(Some("ftp://images.encantia.lat/x.png")));
        assert!(!is_valid_image_url(Some("portada.png")));
        assert!(!is_valid_image_url(None));
    }
}
