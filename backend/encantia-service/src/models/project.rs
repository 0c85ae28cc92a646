/// Project board rows (`proyectos` table)
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Row in the `proyectos` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectRow {
    pub id: i64,
    pub titulo: Option<String>,
    pub mensaje: Option<String>,
    pub portada: Option<String>,
    pub iniciopr: Option<String>,
    pub findepr: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub user_id: Option<Uuid>,
    /// Author snapshot taken at creation time.
    pub fotoperfil: Option<String>,
    pub autor: Option<String>,
}

/// Insert payload for a new project. Author name and avatar are
/// snapshotted from the creator's profile at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct NewProjectRow {
    pub titulo: String,
    pub mensaje: String,
    pub portada: String,
    pub iniciopr: String,
    pub findepr: String,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: Option<Uuid>,
    pub fotoperfil: String,
    pub autor: String,
}
