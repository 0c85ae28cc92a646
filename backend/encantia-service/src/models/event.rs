/// Event catalog rows (`events` table)
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventRow {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Human-readable date label shown in the catalog listing.
    pub date: Option<String>,
    /// Machine timestamp the countdown runs against.
    pub start_time: Option<String>,
}
