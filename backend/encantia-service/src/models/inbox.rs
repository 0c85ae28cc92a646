/// Inbox messages (`buzdvz`) and warnings (`adv`)
use serde::Deserialize;

/// Row in the `buzdvz` message inbox table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InboxMessageRow {
    pub title: Option<String>,
    pub mensaje: Option<String>,
    pub created_at: Option<String>,
}

/// Row in the `adv` warnings table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WarningRow {
    pub titulo: Option<String>,
    pub mensaje: Option<String>,
}
