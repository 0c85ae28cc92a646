/// Live stream (`lives`) and photo carousel (`photos`) rows
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LiveRow {
    pub platform: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhotoRow {
    pub linkpt: Option<String>,
}
