/// Site maintenance status (`cdts` table)
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Default headline when the status row carries no custom message.
pub const MAINTENANCE_DEFAULT_MESSAGE: &str = "Sitio en Mantenimiento";

/// Status row, id = 1. A fetch failure is treated as "site up" so an
/// unreachable status table never takes the site down by itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteStatus {
    pub caida: bool,
    pub cdtscode: Option<String>,
    pub motivo: Option<String>,
    pub hora_caida: Option<String>,
    pub mdlc: Option<String>,
}

impl SiteStatus {
    pub fn site_up() -> Self {
        Self::default()
    }
}

/// Maintenance notice served in place of every page while `caida` is set.
/// Field values come from the status row verbatim.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaintenanceView {
    pub message: String,
    pub cdtscode: Option<String>,
    pub motivo: Option<String>,
    pub hora_caida: Option<String>,
}

impl From<&SiteStatus> for MaintenanceView {
    fn from(status: &SiteStatus) -> Self {
        Self {
            message: status
                .mdlc
                .clone()
                .unwrap_or_else(|| MAINTENANCE_DEFAULT_MESSAGE.to_string()),
            cdtscode: status.cdtscode.clone(),
            motivo: status.motivo.clone(),
            hora_caida: status.hora_caida.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_defaults_to_site_up() {
        let status = SiteStatus::site_up();
        assert!(!status.caida);
        assert!(status.cdtscode.is_none());
    }

    #[test]
    fn view_carries_row_fields_verbatim() {
        let status = SiteStatus {
            caida: true,
            cdtscode: Some("CDTS-7".into()),
            motivo: Some("Migración de base de datos".into()),
            hora_caida: Some("2025-03-01T03:00:00Z".into()),
            mdlc: None,
        };
        let view = MaintenanceView::from(&status);
        assert_eq!(view.message, "Sitio en Mantenimiento");
        assert_eq!(view.cdtscode.as_deref(), Some("CDTS-7"));
        assert_eq!(view.motivo.as_deref(), Some("Migración de base de datos"));
        assert_eq!(view.hora_caida.as_deref(), Some("2025-03-01T03:00:00Z"));
    }

    #[test]
    fn custom_message_overrides_default() {
        let status = SiteStatus {
            caida: true,
            mdlc: Some("Volvemos pronto".into()),
            ..Default::default()
        };
        assert_eq!(MaintenanceView::from(&status).message, "Volvemos pronto");
    }
}
