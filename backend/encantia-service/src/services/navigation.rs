/// Shared navigation bar definition
///
/// One static list of entries, serialized into every signed-in view.
use serde::Serialize;
use utoipa::ToSchema;

/// Site logo shown next to the navigation bar.
pub const LOGO_URL: &str = "https://images.encantia.lat/encantia-logo-2025.webp";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavButton {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
}

pub const NAV_BUTTONS: &[NavButton] = &[
    NavButton {
        label: "Inicio",
        icon: "https://images.encantia.lat/home.png",
        route: "/",
    },
    NavButton {
        label: "Mensajes",
        icon: "https://images.encantia.lat/mensaje.png",
        route: "/bdm",
    },
    NavButton {
        label: "Notas",
        icon: "https://images.encantia.lat/notas.png",
        route: "/notes",
    },
    NavButton {
        label: "Advertencias",
        icon: "https://images.encantia.lat/adv.png",
        route: "/advert",
    },
    NavButton {
        label: "Eventos",
        icon: "https://images.encantia.lat/events.png",
        route: "/events",
    },
    NavButton {
        label: "Fetu Games 2",
        icon: "https://images.encantia.lat/fetugames2.png",
        route: "/fetugames2",
    },
];
