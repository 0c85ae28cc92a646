/// Profile rows and the card fragment embedded in every signed-in view
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fallback avatar shown whenever a profile has no `avatar_url`.
pub const DEFAULT_AVATAR_URL: &str = "https://i.ibb.co/d0mWy0kP/perfildef.png";

/// Shown when a profile has no role assigned.
pub const DEFAULT_ROLE_LABEL: &str = "Sin rol asignado";

/// Shown when a profile has no description.
pub const DEFAULT_DESCRIPTION: &str = "Este usuario no ha agregado una descripción.";

/// Role string required for project management and the staff user list.
pub const OWNER_PLUS_ROLE: &str = "Owner+";

/// Row in the `profiles` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub user_id: Option<Uuid>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub description: Option<String>,
    pub role: Option<String>,
    /// Public handle, displayed as `@user` in the staff list.
    pub user: Option<String>,
}

impl Profile {
    pub fn avatar_or_default(&self) -> String {
        match self.avatar_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_AVATAR_URL.to_string(),
        }
    }

    pub fn role_label(&self) -> String {
        match self.role.as_deref() {
            Some(role) if !role.is_empty() => role.to_string(),
            _ => DEFAULT_ROLE_LABEL.to_string(),
        }
    }

    pub fn description_or_default(&self) -> String {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => DEFAULT_DESCRIPTION.to_string(),
        }
    }

    /// A profile is complete once both display name and avatar are set;
    /// until then the client shows the profile-completion form.
    pub fn is_complete(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
            && self.avatar_url.as_deref().is_some_and(|a| !a.is_empty())
    }

    pub fn is_owner_plus(&self) -> bool {
        self.role.as_deref() == Some(OWNER_PLUS_ROLE)
    }
}

/// Row in the `user_roles` table.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRole {
    pub role: String,
}

/// Row in the `followers` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerRelation {
    pub follower_id: Uuid,
    pub followed_id: Uuid,
}

/// Compact profile fragment shown in navigation bars and follower lists.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileCard {
    pub user_id: Option<Uuid>,
    pub name: String,
    pub avatar_url: String,
}

impl From<&Profile> for ProfileCard {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id,
            name: profile.name.clone().unwrap_or_default(),
            avatar_url: profile.avatar_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_avatar_falls_back_to_fixed_default() {
        let profile = Profile::default();
        assert_eq!(profile.avatar_or_default(), DEFAULT_AVATAR_URL);
        assert_eq!(
            profile.avatar_or_default(),
            "https://i.ibb.co/d0mWy0kP/perfildef.png"
        );
    }

    #[test]
    fn empty_avatar_also_falls_back() {
        let profile = Profile {
            avatar_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(profile.avatar_or_default(), DEFAULT_AVATAR_URL);
    }

    #[test]
    fn completeness_needs_name_and_avatar() {
        let mut profile = Profile {
            name: Some("Luna".into()),
            ..Default::default()
        };
        assert!(!profile.is_complete());
        profile.avatar_url = Some("https://images.encantia.lat/a.png".into());
        assert!(profile.is_complete());
    }

    #[test]
    fn role_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.role_label(), "Sin rol asignado");
        assert!(!profile.is_owner_plus());

        let owner = Profile {
            role: Some("Owner+".into()),
            ..Default::default()
        };
        assert!(owner.is_owner_plus());
    }
}
