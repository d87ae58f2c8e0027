use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Site owner. At most one row exists.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about_text: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub resume_url: Option<String>,
    pub picture_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactInfo {
    pub email: String,
    pub github_url: String,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SiteSettings {
    pub site_name: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub enable_dark_mode: bool,
    pub enable_animations: bool,
    pub contact_email: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Portfolio".to_string(),
            hero_title: "Welcome to My Portfolio".to_string(),
            hero_subtitle: "I'm a passionate developer creating amazing digital experiences"
                .to_string(),
            primary_color: "#3B82F6".to_string(),
            secondary_color: "#1F2937".to_string(),
            accent_color: "#10B981".to_string(),
            enable_dark_mode: true,
            enable_animations: true,
            contact_email: "your-email@example.com".to_string(),
        }
    }
}

impl SiteSettings {
    /// Address that receives contact-form notifications, if configured.
    pub fn notification_address(&self) -> Option<&str> {
        let email = self.contact_email.trim();
        (!email.is_empty()).then_some(email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileStats {
    pub profile_views: i32,
    pub github_followers: i32,
    pub github_stars: i32,
    pub projects_count: i32,
}

/// Partial update of `ProfileStats`; `None` leaves a counter untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsPatch {
    pub github_followers: Option<i32>,
    pub github_stars: Option<i32>,
    pub projects_count: Option<i32>,
}

impl StatsPatch {
    pub fn is_empty(&self) -> bool {
        self.github_followers.is_none()
            && self.github_stars.is_none()
            && self.projects_count.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Hobby {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub display_order: i32,
}
