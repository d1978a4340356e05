//! Profile model: the site owner's public details.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Singleton, Updatable};
use super::patch::Patch;
use super::validate::Validate;
use crate::errors::AppError;

/// Links to the owner's social accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

/// The single profile document. Fields missing from a stored document read as defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub finra_link: String,
    pub email: String,
    pub whatsapp: String,
    pub telegram: String,
    pub years_experience: i64,
    pub clients_served: i64,
    pub assets_managed: String,
    pub social_links: SocialLinks,
    pub credentials: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self::with_defaults(String::new())
    }
}

/// Partial update of the profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub tagline: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub finra_link: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub whatsapp: Patch<String>,
    #[serde(default)]
    pub telegram: Patch<String>,
    #[serde(default)]
    pub years_experience: Patch<i64>,
    #[serde(default)]
    pub clients_served: Patch<i64>,
    #[serde(default)]
    pub assets_managed: Patch<String>,
    #[serde(default)]
    pub social_links: Patch<SocialLinks>,
    #[serde(default)]
    pub credentials: Patch<Vec<String>>,
}

impl Validate for ProfileUpdate {
    fn validate(&self) -> Result<(), AppError> {
        self.name.reject_null("name")?;
        self.title.reject_null("title")?;
        self.tagline.reject_null("tagline")?;
        self.description.reject_null("description")?;
        self.finra_link.reject_null("finraLink")?;
        self.email.reject_null("email")?;
        self.whatsapp.reject_null("whatsapp")?;
        self.telegram.reject_null("telegram")?;
        self.years_experience.reject_null("yearsExperience")?;
        self.clients_served.reject_null("clientsServed")?;
        self.assets_managed.reject_null("assetsManaged")?;
        self.social_links.reject_null("socialLinks")?;
        self.credentials.reject_null("credentials")
    }
}

impl Entity for Profile {
    const COLLECTION: &'static str = "profile";
    const KIND: &'static str = "Profile";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Updatable for Profile {
    type Update = ProfileUpdate;

    fn merge(&mut self, update: ProfileUpdate) {
        update.name.merge_into(&mut self.name);
        update.title.merge_into(&mut self.title);
        update.tagline.merge_into(&mut self.tagline);
        update.description.merge_into(&mut self.description);
        update.finra_link.merge_into(&mut self.finra_link);
        update.email.merge_into(&mut self.email);
        update.whatsapp.merge_into(&mut self.whatsapp);
        update.telegram.merge_into(&mut self.telegram);
        update.years_experience.merge_into(&mut self.years_experience);
        update.clients_served.merge_into(&mut self.clients_served);
        update.assets_managed.merge_into(&mut self.assets_managed);
        update.social_links.merge_into(&mut self.social_links);
        update.credentials.merge_into(&mut self.credentials);
    }
}

impl Singleton for Profile {
    fn with_defaults(id: String) -> Self {
        Self {
            id,
            name: "Juniper Broz".to_string(),
            title: "Investment Specialist".to_string(),
            tagline: "Strategic Wealth Building Through Disciplined Investment".to_string(),
            description: "Registered investment professional specializing in forex, \
                cryptocurrency, and stock options with a proven track record of data-driven \
                portfolio management."
                .to_string(),
            finra_link: "https://brokercheck.finra.org/individual/summary/6740971".to_string(),
            email: "contact@juniperbroz.com".to_string(),
            whatsapp: "+1234567890".to_string(),
            telegram: "@juniperbrozforex".to_string(),
            years_experience: 12,
            clients_served: 500,
            assets_managed: "$45M+".to_string(),
            social_links: SocialLinks::default(),
            credentials: vec![
                "Series 7 - General Securities Representative".to_string(),
                "Series 66 - Uniform Combined State Law".to_string(),
                "Certified Financial Planner (CFP)".to_string(),
                "Chartered Market Technician (CMT)".to_string(),
            ],
        }
    }
}
