//! The `contactos` global: contact details, opening hours, contact form copy.

use serde::Deserialize;

use super::{require, GlobalDocument};
use crate::error::CoreError;
use crate::globals::GlobalSlug;
use crate::media::{BaseUrl, Media};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    #[serde(default = "default_hero_title")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: Media,
}

fn default_hero_title() -> String {
    "Contactos".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub postal_code: String,
    pub description: Option<String>,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: "Est. da Charneca, Benedita".to_string(),
            postal_code: "2475-024".to_string(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialMedia {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: Address,
    pub social_media: SocialMedia,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            phone: "+351 950 270 856".to_string(),
            email: "sope.silvere@gmail.com".to_string(),
            address: Address::default(),
            social_media: SocialMedia::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub title: String,
    pub description: Option<String>,
    pub submit_button_text: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            title: "Fale Connosco".to_string(),
            description: Some("Tem alguma questão? Não hesite em contactar-nos.".to_string()),
            submit_button_text: "Enviar Mensagem".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleRow {
    pub day: String,
    pub hours: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub title: String,
    pub schedule: Vec<ScheduleRow>,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            title: "Horários".to_string(),
            schedule: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContactos {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
    #[serde(default)]
    pub contact_form: Option<ContactForm>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contactos {
    pub hero: Hero,
    pub contact_info: ContactInfo,
    pub contact_form: ContactForm,
    pub opening_hours: OpeningHours,
}

impl GlobalDocument for Contactos {
    const SLUG: GlobalSlug = GlobalSlug::Contactos;
    type Raw = RawContactos;

    fn normalize(raw: RawContactos, base: &BaseUrl) -> Result<Self, CoreError> {
        let mut hero = require(raw.hero, "hero")?;
        hero.image.absolutize(base);

        Ok(Self {
            hero,
            contact_info: raw.contact_info.unwrap_or_default(),
            contact_form: raw.contact_form.unwrap_or_default(),
            opening_hours: raw.opening_hours.unwrap_or_default(),
        })
    }
}
