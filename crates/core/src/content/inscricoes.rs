//! The `inscricoes` global: program listings with enrolment links.

use serde::Deserialize;

use super::{require, GlobalDocument, Link};
use crate::error::CoreError;
use crate::globals::GlobalSlug;
use crate::media::{BaseUrl, Media};
use crate::nullable;

pub const ENROL_LABEL: &str = "INSCRIÇÃO";
pub const INFO_LABEL: &str = "INFORMAÇÕES";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image: Media,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    #[default]
    Left,
    Right,
}

/// Block background. The CMS stores a free-form colour name; only
/// `white` is distinguished, everything else uses the light brand tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Background {
    #[default]
    White,
    Light,
}

impl From<String> for Background {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("white") {
            Background::White
        } else {
            Background::Light
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramButtons {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub inscricao_button: Link,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub informacoes_button: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(default)]
    pub age_range: Option<String>,
    pub image: Media,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub image_position: ImageSide,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub background_color: Background,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub buttons: ProgramButtons,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInscricoes {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub programs: Vec<Program>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inscricoes {
    pub hero: Hero,
    pub programs: Vec<Program>,
}

fn label_or(link: &mut Link, fallback: &str) {
    if link.text.trim().is_empty() {
        link.text = fallback.to_string();
    }
}

impl GlobalDocument for Inscricoes {
    const SLUG: GlobalSlug = GlobalSlug::Inscricoes;
    type Raw = RawInscricoes;

    fn normalize(raw: RawInscricoes, base: &BaseUrl) -> Result<Self, CoreError> {
        let mut hero = require(raw.hero, "hero")?;
        hero.image.absolutize(base);

        let mut programs = raw.programs;
        for program in &mut programs {
            program.image.absolutize(base);
            label_or(&mut program.buttons.inscricao_button, ENROL_LABEL);
            label_or(&mut program.buttons.informacoes_button, INFO_LABEL);
        }

        Ok(Self { hero, programs })
    }
}
