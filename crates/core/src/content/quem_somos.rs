//! The `quem-somos` global: the "about us" page.

use serde::Deserialize;

use super::{require, GlobalDocument};
use crate::error::CoreError;
use crate::globals::GlobalSlug;
use crate::media::{absolutize_opt, BaseUrl, Media};
use crate::nullable;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub title: String,
    /// Newline-separated lines, one paragraph each.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    pub image: Media,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OSopeSection {
    #[serde(default = "default_o_sope_title")]
    pub title: String,
    /// Paragraphs separated by a blank line.
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    #[default]
    Right,
    Center,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub image_position: ImagePosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PrincipiosSection {
    #[serde(default = "default_principios_title")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub content: Vec<ContentBlock>,
}

impl PrincipiosSection {
    /// Text of every `text` block, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.content
            .iter()
            .filter(|b| b.kind == BlockKind::Text)
            .map(|b| b.text.as_deref().unwrap_or_default())
    }

    /// The first `image` block that actually carries an image.
    pub fn first_image(&self) -> Option<&Media> {
        self.content
            .iter()
            .find(|b| b.kind == BlockKind::Image)
            .and_then(|b| b.image.as_ref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionLayout {
    #[default]
    TextLeft,
    ImageLeft,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulletPoint {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PretendemoSection {
    #[serde(default = "default_pretendemo_title")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub layout: SectionLayout,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub bullet_points: Vec<BulletPoint>,
    #[serde(default)]
    pub image: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    pub image: Media,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipaSection {
    #[serde(default = "default_equipa_title")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub team_members: Vec<TeamMember>,
}

fn default_o_sope_title() -> String {
    "O Sopé...".to_string()
}

fn default_principios_title() -> String {
    "Nossos Princípios".to_string()
}

fn default_pretendemo_title() -> String {
    "O Que Pretendemos".to_string()
}

fn default_equipa_title() -> String {
    "A Nossa Equipa".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuemSomos {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub o_sope_section: Option<OSopeSection>,
    #[serde(default)]
    pub principios_section: Option<PrincipiosSection>,
    #[serde(default)]
    pub pretendemo_section: Option<PretendemoSection>,
    #[serde(default)]
    pub equipa_section: Option<EquipaSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuemSomos {
    pub hero: Hero,
    pub o_sope_section: OSopeSection,
    pub principios_section: PrincipiosSection,
    pub pretendemo_section: PretendemoSection,
    pub equipa_section: EquipaSection,
}

impl GlobalDocument for QuemSomos {
    const SLUG: GlobalSlug = GlobalSlug::QuemSomos;
    type Raw = RawQuemSomos;

    fn normalize(raw: RawQuemSomos, base: &BaseUrl) -> Result<Self, CoreError> {
        let mut hero = require(raw.hero, "hero")?;
        let o_sope_section = require(raw.o_sope_section, "oSopeSection")?;
        let mut principios_section = require(raw.principios_section, "principiosSection")?;
        let mut pretendemo_section = require(raw.pretendemo_section, "pretendemoSection")?;
        let mut equipa_section = require(raw.equipa_section, "equipaSection")?;

        hero.image.absolutize(base);
        for block in &mut principios_section.content {
            absolutize_opt(&mut block.image, base);
        }
        absolutize_opt(&mut pretendemo_section.image, base);
        for member in &mut equipa_section.team_members {
            member.image.absolutize(base);
        }

        Ok(Self {
            hero,
            o_sope_section,
            principios_section,
            pretendemo_section,
            equipa_section,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn base() -> BaseUrl {
        BaseUrl::parse("https://cms.example.org").unwrap()
    }

    fn parse(value: serde_json::Value) -> Result<QuemSomos, CoreError> {
        let raw: RawQuemSomos = serde_json::from_value(value).unwrap();
        QuemSomos::normalize(raw, &base())
    }

    fn full() -> serde_json::Value {
        json!({
            "hero": {
                "title": "Quem Somos",
                "description": "Linha um\nLinha dois",
                "image": { "url": "/api/media/file/hero.jpg", "alt": "Equipa" }
            },
            "oSopeSection": { "title": "O Sopé", "text": "Primeiro.\n\nSegundo." },
            "principiosSection": {
                "title": "Princípios",
                "content": [
                    { "type": "text", "text": "Respeito" },
                    { "type": "image", "image": { "url": "/api/media/file/p.jpg", "alt": "P" }, "imagePosition": "left" },
                    { "type": "text", "text": "Autonomia" }
                ]
            },
            "pretendemoSection": {
                "title": "Pretendemos",
                "layout": "image-left",
                "bulletPoints": [ { "text": "Brincar" }, { "text": "Aprender" } ],
                "image": { "url": "/api/media/file/b.jpg", "alt": "B" }
            },
            "equipaSection": {
                "title": "Equipa",
                "teamMembers": [
                    { "name": "Ana", "title": "Educadora", "description": "Dez anos", "image": { "url": "/api/media/file/ana.jpg", "alt": "Ana" } }
                ]
            }
        })
    }

    #[test]
    fn every_image_is_absolute() {
        let page = parse(full()).unwrap();
        let prefix = "https://cms.example.org/";

        assert!(page.hero.image.url.starts_with(prefix));
        assert!(page.principios_section.first_image().unwrap().url.starts_with(prefix));
        assert!(page.pretendemo_section.image.unwrap().url.starts_with(prefix));
        assert!(page.equipa_section.team_members[0].image.url.starts_with(prefix));
    }

    #[test]
    fn text_blocks_are_filtered_in_order() {
        let page = parse(full()).unwrap();
        let texts: Vec<_> = page.principios_section.texts().collect();
        assert_eq!(texts, ["Respeito", "Autonomia"]);
    }

    #[test]
    fn enum_fields_are_parsed() {
        let page = parse(full()).unwrap();
        assert_eq!(page.pretendemo_section.layout, SectionLayout::ImageLeft);
        assert_eq!(
            page.principios_section.content[1].image_position,
            ImagePosition::Left
        );
        assert_eq!(
            page.principios_section.content[0].image_position,
            ImagePosition::Right
        );
    }

    #[test]
    fn absent_lists_become_empty() {
        let mut doc = full();
        doc["principiosSection"].as_object_mut().unwrap().remove("content");
        doc["pretendemoSection"].as_object_mut().unwrap().remove("bulletPoints");
        doc["equipaSection"]["teamMembers"] = serde_json::Value::Null;

        let page = parse(doc).unwrap();
        assert!(page.principios_section.content.is_empty());
        assert!(page.principios_section.first_image().is_none());
        assert!(page.pretendemo_section.bullet_points.is_empty());
        assert!(page.equipa_section.team_members.is_empty());
    }

    #[test]
    fn schema_defaults_fill_missing_titles() {
        let mut doc = full();
        doc["oSopeSection"].as_object_mut().unwrap().remove("title");
        doc["equipaSection"].as_object_mut().unwrap().remove("title");
        doc["pretendemoSection"].as_object_mut().unwrap().remove("layout");

        let page = parse(doc).unwrap();
        assert_eq!(page.o_sope_section.title, "O Sopé...");
        assert_eq!(page.equipa_section.title, "A Nossa Equipa");
        assert_eq!(page.pretendemo_section.layout, SectionLayout::TextLeft);
    }

    #[test]
    fn missing_group_is_rejected() {
        let mut doc = full();
        doc.as_object_mut().unwrap().remove("equipaSection");
        assert_matches!(parse(doc), Err(CoreError::MissingField("equipaSection")));
    }

    #[test]
    fn image_block_without_image_is_skipped() {
        let mut doc = full();
        doc["principiosSection"]["content"] = json!([{ "type": "image" }]);
        let page = parse(doc).unwrap();
        assert!(page.principios_section.first_image().is_none());
    }
}
