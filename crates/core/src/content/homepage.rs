//! The `homepage` global: hero, call-to-action banner, activities.

use serde::Deserialize;

use super::{require, GlobalDocument, Link};
use crate::error::CoreError;
use crate::globals::GlobalSlug;
use crate::media::{absolutize_opt, BaseUrl, Media};
use crate::nullable;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub button: Link,
    pub image: Media,
}

/// Visual treatment of a CTA button.
///
/// Anything other than `fill` renders as an outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Fill,
    #[default]
    #[serde(other)]
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtaButton {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub link: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CtaBanner {
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub buttons: Vec<CtaButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub description: String,
    #[serde(default)]
    pub image: Option<Media>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivitiesSection {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub text: String,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub button: Option<Link>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub activities: Vec<Activity>,
}

impl ActivitiesSection {
    /// A group the editor never filled arrives as an object of nulls.
    fn is_blank(&self) -> bool {
        self.title.is_empty() && self.text.is_empty() && self.activities.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHomepage {
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub cta_banner: Option<CtaBanner>,
    #[serde(default)]
    pub activities_section: Option<ActivitiesSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homepage {
    pub hero: Hero,
    pub cta_banner: CtaBanner,
    pub activities_section: Option<ActivitiesSection>,
}

impl GlobalDocument for Homepage {
    const SLUG: GlobalSlug = GlobalSlug::Homepage;
    type Raw = RawHomepage;

    fn normalize(raw: RawHomepage, base: &BaseUrl) -> Result<Self, CoreError> {
        let mut hero = require(raw.hero, "hero")?;
        let cta_banner = require(raw.cta_banner, "ctaBanner")?;

        hero.image.absolutize(base);

        let activities_section = raw
            .activities_section
            .filter(|section| !section.is_blank())
            .map(|mut section| {
                if section.button.as_ref().is_some_and(|b| b.link.is_empty()) {
                    section.button = None;
                }
                absolutize_opt(&mut section.image, base);
                for activity in &mut section.activities {
                    absolutize_opt(&mut activity.image, base);
                }
                section
            });

        Ok(Self {
            hero,
            cta_banner,
            activities_section,
        })
    }
}
