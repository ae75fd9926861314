//! The `main-menu` global: site navigation.

use serde::Deserialize;

use super::{require, GlobalDocument};
use crate::error::CoreError;
use crate::globals::GlobalSlug;
use crate::media::BaseUrl;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub link: String,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMainMenu {
    #[serde(default)]
    pub nav_items: Option<Vec<NavItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainMenu {
    pub nav_items: Vec<NavItem>,
}

impl GlobalDocument for MainMenu {
    const SLUG: GlobalSlug = GlobalSlug::MainMenu;
    type Raw = RawMainMenu;

    /// Unlike page documents, a menu without a `navItems` array is treated
    /// as unavailable rather than empty.
    fn normalize(raw: RawMainMenu, _base: &BaseUrl) -> Result<Self, CoreError> {
        Ok(Self {
            nav_items: require(raw.nav_items, "navItems")?,
        })
    }
}
