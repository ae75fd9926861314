//! Registry of the CMS globals consumed by the website.

use std::fmt;

/// A singleton content document addressed by a fixed slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalSlug {
    Homepage,
    MainMenu,
    QuemSomos,
    Inscricoes,
    Contactos,
}

impl GlobalSlug {
    pub const ALL: [GlobalSlug; 5] = [
        GlobalSlug::Homepage,
        GlobalSlug::MainMenu,
        GlobalSlug::QuemSomos,
        GlobalSlug::Inscricoes,
        GlobalSlug::Contactos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GlobalSlug::Homepage => "homepage",
            GlobalSlug::MainMenu => "main-menu",
            GlobalSlug::QuemSomos => "quem-somos",
            GlobalSlug::Inscricoes => "inscricoes",
            GlobalSlug::Contactos => "contactos",
        }
    }

    /// REST path of the global, relative to the CMS origin.
    ///
    /// ```
    /// use sope_core::globals::GlobalSlug;
    ///
    /// assert_eq!(GlobalSlug::QuemSomos.endpoint(), "/api/globals/quem-somos");
    /// ```
    pub fn endpoint(self) -> String {
        format!("/api/globals/{}", self.as_str())
    }
}

impl fmt::Display for GlobalSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_under_api_globals() {
        for slug in GlobalSlug::ALL {
            assert_eq!(slug.endpoint(), format!("/api/globals/{slug}"));
        }
    }

    #[test]
    fn main_menu_uses_kebab_case() {
        assert_eq!(GlobalSlug::MainMenu.as_str(), "main-menu");
    }
}
