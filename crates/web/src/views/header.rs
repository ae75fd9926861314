use maud::{html, Markup};
use sope_core::content::MainMenu;

use super::layout::SITE_NAME;

pub const INSTAGRAM_PATH: &str = "/instagram";

/// Site header. Without a menu only the logo and Instagram link render.
pub fn header(menu: Option<&MainMenu>) -> Markup {
    html! {
        header class="site-header" {
            div class="container" {
                a href="/" class="logo" { (SITE_NAME) }
                nav class="nav" {
                    @if let Some(menu) = menu {
                        @for item in &menu.nav_items {
                            a href=(item.link) { (item.label) }
                        }
                    }
                    a href=(INSTAGRAM_PATH) aria-label="Instagram" { "IG" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sope_core::content::main_menu::NavItem;

    use super::*;

    #[test]
    fn renders_nav_items_in_order() {
        let menu = MainMenu {
            nav_items: vec![
                NavItem {
                    label: "Quem Somos".into(),
                    link: "/quem-somos".into(),
                    id: Some("n1".into()),
                },
                NavItem {
                    label: "Contactos".into(),
                    link: "/contactos".into(),
                    id: None,
                },
            ],
        };

        let html = header(Some(&menu)).into_string();
        let first = html.find("Quem Somos").unwrap();
        let second = html.find("Contactos").unwrap();
        assert!(first < second);
        assert!(html.contains(r#"href="/quem-somos""#));
        assert!(html.contains(r#"<a href="/quem-somos">Quem Somos</a>"#));
        assert!(!html.contains(r#"id="n1""#));
    }

    #[test]
    fn missing_menu_still_has_instagram_link() {
        let html = header(None).into_string();
        assert!(html.contains(r#"href="/instagram""#));
        assert!(html.contains(SITE_NAME));
    }
}
