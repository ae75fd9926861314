use maud::{html, Markup, PreEscaped, DOCTYPE};
use sope_core::content::MainMenu;

use super::header::header;
use super::style::STYLESHEET;

pub const SITE_NAME: &str = "Sopé";

/// Full HTML document: head, header, `content` as `<main>`, footer.
pub fn page(title: &str, menu: Option<&MainMenu>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (header(menu))
                main { (content) }
                footer class="site-footer" {
                    div class="container center" {
                        p { (SITE_NAME) }
                    }
                }
            }
        }
    }
}
