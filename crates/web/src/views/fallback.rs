use maud::{html, Markup};

use super::layout;

/// Main content shown in place of a page whose document is unavailable.
pub fn unavailable(message: &str) -> Markup {
    html! {
        div class="unavailable" {
            p { (message) }
        }
    }
}

/// Standalone page for site-level errors (no navigation fetch).
pub fn error_page(heading: &str, message: &str) -> Markup {
    layout::page(
        heading,
        None,
        html! {
            div class="unavailable" {
                div class="center" {
                    h1 class="title" { (heading) }
                    p { (message) }
                    a href="/" class="btn btn-line" { "Voltar ao início" }
                }
            }
        },
    )
}
