use maud::{html, Markup};
use sope_core::content::homepage::{ButtonStyle, CtaBanner};

pub fn button_class(style: ButtonStyle) -> &'static str {
    match style {
        ButtonStyle::Fill => "btn btn-fill",
        ButtonStyle::Outline => "btn btn-outline",
    }
}

pub fn cta_banner(banner: &CtaBanner) -> Markup {
    html! {
        section class="cta" {
            div class="container" {
                h2 { (banner.title) }
                p { (banner.text) }
                div class="buttons" {
                    @for button in &banner.buttons {
                        a href=(button.link) class=(button_class(button.style)) { (button.text) }
                    }
                }
            }
        }
    }
}
