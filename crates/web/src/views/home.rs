use maud::{html, Markup};
use sope_core::content::homepage::ActivitiesSection;
use sope_core::content::Homepage;

use super::cta_banner::cta_banner;
use super::image;

pub const TITLE: &str = "Início";
pub const UNAVAILABLE: &str = "Could not load homepage data.";

pub fn render(page: &Homepage) -> Markup {
    let hero = &page.hero;
    html! {
        section class="section" {
            div class="container grid-2" {
                div {
                    h1 class="title" { (hero.title) }
                    p { (hero.subtitle) }
                    @if !hero.button.link.is_empty() {
                        a href=(hero.button.link) class="btn btn-line" { (hero.button.text) }
                    }
                }
                div class="hero-image" {
                    (image(&hero.image, "cover", true))
                }
            }
        }

        (cta_banner(&page.cta_banner))

        @if let Some(section) = &page.activities_section {
            (activities(section))
        }
    }
}

fn activities(section: &ActivitiesSection) -> Markup {
    html! {
        section class="section" {
            div class="container grid-2" {
                div {
                    @if let Some(img) = &section.image {
                        (image(img, "cover", false))
                    }
                }
                div {
                    h2 class="title" { (section.title) }
                    p { (section.text) }
                    @if let Some(button) = &section.button {
                        a href=(button.link) class="btn btn-line" { (button.text) }
                    }
                }
            }
            @if !section.activities.is_empty() {
                div class="container team" {
                    @for activity in &section.activities {
                        div class="member" {
                            @if let Some(img) = &activity.image {
                                div class="portrait" { (image(img, "cover", false)) }
                            }
                            h3 { (activity.title) }
                            p { (activity.description) }
                        }
                    }
                }
            }
        }
    }
}
