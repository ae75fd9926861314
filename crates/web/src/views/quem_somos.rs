use maud::{html, Markup};
use sope_core::content::quem_somos::{PrincipiosSection, PretendemoSection, SectionLayout};
use sope_core::content::QuemSomos;
use sope_core::text;

use super::image;

pub const TITLE: &str = "Quem Somos";
pub const UNAVAILABLE: &str = "Could not load page data.";

pub fn render(page: &QuemSomos) -> Markup {
    let hero = &page.hero;
    let o_sope = &page.o_sope_section;
    let equipa = &page.equipa_section;

    html! {
        section class="bg-light" {
            div class="grid-2" {
                div class="container section" {
                    h1 class="title" { (hero.title) }
                    @for line in text::lines(&hero.description) {
                        p { (line) }
                    }
                }
                div class="hero-image" {
                    (image(&hero.image, "cover", true))
                }
            }
        }

        section class="section bg-warm" {
            div class="container center" {
                h2 { (o_sope.title) }
                @for paragraph in text::paragraphs(&o_sope.text) {
                    p { (paragraph) }
                }
            }
        }

        (principios(&page.principios_section))
        (pretendemo(&page.pretendemo_section))

        section class="section" {
            div class="container" {
                h2 class="title center" { (equipa.title) }
                div class="team" {
                    @for member in &equipa.team_members {
                        div class="member" {
                            div class="portrait" { (image(&member.image, "cover", false)) }
                            h3 { (member.name) }
                            p class="role" { (member.title) }
                            p { (member.description) }
                        }
                    }
                }
            }
        }
    }
}

fn principios(section: &PrincipiosSection) -> Markup {
    html! {
        section class="section" {
            div class="container" {
                h2 class="title center" { (section.title) }
                div class="grid-2" {
                    div {
                        @if let Some(img) = section.first_image() {
                            div class="square" { (image(img, "cover", false)) }
                        }
                    }
                    div {
                        @for paragraph in section.texts() {
                            p { (paragraph) }
                        }
                    }
                }
            }
        }
    }
}

fn pretendemo(section: &PretendemoSection) -> Markup {
    let grid = match section.layout {
        SectionLayout::TextLeft => "container grid-2",
        SectionLayout::ImageLeft => "container grid-2 reverse",
    };

    html! {
        section class="section" {
            div class=(grid) {
                div {
                    h2 class="title" { (section.title) }
                    ul class="bullets" {
                        @for point in &section.bullet_points {
                            li { (point.text) }
                        }
                    }
                }
                div {
                    @if let Some(img) = &section.image {
                        div class="square" { (image(img, "cover", false)) }
                    }
                }
            }
        }
    }
}
