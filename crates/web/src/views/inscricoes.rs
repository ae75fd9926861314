use maud::{html, Markup};
use sope_core::content::inscricoes::{Background, ImageSide, Program};
use sope_core::content::Inscricoes;

use super::image;

pub const TITLE: &str = "Inscrições";
pub const UNAVAILABLE: &str = "Could not load enrolment data.";

pub fn render(page: &Inscricoes) -> Markup {
    let hero = &page.hero;
    html! {
        section class="section bg-light" {
            div class="container grid-2" {
                div {
                    h1 class="title" { (hero.title) }
                    @if let Some(description) = &hero.description {
                        p { (description) }
                    }
                }
                div class="hero-image" {
                    (image(&hero.image, "cover", true))
                }
            }
        }

        @for program in &page.programs {
            (program_block(program))
        }
    }
}

fn program_block(program: &Program) -> Markup {
    let section = match program.background_color {
        Background::White => "section",
        Background::Light => "section bg-light",
    };
    let grid = match program.image_position {
        ImageSide::Left => "container grid-2",
        ImageSide::Right => "container grid-2 reverse",
    };
    let buttons = &program.buttons;

    html! {
        section class=(section) {
            div class=(grid) {
                div class="square" {
                    (image(&program.image, "cover", false))
                }
                div {
                    h2 class="title" { (program.title) }
                    @if let Some(age) = &program.age_range {
                        p class="age" { (age) }
                    }
                    p { (program.description) }
                    a href=(buttons.inscricao_button.link) class="btn btn-fill" {
                        (buttons.inscricao_button.text)
                    }
                    " "
                    a href=(buttons.informacoes_button.link) class="btn btn-outline" {
                        (buttons.informacoes_button.text)
                    }
                }
            }
        }
    }
}
