use maud::{html, Markup};
use sope_core::content::contactos::{ContactForm, ContactInfo, OpeningHours};
use sope_core::content::Contactos;

use super::image;

pub const TITLE: &str = "Contactos";
pub const UNAVAILABLE: &str = "Could not load contact data.";

pub fn render(page: &Contactos) -> Markup {
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

        section class="section" {
            div class="container grid-2" {
                div {
                    (contact_info(&page.contact_info))
                    (opening_hours(&page.opening_hours))
                }
                (contact_form(&page.contact_form, &page.contact_info.email))
            }
        }
    }
}

fn contact_info(info: &ContactInfo) -> Markup {
    let address = &info.address;
    let social = &info.social_media;
    html! {
        address {
            p { a href={ "tel:" (info.phone.replace(' ', "")) } { (info.phone) } }
            p { a href={ "mailto:" (info.email) } { (info.email) } }
            p { (address.street) br; (address.postal_code) }
            @if let Some(description) = &address.description {
                p { (description) }
            }
        }
        p {
            @if let Some(instagram) = &social.instagram {
                a href=(instagram) { "Instagram" } " "
            }
            @if let Some(facebook) = &social.facebook {
                a href=(facebook) { "Facebook" }
            }
        }
    }
}

fn opening_hours(hours: &OpeningHours) -> Markup {
    html! {
        h2 class="title" { (hours.title) }
        table class="schedule" {
            tbody {
                @for row in &hours.schedule {
                    tr {
                        td { (row.day) }
                        td { (row.hours) }
                        td { (row.notes.as_deref().unwrap_or_default()) }
                    }
                }
            }
        }
    }
}

/// The form hands off to the visitor's mail client; the site itself
/// accepts no submissions.
fn contact_form(form: &ContactForm, email: &str) -> Markup {
    html! {
        div {
            h2 class="title" { (form.title) }
            @if let Some(description) = &form.description {
                p { (description) }
            }
            form class="contact-form" action={ "mailto:" (email) } method="post" enctype="text/plain" {
                input type="text" name="nome" placeholder="Nome" required;
                input type="email" name="email" placeholder="Email" required;
                textarea name="mensagem" rows="5" placeholder="Mensagem" required {}
                button type="submit" class="btn btn-fill" { (form.submit_button_text) }
            }
        }
    }
}
