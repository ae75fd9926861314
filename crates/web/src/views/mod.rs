//! Server-rendered markup.
//!
//! Views are pure functions from normalized documents to [`maud::Markup`].
//! They never fetch; handlers pass in whatever the loaders produced.

pub mod contactos;
pub mod cta_banner;
pub mod fallback;
pub mod header;
pub mod home;
pub mod inscricoes;
pub mod layout;
pub mod quem_somos;
pub mod style;

use maud::{html, Markup};
use sope_core::media::Media;

/// An `<img>` for a CMS media reference.
pub(crate) fn image(media: &Media, class: &str, eager: bool) -> Markup {
    let loading = if eager { "eager" } else { "lazy" };
    html! {
        img src=(media.url) alt=(media.alt) class=(class) loading=(loading);
    }
}
