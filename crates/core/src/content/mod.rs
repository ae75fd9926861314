//! Content documents, one module per CMS global.
//!
//! Each document comes in two shapes: a `Raw*` type that mirrors the JSON
//! body (required groups are `Option` so their absence can be reported) and
//! the normalized type handed to the views. [`GlobalDocument::normalize`]
//! is the only way from one to the other.

pub mod contactos;
pub mod homepage;
pub mod inscricoes;
pub mod main_menu;
pub mod quem_somos;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CoreError;
use crate::globals::GlobalSlug;
use crate::media::BaseUrl;
use crate::nullable;

pub use contactos::Contactos;
pub use homepage::Homepage;
pub use inscricoes::Inscricoes;
pub use main_menu::MainMenu;
pub use quem_somos::QuemSomos;

/// A CMS global that can be fetched and shaped for rendering.
pub trait GlobalDocument: Sized {
    /// Slug the document is served under.
    const SLUG: GlobalSlug;

    /// Wire shape of the JSON body.
    type Raw: DeserializeOwned;

    /// Validate required groups, default missing lists, and rewrite media
    /// URLs against `base`.
    fn normalize(raw: Self::Raw, base: &BaseUrl) -> Result<Self, CoreError>;
}

/// A labelled link (`{ text, link }`) used by buttons throughout the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub link: String,
}

/// Unwrap a required group or report which one is missing.
pub(crate) fn require<T>(value: Option<T>, field: &'static str) -> Result<T, CoreError> {
    value.ok_or(CoreError::MissingField(field))
}
