//! Per-page content loaders.
//!
//! Each loader returns `Some(document)` or `None`. Network errors,
//! timeouts, non-2xx statuses, undecodable bodies and missing required
//! groups are logged here and never reach the caller.

use sope_core::content::{Contactos, GlobalDocument, Homepage, Inscricoes, MainMenu, QuemSomos};

use crate::api::{CmsClient, CmsError};

/// Fetch and normalize a document, logging and discarding any failure.
pub async fn load<D: GlobalDocument>(client: &CmsClient) -> Option<D> {
    match client.fetch_document::<D>().await {
        Ok(doc) => Some(doc),
        Err(err) => {
            log_failure(D::SLUG.as_str(), &err);
            None
        }
    }
}

pub async fn homepage(client: &CmsClient) -> Option<Homepage> {
    load(client).await
}

pub async fn quem_somos(client: &CmsClient) -> Option<QuemSomos> {
    load(client).await
}

pub async fn main_menu(client: &CmsClient) -> Option<MainMenu> {
    load(client).await
}

pub async fn inscricoes(client: &CmsClient) -> Option<Inscricoes> {
    load(client).await
}

pub async fn contactos(client: &CmsClient) -> Option<Contactos> {
    load(client).await
}

fn log_failure(slug: &str, err: &CmsError) {
    match err {
        CmsError::ApiError { status, .. } => {
            tracing::warn!(slug, status, "CMS returned a non-success status");
        }
        CmsError::Decode(e) => {
            tracing::warn!(slug, error = %e, "CMS response body could not be decoded");
        }
        CmsError::Invalid(e) => {
            tracing::warn!(slug, error = %e, "CMS document is missing required content");
        }
        CmsError::Request(e) if e.is_timeout() => {
            tracing::error!(slug, error = %e, "CMS request timed out");
        }
        CmsError::Request(e) => {
            tracing::error!(slug, error = %e, "CMS request failed");
        }
    }
}
