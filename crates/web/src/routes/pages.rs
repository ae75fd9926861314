//! Page handlers.
//!
//! Each handler reads its page document and the navigation menu
//! concurrently, then renders either the page or its fallback message.

use axum::extract::State;
use axum::http::Uri;
use axum::routing::get;
use axum::Router;
use maud::Markup;
use sope_cms::pages;

use crate::error::AppError;
use crate::state::AppState;
use crate::views::{contactos, fallback, home, inscricoes, layout, quem_somos};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_page))
        .route("/quem-somos", get(quem_somos_page))
        .route("/inscricoes", get(inscricoes_page))
        .route("/contactos", get(contactos_page))
}

/// Render `doc` with `render`, or the unavailable message when it is absent.
fn render_or_fallback<D>(doc: Option<D>, render: fn(&D) -> Markup, unavailable: &str) -> Markup {
    match doc {
        Some(doc) => render(&doc),
        None => fallback::unavailable(unavailable),
    }
}

async fn home_page(State(state): State<AppState>) -> Markup {
    let (page, menu) = tokio::join!(pages::homepage(&state.cms), pages::main_menu(&state.cms));
    layout::page(
        home::TITLE,
        menu.as_ref(),
        render_or_fallback(page, home::render, home::UNAVAILABLE),
    )
}

async fn quem_somos_page(State(state): State<AppState>) -> Markup {
    let (page, menu) = tokio::join!(pages::quem_somos(&state.cms), pages::main_menu(&state.cms));
    layout::page(
        quem_somos::TITLE,
        menu.as_ref(),
        render_or_fallback(page, quem_somos::render, quem_somos::UNAVAILABLE),
    )
}

async fn inscricoes_page(State(state): State<AppState>) -> Markup {
    let (page, menu) = tokio::join!(pages::inscricoes(&state.cms), pages::main_menu(&state.cms));
    layout::page(
        inscricoes::TITLE,
        menu.as_ref(),
        render_or_fallback(page, inscricoes::render, inscricoes::UNAVAILABLE),
    )
}

async fn contactos_page(State(state): State<AppState>) -> Markup {
    let (page, menu) = tokio::join!(pages::contactos(&state.cms), pages::main_menu(&state.cms));
    layout::page(
        contactos::TITLE,
        menu.as_ref(),
        render_or_fallback(page, contactos::render, contactos::UNAVAILABLE),
    )
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
