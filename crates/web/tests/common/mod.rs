#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use sope_core::media::BaseUrl;
use sope_web::config::ServerConfig;
use sope_web::routes;
use sope_web::state::AppState;

/// Build a test `ServerConfig` pointing at `cms_base_url`.
pub fn test_config(cms_base_url: BaseUrl) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cms_base_url,
        cms_timeout: Duration::from_secs(5),
        request_timeout_secs: 30,
        payload_secret: "test-secret".to_string(),
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(config: ServerConfig) -> Router {
    routes::build_router(AppState::new(config))
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_cms(router: Router) -> BaseUrl {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    BaseUrl::parse(&format!("http://{addr}")).unwrap()
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> BaseUrl {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    BaseUrl::parse(&format!("http://{addr}")).unwrap()
}

/// A stand-in CMS serving the given globals as JSON.
pub fn cms_with(globals: Vec<(&'static str, Value)>) -> Router {
    let mut router = Router::new();
    for (slug, body) in globals {
        router = router.route(
            &format!("/api/globals/{slug}"),
            routing::get(move || {
                let body = body.clone();
                async move { Json(body) }
            }),
        );
    }
    router
}

/// Spawn a CMS with `globals` and build the app against it.
pub async fn app_with(globals: Vec<(&'static str, Value)>) -> (Router, BaseUrl) {
    let base = spawn_cms(cms_with(globals)).await;
    (build_test_app(test_config(base.clone())), base)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn main_menu() -> Value {
    json!({
        "id": 1,
        "navItems": [
            { "id": "nav-1", "label": "Quem Somos", "link": "/quem-somos" },
            { "id": "nav-2", "label": "Inscrições", "link": "/inscricoes" },
            { "id": "nav-3", "label": "Contactos", "link": "/contactos" }
        ]
    })
}

pub fn homepage() -> Value {
    json!({
        "id": 1,
        "hero": {
            "title": "Um sopé para crescer",
            "subtitle": "Creche e jardim de infância na Benedita",
            "button": { "text": "Conhecer", "link": "/quem-somos" },
            "image": { "id": 3, "url": "/api/media/file/hero.jpg", "alt": "Crianças a brincar" }
        },
        "ctaBanner": {
            "title": "Inscrições abertas",
            "text": "Venha conhecer o nosso espaço",
            "buttons": [
                { "text": "Inscrever", "link": "/inscricoes", "style": "fill" },
                { "text": "Falar connosco", "link": "/contactos", "style": "outline" }
            ]
        },
        "activitiesSection": {
            "title": "Atividades",
            "text": "Música, horta e movimento",
            "image": { "url": "/api/media/file/atividades.jpg", "alt": "Horta" },
            "button": { "text": "Ver atividades", "link": "/atividades" }
        }
    })
}

pub fn quem_somos() -> Value {
    json!({
        "hero": {
            "title": "Quem Somos",
            "description": "Primeira linha\nSegunda linha",
            "image": { "url": "/api/media/file/qs.jpg", "alt": "Equipa" }
        },
        "oSopeSection": {
            "title": "O Sopé...",
            "text": "Primeiro parágrafo.\n\nSegundo parágrafo."
        },
        "principiosSection": {
            "title": "Nossos Princípios",
            "content": [
                { "type": "text", "text": "Respeito pelo ritmo de cada criança" },
                { "type": "image", "image": { "url": "/api/media/file/principios.jpg", "alt": "Mãos" } },
                { "type": "text", "text": "Brincar ao ar livre" }
            ]
        },
        "pretendemoSection": {
            "title": "O Que Pretendemos",
            "layout": "text-left",
            "bulletPoints": [ { "text": "Autonomia" }, { "text": "Comunidade" } ]
        },
        "equipaSection": {
            "title": "A Nossa Equipa",
            "teamMembers": [
                {
                    "name": "Marta",
                    "title": "Educadora",
                    "description": "Acompanha o grupo dos 3 anos",
                    "image": { "url": "/api/media/file/marta.jpg", "alt": "Marta" }
                }
            ]
        }
    })
}

pub fn inscricoes() -> Value {
    json!({
        "hero": {
            "title": "Inscrições",
            "description": "Escolha o programa",
            "image": { "url": "/api/media/file/insc.jpg", "alt": "" }
        },
        "programs": [
            {
                "title": "Creche",
                "description": "Dos 4 meses aos 3 anos",
                "ageRange": "0 - 3 anos",
                "image": { "url": "/api/media/file/creche.jpg", "alt": "Creche" },
                "imagePosition": "left",
                "backgroundColor": "white",
                "buttons": {
                    "inscricaoButton": { "text": "INSCRIÇÃO", "link": "/inscricoes/creche" },
                    "informacoesButton": { "text": "INFORMAÇÕES", "link": "/contactos" }
                }
            }
        ]
    })
}

pub fn contactos() -> Value {
    json!({
        "hero": {
            "title": "Contactos",
            "image": { "url": "/api/media/file/contactos.jpg", "alt": "" }
        },
        "contactInfo": {
            "phone": "+351 950 270 856",
            "email": "sope.silvere@gmail.com",
            "address": { "street": "Est. da Charneca, Benedita", "postalCode": "2475-024" },
            "socialMedia": { "instagram": "https://instagram.com/sope" }
        },
        "contactForm": {
            "title": "Fale Connosco",
            "submitButtonText": "Enviar Mensagem"
        },
        "openingHours": {
            "title": "Horários",
            "schedule": [ { "day": "Segunda a Sexta", "hours": "7h30 - 19h00" } ]
        }
    })
}
