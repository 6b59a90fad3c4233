//! HTTP surface: router, locale middleware, and the JSON API.
//!
//! The locale middleware applies the resolver to every request before
//! routing; exempt and already-prefixed paths pass straight through,
//! everything else gets a 307 to its language-prefixed form. Page
//! rendering is owned elsewhere; the catch-all here answers with the
//! resolved locale and the localized heading for the requested section.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::i18n::{Language, LanguageRegistry, TranslationTable};
use crate::resolver::{self, Resolution};
use crate::seo;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the application router.
pub fn build_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/api/version", get(version))
        .route("/api/languages", get(languages))
        .fallback(localized_page)
        .layer(middleware::from_fn(locale_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { config })
}

/// Enforce the language prefix on user-facing paths.
async fn locale_middleware(req: Request, next: Next) -> Response {
    let accept_language = req
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    match resolver::resolve(req.uri().path(), accept_language) {
        Resolution::PassThrough => next.run(req).await,
        Resolution::Redirect(target) => {
            info!("Redirecting {} -> {}", req.uri().path(), target);
            Redirect::temporary(&target).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    deployment_id: String,
}

/// Build identity, truncated the way the deployment platform reports it.
async fn version(State(state): State<AppState>) -> Json<VersionInfo> {
    let commit = &state.config.commit_sha;
    let deployment = &state.config.deployment_id;

    let version = commit.chars().take(7).collect();
    let deployment_id = deployment
        .strip_prefix("dpl_")
        .unwrap_or(deployment)
        .chars()
        .take(9)
        .collect();

    Json(VersionInfo {
        version,
        deployment_id,
    })
}

/// Ordered list of enabled languages, for navigation menus and SEO tags.
async fn languages() -> Response {
    Json(LanguageRegistry::get().list_enabled()).into_response()
}

#[derive(Debug, Serialize)]
struct LocalizedPage {
    language: Language,
    title: &'static str,
    canonical: String,
    alternates: Vec<seo::AlternateLink>,
}

/// Catch-all for language-prefixed page paths.
///
/// The middleware guarantees the first segment is a supported language for
/// every path that reaches routing; anything else here is a 404.
async fn localized_page(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    let mut segments = path.split('/').filter(|s| !s.is_empty());

    let Some(language) = segments.next().and_then(|code| Language::from_code(code).ok()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let section = segments.next().unwrap_or("");
    let title = match section {
        "" => TranslationTable::text(language, |t| t.home.hero.title),
        "launches" => TranslationTable::text(language, |t| t.launches.title),
        "vehicles" => TranslationTable::text(language, |t| t.vehicles.title),
        "cores" => TranslationTable::text(language, |t| t.cores.title),
        _ => return StatusCode::NOT_FOUND.into_response(),
    };

    Json(LocalizedPage {
        language,
        title,
        canonical: seo::canonical_url(&state.config.site_url, path),
        alternates: seo::alternate_links(&state.config.site_url, path),
    })
    .into_response()
}
