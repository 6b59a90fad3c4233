//! Language-alternate link generation.
//!
//! Search engines get one alternate URL per supported language for every
//! page, plus a canonical and an `x-default` pointing at the default
//! language. The set of languages comes from the registry; this module
//! never keeps its own list. Full SEO metadata (titles, open graph, cards)
//! is owned by the rendering layer and out of scope here.

use serde::Serialize;

use crate::i18n::{Language, LanguageRegistry};

/// One `rel="alternate"` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

/// Canonical URL for a path: the default-language variant.
pub fn canonical_url(site_url: &str, path: &str) -> String {
    language_url(site_url, Language::default_language().code(), &base_path(path))
}

/// Alternate links for a path: one per enabled language, in registry
/// order, followed by `x-default` pointing at the default language.
pub fn alternate_links(site_url: &str, path: &str) -> Vec<AlternateLink> {
    let base = base_path(path);
    let registry = LanguageRegistry::get();

    let mut links: Vec<AlternateLink> = registry
        .list_enabled()
        .iter()
        .map(|lang| AlternateLink {
            hreflang: lang.code.to_string(),
            href: language_url(site_url, lang.code, &base),
        })
        .collect();

    links.push(AlternateLink {
        hreflang: "x-default".to_string(),
        href: language_url(site_url, registry.default_language().code, &base),
    });

    links
}

/// Strip a leading supported-language segment from a path.
///
/// `/es/launches` and `/launches` both yield `/launches`; the root (with
/// or without prefix) yields `/`.
fn base_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let rest = match segments.split_first() {
        Some((first, rest)) if Language::from_code(first).is_ok() => rest,
        _ => &segments[..],
    };

    if rest.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", rest.join("/"))
    }
}

fn language_url(site_url: &str, code: &str, base: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    if base == "/" {
        format!("{}/{}", site_url, code)
    } else {
        format!("{}/{}{}", site_url, code, base)
    }
}
