//! Locale resolution for inbound request paths.
//!
//! Every user-facing path must carry a supported language code as its first
//! segment. The resolver decides, per request, whether a path passes
//! through untouched or redirects to its language-prefixed form. It is a
//! pure function of the path and the `Accept-Language` header; the actual
//! redirect response lives in the HTTP layer (`server`).

use crate::i18n::Language;

/// Path prefixes exempt from language-prefix enforcement.
const EXCLUDED_PREFIXES: &[&str] = &["/api/", "/assets/", "/favicon.ico", "/manifest.json"];

/// Outcome of resolving one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The path is already valid (prefixed or exempt); serve it as-is.
    PassThrough,
    /// The path needs a language prefix; redirect to this target.
    Redirect(String),
}

impl Resolution {
    /// Redirect target, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Resolution::PassThrough => None,
            Resolution::Redirect(target) => Some(target),
        }
    }
}

/// Resolve a request path against the supported-language set.
///
/// Exempt paths (API routes, build assets, favicon, manifest, anything
/// containing a dot) always pass through. A path whose first segment is a
/// supported language code passes through; anything else redirects to the
/// same path prefixed with the language detected from `accept_language`
/// (default language when the header is absent or matches nothing).
///
/// Resolution is idempotent: a redirect target always passes through when
/// resolved again.
pub fn resolve(path: &str, accept_language: Option<&str>) -> Resolution {
    // Empty path is the site root
    let path = if path.is_empty() { "/" } else { path };

    if is_excluded(path) {
        return Resolution::PassThrough;
    }

    if let Some(first_segment) = path.split('/').find(|segment| !segment.is_empty()) {
        if Language::from_code(first_segment).is_ok() {
            return Resolution::PassThrough;
        }
    }

    let language = Language::detect_best(accept_language);
    Resolution::Redirect(format!("/{}{}", language.code(), path))
}

/// Check whether a path is exempt from language-prefix enforcement.
///
/// A literal dot anywhere in the path marks a static file.
fn is_excluded(path: &str) -> bool {
    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path.contains('.')
}
