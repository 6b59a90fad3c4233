//! Translation table types and fallback lookup.
//!
//! UI strings live in strongly typed nested structs so that every key path
//! is checked at compile time; a typo in a lookup is a build error, not a
//! silent `undefined`. Each supported language binds one `static` table of
//! the shared `Translations` type (see `strings`), so table references
//! compare by identity.
//!
//! Fallback happens at the value level: the English table is total (every
//! entry non-empty, enforced by test), other tables may leave entries empty
//! or have no table at all. `TranslationTable::text` resolves an entry to
//! the most specific non-empty value and therefore never returns an empty
//! string for a key English defines.

use crate::i18n::strings;
use crate::i18n::Language;

/// A phrase table: literal (needle, replacement) pairs applied in order.
pub type PhraseTable = &'static [(&'static str, &'static str)];

/// Header / navigation strings.
#[derive(Debug)]
pub struct HeaderStrings {
    pub title: &'static str,
    pub launches: &'static str,
    pub vehicles: &'static str,
}

/// Home page hero strings.
#[derive(Debug)]
pub struct HeroStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub explore_launches: &'static str,
    pub view_fleet: &'static str,
}

/// One home page section card.
#[derive(Debug)]
pub struct SectionStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
}

/// Home page section cards.
#[derive(Debug)]
pub struct HomeSections {
    pub launches: SectionStrings,
    pub vehicles: SectionStrings,
}

/// Home page strings.
#[derive(Debug)]
pub struct HomeStrings {
    pub hero: HeroStrings,
    pub sections: HomeSections,
}

/// Launches page strings.
#[derive(Debug)]
pub struct LaunchesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_data: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
    pub pending: &'static str,
    pub details: &'static str,
    pub rocket: &'static str,
    pub launchpad: &'static str,
    pub links: &'static str,
    pub webcast: &'static str,
    pub article: &'static str,
    pub wikipedia: &'static str,
}

/// Vehicles page strings.
#[derive(Debug)]
pub struct VehiclesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_data: &'static str,
    pub active: &'static str,
    pub inactive: &'static str,
    pub specifications: &'static str,
    pub height: &'static str,
    pub diameter: &'static str,
    pub mass: &'static str,
    pub stages: &'static str,
    pub engines: &'static str,
    pub first_flight: &'static str,
    pub cost_per_launch: &'static str,
    pub success_rate: &'static str,
    pub images: &'static str,
    pub description: &'static str,
}

/// Cores page strings.
///
/// `update_phrases` localizes status phrases embedded in the free-text core
/// update field sourced from the upstream API. English is the source
/// language of that text, so its table is empty.
#[derive(Debug)]
pub struct CoresStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub no_data: &'static str,
    pub status: &'static str,
    pub block: &'static str,
    pub flights: &'static str,
    pub landings: &'static str,
    pub update_phrases: PhraseTable,
}

/// Strings shared across pages.
#[derive(Debug)]
pub struct CommonStrings {
    pub loading: &'static str,
    pub error: &'static str,
    pub retry: &'static str,
    pub no_data: &'static str,
    pub meters: &'static str,
    pub kilograms: &'static str,
    pub million: &'static str,
}

/// All localized user-facing strings for one language.
#[derive(Debug)]
pub struct Translations {
    pub header: HeaderStrings,
    pub home: HomeStrings,
    pub launches: LaunchesStrings,
    pub vehicles: VehiclesStrings,
    pub cores: CoresStrings,
    pub common: CommonStrings,
}

/// Lookup entry points over the per-language tables.
pub struct TranslationTable;

impl TranslationTable {
    /// Get the table for a language, or the English table when the language
    /// ships no table of its own.
    pub fn for_language(language: Language) -> &'static Translations {
        table_for(language).unwrap_or(&strings::ENGLISH)
    }

    /// Resolve one entry with per-entry fallback.
    ///
    /// Returns the language's own value when its table defines the entry as
    /// non-empty, otherwise the English value. Never panics; never returns
    /// an empty string for an entry the English table defines.
    pub fn text<F>(language: Language, entry: F) -> &'static str
    where
        F: Fn(&'static Translations) -> &'static str,
    {
        if let Some(table) = table_for(language) {
            let value = entry(table);
            if !value.is_empty() {
                return value;
            }
        }
        entry(&strings::ENGLISH)
    }

    /// Resolve a phrase table with whole-table fallback.
    ///
    /// An empty table is meaningful (English has nothing to substitute), so
    /// fallback only applies when the language has no table at all.
    pub fn phrases<F>(language: Language, entry: F) -> PhraseTable
    where
        F: Fn(&'static Translations) -> PhraseTable,
    {
        match table_for(language) {
            Some(table) => entry(table),
            None => entry(&strings::ENGLISH),
        }
    }
}

/// The table shipped for a language, if any.
///
/// Italian is supported for resolution but ships no table yet; it resolves
/// wholesale to English.
fn table_for(language: Language) -> Option<&'static Translations> {
    match language.code() {
        "en" => Some(&strings::ENGLISH),
        "es" => Some(&strings::SPANISH),
        "fr" => Some(&strings::FRENCH),
        "zh" => Some(&strings::CHINESE),
        "ja" => Some(&strings::JAPANESE),
        "de" => Some(&strings::GERMAN),
        "da" => Some(&strings::DANISH),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Translations;

    /// Every text entry of the table, paired with a stable name.
    ///
    /// Used by the totality and fallback tests; must be extended when a
    /// field is added to `Translations`.
    pub fn all_text_entries() -> Vec<(&'static str, fn(&'static Translations) -> &'static str)> {
        vec![
            ("header.title", |t| t.header.title),
            ("header.launches", |t| t.header.launches),
            ("header.vehicles", |t| t.header.vehicles),
            ("home.hero.title", |t| t.home.hero.title),
            ("home.hero.subtitle", |t| t.home.hero.subtitle),
            ("home.hero.explore_launches", |t| t.home.hero.explore_launches),
            ("home.hero.view_fleet", |t| t.home.hero.view_fleet),
            ("home.sections.launches.title", |t| t.home.sections.launches.title),
            ("home.sections.launches.subtitle", |t| t.home.sections.launches.subtitle),
            ("home.sections.launches.description", |t| {
                t.home.sections.launches.description
            }),
            ("home.sections.launches.cta", |t| t.home.sections.launches.cta),
            ("home.sections.vehicles.title", |t| t.home.sections.vehicles.title),
            ("home.sections.vehicles.subtitle", |t| t.home.sections.vehicles.subtitle),
            ("home.sections.vehicles.description", |t| {
                t.home.sections.vehicles.description
            }),
            ("home.sections.vehicles.cta", |t| t.home.sections.vehicles.cta),
            ("launches.title", |t| t.launches.title),
            ("launches.subtitle", |t| t.launches.subtitle),
            ("launches.loading", |t| t.launches.loading),
            ("launches.error", |t| t.launches.error),
            ("launches.no_data", |t| t.launches.no_data),
            ("launches.success", |t| t.launches.success),
            ("launches.failure", |t| t.launches.failure),
            ("launches.pending", |t| t.launches.pending),
            ("launches.details", |t| t.launches.details),
            ("launches.rocket", |t| t.launches.rocket),
            ("launches.launchpad", |t| t.launches.launchpad),
            ("launches.links", |t| t.launches.links),
            ("launches.webcast", |t| t.launches.webcast),
            ("launches.article", |t| t.launches.article),
            ("launches.wikipedia", |t| t.launches.wikipedia),
            ("vehicles.title", |t| t.vehicles.title),
            ("vehicles.subtitle", |t| t.vehicles.subtitle),
            ("vehicles.loading", |t| t.vehicles.loading),
            ("vehicles.error", |t| t.vehicles.error),
            ("vehicles.no_data", |t| t.vehicles.no_data),
            ("vehicles.active", |t| t.vehicles.active),
            ("vehicles.inactive", |t| t.vehicles.inactive),
            ("vehicles.specifications", |t| t.vehicles.specifications),
            ("vehicles.height", |t| t.vehicles.height),
            ("vehicles.diameter", |t| t.vehicles.diameter),
            ("vehicles.mass", |t| t.vehicles.mass),
            ("vehicles.stages", |t| t.vehicles.stages),
            ("vehicles.engines", |t| t.vehicles.engines),
            ("vehicles.first_flight", |t| t.vehicles.first_flight),
            ("vehicles.cost_per_launch", |t| t.vehicles.cost_per_launch),
            ("vehicles.success_rate", |t| t.vehicles.success_rate),
            ("vehicles.images", |t| t.vehicles.images),
            ("vehicles.description", |t| t.vehicles.description),
            ("cores.title", |t| t.cores.title),
            ("cores.subtitle", |t| t.cores.subtitle),
            ("cores.loading", |t| t.cores.loading),
            ("cores.error", |t| t.cores.error),
            ("cores.no_data", |t| t.cores.no_data),
            ("cores.status", |t| t.cores.status),
            ("cores.block", |t| t.cores.block),
            ("cores.flights", |t| t.cores.flights),
            ("cores.landings", |t| t.cores.landings),
            ("common.loading", |t| t.common.loading),
            ("common.error", |t| t.common.error),
            ("common.retry", |t| t.common.retry),
            ("common.no_data", |t| t.common.no_data),
            ("common.meters", |t| t.common.meters),
            ("common.kilograms", |t| t.common.kilograms),
            ("common.million", |t| t.common.million),
        ]
    }
}
