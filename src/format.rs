//! Locale-aware display text for status breakdowns.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::breakdown::{Breakdown, BreakdownEntry};

/// Display locale for rollup text. Always passed explicitly; the crate
/// keeps no ambient locale state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Portuguese, the back office's default language.
    #[default]
    Pt,
    /// English.
    En,
}

impl Locale {
    /// Parses a locale tag. Accepts `pt`, `pt-BR` and `en` in any case.
    /// Unknown tags are rejected rather than silently defaulted.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "pt" | "pt-br" => Some(Self::Pt),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    fn no_status_text(self) -> &'static str {
        match self {
            Self::Pt => "Sem status definido",
            Self::En => "No status defined",
        }
    }
}

impl BreakdownEntry {
    /// Localized display name. English falls back to the default-locale
    /// name when no translation exists.
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Pt => &self.name,
            Locale::En => self.name_en.as_deref().unwrap_or(&self.name),
        }
    }
}

/// Renders a breakdown as a single human-readable line.
///
/// An empty breakdown yields a fixed "no status defined" string. One
/// status carried by a single record yields the bare status name.
/// Everything else is a comma-joined list of `"{count} {name}"` terms in
/// breakdown order.
pub fn format_breakdown(breakdown: &Breakdown, locale: Locale) -> String {
    match breakdown.entries() {
        [] => locale.no_status_text().to_string(),
        [entry] if entry.count == 1 => entry.display_name(locale).to_string(),
        entries => entries
            .iter()
            .map(|entry| format!("{} {}", entry.count, entry.display_name(locale)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}
