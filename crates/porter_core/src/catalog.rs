//! Typed string catalog.
//!
//! Every user-facing string lives in a TOML catalog deserialized into the
//! structs below. Deserialization denies unknown fields and has no defaults,
//! so a missing or misspelled key fails at load time instead of at first
//! access.

use porter_error::CatalogError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// One questionnaire entry: the full prompt shown to the applicant and the
/// short label used in the submitted summary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    /// The question as asked in the DM conversation.
    pub prompt: String,
    /// Short label prefixed to the answer in the application summary.
    pub label: String,
}

/// Strings for the application questionnaire flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplySection {
    /// Greeting sent when a new application starts. `{}`: display name.
    pub new_application: String,
    /// Shown when all questions are answered. `{}`: formatted answers.
    pub completed: String,
    /// Progress report. `{}`: step, total, current question.
    pub progress: String,
    /// Redirect notice for DM-only commands used in a guild channel.
    /// `{}`: command name, twice.
    pub dm_redirect: String,
    /// Submission confirmation. `{}`: display name.
    pub submitted: String,
    /// Asked to submit without a finished application. `{}`: display name.
    pub unfinished: String,
    /// Cancellation confirmation. `{}`: display name.
    pub cancelled: String,
    /// Asked to cancel without a started application. `{}`: display name.
    pub not_started: String,
    /// Message posted to the applications channel. `{}`: display name,
    /// formatted answers.
    pub submission: String,
    /// The questionnaire itself, in asking order.
    pub questions: Vec<Question>,
}

/// Strings for the help feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpSection {
    /// Title of the help session embed.
    pub title: String,
    /// Shown when the queried command does not exist. `{}`: the query.
    pub invalid_query: String,
    /// Placeholder summary for commands without one.
    pub no_details: String,
}

/// Strings for the info feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InfoSection {
    /// Title of the info session embed.
    pub title: String,
    /// Greeting posted to the welcome channel. `{}`: display name.
    pub welcome: String,
    /// Info content, one logical section per entry; sections are never split
    /// across page boundaries.
    pub pages: Vec<String>,
}

/// Strings and data for the character-lookup feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterSection {
    /// Title of the roster session embed.
    pub title: String,
    /// First lines of the roster session.
    pub introduction: String,
    /// Shown when the queried name has no roster entry. `{}`: the query.
    pub invalid_character: String,
    /// Character name to face code, sorted by name.
    pub roster: BTreeMap<String, String>,
}

/// The complete string catalog.
///
/// # Examples
///
/// ```
/// use porter_core::Catalog;
///
/// let catalog = Catalog::builtin().unwrap();
/// assert!(!catalog.apply.questions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Application questionnaire strings.
    pub apply: ApplySection,
    /// Help feature strings.
    pub help: HelpSection,
    /// Info feature strings.
    pub info: InfoSection,
    /// Character lookup strings and roster.
    pub characters: CharacterSection,
}

/// The catalog compiled into the binary, used unless the configuration
/// points at an override file.
const BUILTIN: &str = include_str!("../resources/strings.toml");

impl Catalog {
    /// Parse a catalog from TOML text, validating the full schema.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            toml::from_str(text).map_err(|e| CatalogError::new(format!("invalid catalog: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::new(format!("failed to read {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), "Loaded string catalog override");
        Self::from_toml(&text)
    }

    /// The compiled-in default catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN)
    }

    /// Checks that cannot be expressed in the serde schema.
    fn validate(&self) -> Result<(), CatalogError> {
        if self.apply.questions.is_empty() {
            return Err(CatalogError::new("[apply] must define at least one question"));
        }
        if self.info.pages.is_empty() {
            return Err(CatalogError::new("[info] must define at least one page"));
        }
        Ok(())
    }
}

/// Fill `{}` placeholders in a catalog template, in order.
///
/// Surplus placeholders are left in place; surplus arguments are dropped.
///
/// # Examples
///
/// ```
/// use porter_core::fill;
///
/// assert_eq!(fill("step {} of {}", &["2", "9"]), "step 2 of 9");
/// ```
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(at) = rest.find("{}") {
        out.push_str(&rest[..at]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}
