//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical article record stored in the key -> article
//!   mapping.
//! - Provide the closed category enumeration with its unrecognized
//!   fallback path.
//! - Validate form-shaped input before any store mutation.
//!
//! # Invariants
//! - `category` keeps the raw wire string; classification happens through
//!   [`parse_category`] so unknown values are preserved, not rejected.
//! - `last_modified`/`modified_by` are absent until the first edit.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an article inside the store mapping.
///
/// Distinct from the display title; on create it is derived from the
/// trimmed title, but edits keep the key fixed while the title may change.
pub type ArticleKey = String;

/// Closed set of recognized article partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Core setting material shown first.
    Primary,
    /// Regular topic sections.
    Sections,
    /// Auxiliary/meta pages.
    Auxiliary,
}

impl Category {
    /// Stable wire string stored in article records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => CATEGORY_PRIMARY,
            Self::Sections => CATEGORY_SECTIONS,
            Self::Auxiliary => CATEGORY_AUXILIARY,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire value for the primary partition.
pub const CATEGORY_PRIMARY: &str = "primary";
/// Wire value for the sections partition.
pub const CATEGORY_SECTIONS: &str = "sections";
/// Wire value for the auxiliary partition.
pub const CATEGORY_AUXILIARY: &str = "auxiliary";

/// Parses a raw category string into the closed enumeration.
///
/// Returns `None` for anything outside the three recognized wire values;
/// callers decide what the fallback means (the partition step drops such
/// articles from every bucket).
pub fn parse_category(value: &str) -> Option<Category> {
    match value {
        CATEGORY_PRIMARY => Some(Category::Primary),
        CATEGORY_SECTIONS => Some(Category::Sections),
        CATEGORY_AUXILIARY => Some(Category::Auxiliary),
        _ => None,
    }
}

/// Canonical article record.
///
/// Serialized field names match the seed dataset and the persisted overlay
/// entry, so the same shape round-trips through both sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Display title. Not unique by construction, unlike the mapping key.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Raw category wire value. See [`parse_category`].
    pub category: String,
    /// Ordered free-text labels pointing at related articles.
    #[serde(default)]
    pub links: Vec<String>,
    /// Epoch milliseconds of the last successful edit.
    #[serde(
        rename = "lastModified",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<i64>,
    /// Username that performed the last edit.
    #[serde(
        rename = "modifiedBy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_by: Option<String>,
}

impl Article {
    /// Creates an article with a recognized category and no edit stamps.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        links: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.as_str().to_string(),
            links,
            last_modified: None,
            modified_by: None,
        }
    }

    /// Returns the recognized category, or `None` for unknown wire values.
    pub fn category_kind(&self) -> Option<Category> {
        parse_category(self.category.as_str())
    }

    /// Checks the required-field contract for create/edit submissions.
    ///
    /// # Errors
    /// - [`ArticleValidationError::EmptyTitle`] when the trimmed title is
    ///   empty.
    /// - [`ArticleValidationError::EmptyContent`] when the trimmed content
    ///   is empty.
    pub fn validate(&self) -> Result<(), ArticleValidationError> {
        if self.title.trim().is_empty() {
            return Err(ArticleValidationError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(ArticleValidationError::EmptyContent);
        }
        Ok(())
    }
}

/// Required-field violations reported inline by create/edit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for ArticleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "article title must not be empty"),
            Self::EmptyContent => write!(f, "article content must not be empty"),
        }
    }
}

impl Error for ArticleValidationError {}

/// Form-shaped input for create/edit submissions.
///
/// `links_input` carries the raw comma-separated text field; the parsed
/// label list is derived via [`parse_links_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub category: Category,
    pub content: String,
    pub links_input: String,
}

impl ArticleDraft {
    /// Creates a draft from raw form fields.
    pub fn new(
        title: impl Into<String>,
        category: Category,
        content: impl Into<String>,
        links_input: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            content: content.into(),
            links_input: links_input.into(),
        }
    }

    /// Parsed link labels in author order.
    pub fn links(&self) -> Vec<String> {
        parse_links_input(self.links_input.as_str())
    }
}

/// Splits a comma-separated links field into trimmed, non-empty labels.
pub fn parse_links_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        parse_category, parse_links_input, Article, ArticleValidationError, Category,
    };

    #[test]
    fn parses_recognized_categories_only() {
        assert_eq!(parse_category("primary"), Some(Category::Primary));
        assert_eq!(parse_category("sections"), Some(Category::Sections));
        assert_eq!(parse_category("auxiliary"), Some(Category::Auxiliary));
        assert_eq!(parse_category("Primary"), None);
        assert_eq!(parse_category("chronicles"), None);
        assert_eq!(parse_category(""), None);
    }

    #[test]
    fn validate_rejects_blank_required_fields() {
        let mut article = Article::new("Old Gods", "body", Category::Primary, vec![]);
        article.validate().expect("complete article should validate");

        article.title = "   ".to_string();
        assert_eq!(
            article.validate().expect_err("blank title must fail"),
            ArticleValidationError::EmptyTitle
        );

        article.title = "Old Gods".to_string();
        article.content = "\n\t".to_string();
        assert_eq!(
            article.validate().expect_err("blank content must fail"),
            ArticleValidationError::EmptyContent
        );
    }

    #[test]
    fn links_input_splits_trims_and_drops_empties() {
        assert_eq!(
            parse_links_input(" Old Gods , Cosmology ,, , Rivers of the North"),
            vec![
                "Old Gods".to_string(),
                "Cosmology".to_string(),
                "Rivers of the North".to_string()
            ]
        );
        assert!(parse_links_input("").is_empty());
        assert!(parse_links_input(" , ,").is_empty());
    }

    #[test]
    fn unknown_category_round_trips_through_serde() {
        let raw = r#"{"title":"t","content":"c","category":"chronicles","links":[]}"#;
        let article: Article = serde_json::from_str(raw).expect("article should parse");
        assert_eq!(article.category, "chronicles");
        assert_eq!(article.category_kind(), None);

        let encoded = serde_json::to_string(&article).expect("article should encode");
        assert!(encoded.contains("\"chronicles\""));
        assert!(!encoded.contains("lastModified"));
    }

    #[test]
    fn edit_stamps_use_wire_field_names() {
        let mut article = Article::new("t", "c", Category::Sections, vec![]);
        article.last_modified = Some(1_700_000_000_000);
        article.modified_by = Some("admin".to_string());
        let encoded = serde_json::to_string(&article).expect("article should encode");
        assert!(encoded.contains("\"lastModified\":1700000000000"));
        assert!(encoded.contains("\"modifiedBy\":\"admin\""));
    }
}
