//! Free-text link resolution against the article store.
//!
//! # Responsibility
//! - Resolve a link label (from an article's links list or a markdown link
//!   target) to a stored article.
//! - Classify markdown hrefs into in-page anchors vs. article labels and
//!   derive heading anchor slugs.
//!
//! # Invariants
//! - Resolution tries exact key, then exact title, then the first fuzzy
//!   substring match in store iteration order.
//! - The fuzzy step is a deliberate cheap heuristic; short labels can and
//!   do produce false positives.

use crate::model::article::Article;
use crate::storage::LocalStore;
use crate::store::ArticleStore;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::error::Error;
use std::fmt::{Display, Formatter};

static ATX_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]+(.+?)[ \t]*$").expect("valid heading regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Successful resolution of a label to a store entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub key: &'a str,
    pub article: &'a Article,
}

/// Resolution miss; callers surface it and offer the creation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkResolveError {
    NotFound(String),
}

impl Display for LinkResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(label) => write!(f, "no article found for link `{label}`"),
        }
    }
}

impl Error for LinkResolveError {}

/// Resolves a free-text label to an article.
///
/// 1. Exact key match.
/// 2. Exact title match.
/// 3. First entry (iteration order) whose lowercased title or key contains
///    the lowercased label.
///
/// # Errors
/// - [`LinkResolveError::NotFound`] when no step matches.
pub fn resolve<'a, S: LocalStore>(
    store: &'a ArticleStore<S>,
    label: &str,
) -> Result<Resolved<'a>, LinkResolveError> {
    for (key, article) in store.iter() {
        if key.as_str() == label {
            return Ok(Resolved {
                key: key.as_str(),
                article,
            });
        }
    }

    for (key, article) in store.iter() {
        if article.title == label {
            return Ok(Resolved {
                key: key.as_str(),
                article,
            });
        }
    }

    let needle = label.to_lowercase();
    for (key, article) in store.iter() {
        if article.title.to_lowercase().contains(needle.as_str())
            || key.to_lowercase().contains(needle.as_str())
        {
            return Ok(Resolved {
                key: key.as_str(),
                article,
            });
        }
    }

    Err(LinkResolveError::NotFound(label.to_string()))
}

/// Where a markdown href points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-page heading anchor (`#slug`); no store lookup involved.
    Anchor(String),
    /// Free-text label to run through [`resolve`].
    Label(String),
}

/// Splits markdown hrefs into in-page anchors and resolver labels.
pub fn classify_link_target(href: &str) -> LinkTarget {
    match href.strip_prefix('#') {
        Some(anchor) => LinkTarget::Anchor(anchor.to_string()),
        None => LinkTarget::Label(href.to_string()),
    }
}

/// Derives the in-page anchor slug for a heading.
///
/// Lowercases, keeps letters/digits/underscores/hyphens/whitespace, then
/// collapses whitespace runs into single hyphens.
pub fn heading_slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    WHITESPACE_RE
        .replace_all(kept.trim(), "-")
        .into_owned()
}

/// Appends `{#slug}` markers to every ATX heading so rendered headings are
/// addressable by in-page anchors.
pub fn annotate_heading_anchors(content: &str) -> String {
    ATX_HEADING_RE
        .replace_all(content, |caps: &Captures<'_>| {
            let hashes = &caps[1];
            let title = &caps[2];
            format!("{hashes} {title} {{#{}}}", heading_slug(title))
        })
        .into_owned()
}
