//! The canonical set of extraction categories.
//!
//! One scheme is used end to end: matcher registry keys, redactor
//! dispatch, and serialized output keys all speak the snake_case names
//! returned by [`Category::as_str`].
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// One recognized class of extractable entity.
///
/// `Time` is a reserved category: it is part of the public vocabulary and
/// always appears in results, but no matching rule is defined for it yet,
/// so its match list is always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Email,
    Url,
    Phone,
    CreditCard,
    Hashtag,
    HtmlTag,
    Currency,
    Time,
}

impl Category {
    /// All categories, in the order they appear in reports.
    pub const ALL: &'static [Category] = &[
        Category::Email,
        Category::Url,
        Category::Phone,
        Category::CreditCard,
        Category::Hashtag,
        Category::HtmlTag,
        Category::Currency,
        Category::Time,
    ];

    /// The canonical snake_case name, used everywhere a string key is needed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Email => "email",
            Category::Url => "url",
            Category::Phone => "phone",
            Category::CreditCard => "credit_card",
            Category::Hashtag => "hashtag",
            Category::HtmlTag => "html_tag",
            Category::Currency => "currency",
            Category::Time => "time",
        }
    }

    /// Sensitive categories are masked before they are displayed or stored.
    pub fn is_sensitive(&self) -> bool {
        matches!(self, Category::Email | Category::CreditCard)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
