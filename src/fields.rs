//! Enumerations and field types for checklist items.
//!
//! This module defines the small closed sets used to classify tasks and to
//! style the interface: task priority and the light/dark theme.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Category value that matches every task when used as a filter.
pub const ALL_CATEGORIES: &str = "all";

/// Categories always offered by the filter, in display order.
pub const PRESET_CATEGORIES: [&str; 3] = [ALL_CATEGORIES, "work", "personal"];

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[default]
    #[serde(alias = "Low")]
    Low,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "High")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Capitalised label used in the task table.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour scheme of the interface. Presentation only, never stored on tasks.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

/// Normalise a category entered by the user. Blank input means "all".
pub fn normalise_category(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        ALL_CATEGORIES.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults_to_low() {
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn test_priority_serde_names() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        let p: Priority = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn test_theme_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_normalise_category() {
        assert_eq!(normalise_category("  work "), "work");
        assert_eq!(normalise_category("   "), "all");
        assert_eq!(normalise_category(""), "all");
    }
}
