// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 strata.dev

//! Entity filtering for recording and replay.
//!
//! Supports include/exclude patterns over entity paths.

use std::collections::HashSet;

/// Entity path filter.
#[derive(Debug, Clone)]
pub struct EntityFilter {
    mode: FilterMode,
    patterns: HashSet<String>,
}

/// Filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode {
    /// Include only matching paths.
    Include,
    /// Exclude matching paths.
    Exclude,
}

impl EntityFilter {
    /// Create an include filter (only record matching entities).
    pub fn include(patterns: Vec<String>) -> Self {
        Self {
            mode: FilterMode::Include,
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Create an exclude filter (record all except matching entities).
    pub fn exclude(patterns: Vec<String>) -> Self {
        Self {
            mode: FilterMode::Exclude,
            patterns: patterns.into_iter().collect(),
        }
    }

    /// Check if an entity path matches the filter.
    pub fn matches(&self, path: &str) -> bool {
        let is_match = self.patterns.iter().any(|p| Self::pattern_match(p, path));

        match self.mode {
            FilterMode::Include => is_match,
            FilterMode::Exclude => !is_match,
        }
    }

    /// Pattern matching over entity paths.
    /// Supports:
    /// - `*` matches everything
    /// - A pattern ending in `/` matches that subtree ("/camera/" matches
    ///   "/camera/points")
    /// - Exact match otherwise
    fn pattern_match(pattern: &str, path: &str) -> bool {
        if pattern == "*" {
            return true;
        }

        if let Some(prefix) = pattern.strip_suffix('/') {
            return path == prefix || path.starts_with(pattern);
        }

        pattern == path
    }

    /// Get the patterns in this filter.
    pub fn patterns(&self) -> &HashSet<String> {
        &self.patterns
    }

    /// Check if this is an include filter.
    pub fn is_include(&self) -> bool {
        self.mode == FilterMode::Include
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_filter() {
        let filter = EntityFilter::include(vec!["/camera/".into(), "/status".into()]);
        assert!(filter.matches("/camera/points"));
        assert!(filter.matches("/camera"));
        assert!(filter.matches("/status"));
        assert!(!filter.matches("/status/detail"));
        assert!(!filter.matches("/lidar/points"));
    }

    #[test]
    fn test_exclude_filter() {
        let filter = EntityFilter::exclude(vec!["/debug/".into()]);
        assert!(filter.matches("/camera/points"));
        assert!(!filter.matches("/debug/raw"));
    }

    #[test]
    fn test_wildcard_matches_all() {
        let filter = EntityFilter::include(vec!["*".into()]);
        assert!(filter.matches("/anything"));

        let filter = EntityFilter::exclude(vec!["*".into()]);
        assert!(!filter.matches("/anything"));
    }
}
