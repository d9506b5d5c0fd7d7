// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locale selection and fallback resolution
//!
//! A space defines its locales remotely; [`LocaleSet`] wraps the fetched
//! definitions and answers lookup and fallback questions. Fallback chains
//! are followed through `fallback_code` links with a visited guard, so a
//! cyclic chain terminates instead of recursing forever.

use std::collections::HashSet;

use crate::content::LocaleDef;

/// The locales defined on a space.
#[derive(Debug, Clone, Default)]
pub struct LocaleSet {
    locales: Vec<LocaleDef>,
}

impl LocaleSet {
    pub fn new(locales: Vec<LocaleDef>) -> Self {
        LocaleSet { locales }
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// The space's default locale, if one is flagged.
    pub fn default_locale(&self) -> Option<&LocaleDef> {
        self.locales.iter().find(|l| l.default)
    }

    /// Exact lookup by code.
    pub fn get(&self, code: &str) -> Option<&LocaleDef> {
        self.locales.iter().find(|l| l.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// All locale codes, in definition order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|l| l.code.as_str())
    }

    /// All locale definitions, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleDef> {
        self.locales.iter()
    }

    /// The fallback chain starting at `code`, the locale itself included.
    ///
    /// Walks `fallback_code` links until a locale has none, a link points
    /// at an unknown code, or a cycle closes. Each locale appears at most
    /// once. Unknown starting codes yield an empty chain.
    pub fn fallback_chain(&self, code: &str) -> Vec<&LocaleDef> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = self.get(code);

        while let Some(locale) = current {
            if !visited.insert(locale.code.as_str()) {
                break;
            }
            chain.push(locale);
            current = locale
                .fallback_code
                .as_deref()
                .and_then(|next| self.get(next));
        }

        chain
    }

    /// Looks up `code`, falling back to the space default when unknown.
    pub fn resolve(&self, code: &str) -> Option<&LocaleDef> {
        self.get(code).or_else(|| self.default_locale())
    }
}
