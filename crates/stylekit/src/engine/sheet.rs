//! The append-only rule cache.

use rustc_hash::{FxHashMap, FxHashSet};

/// Output groups, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group {
    Theme,
    Global,
    Styled,
}

/// A compiled style: its class name and the rules bound to that class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CachedClass {
    pub class_name: String,
    pub rules: String,
}

/// Generated rules plus the lookup tables that keep generation idempotent.
///
/// Nothing is ever removed: a key seen once keeps its class name and rules for
/// the lifetime of the sheet.
#[derive(Debug, Default)]
pub(crate) struct StyleSheet {
    theme: Vec<String>,
    global: Vec<String>,
    styled: Vec<String>,
    /// canonical key -> compiled class
    classes: FxHashMap<String, CachedClass>,
    /// class name -> canonical key
    owners: FxHashMap<String, String>,
    /// keys of global, keyframe and theme rules already emitted
    emitted: FxHashSet<String>,
}

impl StyleSheet {
    pub fn cached(&self, key: &str) -> Option<&CachedClass> {
        self.classes.get(key)
    }

    /// Picks a class name for `key`. On a hash collision with a different
    /// key, a numeric suffix is appended until the name is free.
    pub fn free_class_name(&self, key: &str, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 1;
        while let Some(owner) = self.owners.get(&candidate) {
            if owner == key {
                break;
            }
            tracing::debug!(class = %candidate, "class name collision");
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        candidate
    }

    /// Records a compiled class and appends its rules to the styled group.
    pub fn insert_class(&mut self, key: &str, class_name: &str, rules: String) {
        self.owners.insert(class_name.to_string(), key.to_string());
        self.classes.insert(
            key.to_string(),
            CachedClass {
                class_name: class_name.to_string(),
                rules: rules.clone(),
            },
        );
        self.push(Group::Styled, rules);
    }

    /// Appends rule text to a group.
    pub fn push(&mut self, group: Group, text: String) {
        if text.is_empty() {
            return;
        }
        match group {
            Group::Theme => self.theme.push(text),
            Group::Global => self.global.push(text),
            Group::Styled => self.styled.push(text),
        }
    }

    /// Appends rule text once per key. Returns false if the key was seen.
    pub fn push_once(&mut self, group: Group, key: String, text: String) -> bool {
        if !self.emitted.insert(key) {
            return false;
        }
        self.push(group, text);
        true
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.owners.contains_key(class_name)
    }

    /// Number of cached styled entries.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// All rules: theme, then global, then styled.
    pub fn text(&self) -> String {
        self.theme
            .iter()
            .chain(&self.global)
            .chain(&self.styled)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
