//! # Schema Registry
//!
//! Explicit registration engine for configuration variables: one
//! [`RegistryBuilder::register`] call per variable, then a single
//! [`RegistryBuilder::freeze`] producing the immutable [`Registry`].
//!
//! The registry groups variables by category in first-seen order and
//! preserves insertion order within each category, so documentation and
//! error reporting are stable across runs. It is built exactly once per
//! schema, independent of how many documents are later loaded against it,
//! and is never mutated afterwards.

use std::collections::HashMap;

use confvar_core::DeclarationError;

use crate::descriptor::ConfigVar;

/// One category and its variables, in insertion order.
#[derive(Debug, Clone)]
struct CategoryGroup {
    name: String,
    vars: Vec<ConfigVar>,
}

/// Accumulates declarations before the one-time freeze.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    groups: Vec<CategoryGroup>,
    // name -> (group index, position within group)
    index: HashMap<String, (usize, usize)>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one declared variable.
    ///
    /// # Errors
    ///
    /// `DuplicateConfigVar` if a variable with the same name was already
    /// registered in this schema. The builder is left unchanged.
    pub fn register(&mut self, var: ConfigVar) -> Result<(), DeclarationError> {
        if self.index.contains_key(var.name()) {
            return Err(DeclarationError::DuplicateConfigVar {
                name: var.name().to_string(),
            });
        }

        let group_idx = match self
            .groups
            .iter()
            .position(|group| group.name == var.category())
        {
            Some(idx) => idx,
            None => {
                self.groups.push(CategoryGroup {
                    name: var.category().to_string(),
                    vars: Vec::new(),
                });
                self.groups.len() - 1
            }
        };

        let position = self.groups[group_idx].vars.len();
        self.index
            .insert(var.name().to_string(), (group_idx, position));
        self.groups[group_idx].vars.push(var);
        Ok(())
    }

    /// Freeze the builder into the immutable registry.
    pub fn freeze(self) -> Registry {
        Registry {
            groups: self.groups,
            index: self.index,
        }
    }
}

/// The frozen, category-grouped collection of declared variables.
///
/// Read-only after construction; safe to share across threads. The loader,
/// the test generator, and the documentation output all consume it without
/// ever re-inspecting the declarations it was built from.
#[derive(Debug, Clone)]
pub struct Registry {
    groups: Vec<CategoryGroup>,
    index: HashMap<String, (usize, usize)>,
}

impl Registry {
    /// Iterate every variable in stable (category, name) order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigVar> {
        self.groups.iter().flat_map(|group| group.vars.iter())
    }

    /// Category names, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.name.as_str()).collect()
    }

    /// The variables declared under one category, in insertion order.
    pub fn vars_in(&self, category: &str) -> &[ConfigVar] {
        self.groups
            .iter()
            .find(|group| group.name == category)
            .map(|group| group.vars.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&ConfigVar> {
        let (group_idx, position) = *self.index.get(name)?;
        self.groups
            .get(group_idx)
            .and_then(|group| group.vars.get(position))
    }

    /// Whether a variable with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Total number of declared variables.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.vars.len()).sum()
    }

    /// Whether the registry declares no variables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confvar_core::ValueKind;

    fn var(name: &str, category: &str) -> ConfigVar {
        ConfigVar::builder(name, ValueKind::Str)
            .category(category)
            .default("")
            .build()
            .unwrap()
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut builder = RegistryBuilder::new();
        builder.register(var("author", "metadata")).unwrap();
        let err = builder.register(var("author", "packaging")).unwrap_err();
        assert_eq!(
            err,
            DeclarationError::DuplicateConfigVar {
                name: "author".to_string()
            }
        );

        // The failed registration left the builder usable and unchanged.
        builder.register(var("username", "metadata")).unwrap();
        let registry = builder.freeze();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("author").unwrap().category(), "metadata");
    }

    #[test]
    fn test_category_grouping_first_seen_order() {
        let mut builder = RegistryBuilder::new();
        builder.register(var("author", "metadata")).unwrap();
        builder.register(var("platforms", "packaging")).unwrap();
        builder.register(var("username", "metadata")).unwrap();
        let registry = builder.freeze();

        assert_eq!(registry.categories(), vec!["metadata", "packaging"]);
        let names: Vec<&str> = registry.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["author", "username", "platforms"]);
    }

    #[test]
    fn test_vars_in_unknown_category_is_empty() {
        let registry = RegistryBuilder::new().freeze();
        assert!(registry.vars_in("nope").is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup() {
        let mut builder = RegistryBuilder::new();
        builder.register(var("author", "metadata")).unwrap();
        let registry = builder.freeze();

        assert!(registry.contains("author"));
        assert!(!registry.contains("license"));
        assert_eq!(registry.get("author").unwrap().name(), "author");
        assert!(registry.get("license").is_none());
    }

    #[test]
    fn test_identical_declarations_identical_ordering() {
        let build = || {
            let mut builder = RegistryBuilder::new();
            builder.register(var("author", "metadata")).unwrap();
            builder.register(var("platforms", "packaging")).unwrap();
            builder.register(var("username", "metadata")).unwrap();
            builder.freeze()
        };
        let (a, b) = (build(), build());

        assert_eq!(a.categories(), b.categories());
        let names = |r: &Registry| r.iter().map(|v| v.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
    }
}
