//! The process-wide store of built classes.

use crate::reflect::Reflector;
use crate::schema::{Builder, Config, MappedClass};
use crate::Result;

use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// Lookup table from logical name to [`MappedClass`].
///
/// The registry is the build pipeline's output and the forward-reference
/// mechanism rolled into one store. It is lifecycle-scoped: construct one
/// per build session (the facade does this) rather than sharing an
/// implicit global.
///
/// Concurrency is coarse by design: builds are single-threaded batch
/// operations, so one `RwLock` over the whole map is enough. A completed
/// build is published under a single write acquisition; readers see
/// either the previous state or the full new one, never a partially wired
/// graph.
#[derive(Debug, Default)]
pub struct Registry {
    classes: RwLock<IndexMap<String, Arc<MappedClass>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds `config` against `reflector` and commits the result.
    ///
    /// If any step fails the registry is left untouched for every logical
    /// name in the configuration.
    pub fn build(&self, config: &Config, reflector: &dyn Reflector) -> Result<()> {
        let classes = Builder::new().build(config, reflector)?;
        self.commit(classes);
        Ok(())
    }

    /// Publishes a completed build.
    ///
    /// An entry for an already-registered logical name replaces the prior
    /// class; two builds are never merged.
    pub fn commit(&self, classes: IndexMap<String, MappedClass>) {
        let mut store = self.classes.write().expect("registry lock poisoned");
        for (logical_name, class) in classes {
            store.insert(logical_name, Arc::new(class));
        }
    }

    pub fn get(&self, logical_name: &str) -> Option<Arc<MappedClass>> {
        self.classes
            .read()
            .expect("registry lock poisoned")
            .get(logical_name)
            .cloned()
    }

    /// Every registered logical name, in registration order.
    pub fn logical_names(&self) -> Vec<String> {
        self.classes
            .read()
            .expect("registry lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.classes.read().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every registered class.
    pub fn reset(&self) {
        self.classes
            .write()
            .expect("registry lock poisoned")
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::StaticReflector;
    use crate::schema::config::{RelationSpec, TableSpec};
    use crate::schema::db::{ForeignKey, Table, Type};
    use pretty_assertions::assert_eq;

    fn author_book_reflector() -> StaticReflector {
        StaticReflector::new()
            .table(
                Table::new("author")
                    .column("id", Type::Integer(8))
                    .column("name", Type::Text)
                    .primary_key(["id"]),
            )
            .table(
                Table::new("book")
                    .column("id", Type::Integer(8))
                    .column("author_id", Type::Integer(8))
                    .primary_key(["id"])
                    .foreign_key(ForeignKey::new("author_id", "author", "id")),
            )
    }

    #[test]
    fn rebuild_replaces_entries() {
        let reflector = author_book_reflector();
        let registry = Registry::new();

        let config = Config::from_specs([
            TableSpec::new("author", "author"),
            TableSpec::new("book", "book")
                .relation(RelationSpec::many_to_one("author", "author")),
        ])
        .unwrap();
        registry.build(&config, &reflector).unwrap();
        assert!(registry.get("book").unwrap().relationship("author").is_some());

        // Rebuild `book` without the relationship; the entry is replaced,
        // not merged with the previous build.
        let config = Config::from_specs([TableSpec::new("book", "book")]).unwrap();
        registry.build(&config, &reflector).unwrap();

        let book = registry.get("book").unwrap();
        assert!(book.relationship("author").is_none());

        // Classes from the first build that the second did not name are
        // still registered.
        assert!(registry.get("author").is_some());
    }

    #[test]
    fn failed_build_leaves_registry_unchanged() {
        let reflector = author_book_reflector();
        let registry = Registry::new();

        let config = Config::from_specs([TableSpec::new("author", "author")]).unwrap();
        registry.build(&config, &reflector).unwrap();

        let broken = Config::from_specs([
            TableSpec::new("author", "author"),
            TableSpec::new("book", "missing_table"),
        ])
        .unwrap();
        let err = registry.build(&broken, &reflector).unwrap_err();

        assert!(err.is_schema_not_found());
        assert_eq!(registry.logical_names(), ["author"]);
    }

    #[test]
    fn reset_clears_all_entries() {
        let reflector = author_book_reflector();
        let registry = Registry::new();

        let config = Config::from_specs([TableSpec::new("author", "author")]).unwrap();
        registry.build(&config, &reflector).unwrap();
        assert!(!registry.is_empty());

        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.get("author").is_none());
    }
}
