//! The boundary to the schema reflection subsystem.
//!
//! Reflection itself (connecting to a database and introspecting it) lives
//! outside this crate. Implementations hand back a full [`db::Table`] per
//! call or fail atomically; there are no partial results.

use crate::schema::db;
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Source of reflected table metadata.
pub trait Reflector: Debug {
    /// Returns the reflected metadata for `table`.
    ///
    /// Fails with [`Error::schema_not_found`] when the table does not exist
    /// in the physical schema.
    fn reflect(&self, table: &str) -> Result<db::Table>;
}

/// Per-build-pass memoization of reflected tables.
///
/// Each physical table is fetched at most once per build, no matter how
/// many specs or relationships touch it.
pub struct TableCache<'a> {
    reflector: &'a dyn Reflector,
    tables: HashMap<String, Arc<db::Table>>,
}

impl<'a> TableCache<'a> {
    pub fn new(reflector: &'a dyn Reflector) -> Self {
        Self {
            reflector,
            tables: HashMap::new(),
        }
    }

    pub fn table(&mut self, name: &str) -> Result<Arc<db::Table>> {
        if let Some(table) = self.tables.get(name) {
            return Ok(table.clone());
        }

        let table = Arc::new(self.reflector.reflect(name)?);
        self.tables.insert(name.to_string(), table.clone());
        Ok(table)
    }
}

/// A [`Reflector`] over a fixed, in-memory set of tables.
///
/// Backs tests and fixtures, and serves as the bridge for callers that
/// already hold reflected metadata from elsewhere.
#[derive(Debug, Default)]
pub struct StaticReflector {
    tables: IndexMap<String, db::Table>,
}

impl StaticReflector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table. Fluent; a later table with the same name replaces the
    /// earlier one.
    pub fn table(mut self, table: db::Table) -> Self {
        self.tables.insert(table.name.clone(), table);
        self
    }
}

impl Reflector for StaticReflector {
    fn reflect(&self, table: &str) -> Result<db::Table> {
        match self.tables.get(table) {
            Some(table) => Ok(table.clone()),
            None => Err(Error::schema_not_found(table)),
        }
    }
}
