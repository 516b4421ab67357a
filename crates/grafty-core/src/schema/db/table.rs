use super::{Column, ForeignKey, Type};

/// A reflected database table.
///
/// Carries exactly what the reflection subsystem reports: columns, the
/// primary key, and the declared foreign keys.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Name of the table in the database
    pub name: String,

    /// The table's columns
    pub columns: Vec<Column>,

    /// Names of the columns composing the primary key, in key order
    pub primary_key: Vec<String>,

    /// Foreign keys declared on this table
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            primary_key: vec![],
            foreign_keys: vec![],
        }
    }

    /// Appends a column. Fluent, for building fixtures and reflector
    /// implementations.
    pub fn column(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.columns.push(Column::new(name, ty));
        self
    }

    /// Appends a nullable column.
    pub fn nullable_column(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.columns.push(Column::new(name, ty).nullable());
        self
    }

    /// Sets the primary key and flags the named columns.
    pub fn primary_key<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        for column in &mut self.columns {
            if self.primary_key.iter().any(|name| *name == column.name) {
                column.primary_key = true;
            }
        }
        self
    }

    /// Appends a foreign key.
    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    pub fn column_named(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_named(name).is_some()
    }

    /// Iterates over the foreign keys referencing the given table.
    pub fn foreign_keys_to<'a>(
        &'a self,
        target: &'a str,
    ) -> impl Iterator<Item = &'a ForeignKey> + 'a {
        self.foreign_keys
            .iter()
            .filter(move |fk| fk.target_table == target)
    }
}
