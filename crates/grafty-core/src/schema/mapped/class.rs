use super::{Attribute, ColumnAttribute, RelationshipAttribute};
use crate::schema::config::TableSpec;
use crate::schema::db;
use crate::{Error, Result};

use indexmap::IndexMap;
use std::fmt;

/// A class produced by the mapping builder.
///
/// Attribute names are unique: reflected columns, relationships, and
/// back-references all share one namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedClass {
    /// Configuration-level identifier; the registry key
    pub logical_name: String,

    /// Name of the generated class
    pub class_name: String,

    /// The physical table backing this class
    pub table: String,

    /// Attributes keyed by name, in insertion order: columns first, then
    /// relationships as they are wired
    pub attributes: IndexMap<String, Attribute>,
}

impl MappedClass {
    /// Creates the first-pass shell: column attributes only. Relationship
    /// attributes are attached by the builder's second pass, once every
    /// shell exists.
    pub(crate) fn shell(spec: &TableSpec, table: &db::Table) -> Self {
        let mut attributes = IndexMap::new();

        for column in &table.columns {
            attributes.insert(
                column.name.clone(),
                Attribute::Column(ColumnAttribute {
                    column: column.name.clone(),
                    ty: column.ty.clone(),
                    nullable: column.nullable,
                    primary_key: column.primary_key,
                }),
            );
        }

        Self {
            logical_name: spec.logical_name.clone(),
            class_name: spec.class(),
            table: table.name.clone(),
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn relationship(&self, name: &str) -> Option<&RelationshipAttribute> {
        self.attributes.get(name).and_then(Attribute::as_relationship)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnAttribute)> {
        self.attributes
            .iter()
            .filter_map(|(name, attr)| Some((name.as_str(), attr.as_column()?)))
    }

    pub fn relationships(&self) -> impl Iterator<Item = (&str, &RelationshipAttribute)> {
        self.attributes
            .iter()
            .filter_map(|(name, attr)| Some((name.as_str(), attr.as_relationship()?)))
    }

    /// Attaches a relationship attribute, refusing name collisions with
    /// columns or previously attached relationships.
    pub(crate) fn attach(&mut self, name: &str, attribute: RelationshipAttribute) -> Result<()> {
        if self.attributes.contains_key(name) {
            return Err(Error::attribute_collision(&*self.logical_name, name));
        }

        self.attributes
            .insert(name.to_string(), Attribute::Relationship(attribute));
        Ok(())
    }
}

impl fmt::Display for MappedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} ({}):", self.class_name, self.table)?;
        for (i, name) in self.attribute_names().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, " {name}")?;
        }
        f.write_str(">")
    }
}
