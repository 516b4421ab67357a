use super::RelationSpec;
use crate::schema::Name;

/// Binds a logical name to a physical table and the class to generate for
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    /// Configuration-level identifier, unique across the configuration
    pub logical_name: String,

    /// Name of the physical table to reflect
    pub table: String,

    /// Name of the generated class. Defaults to the UpperCamelCase of the
    /// logical name.
    pub class_name: Option<String>,

    /// Declared relationship attributes, in declaration order
    pub relationships: Vec<RelationSpec>,
}

impl TableSpec {
    pub fn new(logical_name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            table: table.into(),
            class_name: None,
            relationships: vec![],
        }
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Appends a relationship declaration.
    pub fn relation(mut self, relation: RelationSpec) -> Self {
        self.relationships.push(relation);
        self
    }

    /// The class name to generate, explicit or derived.
    pub fn class(&self) -> String {
        match &self.class_name {
            Some(name) => name.clone(),
            None => Name::new(&self.logical_name).upper_camel_case(),
        }
    }
}
