//! The build output: classes with column and relationship attributes.

mod attribute;
pub use attribute::{Attribute, ColumnAttribute, RelationshipAttribute};

mod class;
pub use class::MappedClass;
