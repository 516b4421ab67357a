//! Configure object-relational mappings over an existing, already-deployed
//! relational schema.
//!
//! Grafty takes a reflected physical schema (via a [`Reflector`]) and a
//! declarative [`Config`] naming classes, table bindings, and relationship
//! semantics, and builds a disambiguated graph of [`MappedClass`]es with
//! correctly bound bidirectional relationship attributes. It exists for
//! the join shapes introspection cannot resolve alone: several foreign
//! keys between one table pair, and self-referential many-to-many
//! relationships through an association table.
//!
//! ```
//! use grafty::db::{ForeignKey, Table, Type};
//! use grafty::{Orm, RelationSpec, StaticReflector, TableSpec};
//!
//! let reflector = StaticReflector::new()
//!     .table(
//!         Table::new("author")
//!             .column("id", Type::Integer(8))
//!             .column("name", Type::Text)
//!             .primary_key(["id"]),
//!     )
//!     .table(
//!         Table::new("book")
//!             .column("id", Type::Integer(8))
//!             .column("author_id", Type::Integer(8))
//!             .primary_key(["id"])
//!             .foreign_key(ForeignKey::new("author_id", "author", "id")),
//!     );
//!
//! let orm = Orm::builder()
//!     .table(TableSpec::new("author", "author"))
//!     .table(TableSpec::new("book", "book").relation(
//!         RelationSpec::many_to_one("author", "author").back_reference("books"),
//!     ))
//!     .build(&reflector)
//!     .unwrap();
//!
//! let author = orm.get("author").unwrap();
//! assert!(author.relationship("books").is_some());
//! ```

pub mod orm;
pub use orm::Orm;

pub use grafty_core::reflect::{self, Reflector, StaticReflector};
pub use grafty_core::registry::Registry;
pub use grafty_core::schema;
pub use grafty_core::schema::config::{Config, RelationKind, RelationSpec, TableSpec};
pub use grafty_core::schema::db;
pub use grafty_core::schema::mapped::{
    Attribute, ColumnAttribute, MappedClass, RelationshipAttribute,
};
pub use grafty_core::schema::JoinPath;
pub use grafty_core::{Error, Result};
