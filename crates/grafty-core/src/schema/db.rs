//! Database-level schema, as reported by the reflection subsystem.
//!
//! Everything in this module is read-only input to the resolver and
//! builder: tables are fetched through [`Reflector::reflect`] and never
//! mutated by this crate.
//!
//! [`Reflector::reflect`]: crate::reflect::Reflector::reflect

mod column;
pub use column::Column;

mod fk;
pub use fk::ForeignKey;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;
