//! The declarative mapping configuration.
//!
//! A [`Config`] is an ordered, validated set of [`TableSpec`]s. It is
//! constructed once (programmatically or from a serde document) and never
//! mutated; everything downstream (resolver, builder) treats it as
//! read-only.

mod relation;
pub use relation::{RelationKind, RelationSpec};

mod table_spec;
pub use table_spec::TableSpec;

#[cfg(feature = "serde")]
mod de;

use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Config {
    specs: IndexMap<String, TableSpec>,
}

impl Config {
    /// Builds a validated configuration from an ordered collection of table
    /// specifications.
    ///
    /// Validation checks, each a distinct configuration error:
    /// - logical names are unique across the configuration;
    /// - every relationship target resolves to a spec in this configuration
    ///   (forward references allowed; checked after the full set is
    ///   collected);
    /// - attribute names are unique per spec, counting the back-reference
    ///   names contributed by relationships declared on other specs;
    /// - `association_table` is present exactly when the relationship kind
    ///   is a many-to-many variant.
    pub fn from_specs(specs: impl IntoIterator<Item = TableSpec>) -> Result<Self> {
        let mut map = IndexMap::new();

        for spec in specs {
            if map.contains_key(&spec.logical_name) {
                return Err(Error::duplicate_logical_name(&*spec.logical_name));
            }
            map.insert(spec.logical_name.clone(), spec);
        }

        let config = Self { specs: map };
        config.validate()?;
        Ok(config)
    }

    pub fn spec(&self, logical_name: &str) -> Option<&TableSpec> {
        self.specs.get(logical_name)
    }

    pub fn specs(&self) -> impl Iterator<Item = &TableSpec> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for spec in self.specs.values() {
            for rel in &spec.relationships {
                if !self.specs.contains_key(&rel.target) {
                    return Err(Error::dangling_target(
                        &*spec.logical_name,
                        &*rel.attribute,
                        &*rel.target,
                    ));
                }

                match (rel.kind.is_many_to_many(), rel.association_table.is_some()) {
                    (true, false) => {
                        return Err(Error::missing_association_table(
                            &*spec.logical_name,
                            &*rel.attribute,
                        ));
                    }
                    (false, true) => {
                        return Err(Error::unexpected_association_table(
                            &*spec.logical_name,
                            &*rel.attribute,
                        ));
                    }
                    _ => {}
                }
            }
        }

        // Attribute uniqueness per spec. Back-reference names land on the
        // *target* spec, so each spec's name set is the union of its own
        // relationship attributes and the back-references aimed at it.
        for (logical_name, _) in &self.specs {
            let mut seen = HashSet::new();

            for spec in self.specs.values() {
                for rel in &spec.relationships {
                    if spec.logical_name == *logical_name && !seen.insert(&rel.attribute) {
                        return Err(Error::attribute_collision(&**logical_name, &*rel.attribute));
                    }

                    if rel.target == *logical_name {
                        if let Some(back) = &rel.back_reference {
                            if !seen.insert(back) {
                                return Err(Error::attribute_collision(&**logical_name, &**back));
                            }
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
