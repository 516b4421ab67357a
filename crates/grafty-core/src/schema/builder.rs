use super::config::Config;
use super::mapped::{MappedClass, RelationshipAttribute};
use super::resolve::{ResolvedRelation, Resolver};
use super::Verify;
use crate::reflect::{Reflector, TableCache};
use crate::{err, Result};

use indexmap::IndexMap;

/// Builds mapped classes from a validated configuration.
///
/// Construction is two-pass: first a shell (column attributes only) is
/// created for every spec, then relationships are resolved and attached.
/// The split exists because a relationship may reference a spec that
/// appears later in configuration order; by the time any wiring happens,
/// every shell already exists.
#[derive(Debug)]
pub struct Builder {}

/// Used to track state during the build process
struct BuildClasses<'a, 'r> {
    config: &'a Config,

    /// Reflected tables, fetched once per physical table
    tables: TableCache<'r>,

    /// Classes as they are built, keyed by logical name
    classes: IndexMap<String, MappedClass>,
}

impl Builder {
    pub fn new() -> Self {
        Self {}
    }

    /// Runs a full build pass.
    ///
    /// Fails atomically: any error aborts the pass for the whole
    /// configuration and no classes are returned.
    pub fn build(
        &self,
        config: &Config,
        reflector: &dyn Reflector,
    ) -> Result<IndexMap<String, MappedClass>> {
        let mut build = BuildClasses {
            config,
            tables: TableCache::new(reflector),
            classes: IndexMap::new(),
        };

        build.build_shells()?;
        build.wire_relations()?;

        Verify::apply(&build.classes, &mut build.tables)?;

        Ok(build.classes)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildClasses<'_, '_> {
    /// Pass 1: one shell per spec, column attributes only.
    fn build_shells(&mut self) -> Result<()> {
        let config = self.config;

        for spec in config.specs() {
            let table = self.tables.table(&spec.table).map_err(|e| {
                e.context(err!("building mapped class `{}`", spec.logical_name))
            })?;

            self.classes
                .insert(spec.logical_name.clone(), MappedClass::shell(spec, &table));
        }

        Ok(())
    }

    /// Pass 2: resolve every declared relationship, then attach the
    /// attributes (and their inverses) to the shells.
    fn wire_relations(&mut self) -> Result<()> {
        let config = self.config;

        let mut resolved = vec![];
        let mut resolver = Resolver::new(config, &mut self.tables);

        for spec in config.specs() {
            for rel in &spec.relationships {
                resolved.push(resolver.resolve(spec, rel).map_err(|e| {
                    e.context(err!(
                        "resolving relationship `{}.{}`",
                        spec.logical_name,
                        rel.attribute
                    ))
                })?);
            }
        }

        for relation in resolved {
            self.attach(relation)?;
        }

        Ok(())
    }

    fn attach(&mut self, relation: ResolvedRelation) -> Result<()> {
        let forward = RelationshipAttribute {
            kind: relation.kind,
            target: relation.target.clone(),
            join: relation.join.clone(),
            pair: relation.back_reference.clone(),
        };
        self.class_mut(&relation.source)
            .attach(&relation.attribute, forward)?;

        // The bidirectional wiring step: the resolver determined the
        // physical join once; project it onto the target class with the
        // kind inverted and the join seen from the other endpoint.
        if let Some(back) = &relation.back_reference {
            let inverse = RelationshipAttribute {
                kind: relation.kind.invert(),
                target: relation.source.clone(),
                join: relation.join.reverse(),
                pair: Some(relation.attribute.clone()),
            };
            self.class_mut(&relation.target).attach(back, inverse)?;
        }

        Ok(())
    }

    fn class_mut(&mut self, logical_name: &str) -> &mut MappedClass {
        self.classes
            .get_mut(logical_name)
            .expect("a shell was built for every spec")
    }
}
