//! Relationship resolution: from declared [`RelationSpec`]s to fully
//! qualified join paths.
//!
//! Resolution is deterministic and order-independent: every candidate
//! foreign key is inspected, and a tie is always surfaced as an error,
//! never broken by which key reflection happened to report first.

mod join;
pub use join::{AssociationJoin, DirectJoin, JoinPath};

use super::config::{Config, RelationKind, RelationSpec, TableSpec};
use super::db;
use crate::error::{MalformedAssociationTableKind, UnresolvableSelfReferenceKind};
use crate::reflect::TableCache;
use crate::{Error, Result};

/// The disambiguated output of resolution: a [`RelationSpec`] with its
/// join path fully populated. Nothing is left to be guessed at mapping
/// time.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRelation {
    /// Logical name of the spec declaring the relationship
    pub source: String,

    /// Attribute name on the source class
    pub attribute: String,

    pub kind: RelationKind,

    /// Logical name of the related spec
    pub target: String,

    pub join: JoinPath,

    pub back_reference: Option<String>,
}

pub struct Resolver<'a, 'r> {
    config: &'a Config,
    tables: &'a mut TableCache<'r>,
}

impl<'a, 'r> Resolver<'a, 'r> {
    pub fn new(config: &'a Config, tables: &'a mut TableCache<'r>) -> Self {
        Self { config, tables }
    }

    pub fn resolve(&mut self, spec: &TableSpec, rel: &RelationSpec) -> Result<ResolvedRelation> {
        let join = match rel.kind {
            RelationKind::ManyToOne | RelationKind::OneToMany => self.resolve_direct(spec, rel)?,
            RelationKind::ManyToMany => self.resolve_association(spec, rel)?,
            RelationKind::SelfReferentialManyToMany => {
                self.resolve_self_referential(spec, rel)?
            }
        };

        Ok(ResolvedRelation {
            source: spec.logical_name.clone(),
            attribute: rel.attribute.clone(),
            kind: rel.kind,
            target: rel.target.clone(),
            join,
            back_reference: rel.back_reference.clone(),
        })
    }

    fn target_spec(&self, rel: &RelationSpec) -> &'a TableSpec {
        self.config
            .spec(&rel.target)
            .expect("configuration was validated")
    }

    /// many_to_one / one_to_many. The foreign key always lives on the many
    /// side; which declared table that is depends on the kind.
    fn resolve_direct(&mut self, spec: &TableSpec, rel: &RelationSpec) -> Result<JoinPath> {
        let target = self.target_spec(rel);

        // local_key names a column on the declaring table, remote_key a
        // column on the target table. Normalize them to the foreign-key
        // side and the referenced side.
        let (foreign_name, primary_name, fk_hint, ref_hint) = match rel.kind {
            RelationKind::ManyToOne => (
                &spec.table,
                &target.table,
                rel.local_key.as_deref(),
                rel.remote_key.as_deref(),
            ),
            RelationKind::OneToMany => (
                &target.table,
                &spec.table,
                rel.remote_key.as_deref(),
                rel.local_key.as_deref(),
            ),
            _ => unreachable!("resolve_direct called for a many-to-many kind"),
        };

        let foreign = self.tables.table(foreign_name)?;
        let primary = self.tables.table(primary_name)?;

        if let Some(column) = fk_hint {
            if !foreign.has_column(column) {
                return Err(Error::unknown_column(
                    &*spec.logical_name,
                    &*rel.attribute,
                    column,
                    &*foreign.name,
                ));
            }
        }
        if let Some(column) = ref_hint {
            if !primary.has_column(column) {
                return Err(Error::unknown_column(
                    &*spec.logical_name,
                    &*rel.attribute,
                    column,
                    &*primary.name,
                ));
            }
        }

        let candidates: Vec<&db::ForeignKey> = foreign
            .foreign_keys_to(&primary.name)
            .filter(|fk| fk_hint.map_or(true, |column| fk.uses_column(column)))
            .filter(|fk| ref_hint.map_or(true, |column| fk.references_column(column)))
            .collect();

        match candidates[..] {
            [fk] => Ok(JoinPath::Direct(DirectJoin {
                foreign_table: foreign.name.clone(),
                foreign_columns: fk.columns.clone(),
                primary_table: primary.name.clone(),
                primary_columns: fk.target_columns.clone(),
            })),
            [] => Err(Error::no_foreign_key(
                &*spec.logical_name,
                &*rel.attribute,
                &*foreign.name,
                &*primary.name,
            )),
            _ => Err(Error::ambiguous_relationship(
                &*spec.logical_name,
                &*rel.attribute,
                candidates.iter().map(|fk| fk.describe()).collect(),
            )),
        }
    }

    /// many_to_many through an association table whose two foreign keys
    /// reference two different tables; sides are assigned by target match.
    fn resolve_association(&mut self, spec: &TableSpec, rel: &RelationSpec) -> Result<JoinPath> {
        let target = self.target_spec(rel);
        let assoc_name = rel
            .association_table
            .as_deref()
            .expect("configuration was validated");

        let assoc = self.tables.table(assoc_name)?;
        let source_table = self.tables.table(&spec.table)?;
        let target_table = self.tables.table(&target.table)?;

        if assoc.foreign_keys.len() != 2 {
            return Err(Error::malformed_association_table(
                &*assoc.name,
                MalformedAssociationTableKind::ForeignKeyCount {
                    found: assoc.foreign_keys.len(),
                },
            ));
        }

        // Both ends on one table is the self-referential shape; target
        // match cannot assign sides, so the explicit kind (with hints) is
        // required instead.
        if source_table.name == target_table.name {
            return Err(Error::unresolvable_self_reference(
                &*spec.logical_name,
                &*rel.attribute,
                UnresolvableSelfReferenceKind::DeclaredManyToMany {
                    table: (&*assoc.name).into(),
                },
            ));
        }

        let source_fk = self.association_side(&assoc, &source_table.name)?;
        let target_fk = self.association_side(&assoc, &target_table.name)?;

        self.check_side_hint(spec, rel, rel.local_key.as_deref(), &assoc, source_fk)?;
        self.check_side_hint(spec, rel, rel.remote_key.as_deref(), &assoc, target_fk)?;

        Ok(JoinPath::Association(AssociationJoin {
            table: assoc.name.clone(),
            source_columns: source_fk.columns.clone(),
            source_targets: source_fk.target_columns.clone(),
            target_columns: target_fk.columns.clone(),
            target_targets: target_fk.target_columns.clone(),
        }))
    }

    /// self_referential_many_to_many: both foreign keys reference the same
    /// table, so the subject/object roles are taken from the mandatory
    /// local_key/remote_key hints. Introspection alone cannot decide this
    /// case.
    fn resolve_self_referential(
        &mut self,
        spec: &TableSpec,
        rel: &RelationSpec,
    ) -> Result<JoinPath> {
        let target = self.target_spec(rel);

        if spec.table != target.table {
            return Err(Error::unresolvable_self_reference(
                &*spec.logical_name,
                &*rel.attribute,
                UnresolvableSelfReferenceKind::TargetNotSelf {
                    source_table: (&*spec.table).into(),
                    target_table: (&*target.table).into(),
                },
            ));
        }

        let assoc_name = rel
            .association_table
            .as_deref()
            .expect("configuration was validated");
        let assoc = self.tables.table(assoc_name)?;

        if assoc.foreign_keys.len() != 2 {
            return Err(Error::malformed_association_table(
                &*assoc.name,
                MalformedAssociationTableKind::ForeignKeyCount {
                    found: assoc.foreign_keys.len(),
                },
            ));
        }

        let referencing = assoc.foreign_keys_to(&target.table).count();
        if referencing != 2 {
            return Err(Error::malformed_association_table(
                &*assoc.name,
                MalformedAssociationTableKind::TargetMismatch {
                    expected: (&*target.table).into(),
                    required: 2,
                    matched: referencing,
                },
            ));
        }

        let (Some(local), Some(remote)) = (rel.local_key.as_deref(), rel.remote_key.as_deref())
        else {
            return Err(Error::unresolvable_self_reference(
                &*spec.logical_name,
                &*rel.attribute,
                UnresolvableSelfReferenceKind::MissingHints,
            ));
        };

        if local == remote {
            return Err(Error::unresolvable_self_reference(
                &*spec.logical_name,
                &*rel.attribute,
                UnresolvableSelfReferenceKind::CollidingHints {
                    column: local.into(),
                },
            ));
        }

        let subject = self.hinted_side(spec, rel, &assoc, local)?;
        let object = self.hinted_side(spec, rel, &assoc, remote)?;

        if std::ptr::eq(subject, object) {
            return Err(Error::unresolvable_self_reference(
                &*spec.logical_name,
                &*rel.attribute,
                UnresolvableSelfReferenceKind::CollidingHints {
                    column: local.into(),
                },
            ));
        }

        Ok(JoinPath::Association(AssociationJoin {
            table: assoc.name.clone(),
            source_columns: subject.columns.clone(),
            source_targets: subject.target_columns.clone(),
            target_columns: object.columns.clone(),
            target_targets: object.target_columns.clone(),
        }))
    }

    /// The association table's single foreign key referencing `endpoint`.
    fn association_side<'t>(
        &self,
        assoc: &'t db::Table,
        endpoint: &'t str,
    ) -> Result<&'t db::ForeignKey> {
        let matches: Vec<&db::ForeignKey> = assoc.foreign_keys_to(endpoint).collect();

        match matches[..] {
            [fk] => Ok(fk),
            _ => Err(Error::malformed_association_table(
                &*assoc.name,
                MalformedAssociationTableKind::TargetMismatch {
                    expected: endpoint.into(),
                    required: 1,
                    matched: matches.len(),
                },
            )),
        }
    }

    /// Verifies an optional key hint against the foreign key resolved for
    /// one side of a plain many-to-many.
    fn check_side_hint(
        &self,
        spec: &TableSpec,
        rel: &RelationSpec,
        hint: Option<&str>,
        assoc: &db::Table,
        fk: &db::ForeignKey,
    ) -> Result<()> {
        let Some(column) = hint else {
            return Ok(());
        };

        if !assoc.has_column(column) {
            return Err(Error::unknown_column(
                &*spec.logical_name,
                &*rel.attribute,
                column,
                &*assoc.name,
            ));
        }

        if !fk.uses_column(column) {
            return Err(Error::key_hint_mismatch(
                &*spec.logical_name,
                &*rel.attribute,
                column,
                &*assoc.name,
            ));
        }

        Ok(())
    }

    /// The foreign key a self-referential hint selects. The hint must
    /// match exactly one of the association table's foreign keys.
    fn hinted_side<'t>(
        &self,
        spec: &TableSpec,
        rel: &RelationSpec,
        assoc: &'t db::Table,
        hint: &str,
    ) -> Result<&'t db::ForeignKey> {
        let matches: Vec<&db::ForeignKey> = assoc
            .foreign_keys
            .iter()
            .filter(|fk| fk.uses_column(hint))
            .collect();

        match matches[..] {
            [fk] => Ok(fk),
            _ => Err(Error::unresolvable_self_reference(
                &*spec.logical_name,
                &*rel.attribute,
                UnresolvableSelfReferenceKind::UnmatchedHint {
                    column: hint.into(),
                    table: (&*assoc.name).into(),
                },
            )),
        }
    }
}
