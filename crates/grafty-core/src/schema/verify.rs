use super::mapped::{MappedClass, RelationshipAttribute};
use super::resolve::JoinPath;
use crate::reflect::TableCache;
use crate::{bail, Result};

use indexmap::IndexMap;

/// Post-build verification of the class graph.
///
/// Confirms what the builder is supposed to guarantee before anything is
/// published: relationship targets are registered, every join column
/// exists on its reflected table, and bidirectional pairs describe the
/// same join reversed. A failure here means reflection handed back
/// foreign keys naming columns the table does not have, or a builder bug.
pub(crate) struct Verify<'a, 'r> {
    classes: &'a IndexMap<String, MappedClass>,
    tables: &'a mut TableCache<'r>,
}

impl<'a, 'r> Verify<'a, 'r> {
    pub(crate) fn apply(
        classes: &'a IndexMap<String, MappedClass>,
        tables: &'a mut TableCache<'r>,
    ) -> Result<()> {
        Verify { classes, tables }.verify()
    }

    fn verify(&mut self) -> Result<()> {
        let classes = self.classes;

        for class in classes.values() {
            for (name, rel) in class.relationships() {
                self.verify_target_registered(class, name, rel)?;
            }
        }

        for class in classes.values() {
            for (name, rel) in class.relationships() {
                self.verify_join_columns(class, rel)?;
                self.verify_pair(class, name, rel)?;
            }
        }

        Ok(())
    }

    fn verify_target_registered(
        &self,
        class: &MappedClass,
        name: &str,
        rel: &RelationshipAttribute,
    ) -> Result<()> {
        if !self.classes.contains_key(&rel.target) {
            bail!(
                "relationship `{}.{}` resolved to unregistered class `{}`",
                class.logical_name,
                name,
                rel.target
            );
        }
        Ok(())
    }

    fn verify_join_columns(&mut self, class: &MappedClass, rel: &RelationshipAttribute) -> Result<()> {
        match &rel.join {
            JoinPath::Direct(join) => {
                self.verify_columns(&join.foreign_table, &join.foreign_columns)?;
                self.verify_columns(&join.primary_table, &join.primary_columns)?;
            }
            JoinPath::Association(join) => {
                self.verify_columns(&join.table, &join.source_columns)?;
                self.verify_columns(&join.table, &join.target_columns)?;

                let source_table = class.table.clone();
                let target_table = self.classes[&rel.target].table.clone();
                self.verify_columns(&source_table, &join.source_targets)?;
                self.verify_columns(&target_table, &join.target_targets)?;
            }
        }
        Ok(())
    }

    fn verify_columns(&mut self, table: &str, columns: &[String]) -> Result<()> {
        let table = self.tables.table(table)?;
        for column in columns {
            if !table.has_column(column) {
                bail!(
                    "foreign key references column `{}` which does not exist on table `{}`",
                    column,
                    table.name
                );
            }
        }
        Ok(())
    }

    fn verify_pair(
        &self,
        class: &MappedClass,
        name: &str,
        rel: &RelationshipAttribute,
    ) -> Result<()> {
        let Some(pair) = &rel.pair else {
            return Ok(());
        };

        let target = &self.classes[&rel.target];

        let Some(inverse) = target.relationship(pair) else {
            bail!(
                "back-reference `{}.{}` for `{}.{}` was not attached",
                target.logical_name,
                pair,
                class.logical_name,
                name
            );
        };

        if inverse.kind != rel.kind.invert() {
            bail!(
                "back-reference `{}.{}` does not invert the kind of `{}.{}`",
                target.logical_name,
                pair,
                class.logical_name,
                name
            );
        }

        if inverse.join != rel.join.reverse() {
            bail!(
                "back-reference `{}.{}` does not reverse the join of `{}.{}`",
                target.logical_name,
                pair,
                class.logical_name,
                name
            );
        }

        Ok(())
    }
}
