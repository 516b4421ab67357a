//! Deserialization of the nested-mapping configuration document:
//! logical name -> { table, class, relationships }.

use super::{Config, RelationSpec, TableSpec};

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

#[derive(Deserialize)]
struct TableDef {
    table: String,

    #[serde(default)]
    class: Option<String>,

    #[serde(default)]
    relationships: Vec<RelationSpec>,
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = Config;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("a map of logical names to table specifications")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Config, A::Error>
            where
                A: MapAccess<'de>,
            {
                // Entries are taken in document order, duplicates included,
                // so `from_specs` sees repeated logical names and rejects
                // them.
                let mut specs = Vec::new();

                while let Some((logical_name, def)) = map.next_entry::<String, TableDef>()? {
                    let mut spec = TableSpec::new(logical_name, def.table);
                    spec.class_name = def.class;
                    spec.relationships = def.relationships;
                    specs.push(spec);
                }

                Config::from_specs(specs).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
