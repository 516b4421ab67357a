use crate::{Config, MappedClass, Reflector, Registry, Result, TableSpec};

use std::sync::Arc;

/// Handle to a built set of mappings.
///
/// An `Orm` owns a lifecycle-scoped [`Registry`]: builds are composable
/// and testable in isolation, and nothing is process-global. Cloning
/// produces another handle to the same registry.
#[derive(Debug, Clone)]
pub struct Orm {
    registry: Arc<Registry>,
}

impl Orm {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a validated configuration into a fresh registry.
    pub fn from_config(config: &Config, reflector: &dyn Reflector) -> Result<Orm> {
        let registry = Registry::new();
        registry.build(config, reflector)?;
        Ok(Orm {
            registry: Arc::new(registry),
        })
    }

    pub fn get(&self, logical_name: &str) -> Option<Arc<MappedClass>> {
        self.registry.get(logical_name)
    }

    /// Like [`get`](Orm::get), but failing with a diagnosable error.
    pub fn class(&self, logical_name: &str) -> Result<Arc<MappedClass>> {
        self.get(logical_name)
            .ok_or_else(|| grafty_core::err!("no class registered under `{logical_name}`"))
    }

    /// Every registered logical name, in registration order.
    pub fn logical_names(&self) -> Vec<String> {
        self.registry.logical_names()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs another build pass against this handle's registry.
    ///
    /// Entries for the configuration's logical names are replaced; a
    /// failed pass leaves the registry unchanged.
    pub fn rebuild(&self, config: &Config, reflector: &dyn Reflector) -> Result<()> {
        self.registry.build(config, reflector)
    }
}

/// Collects table specifications, then validates and builds in one step.
#[derive(Debug, Default)]
pub struct Builder {
    specs: Vec<TableSpec>,
}

impl Builder {
    /// Appends a table specification.
    pub fn table(mut self, spec: TableSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn build(self, reflector: &dyn Reflector) -> Result<Orm> {
        let config = Config::from_specs(self.specs)?;
        Orm::from_config(&config, reflector)
    }
}
