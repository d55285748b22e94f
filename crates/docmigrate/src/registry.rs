use docmigrate_core::Model;

use indexmap::IndexMap;

/// Models known to the driver, by name.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    models: IndexMap<String, Model>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registers `model` under its name, replacing any earlier model with the
    /// same name.
    pub fn register(&mut self, model: Model) -> Option<Model> {
        self.models.insert(model.name.clone(), model)
    }

    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registered models, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }
}
