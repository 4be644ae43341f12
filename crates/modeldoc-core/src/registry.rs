use indexmap::IndexMap;
use tracing::warn;

use crate::schema::ModelDef;

/// Models grouped by namespace, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRegistry {
    apps: IndexMap<String, Vec<ModelDef>>,
}

/// The models of one namespace selected for documentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppModels<'a> {
    pub app: &'a str,
    pub models: &'a [ModelDef],
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under `app`. A model without its own `app` adopts it.
    pub fn register(&mut self, app: impl Into<String>, mut model: ModelDef) {
        let app = app.into();
        if model.app.is_none() {
            model.app = Some(app.clone());
        }
        self.apps.entry(app).or_default().push(model);
    }

    pub fn apps(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(String::as_str)
    }

    pub fn models(&self, app: &str) -> Option<&[ModelDef]> {
        self.apps.get(app).map(Vec::as_slice)
    }

    pub fn model_count(&self) -> usize {
        self.apps.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Select the namespaces to document.
    ///
    /// An empty filter selects every namespace; otherwise only namespaces named
    /// in the filter are returned. Order always follows the registry.
    pub fn enumerate<S: AsRef<str>>(&self, filter: &[S]) -> Vec<AppModels<'_>> {
        for wanted in filter {
            if !self.apps.contains_key(wanted.as_ref()) {
                warn!(app = wanted.as_ref(), "no models registered for app");
            }
        }

        self.apps
            .iter()
            .filter(|(app, _)| filter.is_empty() || filter.iter().any(|f| f.as_ref() == app.as_str()))
            .map(|(app, models)| AppModels {
                app: app.as_str(),
                models: models.as_slice(),
            })
            .collect()
    }
}

impl FromIterator<(String, ModelDef)> for ModelRegistry {
    fn from_iter<I: IntoIterator<Item = (String, ModelDef)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (app, model) in iter {
            registry.register(app, model);
        }
        registry
    }
}
