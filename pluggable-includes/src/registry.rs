use crate::{Environment, SafeMarkup, TemplateIncludePlugin};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Include plugins grouped by namespace, ordered by name within each.
#[derive(Default)]
pub struct IncludesRegistry {
    namespaces: HashMap<String, BTreeMap<String, Arc<dyn TemplateIncludePlugin>>>,
}

impl IncludesRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `plugin` as `name` in `namespace`, replacing any plugin
    /// already registered under that name.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        plugin: impl TemplateIncludePlugin + 'static,
    ) -> &mut Self {
        self.register_shared(namespace, name, Arc::new(plugin))
    }

    /// Register an already-shared plugin.
    pub fn register_shared(
        &mut self,
        namespace: impl Into<String>,
        name: impl Into<String>,
        plugin: Arc<dyn TemplateIncludePlugin>,
    ) -> &mut Self {
        let namespace = namespace.into();
        let name = name.into();
        let plugins = self.namespaces.entry(namespace.clone()).or_default();
        if plugins.insert(name.clone(), plugin).is_some() {
            tracing::warn!(
                namespace = %namespace,
                plugin = %name,
                "pluggable.includes.replaced"
            );
        }
        self
    }

    /// Plugins available in `namespace`, ordered by name.
    pub fn available_plugins(
        &self,
        namespace: &str,
    ) -> impl Iterator<Item = (&str, &dyn TemplateIncludePlugin)> {
        self.namespaces
            .get(namespace)
            .into_iter()
            .flat_map(|plugins| plugins.iter())
            .map(|(name, plugin)| (name.as_str(), &**plugin))
    }

    /// Number of plugins in `namespace`.
    pub fn len(&self, namespace: &str) -> usize {
        self.namespaces.get(namespace).map_or(0, BTreeMap::len)
    }

    /// Concatenate every non-empty fragment the plugins in `namespace`
    /// contribute to `slot`.
    pub fn render(&self, namespace: &str, slot: &str, context: &Value) -> SafeMarkup {
        let mut markup = SafeMarkup::default();
        let mut contributed = 0usize;
        for (_name, plugin) in self.available_plugins(namespace) {
            if let Some(fragment) = plugin.include(slot, context).filter(|f| !f.is_empty()) {
                markup.push(&fragment);
                contributed += 1;
            }
        }
        tracing::debug!(
            namespace,
            slot,
            plugins = self.len(namespace),
            contributed,
            "pluggable.includes.render"
        );
        markup
    }

    /// Content to inject into `slot` for a template rendered in
    /// `environment` (`"lms"` or `"studio"`). Other environments have no
    /// plugins and render empty markup.
    pub fn plugin_includes(&self, context: &Value, environment: &str, slot: &str) -> SafeMarkup {
        match environment.parse::<Environment>() {
            Ok(env) => self.render(env.namespace(), slot, context),
            Err(_) => SafeMarkup::default(),
        }
    }
}

impl std::fmt::Debug for IncludesRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut namespaces: Vec<(&str, Vec<&str>)> = self
            .namespaces
            .iter()
            .map(|(ns, plugins)| (ns.as_str(), plugins.keys().map(String::as_str).collect()))
            .collect();
        namespaces.sort_unstable();
        f.debug_struct("IncludesRegistry")
            .field("namespaces", &namespaces)
            .finish()
    }
}
