use serde_json::Value;

/// A plugin that injects content into template slots.
///
/// Returning `None` or an empty string contributes nothing to the slot.
pub trait TemplateIncludePlugin: Send + Sync {
    /// Content for `slot`, given the template's render context.
    fn include(&self, slot: &str, context: &Value) -> Option<String>;
}

/// Wrapper that implements `TemplateIncludePlugin` for a closure.
struct IncludeFn<F> {
    f: F,
}

impl<F> TemplateIncludePlugin for IncludeFn<F>
where
    F: Fn(&str, &Value) -> Option<String> + Send + Sync,
{
    fn include(&self, slot: &str, context: &Value) -> Option<String> {
        (self.f)(slot, context)
    }
}

/// Create an include plugin from a closure.
///
/// ```ignore
/// let banner = include_fn(|slot, _ctx| (slot == "head").then(|| "<meta name=\"x\">".into()));
/// ```
#[must_use]
pub fn include_fn<F>(f: F) -> impl TemplateIncludePlugin
where
    F: Fn(&str, &Value) -> Option<String> + Send + Sync,
{
    IncludeFn { f }
}
