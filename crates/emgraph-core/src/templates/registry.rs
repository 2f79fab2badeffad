//! Template registry keyed by class kind.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::ClassKind;

use super::classes::schema_for;
use super::schema::SchemaTemplate;
use super::traits::EntityTemplate;

/// Registry of entity templates.
///
/// Registers a schema-driven template for every known class on creation.
/// Custom templates can replace a built-in one through [`register`].
///
/// [`register`]: TemplateRegistry::register
pub struct TemplateRegistry {
    templates: HashMap<ClassKind, Arc<dyn EntityTemplate>>,
}

impl TemplateRegistry {
    /// Create a new registry with all built-in templates.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for kind in ClassKind::ALL {
            registry.register(Arc::new(SchemaTemplate::new(schema_for(kind))));
        }
        registry
    }

    /// A registry with no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register a template for its class, replacing any previous one.
    pub fn register(&mut self, template: Arc<dyn EntityTemplate>) {
        self.templates.insert(template.class_kind(), template);
    }

    /// Look up a template by raw `classKind` tag.
    pub fn template_for(&self, class_kind: &str) -> Option<Arc<dyn EntityTemplate>> {
        class_kind
            .parse::<ClassKind>()
            .ok()
            .and_then(|kind| self.template_for_kind(kind))
    }

    pub fn template_for_kind(&self, kind: ClassKind) -> Option<Arc<dyn EntityTemplate>> {
        self.templates.get(&kind).cloned()
    }

    /// Check if a record with this tag can be migrated.
    pub fn can_migrate(&self, class_kind: &str) -> bool {
        self.template_for(class_kind).is_some()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Registered classes with their required fields, sorted by class.
    pub fn list_templates(&self) -> Vec<(ClassKind, Vec<&'static str>)> {
        let mut listed: Vec<_> = self
            .templates
            .iter()
            .map(|(kind, template)| (*kind, template.required_fields()))
            .collect();
        listed.sort_by_key(|(kind, _)| *kind);
        listed
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_class() {
        let registry = TemplateRegistry::new();
        assert_eq!(registry.len(), ClassKind::ALL.len());
        for kind in ClassKind::ALL {
            assert!(registry.template_for_kind(kind).is_some(), "{kind}");
        }
    }

    #[test]
    fn test_lookup_by_tag() {
        let registry = TemplateRegistry::new();
        assert!(registry.can_migrate("ElementDefinition"));
        assert!(registry.can_migrate("Option"));
        assert!(!registry.can_migrate("SpaceshipDefinition"));
        assert!(!registry.can_migrate("elementdefinition"));
    }

    #[test]
    fn test_template_reports_its_class() {
        let registry = TemplateRegistry::new();
        let template = registry.template_for("RatioScale").unwrap();
        assert_eq!(template.class_kind(), ClassKind::RatioScale);
    }

    #[test]
    fn test_list_templates_is_sorted() {
        let registry = TemplateRegistry::new();
        let listed = registry.list_templates();
        assert_eq!(listed.first().map(|(k, _)| *k), Some(ClassKind::ALL[0]));
        assert!(listed.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_empty_registry() {
        let registry = TemplateRegistry::empty();
        assert!(registry.is_empty());
        assert!(!registry.can_migrate("Parameter"));
    }
}
