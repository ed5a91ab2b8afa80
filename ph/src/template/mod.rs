//! Prompt templates with `{{variable}}` placeholders

mod builtin;

pub use builtin::builtin_templates;

use std::collections::HashMap;
use tracing::debug;

use promptstore::{Category, Prompt};

/// A parameterized prompt with declared `{{variable}}` slots
#[derive(Debug, Clone)]
pub struct Template {
    /// Stable identifier, e.g. "unit-test-1"
    pub id: &'static str,
    /// Display name; becomes the title of generated prompts
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// Body text with `{{variable}}` placeholders
    pub body: &'static str,
    /// Placeholders this template declares; only these get substituted
    pub variables: &'static [&'static str],
    /// Languages this template applies to; empty means all
    pub languages: &'static [&'static str],
}

impl Template {
    /// Expand the template body with the given variable values
    ///
    /// Only declared variables are substituted. A declared variable with no
    /// supplied value becomes the empty string. Placeholders the template
    /// never declared are left verbatim so downstream tooling can see them.
    pub fn expand(&self, values: &HashMap<String, String>) -> String {
        debug!(id = %self.id, "expand: called");
        let mut content = self.body.to_string();
        for var in self.variables {
            let placeholder = format!("{{{{{}}}}}", var);
            let value = values.get(*var).map(String::as_str).unwrap_or("");
            content = content.replace(&placeholder, value);
        }
        content
    }

    /// Materialize the template into a concrete prompt
    pub fn to_prompt(&self, values: &HashMap<String, String>) -> Prompt {
        debug!(id = %self.id, "to_prompt: called");
        Prompt::new(self.name, self.expand(values), self.category, "system").with_tags([self.name])
    }
}

/// Look up a built-in template by id
pub fn template_by_id(id: &str) -> Option<Template> {
    builtin_templates().into_iter().find(|t| t.id == id)
}

/// Built-in templates applicable to a language and category
///
/// A template with an empty language list applies to every language.
pub fn recommend_templates(language: Option<&str>, category: Option<Category>) -> Vec<Template> {
    debug!(?language, ?category, "recommend_templates: called");
    builtin_templates()
        .into_iter()
        .filter(|t| match language {
            Some(lang) => t.languages.is_empty() || t.languages.contains(&lang),
            None => true,
        })
        .filter(|t| match category {
            Some(cat) => t.category == cat,
            None => true,
        })
        .collect()
}
