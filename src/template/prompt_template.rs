use std::collections::{HashMap, HashSet};

use crate::template::TemplateError;

/// Variable bindings for a [`PromptTemplate`], keyed by placeholder name.
pub type TextReplacements<'a> = HashMap<&'a str, String>;

/// A plain-text template with f-string style `{variable}` placeholders.
///
/// Rendering is a pure function of the template text and the supplied
/// replacements; the same inputs always produce the same output.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    variables: HashSet<String>,
}

impl PromptTemplate {
    pub fn from_fstring(template: impl Into<String>) -> Self {
        let template = template.into();

        let re = regex::Regex::new(r"\{(\w+)\}").expect("Static regex is valid");
        let variables = re
            .captures_iter(&template)
            .map(|cap| cap[1].to_string())
            .collect();

        Self {
            template,
            variables,
        }
    }

    /// Substitutes every placeholder with its binding and returns the
    /// rendered prompt. Every variable that occurs in the template must be
    /// bound, otherwise no substitution happens and a
    /// [`TemplateError::MissingVariable`] is returned.
    pub fn format(&self, input: &TextReplacements) -> Result<String, TemplateError> {
        self.validate_input(input)?;

        let mut content = self.template.clone();

        for (key, value) in input {
            content = content.replace(&format!("{{{key}}}"), value);
        }

        Ok(content)
    }

    /// Returns the placeholder names the template requires.
    pub fn variables(&self) -> HashSet<&str> {
        self.variables.iter().map(String::as_str).collect()
    }

    pub fn validate_input(&self, input: &TextReplacements) -> Result<(), TemplateError> {
        let mut missing_variables = self
            .variables()
            .difference(&input.keys().cloned().collect())
            .cloned()
            .collect::<Vec<_>>();

        if !missing_variables.is_empty() {
            missing_variables.sort_unstable();
            return Err(TemplateError::MissingVariable(missing_variables.join(", ")));
        }

        Ok(())
    }
}
