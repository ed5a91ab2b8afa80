//! Code snippet analysis
//!
//! Pulls function and class names out of a snippet, picks a default prompt
//! wording from surface features of the code, and fills template variables
//! from the combined code and project context.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::detect::{LanguageInfo, ProjectInfo};

/// A code snippet plus what we could figure out about it
#[derive(Debug, Clone)]
pub struct CodeContext {
    pub source: String,
    /// Language identifier, e.g. "python"
    pub language: String,
    pub file_path: String,
    pub function_name: Option<String>,
    pub class_name: Option<String>,
}

fn function_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Covers JS/TS/Python style definitions
    RE.get_or_init(|| Regex::new(r"(?:function|def|async\s+function)\s+(\w+)").unwrap())
}

fn class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"class\s+(\w+)").unwrap())
}

/// Keywords scanned for when matching a snippet against stored prompts
const CODE_KEYWORDS: &[&str] = &[
    "function", "class", "async", "await", "promise", "callback", "error", "exception", "try", "catch", "test", "spec",
    "api", "route", "endpoint", "controller", "service", "database", "query", "sql", "orm", "model", "component",
    "props", "state", "hook", "render",
];

impl CodeContext {
    /// Analyze a snippet of source code
    pub fn from_source(source: impl Into<String>, language: impl Into<String>, file_path: impl Into<String>) -> Self {
        let source = source.into();
        let language = language.into();
        debug!(%language, source_len = source.len(), "from_source: called");

        let function_name = function_re()
            .captures(&source)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());
        let class_name = class_re()
            .captures(&source)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        Self {
            source,
            language,
            file_path: file_path.into(),
            function_name,
            class_name,
        }
    }

    /// Build a prompt for this snippet with no template involved
    ///
    /// The verb is chosen from surface features: TODO/FIXME markers ask for
    /// a fix, test code asks for a review, a function definition asks for a
    /// function-level rework, anything else gets a general cleanup.
    pub fn default_prompt(&self) -> String {
        debug!("default_prompt: called");
        let action = if self.source.contains("TODO") || self.source.contains("FIXME") {
            "fix"
        } else if self.source.contains("test") || self.source.contains("Test") {
            "review the test cases in"
        } else if self.source.contains("function") || self.source.contains("def") {
            "improve the function in"
        } else {
            "improve"
        };

        let mut prompt = format!(
            "Please {} the following {} code:\n\n```{}\n{}\n```\n\n",
            action, self.language, self.language, self.source
        );

        if let Some(name) = &self.function_name {
            prompt.push_str(&format!("Function name: {}\n", name));
        }
        if let Some(name) = &self.class_name {
            prompt.push_str(&format!("Class name: {}\n", name));
        }

        prompt.push_str("Please provide detailed suggestions and an improved version.");
        prompt
    }

    /// Substitute context values into a template body
    ///
    /// Replaces the fixed placeholder set; placeholders with no value in
    /// this context are left verbatim.
    pub fn fill_template(
        &self,
        template: &str,
        language: Option<&LanguageInfo>,
        project: Option<&ProjectInfo>,
    ) -> String {
        debug!(template_len = template.len(), "fill_template: called");
        let mut result = template.to_string();

        result = result.replace("{{code}}", &self.source);
        result = result.replace("{{selectedText}}", &self.source);
        result = result.replace("{{language}}", &self.language);
        let language_name = language.map(|l| l.language.as_str()).unwrap_or(&self.language);
        result = result.replace("{{languageName}}", language_name);
        result = result.replace("{{filePath}}", &self.file_path);

        if let Some(name) = &self.function_name {
            result = result.replace("{{functionName}}", name);
        }
        if let Some(name) = &self.class_name {
            result = result.replace("{{className}}", name);
        }

        if let Some(proj) = project {
            result = result.replace("{{projectType}}", &proj.project_type);
            result = result.replace("{{framework}}", proj.framework.as_deref().unwrap_or(""));
        }

        result
    }

    /// Extract keywords for matching the snippet against stored prompts
    ///
    /// Returns the known code keywords present in the source, plus the
    /// language identifier.
    pub fn extract_keywords(&self) -> Vec<String> {
        debug!("extract_keywords: called");
        let code = self.source.to_lowercase();
        let mut keywords: Vec<String> = CODE_KEYWORDS
            .iter()
            .filter(|kw| code.contains(**kw))
            .map(|kw| kw.to_string())
            .collect();
        keywords.push(self.language.clone());
        keywords
    }
}
