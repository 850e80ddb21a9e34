//! Problem Details (RFC 7807) responses.
//!
//! Provides a builder for problem documents and their JSON and XML forms.

use rendition_serde::xml::{Element, value_to_element};
use serde_json::{Map, Value};

use crate::error::Result;

/// The default problem type.
pub const ABOUT_BLANK: &str = "about:blank";

/// Member names reserved by the problem document itself.
const RESERVED_MEMBERS: [&str; 5] = ["title", "type", "status", "detail", "instance"];

/// A Problem Details document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiProblem {
    title: String,
    problem_type: String,
    status: Option<u16>,
    detail: Option<String>,
    instance: Option<String>,
    extensions: Map<String, Value>,
}

impl Default for ApiProblem {
    fn default() -> Self {
        Self::new("")
    }
}

impl ApiProblem {
    /// Creates a problem with the given title and type `about:blank`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            problem_type: ABOUT_BLANK.to_string(),
            status: None,
            detail: None,
            instance: None,
            extensions: Map::new(),
        }
    }

    /// Sets the problem type URI.
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = problem_type.into();
        self
    }

    /// Sets the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the human-readable explanation.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the URI of this occurrence.
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Adds an extension member.
    pub fn with_extension(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(name.into(), value.into());
        self
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The problem type URI.
    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    /// The HTTP status, if set.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The detail, if set.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The instance URI, if set.
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Extension members in insertion order.
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Converts to the JSON document form.
    ///
    /// Standard members come first and are omitted when empty. Extensions
    /// follow, except those that reuse a standard member name.
    ///
    /// ```
    /// use rendition::ApiProblem;
    /// use serde_json::json;
    ///
    /// let problem = ApiProblem::new("Out of credit")
    ///     .with_status(403)
    ///     .with_extension("balance", 30);
    ///
    /// assert_eq!(
    ///     problem.to_value(),
    ///     json!({"title": "Out of credit", "type": "about:blank", "status": 403, "balance": 30})
    /// );
    /// ```
    pub fn to_value(&self) -> Value {
        let mut document = Map::new();

        if !self.title.is_empty() {
            document.insert("title".to_string(), Value::from(self.title.as_str()));
        }
        if !self.problem_type.is_empty() {
            document.insert("type".to_string(), Value::from(self.problem_type.as_str()));
        }
        if let Some(status) = self.status.filter(|status| *status != 0) {
            document.insert("status".to_string(), Value::from(status));
        }
        if let Some(detail) = self.detail.as_deref().filter(|d| !d.is_empty()) {
            document.insert("detail".to_string(), Value::from(detail));
        }
        if let Some(instance) = self.instance.as_deref().filter(|i| !i.is_empty()) {
            document.insert("instance".to_string(), Value::from(instance));
        }

        for (name, value) in &self.extensions {
            if !RESERVED_MEMBERS.contains(&name.as_str()) {
                document.insert(name.clone(), value.clone());
            }
        }

        Value::Object(document)
    }

    /// Builds the XML tree, rooted at `<problem>`.
    pub fn to_xml_element(&self) -> Result<Element> {
        Ok(value_to_element(&self.to_value(), "problem")?)
    }
}
