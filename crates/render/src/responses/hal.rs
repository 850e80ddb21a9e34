//! HAL (Hypertext Application Language) resources.
//!
//! Provides a builder for HAL resources and their JSON and XML forms.
//!
//! # JSON
//!
//! ```json
//! {
//!     "items": [{"name": "Alex"}],
//!     "_links": {"self": {"href": "/users"}, "next": {"href": "/users?page=2"}},
//!     "_embedded": {"owner": {"name": "Robin", "_links": {"self": {"href": "/users/robin"}}}}
//! }
//! ```
//!
//! # XML
//!
//! ```xml
//! <resource href="/users">
//!   <link rel="next" href="/users?page=2"/>
//!   <items><name>Alex</name></items>
//!   <resource rel="owner" href="/users/robin"><name>Robin</name></resource>
//! </resource>
//! ```

use std::borrow::Cow;

use indexmap::{IndexMap, IndexSet};
use rendition_serde::value::{ValueKind, entries, is_numeric_key};
use rendition_serde::xml::Element;
use rendition_serde::xml::utils::{checked_name, element_name, scalar_text};
use serde_json::{Map, Value};

use crate::error::Result;

/// A link in a HAL resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalLink {
    uri: String,
    attributes: IndexMap<String, String>,
}

impl HalLink {
    /// Creates a link to `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Adds an attribute such as `title` or `templated`.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// The link target.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Extra attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Converts to the JSON link object, `href` first.
    pub fn to_value(&self) -> Value {
        let mut link = Map::new();
        link.insert("href".to_string(), Value::String(self.uri.clone()));
        for (name, value) in &self.attributes {
            link.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(link)
    }
}

/// A HAL resource: data, links and embedded resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hal {
    uri: Option<String>,
    data: Map<String, Value>,
    links: IndexMap<String, Vec<HalLink>>,
    embedded: IndexMap<String, Vec<Hal>>,
    array_link_rels: IndexSet<String>,
    array_resource_rels: IndexSet<String>,
}

impl Hal {
    /// Creates a resource whose `self` link points at `uri`.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Default::default()
        }
    }

    /// Replaces the resource data.
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Sets one data entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Adds a link under `rel`.
    pub fn add_link(&mut self, rel: impl Into<String>, uri: impl Into<String>) -> &mut Self {
        self.push_link(rel.into(), HalLink::new(uri))
    }

    /// Adds a link with extra attributes under `rel`.
    pub fn add_link_with_attributes<I, K, V>(
        &mut self,
        rel: impl Into<String>,
        uri: impl Into<String>,
        attributes: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let link = attributes
            .into_iter()
            .fold(HalLink::new(uri), |link, (name, value)| {
                link.with_attribute(name, value)
            });
        self.push_link(rel.into(), link)
    }

    /// Adds a link under `rel` and marks the rel as a list, so it renders as an
    /// array even with a single link.
    pub fn add_array_link(&mut self, rel: impl Into<String>, uri: impl Into<String>) -> &mut Self {
        let rel = rel.into();
        self.array_link_rels.insert(rel.clone());
        self.push_link(rel, HalLink::new(uri))
    }

    /// Embeds a resource under `rel`.
    pub fn add_resource(&mut self, rel: impl Into<String>, resource: Hal) -> &mut Self {
        self.embedded.entry(rel.into()).or_default().push(resource);
        self
    }

    /// Embeds a resource under `rel` and marks the rel as a list.
    pub fn add_array_resource(&mut self, rel: impl Into<String>, resource: Hal) -> &mut Self {
        let rel = rel.into();
        self.array_resource_rels.insert(rel.clone());
        self.add_resource(rel, resource)
    }

    fn push_link(&mut self, rel: String, link: HalLink) -> &mut Self {
        self.links.entry(rel).or_default().push(link);
        self
    }

    /// The `self` URI.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The resource data.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Links by rel, excluding the `self` link built from the URI.
    pub fn links(&self) -> &IndexMap<String, Vec<HalLink>> {
        &self.links
    }

    /// Embedded resources by rel.
    pub fn resources(&self) -> &IndexMap<String, Vec<Hal>> {
        &self.embedded
    }

    /// Converts to the HAL JSON form.
    ///
    /// Data keys marked as XML attributes (`@name`) lose the marker.
    ///
    /// ```
    /// use rendition::Hal;
    /// use serde_json::json;
    ///
    /// let mut hal = Hal::new("/foo");
    /// hal.set("name", "Alex").add_link("next", "/foo?page=2");
    ///
    /// assert_eq!(
    ///     hal.to_value(),
    ///     json!({
    ///         "name": "Alex",
    ///         "_links": {"self": {"href": "/foo"}, "next": {"href": "/foo?page=2"}}
    ///     })
    /// );
    /// ```
    pub fn to_value(&self) -> Value {
        let mut resource = strip_markers_from_map(&self.data);

        let links = self.links_value();
        if !links.is_empty() {
            resource.insert("_links".to_string(), Value::Object(links));
        }

        let embedded = self.embedded_value();
        if !embedded.is_empty() {
            resource.insert("_embedded".to_string(), Value::Object(embedded));
        }

        Value::Object(resource)
    }

    fn links_value(&self) -> Map<String, Value> {
        let mut grouped: IndexMap<&str, Vec<Value>> = IndexMap::new();

        if let Some(uri) = &self.uri {
            grouped
                .entry("self")
                .or_default()
                .push(HalLink::new(uri.as_str()).to_value());
        }
        for (rel, links) in &self.links {
            grouped
                .entry(rel.as_str())
                .or_default()
                .extend(links.iter().map(HalLink::to_value));
        }

        grouped
            .into_iter()
            .map(|(rel, values)| {
                let value = collapse(values, self.array_link_rels.contains(rel));
                (rel.to_string(), value)
            })
            .collect()
    }

    fn embedded_value(&self) -> Map<String, Value> {
        self.embedded
            .iter()
            .map(|(rel, resources)| {
                let values = resources.iter().map(Hal::to_value).collect();
                let value = collapse(values, self.array_resource_rels.contains(rel));
                (rel.clone(), value)
            })
            .collect()
    }

    /// Builds the HAL XML tree, rooted at `<resource>`.
    ///
    /// ```
    /// use rendition::Hal;
    /// use rendition_serde::write_document;
    ///
    /// let mut hal = Hal::new("/foo");
    /// hal.set("is_admin", true);
    ///
    /// let xml = write_document(&hal.to_xml_element().unwrap(), false).unwrap();
    /// assert_eq!(
    ///     xml,
    ///     "<?xml version=\"1.0\"?>\n<resource href=\"/foo\"><is_admin>1</is_admin></resource>\n"
    /// );
    /// ```
    pub fn to_xml_element(&self) -> Result<Element> {
        let mut root = Element::new("resource");
        self.write_xml(&mut root)?;
        Ok(root)
    }

    fn write_xml(&self, element: &mut Element) -> Result<()> {
        if let Some(uri) = &self.uri {
            element.add_attribute("href", uri.as_str());
        }

        for (rel, links) in &self.links {
            for link in links {
                let child = element.add_child("link");
                child.add_attribute("rel", rel.as_str());
                child.add_attribute("href", link.uri());
                for (name, value) in link.attributes() {
                    child.add_attribute(checked_name(name)?, value.as_str());
                }
            }
        }

        let data: Vec<(Cow<'_, str>, &Value)> = self
            .data
            .iter()
            .map(|(key, value)| (Cow::Borrowed(key.as_str()), value))
            .collect();
        append_data(data, element, None)?;

        for (rel, resources) in &self.embedded {
            for resource in resources {
                let child = element.add_child("resource");
                child.add_attribute("rel", rel.as_str());
                resource.write_xml(child)?;
            }
        }

        Ok(())
    }
}

/// A single entry renders bare unless its rel is registered as a list.
fn collapse(mut values: Vec<Value>, always_array: bool) -> Value {
    if values.len() == 1 && !always_array {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}

/// Writes HAL data under `element`.
///
/// Lists repeat the element of the key that holds them. Scalar keys starting
/// with `@` become attributes and a lone `value` key becomes the text.
fn append_data(
    data: Vec<(Cow<'_, str>, &Value)>,
    element: &mut Element,
    parent: Option<&str>,
) -> Result<()> {
    let count = data.len();

    for (key, value) in data {
        let numeric = is_numeric_key(&key);

        if ValueKind::of(value).is_container() {
            if numeric {
                let child = element.add_child(item_name(parent, &key)?);
                append_data(entries(value), child, parent)?;
            } else if matches!(value, Value::Array(items) if !items.is_empty()) {
                append_data(entries(value), element, Some(key.as_ref()))?;
            } else {
                let child = element.add_child(checked_name(&key)?);
                append_data(entries(value), child, Some(key.as_ref()))?;
            }
            continue;
        }

        let text = scalar_text(value);
        if numeric {
            element.push(Element::with_text(item_name(parent, &key)?, text));
        } else if let Some(attribute) = key.strip_prefix('@') {
            element.add_attribute(checked_name(attribute)?, text);
        } else if key == "value" && count == 1 {
            element.set_text(text);
        } else {
            element.push(Element::with_text(checked_name(&key)?, text));
        }
    }

    Ok(())
}

/// Name for a list item: the key holding the list, or a prefixed index at the
/// top level.
fn item_name(parent: Option<&str>, key: &str) -> Result<String> {
    let name = match parent {
        Some(parent) => parent.to_string(),
        None => element_name(key),
    };
    checked_name(&name)?;
    Ok(name)
}

fn strip_markers_from_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(key, item)| {
            let key = key.strip_prefix('@').unwrap_or(key);
            (key.to_string(), strip_attribute_markers(item))
        })
        .collect()
}

fn strip_attribute_markers(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(strip_markers_from_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(strip_attribute_markers).collect()),
        other => other.clone(),
    }
}
