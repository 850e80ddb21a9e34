//! Generic value to XML conversion.
//!
//! Mappings become nested elements named after their keys. Lists of records
//! under a key become repeated sibling elements with that key's name instead of
//! an indexed wrapper:
//!
//! ```text
//! {"items": [{"name": "Alex"}, {"name": "Robin"}]}
//!
//! <root>
//!   <items><name>Alex</name></items>
//!   <items><name>Robin</name></items>
//! </root>
//! ```

use serde_json::Value;

use crate::error::{Result, SerdeError};
use crate::value::{ValueKind, entries, entry_count, is_numeric_key};
use crate::xml::element::{Element, write_document};
use crate::xml::utils::{checked_name, element_name, scalar_text};

/// Serialize a mapping or sequence to an XML document string.
///
/// # Examples
///
/// ```
/// use rendition_serde::xml::to_xml_string;
/// use serde_json::json;
///
/// let xml = to_xml_string(&json!({"name": "Alex", "is_admin": true}), "user", false).unwrap();
/// assert_eq!(
///     xml,
///     "<?xml version=\"1.0\"?>\n<user><name>Alex</name><is_admin>1</is_admin></user>\n"
/// );
/// ```
pub fn to_xml_string(value: &Value, root_name: &str, pretty: bool) -> Result<String> {
    let root = value_to_element(value, root_name)?;
    write_document(&root, pretty)
}

/// Builds the element tree for `value` under a root named `root_name`.
pub fn value_to_element(value: &Value, root_name: &str) -> Result<Element> {
    let kind = ValueKind::of(value);
    if !kind.is_container() {
        return Err(SerdeError::NotAContainer(kind.as_str()));
    }

    let mut root = Element::new(checked_name(root_name)?);
    append_entries(value, &mut root)?;
    Ok(root)
}

/// Renders the entries of `value` as children of `element`.
pub fn append_entries(value: &Value, element: &mut Element) -> Result<()> {
    for (key, item) in entries(value) {
        if !ValueKind::of(item).is_container() {
            let name = element_name(&key);
            element.push(Element::with_text(checked_name(&name)?, scalar_text(item)));
            continue;
        }

        // Numeric keys carry no name of their own; their entries join the parent.
        if is_numeric_key(&key) {
            append_entries(item, element)?;
            continue;
        }

        let name = checked_name(&key)?;
        if entry_count(item) > 1 {
            let nested: Vec<&Value> = entries(item)
                .into_iter()
                .map(|(_, nested)| nested)
                .filter(|nested| ValueKind::of(nested).is_container())
                .collect();

            // Scalars next to nested containers are not rendered.
            if !nested.is_empty() {
                for container in nested {
                    let mut sibling = Element::new(name);
                    append_entries(container, &mut sibling)?;
                    element.push(sibling);
                }
                continue;
            }
        }

        let mut child = Element::new(name);
        append_entries(item, &mut child)?;
        element.push(child);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Value {
        json!({
            "items": [
                {"name": "Alex", "is_admin": true},
                {"name": "Robin", "is_admin": false, "link": "http://example.com"}
            ]
        })
    }

    #[test]
    fn test_repeated_elements_pretty() {
        let xml = to_xml_string(&users(), "root", true).unwrap();
        let expected = "<?xml version=\"1.0\"?>
<root>
  <items>
    <name>Alex</name>
    <is_admin>1</is_admin>
  </items>
  <items>
    <name>Robin</name>
    <is_admin>0</is_admin>
    <link>http://example.com</link>
  </items>
</root>
";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_repeated_elements_compact() {
        let xml = to_xml_string(&users(), "root", false).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n<root><items><name>Alex</name><is_admin>1</is_admin></items><items><name>Robin</name><is_admin>0</is_admin><link>http://example.com</link></items></root>\n"
        );
    }

    #[test]
    fn test_numeric_keys_are_prefixed() {
        // [[1], "foo" => "bar", 3]
        let value = json!({"0": [1], "foo": "bar", "1": 3});
        let xml = to_xml_string(&value, "root", true).unwrap();
        let expected = "<?xml version=\"1.0\"?>
<root>
  <_0>1</_0>
  <foo>bar</foo>
  <_1>3</_1>
</root>
";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_top_level_sequence() {
        let xml = to_xml_string(&json!(["a", "b"]), "root", false).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n<root><_0>a</_0><_1>b</_1></root>\n"
        );
    }

    #[test]
    fn test_single_record_list_nests() {
        let value = json!({"items": [{"name": "Alex"}]});
        let xml = to_xml_string(&value, "root", false).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n<root><items><name>Alex</name></items></root>\n"
        );
    }

    #[test]
    fn test_scalar_list_under_key() {
        let value = json!({"tags": ["a", "b"]});
        let xml = to_xml_string(&value, "root", false).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n<root><tags><_0>a</_0><_1>b</_1></tags></root>\n"
        );
    }

    #[test]
    fn test_scalars_beside_nested_containers_are_dropped() {
        let value = json!({"mixed": {"label": "x", "a": {"v": 1}, "b": {"v": 2}}});
        let xml = to_xml_string(&value, "root", false).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n<root><mixed><v>1</v></mixed><mixed><v>2</v></mixed></root>\n"
        );
    }

    #[test]
    fn test_null_and_numbers() {
        let value = json!({"none": null, "count": 3, "ratio": 0.5});
        let xml = to_xml_string(&value, "root", false).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\"?>\n<root><none/><count>3</count><ratio>0.5</ratio></root>\n"
        );
    }

    #[test]
    fn test_custom_root() {
        let xml = to_xml_string(&users(), "users", false).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\"?>\n<users><items>"));
        assert!(xml.ends_with("</users>\n"));
    }

    #[test]
    fn test_scalar_root_is_rejected() {
        let result = to_xml_string(&json!("Hello World"), "root", false);
        assert!(matches!(result, Err(SerdeError::NotAContainer("scalar"))));
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let result = to_xml_string(&json!({"bad key": 1}), "root", false);
        assert!(matches!(result, Err(SerdeError::InvalidElementName(_))));

        let result = to_xml_string(&json!({"a": 1}), "1root", false);
        assert!(matches!(result, Err(SerdeError::InvalidElementName(_))));
    }
}
