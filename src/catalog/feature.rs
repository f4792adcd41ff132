//! Feature descriptor (`feature.xml`) parsing.
//!
//! Several element kinds contribute dependency names, and all of them
//! feed the same flat list; the resolver does not distinguish them:
//!
//! - `<import plugin="..">`: plug-in dependency (falls back to the
//!   `feature` attribute when `plugin` is empty or absent)
//! - `<plugin id="..">`: plug-in shipped by the feature
//! - `<includes id="..">`: nested feature

use anyhow::Context;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Collect every dependency name declared by feature XML content.
pub(crate) fn dependencies(xml: &str) -> anyhow::Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut deps = Vec::new();

    loop {
        match reader.read_event().context("invalid XML")? {
            Event::Start(e) | Event::Empty(e) => collect_element(&e, &mut deps)?,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(deps)
}

fn collect_element(element: &BytesStart<'_>, deps: &mut Vec<String>) -> anyhow::Result<()> {
    match element.local_name().as_ref() {
        b"import" => {
            if let Some(plugin) = attribute(element, b"plugin")? {
                deps.push(plugin);
            } else if let Some(feature) = attribute(element, b"feature")? {
                deps.push(feature);
            }
        }
        b"plugin" | b"includes" => {
            if let Some(id) = attribute(element, b"id")? {
                deps.push(id);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Read a named attribute, treating an empty value as absent.
fn attribute(element: &BytesStart<'_>, name: &[u8]) -> anyhow::Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.context("invalid attribute")?;
        if attr.key.as_ref() == name {
            let value = attr.unescape_value().context("invalid attribute value")?;
            let value = value.trim();
            if !value.is_empty() {
                return Ok(Some(value.to_string()));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_four_dependency_kinds_feed_one_list() {
        let xml = r#"<feature id="org.example.feature" version="1.0.0">
    <import plugin="P1"/>
    <import feature="F1"/>
    <plugin id="P2" download-size="0"/>
    <includes id="F2" version="0.0.0"/>
</feature>"#;
        let deps: HashSet<String> = dependencies(xml).unwrap().into_iter().collect();
        let expected: HashSet<String> =
            ["P1", "F1", "P2", "F2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(deps, expected);
    }

    #[test]
    fn import_prefers_plugin_over_feature() {
        let xml = r#"<feature><import plugin="the.plugin" feature="the.feature"/></feature>"#;
        assert_eq!(dependencies(xml).unwrap(), ["the.plugin".to_string()]);
    }

    #[test]
    fn empty_plugin_attribute_falls_back_to_feature() {
        let xml = r#"<feature><import plugin="" feature="the.feature"/></feature>"#;
        assert_eq!(dependencies(xml).unwrap(), ["the.feature".to_string()]);
    }

    #[test]
    fn import_with_no_usable_attribute_contributes_nothing() {
        let xml = r#"<feature><import version="1.0"/></feature>"#;
        assert!(dependencies(xml).unwrap().is_empty());
    }

    #[test]
    fn feature_root_element_is_not_a_dependency() {
        let xml = r#"<feature id="org.example.feature"></feature>"#;
        assert!(dependencies(xml).unwrap().is_empty());
    }

    #[test]
    fn non_empty_plugin_elements_count_whether_self_closing_or_not() {
        let xml = r#"<feature>
    <plugin id="a"></plugin>
    <plugin id="b"/>
</feature>"#;
        assert_eq!(
            dependencies(xml).unwrap(),
            ["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(dependencies("<feature><import plugin='x'></wrong></feature>").is_err());
    }

    #[test]
    fn duplicate_names_are_preserved() {
        let xml = r#"<feature><import plugin="p"/><plugin id="p"/></feature>"#;
        assert_eq!(
            dependencies(xml).unwrap(),
            ["p".to_string(), "p".to_string()]
        );
    }
}
