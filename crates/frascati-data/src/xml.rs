//! Legacy flat XML classification documents.
//!
//! The historical on-disk form is a flat field/subfield table
//! (`classifications.{locale}.xml`):
//!
//! ```xml
//! <classifications>
//!   <field name="Natural sciences">
//!     <subfield number="1.01" name="Mathematics"/>
//!   </field>
//! </classifications>
//! ```
//!
//! `number` maps to the subheading identifier and `name` to its label; the
//! result is the same [`ClassificationTree`] shape the JSON form produces.

use frascati_core::taxonomy::{Base, ClassificationTree, Subheading};
use quick_xml::events::{BytesStart, Event};

use crate::error::{Error, Result};

/// Parse a legacy XML document into a validated tree.
pub fn parse_legacy_xml(
  locale: &str,
  xml: &[u8],
) -> Result<ClassificationTree> {
  let mut reader = quick_xml::Reader::from_reader(xml);
  reader.config_mut().trim_text(true);

  let mut bases: Vec<Base> = Vec::new();
  let mut current: Option<Base> = None;
  let mut buf = Vec::new();

  loop {
    match reader.read_event_into(&mut buf) {
      Ok(Event::Start(ref e) | Event::Empty(ref e)) => {
        match e.name().as_ref() {
          b"field" => {
            // <field> does not nest; a new field closes the previous one.
            if let Some(done) = current.take() {
              bases.push(done);
            }
            current = Some(Base {
              label:       required_attr(e, b"name", locale)?,
              subheadings: Vec::new(),
            });
          }
          b"subfield" => {
            let sub = Subheading {
              label:      required_attr(e, b"name", locale)?,
              identifier: required_attr(e, b"number", locale)?,
            };
            match current.as_mut() {
              Some(base) => base.subheadings.push(sub),
              None => {
                return Err(xml_error(locale, "<subfield> outside <field>"));
              }
            }
          }
          _ => {}
        }
      }
      Ok(Event::End(ref e)) if e.name().as_ref() == b"field" => {
        if let Some(done) = current.take() {
          bases.push(done);
        }
      }
      Ok(Event::Eof) => break,
      Err(e) => return Err(xml_error(locale, e.to_string())),
      _ => {}
    }
    buf.clear();
  }
  if let Some(done) = current.take() {
    bases.push(done);
  }

  Ok(ClassificationTree::new(locale, bases)?)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn required_attr(
  e: &BytesStart<'_>,
  name: &[u8],
  locale: &str,
) -> Result<String> {
  for attr in e.attributes() {
    let attr = attr.map_err(|err| xml_error(locale, err.to_string()))?;
    if attr.key.as_ref() == name {
      return Ok(
        attr
          .unescape_value()
          .map_err(|err| xml_error(locale, err.to_string()))?
          .into_owned(),
      );
    }
  }
  Err(xml_error(locale, format!(
    "<{}> missing {} attribute",
    String::from_utf8_lossy(e.name().as_ref()),
    String::from_utf8_lossy(name),
  )))
}

fn xml_error(locale: &str, message: impl Into<String>) -> Error {
  Error::Xml {
    locale:  locale.to_string(),
    message: message.into(),
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::json::parse_json;

  const SAMPLE: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
  <classifications>
    <field name="Natural sciences">
      <subfield number="1.01" name="Mathematics"/>
      <subfield number="1.06" name="Biological sciences"/>
    </field>
    <field name="Humanities">
      <subfield number="6.01" name="History and archaeology"/>
    </field>
  </classifications>"#;

  #[test]
  fn parses_flat_table_into_tree() {
    let tree = parse_legacy_xml("en", SAMPLE).unwrap();
    assert_eq!(tree.bases().len(), 2);
    assert_eq!(tree.bases()[0].label, "Natural sciences");
    assert_eq!(tree.bases()[0].subheadings[1], Subheading {
      label:      "Biological sciences".to_string(),
      identifier: "1.06".to_string(),
    });
  }

  #[test]
  fn round_trips_to_the_same_shape_as_json() {
    let from_xml = parse_legacy_xml("en", SAMPLE).unwrap();
    let from_json = parse_json(
      "en",
      r#"{
        "items": [
          {
            "label": "Natural sciences",
            "items": [
              { "label": "Mathematics", "identifier": "1.01" },
              { "label": "Biological sciences", "identifier": "1.06" }
            ]
          },
          {
            "label": "Humanities",
            "items": [
              { "label": "History and archaeology", "identifier": "6.01" }
            ]
          }
        ]
      }"#,
    )
    .unwrap();
    assert_eq!(from_xml, from_json);
  }

  #[test]
  fn subfield_outside_field_is_rejected() {
    let result = parse_legacy_xml(
      "en",
      br#"<classifications><subfield number="1.01" name="Mathematics"/></classifications>"#,
    );
    assert!(matches!(result, Err(Error::Xml { .. })));
  }

  #[test]
  fn missing_attribute_is_rejected() {
    let result = parse_legacy_xml(
      "en",
      br#"<classifications><field name="A"><subfield name="Mathematics"/></field></classifications>"#,
    );
    assert!(
      matches!(result, Err(Error::Xml { ref message, .. }) if message.contains("number"))
    );
  }

  #[test]
  fn escaped_attribute_values_are_unescaped() {
    let tree = parse_legacy_xml(
      "en",
      br#"<classifications><field name="Engineering &amp; technology"><subfield number="2.01" name="Civil engineering"/></field></classifications>"#,
    )
    .unwrap();
    assert_eq!(tree.bases()[0].label, "Engineering & technology");
  }
}
