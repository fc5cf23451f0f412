//! Value expressions: verbatim literals and object literals.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
};
use tsgen_codegen::CodeFragment;

use super::verbatim_lines;
use crate::{ElementKind, Result, de::VerbatimVisitor, error::require};

/// The right-hand side of a const or object property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Expression text spliced verbatim.
    Raw(String),
    /// A structured object literal.
    Object(ObjectLiteral),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<ObjectLiteral> for Value {
    fn from(object: ObjectLiteral) -> Self {
        Self::Object(object)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a verbatim expression or an object literal table")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> {
                VerbatimVisitor.visit_str(v).map(Value::Raw)
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> {
                VerbatimVisitor.visit_string(v).map(Value::Raw)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> {
                VerbatimVisitor.visit_i64(v).map(Value::Raw)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
                VerbatimVisitor.visit_u64(v).map(Value::Raw)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> {
                VerbatimVisitor.visit_f64(v).map(Value::Raw)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Value, E> {
                VerbatimVisitor.visit_bool(v).map(Value::Raw)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Value, A::Error> {
                ObjectLiteral::deserialize(MapAccessDeserializer::new(map)).map(Value::Object)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// An object literal with insertion-ordered properties.
///
/// Renders one property per line, comma-separated, without a trailing comma.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ObjectDef")]
pub struct ObjectLiteral {
    properties: Vec<(String, Value)>,
}

/// Document form: `{ type = "object", properties = { ... } }`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ObjectDef {
    #[serde(rename = "type", default)]
    _kind: Option<ObjectTag>,
    #[serde(default)]
    properties: IndexMap<String, Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum ObjectTag {
    Object,
}

impl From<ObjectDef> for ObjectLiteral {
    fn from(def: ObjectDef) -> Self {
        Self {
            properties: def.properties.into_iter().collect(),
        }
    }
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a verbatim expression value.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), Value::Raw(value.into())));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: ObjectLiteral) -> Self {
        self.properties.push((key.into(), Value::Object(value)));
        self
    }

    /// Add a shorthand-style property where the value is the key itself.
    pub fn shorthand(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.raw(name.clone(), name)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Every verbatim property value must be non-empty. Reported at `{path}.{key}`.
    pub(crate) fn validate(&self, kind: ElementKind, path: &str) -> Result<()> {
        for (key, value) in &self.properties {
            let property_path = format!("{path}.{key}");
            match value {
                Value::Raw(expr) => require(expr, kind, "value", &property_path)?,
                Value::Object(object) => object.validate(kind, &property_path)?,
            }
        }
        Ok(())
    }

    /// Fragments for `{header} {` ... `{close}` with this object's properties.
    pub(crate) fn fragments_as(&self, header: impl Into<String>, close: &str) -> CodeFragment {
        super::braced(header, self.property_fragments(), close)
    }

    fn property_fragments(&self) -> Vec<CodeFragment> {
        let last = self.properties.len().saturating_sub(1);
        self.properties
            .iter()
            .enumerate()
            .flat_map(|(i, (key, value))| {
                let comma = if i == last { "" } else { "," };
                match value {
                    Value::Raw(expr) => verbatim_lines(&format!("{key}: "), expr, comma),
                    Value::Object(object) => {
                        vec![object.fragments_as(format!("{key}:"), &format!("}}{comma}"))]
                    }
                }
            })
            .collect()
    }
}
