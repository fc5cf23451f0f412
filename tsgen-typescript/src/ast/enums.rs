//! TypeScript enum builder.

use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
};
use tsgen_codegen::CodeFragment;

use super::{braced, export_prefix};
use crate::{ElementKind, Result, error::require};

/// An enum member: bare (`Red,`) or with an explicit initializer (`Blue = 3,`).
///
/// Bare members are emitted without a value; numbering is left to the
/// TypeScript compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumMember {
    Bare(String),
    Valued { name: String, value: String },
}

impl EnumMember {
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(name) | Self::Valued { name, .. } => name,
        }
    }

    fn line(&self) -> String {
        match self {
            Self::Bare(name) => format!("{name},"),
            Self::Valued { name, value } => format!("{name} = {value},"),
        }
    }
}

impl<'de> Deserialize<'de> for EnumMember {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct ValuedMember {
            name: String,
            #[serde(deserialize_with = "crate::de::verbatim")]
            value: String,
        }

        struct MemberVisitor;

        impl<'de> Visitor<'de> for MemberVisitor {
            type Value = EnumMember;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a member name or a { name, value } table")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<EnumMember, E> {
                Ok(EnumMember::Bare(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<EnumMember, A::Error> {
                let member = ValuedMember::deserialize(MapAccessDeserializer::new(map))?;
                Ok(EnumMember::Valued {
                    name: member.name,
                    value: member.value,
                })
            }
        }

        deserializer.deserialize_any(MemberVisitor)
    }
}

/// `[export ]enum {name} { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
    #[serde(default)]
    pub exported: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            exported: false,
        }
    }

    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(EnumMember::Bare(name.into()));
        self
    }

    /// Add a member with a verbatim initializer (`3`, `"RED"`).
    pub fn member_with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push(EnumMember::Valued {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::Enum, "name", path)?;
        for (i, member) in self.members.iter().enumerate() {
            let member_path = format!("{path}.members[{i}]");
            require(member.name(), ElementKind::EnumMember, "name", &member_path)?;
            if let EnumMember::Valued { value, .. } = member {
                require(value, ElementKind::EnumMember, "value", &member_path)?;
            }
        }
        Ok(())
    }

    pub(crate) fn fragments(&self, top_level: bool) -> Vec<CodeFragment> {
        let body = self
            .members
            .iter()
            .map(|m| CodeFragment::Line(m.line()))
            .collect();
        vec![braced(
            format!("{}enum {}", export_prefix(self.exported, top_level), self.name),
            body,
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use tsgen_codegen::CodeBuilder;

    use super::*;

    fn build(e: &Enum) -> String {
        let mut builder = CodeBuilder::typescript();
        for fragment in e.fragments(true) {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_mixed_members() {
        let e = Enum::new("Colors")
            .member("Red")
            .member("Green")
            .member_with_value("Blue", "3")
            .exported();
        assert_eq!(
            build(&e),
            "export enum Colors {\n  Red,\n  Green,\n  Blue = 3,\n}\n"
        );
    }

    #[test]
    fn test_string_values() {
        let e = Enum::new("Status").member_with_value("Open", "\"OPEN\"");
        assert_eq!(build(&e), "enum Status {\n  Open = \"OPEN\",\n}\n");
    }

    #[test]
    fn test_empty_enum() {
        assert_eq!(build(&Enum::new("Never")), "enum Never {}\n");
    }

    #[test]
    fn test_deserialize_members() {
        let e: Enum = serde_json::from_str(
            r#"{ "name": "Colors", "members": ["Red", { "name": "Blue", "value": 3 }] }"#,
        )
        .unwrap();
        assert_eq!(e, Enum::new("Colors").member("Red").member_with_value("Blue", "3"));
    }

    #[test]
    fn test_empty_member_name() {
        let err = Enum::new("E").member("A").member("").validate("elements[0]").unwrap_err();
        assert_eq!(err.kind(), ElementKind::EnumMember);
        assert_eq!(err.path(), "elements[0].members[1]");
    }

    #[test]
    fn test_empty_member_value() {
        let err = Enum::new("E")
            .member("A")
            .member_with_value("B", "")
            .validate("elements[0]")
            .unwrap_err();
        assert_eq!(err.kind(), ElementKind::EnumMember);
        assert_eq!(err.path(), "elements[0].members[1]");
        assert!(err.to_string().contains("missing required field `value`"));
    }

    #[test]
    fn test_unknown_member_field_rejected() {
        let err = serde_json::from_str::<Enum>(
            r#"{ "name": "E", "members": [{ "name": "A", "val": 1 }] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `val`"));
    }
}
