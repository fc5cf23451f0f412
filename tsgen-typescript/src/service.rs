//! Composes OData-style service metadata into top-level elements.
//!
//! For a service named `Northwind` this produces, in order:
//!
//! - `NorthwindConsts`, an object of `fields`/`keys` tuples per entity type
//! - `NorthwindEntityKeys`, field and key unions derived from that constant
//! - one enum per enum type and one interface per entity type
//! - `NorthwindService`, describing entity sets, types, enums, actions, functions
//! - `NorthwindClient`, a singleton carrying the static `serviceName`

use serde::Deserialize;

use crate::{
    CodeElement,
    ast::{
        Class, ClassProperty, Const, Enum, EnumMember, Fields, If, Interface, Method,
        ObjectLiteral, Visibility,
    },
};

/// Service metadata, reduced to what the generated types need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceModel {
    pub name: String,
    #[serde(default)]
    pub entity_types: Vec<EntityType>,
    #[serde(default)]
    pub entity_sets: Vec<EntitySet>,
    #[serde(default)]
    pub enum_types: Vec<EnumType>,
    #[serde(default)]
    pub actions: Vec<Operation>,
    #[serde(default)]
    pub functions: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityType {
    pub name: String,
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub properties: Fields,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EntitySet {
    pub name: String,
    pub entity_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

/// An action or function import.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub parameters: Fields,
    #[serde(default)]
    pub return_type: Option<String>,
}

impl ServiceModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn consts_name(&self) -> String {
        format!("{}Consts", self.name)
    }

    fn client_name(&self) -> String {
        format!("{}Client", self.name)
    }

    /// All generated elements, in file order.
    pub fn elements(&self) -> Vec<CodeElement> {
        let mut elements = vec![self.consts().into(), self.entity_keys().into()];
        elements.extend(self.enum_types.iter().map(|e| {
            CodeElement::from(Enum {
                name: e.name.clone(),
                members: e.members.clone(),
                exported: true,
            })
        }));
        elements.extend(self.entity_types.iter().map(|t| {
            CodeElement::from(Interface {
                name: t.name.clone(),
                properties: t.properties.clone(),
                exported: true,
            })
        }));
        elements.push(self.service_interface().into());
        elements.push(self.client().into());
        elements
    }

    /// `export const {name}Consts = { Entity: { fields: [...] as const, keys: [...] as const } };`
    pub fn consts(&self) -> Const {
        let object = self
            .entity_types
            .iter()
            .fold(ObjectLiteral::new(), |object, entity| {
                let fields = entity.properties.iter().map(|(name, _)| name);
                object.object(
                    &entity.name,
                    ObjectLiteral::new()
                        .raw("fields", const_tuple(fields))
                        .raw("keys", const_tuple(entity.keys.iter().map(String::as_str))),
                )
            });
        Const::new(self.consts_name(), object).exported()
    }

    /// Field and key unions per entity, derived from the consts object.
    pub fn entity_keys(&self) -> Interface {
        let consts = self.consts_name();
        self.entity_types.iter().fold(
            Interface::new(format!("{}EntityKeys", self.name)).exported(),
            |interface, entity| {
                let member = |list: &str| {
                    format!("(typeof {consts})[\"{}\"][\"{list}\"][number]", entity.name)
                };
                let ty = inline_type(
                    [("fields", member("fields")), ("keys", member("keys"))]
                        .iter()
                        .map(|(n, t)| (*n, t.as_str())),
                );
                interface.property(&entity.name, ty)
            },
        )
    }

    /// The main `{name}Service` interface.
    pub fn service_interface(&self) -> Interface {
        let sets = inline_type(
            self.entity_sets
                .iter()
                .map(|s| (s.name.as_str(), s.entity_type.as_str())),
        );
        let types = inline_type(
            self.entity_types
                .iter()
                .map(|t| (t.name.as_str(), t.name.as_str())),
        );
        let enums = inline_type(
            self.enum_types
                .iter()
                .map(|e| (e.name.as_str(), e.name.as_str())),
        );
        let signatures = |ops: &[Operation]| {
            let sigs: Vec<(String, String)> = ops
                .iter()
                .map(|op| {
                    let ret = op.return_type.as_deref().unwrap_or("void");
                    (op.name.clone(), format!("({}) => {ret}", op.parameters.params()))
                })
                .collect();
            inline_type(sigs.iter().map(|(n, t)| (n.as_str(), t.as_str())))
        };

        Interface::new(format!("{}Service", self.name))
            .property("entitySets", sets)
            .property("entityTypes", types)
            .property("enumTypes", enums)
            .property("actions", signatures(&self.actions))
            .property("functions", signatures(&self.functions))
            .exported()
    }

    /// Singleton client exposing the static service name.
    pub fn client(&self) -> Class {
        let client = self.client_name();
        Class::new(&client)
            .property(
                ClassProperty::new("instance?")
                    .visibility(Visibility::Private)
                    .static_()
                    .ty(&client),
            )
            .property(
                ClassProperty::new("serviceName")
                    .static_()
                    .readonly()
                    .value(format!("\"{}\"", self.name)),
            )
            .method(Method::constructor())
            .method(
                Method::new("getInstance")
                    .public()
                    .static_()
                    .returns(&client)
                    .element(
                        If::new(format!("!{client}.instance"))
                            .statement(format!("{client}.instance = new {client}();")),
                    )
                    .statement(format!("return {client}.instance;")),
            )
            .exported()
    }
}

/// `["a", "b"] as const`
fn const_tuple<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = names.map(|n| format!("\"{n}\"")).collect();
    format!("[{}] as const", quoted.join(", "))
}

/// Inline object type on one line: `{ a: A; b: B }`, or `{}` when empty.
fn inline_type<'a>(members: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let members: Vec<String> = members.map(|(n, t)| format!("{n}: {t}")).collect();
    if members.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", members.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_gen;

    fn sample() -> ServiceModel {
        ServiceModel {
            name: "Shop".to_string(),
            entity_types: vec![EntityType {
                name: "Product".to_string(),
                keys: vec!["ID".to_string()],
                properties: Fields::new().with("ID", "number").with("Title", "string"),
            }],
            entity_sets: vec![EntitySet {
                name: "Products".to_string(),
                entity_type: "Product".to_string(),
            }],
            ..ServiceModel::default()
        }
    }

    #[test]
    fn test_const_tuple() {
        assert_eq!(const_tuple(["a", "b"].into_iter()), "[\"a\", \"b\"] as const");
        assert_eq!(const_tuple(std::iter::empty()), "[] as const");
    }

    #[test]
    fn test_inline_type() {
        assert_eq!(inline_type([("a", "A"), ("b", "B")].into_iter()), "{ a: A; b: B }");
        assert_eq!(inline_type(std::iter::empty()), "{}");
    }

    #[test]
    fn test_consts() {
        let code = code_gen(&[sample().consts().into()]).unwrap();
        assert_eq!(
            code,
            "export const ShopConsts = {\n  Product: {\n    fields: [\"ID\", \"Title\"] as const,\n    keys: [\"ID\"] as const\n  }\n};\n"
        );
    }

    #[test]
    fn test_service_interface_members() {
        let code = code_gen(&[sample().service_interface().into()]).unwrap();
        assert!(code.contains("  entitySets: { Products: Product };\n"));
        assert!(code.contains("  enumTypes: {};\n"));
        assert!(code.contains("  actions: {};\n"));
    }

    #[test]
    fn test_operation_signatures() {
        let mut model = sample();
        model.actions.push(Operation {
            name: "Restock".to_string(),
            parameters: Fields::new().with("id", "number").with("qty", "number"),
            return_type: None,
        });
        let code = code_gen(&[model.service_interface().into()]).unwrap();
        assert!(code.contains("  actions: { Restock: (id: number, qty: number) => void };\n"));
    }

    #[test]
    fn test_element_order() {
        let kinds: Vec<_> = sample()
            .elements()
            .iter()
            .map(|e| e.kind().as_str())
            .collect();
        assert_eq!(
            kinds,
            ["const", "interface", "interface", "interface", "class"]
        );
    }
}
