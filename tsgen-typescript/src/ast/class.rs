//! TypeScript class builder.

use serde::Deserialize;
use tsgen_codegen::CodeFragment;

use super::{
    BodyItem, Fields, braced,
    body::{body_fragments, validate_body},
    export_prefix,
    fns::return_annotation,
    verbatim_lines,
};
use crate::{
    CodeElement, ElementKind, Result,
    error::{require, require_some},
};

/// Member visibility keyword, emitted verbatim when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

/// `{vis} ` when a visibility is present.
fn visibility_prefix(visibility: Option<Visibility>) -> String {
    visibility
        .map(|v| format!("{} ", v.as_str()))
        .unwrap_or_default()
}

/// `[export ]class {name}[ extends {E}][ implements {I}, ...] { ... }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Class {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default)]
    pub properties: Vec<ClassProperty>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub exported: bool,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            implements: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            exported: false,
        }
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    pub fn property(mut self, property: ClassProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub(crate) fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::Class, "name", path)?;
        require_some(self.extends.as_deref(), ElementKind::Class, "extends", path)?;
        for (i, interface) in self.implements.iter().enumerate() {
            require(
                interface,
                ElementKind::Class,
                "implements",
                &format!("{path}.implements[{i}]"),
            )?;
        }
        for (i, property) in self.properties.iter().enumerate() {
            property.validate(&format!("{path}.properties[{i}]"))?;
        }
        for (i, method) in self.methods.iter().enumerate() {
            method.validate(&format!("{path}.methods[{i}]"))?;
        }
        Ok(())
    }

    pub(crate) fn fragments(&self, top_level: bool) -> Vec<CodeFragment> {
        let mut header = format!(
            "{}class {}",
            export_prefix(self.exported, top_level),
            self.name
        );
        if let Some(base) = &self.extends {
            header.push_str(" extends ");
            header.push_str(base);
        }
        if !self.implements.is_empty() {
            header.push_str(" implements ");
            header.push_str(&self.implements.join(", "));
        }

        let mut body: Vec<CodeFragment> = self
            .properties
            .iter()
            .map(ClassProperty::fragment)
            .collect();
        for method in &self.methods {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.push(method.fragment());
        }

        vec![braced(header, body, "}")]
    }
}

/// A class field: `[{vis} ][static ][readonly ]{name}[: {ty}][ = {value}];`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassProperty {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default, deserialize_with = "optional_verbatim")]
    pub value: Option<String>,
}

fn optional_verbatim<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    crate::de::verbatim(deserializer).map(Some)
}

impl ClassProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            is_static: false,
            readonly: false,
            ty: None,
            value: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Initializer expression, spliced verbatim.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::Property, "name", path)?;
        require_some(self.ty.as_deref(), ElementKind::Property, "type", path)?;
        require_some(self.value.as_deref(), ElementKind::Property, "value", path)
    }

    fn fragment(&self) -> CodeFragment {
        let mut head = visibility_prefix(self.visibility);
        if self.is_static {
            head.push_str("static ");
        }
        if self.readonly {
            head.push_str("readonly ");
        }
        head.push_str(&self.name);
        head.push_str(&return_annotation(self.ty.as_deref()));
        match &self.value {
            Some(value) => {
                head.push_str(" = ");
                CodeFragment::sequence(verbatim_lines(&head, value, ";"))
            }
            None => CodeFragment::line(format!("{head};")),
        }
    }
}

/// A class method. A method named `constructor` renders without visibility,
/// `static`, or return type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub args: Fields,
    #[serde(default)]
    pub return_type: Option<String>,
    #[serde(default)]
    pub body: Vec<BodyItem>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: None,
            is_static: false,
            args: Fields::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn constructor() -> Self {
        Self::new("constructor")
    }

    pub fn is_constructor(&self) -> bool {
        self.name == "constructor"
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn public(self) -> Self {
        self.visibility(Visibility::Public)
    }

    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(name, ty);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn statement(mut self, text: impl Into<String>) -> Self {
        self.body.push(BodyItem::Raw(text.into()));
        self
    }

    pub fn element(mut self, element: impl Into<CodeElement>) -> Self {
        self.body.push(BodyItem::Element(element.into()));
        self
    }

    fn validate(&self, path: &str) -> Result<()> {
        require(&self.name, ElementKind::Method, "name", path)?;
        self.args.validate(ElementKind::Method, "args", path)?;
        if !self.is_constructor() {
            require_some(self.return_type.as_deref(), ElementKind::Method, "returnType", path)?;
        }
        validate_body(&self.body, path, "body")
    }

    fn fragment(&self) -> CodeFragment {
        let header = if self.is_constructor() {
            format!("constructor({})", self.args.params())
        } else {
            format!(
                "{}{}{}({}){}",
                visibility_prefix(self.visibility),
                if self.is_static { "static " } else { "" },
                self.name,
                self.args.params(),
                return_annotation(self.return_type.as_deref())
            )
        };
        braced(header, body_fragments(&self.body), "}")
    }
}
