//! Data model for scanned declarations, independent of output format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything a scan found, in order of appearance.
///
/// Only ever appended to; a directory scan appends file after file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intel {
    pub functions: Vec<FunctionInfo>,
    pub macros: Vec<MacroInfo>,
    pub enums: Vec<EnumInfo>,
}

impl Intel {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.macros.is_empty() && self.enums.is_empty()
    }

    /// Append every declaration of `other` after the ones already held.
    pub fn append(&mut self, other: Intel) {
        self.functions.extend(other.functions);
        self.macros.extend(other.macros);
        self.enums.extend(other.enums);
    }
}

/// Function qualifier. A plain `forward` declaration is `Function`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Function,
    Native,
    Public,
    Stock,
    Static,
}

impl FunctionKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "forward" => Some(FunctionKind::Function),
            "native" => Some(FunctionKind::Native),
            "public" => Some(FunctionKind::Public),
            "stock" => Some(FunctionKind::Stock),
            "static" => Some(FunctionKind::Static),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKind::Function => "function",
            FunctionKind::Native => "native",
            FunctionKind::Public => "public",
            FunctionKind::Stock => "stock",
            FunctionKind::Static => "static",
        }
    }
}

/// A declared function or function prototype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub forward: bool,
    #[serde(rename = "type")]
    pub kind: FunctionKind,
    pub tag: Option<String>,
    pub name: String,
    pub args: Vec<Argument>,
    /// `native` redirection: `= Other;` or `= -1;`
    pub addr: Option<Address>,
    pub line: usize,
}

/// Target of a native redirection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    Number(i64),
    Alias(String),
}

/// Tag annotation: `Tag:` or `{Tag1, Tag2}:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Single(String),
    Union(Vec<String>),
}

/// One `[...]` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Size(i64),
    Expr(String),
    /// `[]`, serialized as `null`
    Unsized,
}

/// A function argument or an enum entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub tag: Option<Tag>,
    #[serde(rename = "const")]
    pub is_const: bool,
    #[serde(rename = "ref")]
    pub is_ref: bool,
    /// `None` for the variadic marker `..` / `...`
    pub name: Option<String>,
    pub dim: Vec<Dimension>,
    #[serde(rename = "def")]
    pub default: Option<String>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroInfo {
    pub prefix: String,
    pub pattern: Option<String>,
    pub substitution: Option<String>,
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumInfo {
    pub tag: Option<String>,
    pub name: Option<String>,
    pub increment: Option<String>,
    pub variables: Vec<Argument>,
    pub line: usize,
}

// -- Signature formatting -----------------------------------------------------

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Single(tag) => write!(f, "{}:", tag),
            Tag::Union(tags) => write!(f, "{{{}}}:", tags.join(",")),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Size(n) => write!(f, "[{}]", n),
            Dimension::Expr(expr) => write!(f, "[{}]", expr),
            Dimension::Unsized => f.write_str("[]"),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Number(n) => write!(f, "{}", n),
            Address::Alias(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_const {
            f.write_str("const ")?;
        }
        if self.is_ref {
            f.write_str("&")?;
        }
        if let Some(ref tag) = self.tag {
            write!(f, "{}", tag)?;
        }
        f.write_str(self.name.as_deref().unwrap_or("..."))?;
        for dim in &self.dim {
            write!(f, "{}", dim)?;
        }
        if let Some(ref default) = self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Argument]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for FunctionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.forward {
            f.write_str("forward ")?;
        }
        if self.kind != FunctionKind::Function {
            write!(f, "{} ", self.kind.as_str())?;
        }
        if let Some(ref tag) = self.tag {
            write!(f, "{}:", tag)?;
        }
        write!(f, "{}(", self.name)?;
        write_list(f, &self.args)?;
        f.write_str(")")?;
        if let Some(ref addr) = self.addr {
            write!(f, " = {}", addr)?;
        }
        Ok(())
    }
}

impl fmt::Display for MacroInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#define {}", self.prefix)?;
        if let Some(ref pattern) = self.pattern {
            f.write_str(pattern)?;
        }
        if let Some(ref substitution) = self.substitution {
            write!(f, " {}", substitution)?;
        }
        Ok(())
    }
}

impl fmt::Display for EnumInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("enum")?;
        match (&self.tag, &self.name) {
            (Some(tag), Some(name)) => write!(f, " {}:{}", tag, name)?,
            (Some(tag), None) => write!(f, " {}:", tag)?,
            (None, Some(name)) => write!(f, " {}", name)?,
            (None, None) => {}
        }
        if let Some(ref increment) = self.increment {
            write!(f, " ({})", increment)?;
        }
        f.write_str(" { ")?;
        write_list(f, &self.variables)?;
        f.write_str(" }")
    }
}
