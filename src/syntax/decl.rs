//! Declaration model handed over by the parsing collaborator.
//!
//! The engine never reads source text. A parser (or the interchange loader)
//! produces these values, and every other layer works from them.

use std::fmt;

use crate::base::{Name, Visibility};

/// Normalized declaration kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DeclKind {
    Struct,
    Enum,
    Function,
    Container,
}

impl DeclKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Function => "function",
            Self::Container => "container",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "lowercase")
)]
pub enum Declaration {
    Struct(StructDecl),
    Enum(EnumDecl),
    Function(FunctionDecl),
    Container(ContainerDecl),
}

impl Declaration {
    pub fn kind(&self) -> DeclKind {
        match self {
            Self::Struct(_) => DeclKind::Struct,
            Self::Enum(_) => DeclKind::Enum,
            Self::Function(_) => DeclKind::Function,
            Self::Container(_) => DeclKind::Container,
        }
    }

    pub fn name(&self) -> &Name {
        match self {
            Self::Struct(decl) => &decl.name,
            Self::Enum(decl) => &decl.name,
            Self::Function(decl) => &decl.name,
            Self::Container(decl) => &decl.name,
        }
    }
}

impl From<StructDecl> for Declaration {
    fn from(decl: StructDecl) -> Self {
        Self::Struct(decl)
    }
}

impl From<EnumDecl> for Declaration {
    fn from(decl: EnumDecl) -> Self {
        Self::Enum(decl)
    }
}

impl From<FunctionDecl> for Declaration {
    fn from(decl: FunctionDecl) -> Self {
        Self::Function(decl)
    }
}

impl From<ContainerDecl> for Declaration {
    fn from(decl: ContainerDecl) -> Self {
        Self::Container(decl)
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// How a property holds its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Storage {
    /// Backed by storage in the value.
    #[default]
    Stored,
    /// A getter with no backing storage.
    Computed,
}

/// A property member of a record declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberDecl {
    pub name: Name,
    /// Type expression as written.
    #[cfg_attr(feature = "interchange", serde(rename = "type"))]
    pub ty: String,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub storage: Storage,
}

impl MemberDecl {
    pub fn stored(name: impl Into<Name>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            storage: Storage::Stored,
        }
    }

    pub fn computed(name: impl Into<Name>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            storage: Storage::Computed,
        }
    }
}

/// A record (struct-like) declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct StructDecl {
    pub name: Name,
    /// Members in declaration order.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub members: Vec<MemberDecl>,
}

impl StructDecl {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a stored property.
    pub fn field(mut self, name: impl Into<Name>, ty: impl Into<String>) -> Self {
        self.members.push(MemberDecl::stored(name, ty));
        self
    }

    /// Add a computed property.
    pub fn computed(mut self, name: impl Into<Name>, ty: impl Into<String>) -> Self {
        self.members.push(MemberDecl::computed(name, ty));
        self
    }
}

// ============================================================================
// UNIONS
// ============================================================================

/// A case of a union declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct CaseDecl {
    pub name: Name,
    /// Explicit raw value literal exactly as written (`"active"`, `42`).
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub raw_value: Option<String>,
}

/// A union (enum-like) declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumDecl {
    pub name: Name,
    /// Cases in declaration order.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub cases: Vec<CaseDecl>,
}

impl EnumDecl {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Add a case without a raw value.
    pub fn case(mut self, name: impl Into<Name>) -> Self {
        self.cases.push(CaseDecl {
            name: name.into(),
            raw_value: None,
        });
        self
    }

    /// Add a case with an explicit raw value literal.
    pub fn case_with_raw(mut self, name: impl Into<Name>, literal: impl Into<String>) -> Self {
        self.cases.push(CaseDecl {
            name: name.into(),
            raw_value: Some(literal.into()),
        });
        self
    }
}

// ============================================================================
// FUNCTIONS
// ============================================================================

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamDecl {
    /// External (call-site) label. `_` is a label in its own right.
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub label: Option<Name>,
    /// Internal binding name.
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<Name>,
    /// Type expression as written.
    #[cfg_attr(feature = "interchange", serde(rename = "type"))]
    pub ty: String,
}

impl ParamDecl {
    /// A parameter whose external label doubles as its binding name.
    pub fn labeled(label: impl Into<Name>, ty: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: Some(label.clone()),
            label: Some(label),
            ty: ty.into(),
        }
    }

    /// A parameter with no external label.
    pub fn unlabeled(ty: impl Into<String>) -> Self {
        Self {
            label: None,
            name: None,
            ty: ty.into(),
        }
    }

    /// Set a separate internal binding name.
    pub fn with_name(mut self, name: impl Into<Name>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDecl {
    pub name: Name,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub visibility: Visibility,
    #[cfg_attr(feature = "interchange", serde(default))]
    pub params: Vec<ParamDecl>,
    #[cfg_attr(feature = "interchange", serde(default, rename = "async"))]
    pub is_async: bool,
    #[cfg_attr(feature = "interchange", serde(default, rename = "throws"))]
    pub is_throws: bool,
    /// Return clause as written, `None` when there is none.
    #[cfg_attr(
        feature = "interchange",
        serde(default, rename = "returns", skip_serializing_if = "Option::is_none")
    )]
    pub return_type: Option<String>,
}

impl FunctionDecl {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::default(),
            params: Vec::new(),
            is_async: false,
            is_throws: false,
            return_type: None,
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    pub fn asynchronous(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn throwing(mut self) -> Self {
        self.is_throws = true;
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }
}

/// A container whose function members are documented in bulk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerDecl {
    pub name: Name,
    /// Function members in declaration order.
    #[cfg_attr(feature = "interchange", serde(default))]
    pub functions: Vec<FunctionDecl>,
}

impl ContainerDecl {
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    pub fn function(mut self, function: FunctionDecl) -> Self {
        self.functions.push(function);
        self
    }
}
