//! @ai:module:intent Define the declaration and record types shared by the pipeline stages
//! @ai:module:layer domain
//! @ai:module:public_api Location, DeclKind, TypeSpec, DeclarationBlock, ConverterRecord
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// @ai:intent Represents a source code location
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
}

impl Location {
    /// @ai:intent Create a new Location
    pub fn new(file: PathBuf, line: usize) -> Self {
        Self { file, line }
    }
}

/// @ai:intent Keyword that introduces a top-level declaration block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Import,
    Const,
    Var,
    Type,
}

impl DeclKind {
    /// @ai:intent Map a Go keyword to its declaration kind
    /// @ai:example ("type") -> Some(Type)
    /// @ai:example ("func") -> None
    /// @ai:effects pure
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "import" => Some(DeclKind::Import),
            "const" => Some(DeclKind::Const),
            "var" => Some(DeclKind::Var),
            "type" => Some(DeclKind::Type),
            _ => None,
        }
    }
}

/// @ai:intent A named type definition inside a declaration block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: String,
    pub line: usize,
}

/// @ai:intent One top-level declaration with its documentation text and type specs
/// @ai:invariant specs is empty unless kind is Type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeclarationBlock {
    pub kind: DeclKind,
    pub doc: String,
    pub specs: Vec<TypeSpec>,
    pub location: Location,
}

impl DeclarationBlock {
    /// @ai:intent Names of the contained type specs in source order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.name.as_str())
    }
}

/// @ai:intent A generated field descriptor: field name and field type
/// @ai:invariant name == type_name for records built from type specs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConverterRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ConverterRecord {
    /// @ai:intent Create a record whose field name and type both echo the identifier
    pub fn from_identifier(identifier: &str) -> Self {
        Self {
            name: identifier.to_string(),
            type_name: identifier.to_string(),
        }
    }
}

impl fmt::Display for ConverterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.type_name)
    }
}
