//! @ai:module:intent gotruct library: generate Go converter aggregate structs from annotated declarations
//! @ai:module:layer infrastructure
//! @ai:module:public_api comment, config, declaration, emitter, error, extractor, generate, groups, matcher, output, parser
//! @ai:module:stateless true
//!
//! # gotruct
//!
//! Scans a directory of Go files for type declarations whose doc comment
//! carries `converter:converter`, groups them by an optional
//! `group <Name>` clause, and writes one `<Name>Converter` struct per group.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gotruct::{generate, GeneratorConfig};
//! use std::path::PathBuf;
//!
//! let config = GeneratorConfig {
//!     path: PathBuf::from("internal/converters"),
//!     output: Some(PathBuf::from("internal/wire/converter.go")),
//!     ..Default::default()
//! };
//! let summary = generate(&config).unwrap();
//! println!("{} converters", summary.groups);
//! ```

pub mod comment;
pub mod config;
pub mod declaration;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod generate;
pub mod groups;
pub mod matcher;
pub mod output;
pub mod parser;

pub use config::GeneratorConfig;
pub use declaration::{ConverterRecord, DeclKind, DeclarationBlock, Location, TypeSpec};
pub use emitter::{render, write_output, EmitOptions};
pub use error::{Error, Result};
pub use extractor::{extract_file, extract_records, MatchedBlock};
pub use generate::{generate, plan, scan_directory, GenerationSummary, ScanResult};
pub use groups::ConverterGroups;
pub use matcher::{AnnotationMatch, Matcher};
pub use output::{format_scan, format_summary, OutputFormat};
pub use parser::{parse_file, parse_source, ParsedSource};
