//! @ai:module:intent Turn annotated declaration blocks into converter records
//! @ai:module:layer application
//! @ai:module:public_api extract_records, extract_blocks, extract_file, MatchedBlock
//! @ai:module:depends_on declaration, groups, matcher, parser, error
//! @ai:module:stateless true

use crate::declaration::{ConverterRecord, DeclarationBlock, Location};
use crate::error::Result;
use crate::groups::ConverterGroups;
use crate::matcher::Matcher;
use crate::parser::parse_file;
use std::path::Path;

/// @ai:intent Records of one matched declaration block under its resolved group key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedBlock {
    pub group_key: String,
    pub records: Vec<ConverterRecord>,
    pub location: Location,
}

/// @ai:intent Produce one record per type spec, in declaration order
/// @ai:post result.len() == block.specs.len()
/// @ai:effects pure
pub fn extract_records(block: &DeclarationBlock) -> Vec<ConverterRecord> {
    block
        .type_names()
        .map(ConverterRecord::from_identifier)
        .collect()
}

/// @ai:intent Match and extract every annotated block, skipping the rest
/// @ai:effects pure
pub fn extract_blocks<'a>(
    blocks: &'a [DeclarationBlock],
    matcher: &'a Matcher,
) -> impl Iterator<Item = MatchedBlock> + 'a {
    blocks.iter().filter_map(move |block| {
        let group_key = matcher.match_doc(&block.doc).group_key?;
        Some(MatchedBlock {
            group_key,
            records: extract_records(block),
            location: block.location.clone(),
        })
    })
}

/// @ai:intent Parse a file and fold its annotated blocks into groups
/// @ai:pre path is a readable source file
/// @ai:effects fs:read
pub fn extract_file(path: &Path, matcher: &Matcher) -> Result<ConverterGroups> {
    let parsed = parse_file(path)?;
    tracing::debug!(
        "{}: package {}, {} declarations",
        path.display(),
        parsed.package,
        parsed.blocks.len()
    );

    Ok(ConverterGroups::fold_blocks(&parsed.blocks, matcher))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{DeclKind, TypeSpec};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn block(doc: &str, names: &[&str]) -> DeclarationBlock {
        DeclarationBlock {
            kind: DeclKind::Type,
            doc: doc.to_string(),
            specs: names
                .iter()
                .enumerate()
                .map(|(i, n)| TypeSpec {
                    name: n.to_string(),
                    line: i + 1,
                })
                .collect(),
            location: Location::new(PathBuf::from("models.go"), 1),
        }
    }

    #[test]
    fn test_records_keep_order_and_duplicates() {
        let records = extract_records(&block("", &["Foo", "Bar", "Foo"]));
        let names: Vec<_> = records.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["Foo Foo", "Bar Bar", "Foo Foo"]);
    }

    #[test]
    fn test_unmarked_blocks_yield_nothing() {
        let matcher = Matcher::new("unknown");
        let blocks = vec![
            block("plain docs\n", &["Foo"]),
            block("converter:converter group Widgets\n", &["Bar"]),
        ];

        let matched: Vec<_> = extract_blocks(&blocks, &matcher).collect();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].group_key, "Widgets");
        assert_eq!(matched[0].records, vec![ConverterRecord::from_identifier("Bar")]);
    }

    #[test]
    fn test_invalid_go_file_is_a_parse_error() {
        let mut file = NamedTempFile::with_suffix(".go").unwrap();
        writeln!(
            file,
            "package models\n\n// converter:converter\ntype Broken struct {{ a int b int }}"
        )
        .unwrap();

        let err = extract_file(file.path(), &Matcher::new("unknown")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Parse { .. }));
    }

    #[test]
    fn test_extract_go_file() {
        let mut file = NamedTempFile::with_suffix(".go").unwrap();
        writeln!(
            file,
            r#"package models

// converter:converter
type Baz interface {{
	Convert(Source) Target
}}

// not annotated
type Qux struct{{}}"#
        )
        .unwrap();

        let groups = extract_file(file.path(), &Matcher::new("unknown")).unwrap();

        assert_eq!(groups.group_count(), 1);
        assert_eq!(
            groups.get("unknown").unwrap(),
            [ConverterRecord::from_identifier("Baz")].as_slice()
        );
    }
}
