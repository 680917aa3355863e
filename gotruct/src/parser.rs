//! @ai:module:intent Parse Go source files into top-level declaration blocks
//! @ai:module:layer application
//! @ai:module:public_api parse_file, parse_source, ParsedSource
//! @ai:module:depends_on comment, declaration, error
//! @ai:module:stateless true

use crate::comment::CommentGroup;
use crate::declaration::{DeclKind, DeclarationBlock, Location, TypeSpec};
use crate::error::{Error, Result};
use arborium_tree_sitter as tree_sitter;
use std::path::{Path, PathBuf};
use tree_sitter::{Language, Node, Parser, Tree};

/// @ai:intent Parsed source file: package clause plus its declaration blocks
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub path: PathBuf,
    pub package: String,
    pub blocks: Vec<DeclarationBlock>,
}

/// @ai:intent Parse a source file from disk
/// @ai:pre path exists and is readable
/// @ai:post result holds every import/const/var/type declaration in source order
/// @ai:effects fs:read
pub fn parse_file(path: &Path) -> Result<ParsedSource> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_source(path, &content)
}

/// @ai:intent Parse source text already in memory
/// @ai:post Err(Parse) when the syntax tree contains any error or missing node
/// @ai:effects pure
pub fn parse_source(path: &Path, src: &str) -> Result<ParsedSource> {
    let tree = parse_tree(path, src)?;
    let root = tree.root_node();

    if root.has_error() {
        return Err(syntax_error(path, src, root));
    }

    SourceWalker { path, src }.walk(root)
}

fn go_language() -> Language {
    arborium_go::language().into()
}

fn parse_tree(path: &Path, src: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&go_language())
        .map_err(|e| Error::Grammar(e.to_string()))?;

    parser
        .parse(src, None)
        .ok_or_else(|| Error::parse(path, 1, "parser produced no syntax tree"))
}

/// @ai:intent Named children of a node in source order
fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let mut result = Vec::new();
    if cursor.goto_first_child() {
        loop {
            let child = cursor.node();
            if child.is_named() {
                result.push(child);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    result
}

/// @ai:intent First error or missing node in document order
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            if let Some(found) = first_error(cursor.node()) {
                return Some(found);
            }
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    None
}

fn syntax_error(path: &Path, src: &str, root: Node<'_>) -> Error {
    let Some(node) = first_error(root) else {
        return Error::parse(path, root.end_position().row + 1, "syntax error");
    };
    let line = node.start_position().row + 1;

    if node.is_missing() {
        return Error::parse(path, line, format!("syntax error: missing '{}'", node.kind()));
    }

    let found = node
        .utf8_text(src.as_bytes())
        .unwrap_or_default()
        .split_whitespace()
        .next()
        .unwrap_or_default();
    let message = if found.is_empty() {
        "syntax error: unexpected end of file".to_string()
    } else {
        format!("syntax error: unexpected {found}")
    };

    Error::parse(path, line, message)
}

/// @ai:example ("type_declaration") -> Some(Type)
/// @ai:example ("function_declaration") -> None
fn declaration_kind(node_kind: &str) -> Option<DeclKind> {
    node_kind
        .strip_suffix("_declaration")
        .and_then(DeclKind::from_keyword)
}

struct SourceWalker<'a> {
    path: &'a Path,
    src: &'a str,
}

impl<'a> SourceWalker<'a> {
    /// @ai:intent Collect the package name and every top-level declaration block
    /// @ai:pre root has no error nodes
    fn walk(&self, root: Node<'_>) -> Result<ParsedSource> {
        let children = named_children(root);
        let mut package = None;
        let mut blocks = Vec::new();

        for (index, &node) in children.iter().enumerate() {
            let kind = node.kind();
            if kind == "comment" {
                continue;
            }

            if package.is_none() {
                if kind != "package_clause" {
                    let found = self.leading_word(node);
                    return Err(self.error_at(node, format!("expected 'package', found {found}")));
                }
                package = Some(self.package_name(node)?);
                continue;
            }

            match kind {
                "function_declaration" | "method_declaration" => {}
                _ => match declaration_kind(kind) {
                    Some(decl_kind) => blocks.push(self.block(decl_kind, &children, index)?),
                    None => {
                        let found = self.leading_word(node);
                        return Err(self.error_at(node, format!("expected declaration, found {found}")));
                    }
                },
            }
        }

        let package = package.ok_or_else(|| {
            Error::parse(
                self.path,
                root.end_position().row + 1,
                "expected 'package', found EOF",
            )
        })?;

        Ok(ParsedSource {
            path: self.path.to_path_buf(),
            package,
            blocks,
        })
    }

    fn text(&self, node: Node<'_>) -> &'a str {
        node.utf8_text(self.src.as_bytes()).unwrap_or_default()
    }

    fn leading_word(&self, node: Node<'_>) -> &'a str {
        self.text(node).split_whitespace().next().unwrap_or_default()
    }

    fn error_at(&self, node: Node<'_>, message: impl Into<String>) -> Error {
        Error::parse(self.path, node.start_position().row + 1, message)
    }

    fn package_name(&self, clause: Node<'_>) -> Result<String> {
        named_children(clause)
            .into_iter()
            .find(|c| c.kind() == "package_identifier")
            .map(|c| self.text(c).to_string())
            .ok_or_else(|| self.error_at(clause, "expected package name"))
    }

    fn block(&self, kind: DeclKind, siblings: &[Node<'_>], index: usize) -> Result<DeclarationBlock> {
        let node = siblings[index];
        let specs = if kind == DeclKind::Type {
            self.type_specs(node)?
        } else {
            Vec::new()
        };

        Ok(DeclarationBlock {
            kind,
            doc: self.doc_comment(siblings, index),
            specs,
            location: Location::new(self.path.to_path_buf(), node.start_position().row + 1),
        })
    }

    /// @ai:intent Type specs and aliases of a `type` declaration, grouped or single
    fn type_specs(&self, decl: Node<'_>) -> Result<Vec<TypeSpec>> {
        named_children(decl)
            .into_iter()
            .filter(|c| matches!(c.kind(), "type_spec" | "type_alias"))
            .map(|spec| {
                let name = spec
                    .child_by_field_name("name")
                    .ok_or_else(|| self.error_at(spec, "expected type name"))?;
                Ok(TypeSpec {
                    name: self.text(name).to_string(),
                    line: name.start_position().row + 1,
                })
            })
            .collect()
    }

    /// @ai:intent Documentation text of the comment group ending on the line above a declaration
    /// @ai:post empty when a blank line or a token separates the comments from the declaration
    fn doc_comment(&self, siblings: &[Node<'_>], index: usize) -> String {
        let before = &siblings[..index];
        let run_start = before
            .iter()
            .rposition(|n| n.kind() != "comment")
            .map_or(0, |i| i + 1);
        let mut comments = &before[run_start..];

        // comments starting on the line where the previous node ends trail that node
        if let Some(prev) = run_start.checked_sub(1).map(|i| before[i]) {
            let mut line = prev.end_position().row;
            let trailing = comments
                .iter()
                .take_while(|c| {
                    let same_line = c.start_position().row == line;
                    if same_line {
                        line = c.end_position().row;
                    }
                    same_line
                })
                .count();
            comments = &comments[trailing..];
        }

        let Some(last) = comments.last() else {
            return String::new();
        };
        if last.end_position().row + 1 != siblings[index].start_position().row {
            return String::new();
        }

        let mut start = comments.len() - 1;
        while start > 0
            && comments[start - 1].end_position().row + 1 >= comments[start].start_position().row
        {
            start -= 1;
        }

        CommentGroup::new(comments[start..].iter().map(|&c| self.text(c))).text()
    }
}
