use crate::go::errors::SourceError;
use crate::go::node::GoNode;
use ast_grep_language::{LanguageExt, SupportLang};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Parser, Tree};

/// Tree-sitter parser wrapper for Go source code.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, SourceError> {
        let mut parser = Parser::new();
        // Get the tree-sitter Language from ast-grep-language
        let ts_lang = SupportLang::Go.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| SourceError::LanguageSet)?;

        Ok(Self { parser })
    }

    /// Parse source code into a tree-sitter Tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, SourceError> {
        self.parser
            .parse(source, None)
            .ok_or(SourceError::ParseFailed)
    }

    /// Parse `source` and keep it alongside its tree.
    pub fn parse_source(
        &mut self,
        path: impl Into<PathBuf>,
        source: String,
    ) -> Result<SourceFile, SourceError> {
        let tree = self.parse(&source)?;
        Ok(SourceFile {
            path: path.into(),
            source,
            tree,
        })
    }

    pub fn parse_file(&mut self, path: &Path) -> Result<SourceFile, SourceError> {
        let source = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_source(path, source)
    }
}

/// A parsed Go file: path, text and tree.
pub struct SourceFile {
    path: PathBuf,
    source: String,
    tree: Tree,
}

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root node of the file, usable as a query root.
    pub fn root(&self) -> GoNode<'_> {
        GoNode::new(self.tree.root_node(), &self.source)
    }

    /// Name from the `package` clause.
    pub fn package_name(&self) -> Option<&str> {
        self.root().name()
    }

    /// Check if the tree contains any ERROR nodes.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Get all ERROR and MISSING nodes in the tree.
    pub fn error_nodes(&self) -> Vec<ErrorNode> {
        let mut errors = Vec::new();
        collect_error_nodes(self.tree.root_node(), &mut errors);
        errors
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("len", &self.source.len())
            .finish()
    }
}

/// Information about an ERROR node in the parse tree.
#[derive(Debug, Clone)]
pub struct ErrorNode {
    pub byte_start: usize,
    pub byte_end: usize,
    pub start_point: tree_sitter::Point,
    pub end_point: tree_sitter::Point,
}

fn collect_error_nodes(node: tree_sitter::Node<'_>, errors: &mut Vec<ErrorNode>) {
    if node.is_error() || node.is_missing() {
        errors.push(ErrorNode {
            byte_start: node.start_byte(),
            byte_end: node.end_byte(),
            start_point: node.start_position(),
            end_point: node.end_position(),
        });
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, errors);
    }
}
