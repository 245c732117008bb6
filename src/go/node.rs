use crate::go::kind::GoKind;
use crate::tree::{SyntaxNode, TypeShape};
use std::fmt;
use std::ops::Range;
use tree_sitter::Node;

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// A node of a parsed Go file together with the text it was parsed from.
#[derive(Clone, Copy)]
pub struct GoNode<'tree> {
    node: Node<'tree>,
    source: &'tree str,
}

impl<'tree> GoNode<'tree> {
    pub(crate) fn new(node: Node<'tree>, source: &'tree str) -> Self {
        Self { node, source }
    }

    fn wrap(&self, node: Node<'tree>) -> Self {
        Self::new(node, self.source)
    }

    /// Underlying tree-sitter node.
    pub fn ts_node(&self) -> Node<'tree> {
        self.node
    }

    pub fn text(&self) -> &'tree str {
        &self.source[self.node.byte_range()]
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.node.byte_range()
    }

    pub fn position(&self) -> Position {
        let point = self.node.start_position();
        Position {
            line: point.row + 1,
            column: point.column + 1,
        }
    }

    /// Identifier of this node, as the name-based filters see it: the
    /// declared name, else the accessed member.
    pub fn name(&self) -> Option<&'tree str> {
        self.declared_name().or_else(|| self.member_name())
    }

    fn declared_name(&self) -> Option<&'tree str> {
        match self.kind() {
            GoKind::TypeSpec
            | GoKind::TypeAlias
            | GoKind::FunctionDeclaration
            | GoKind::MethodDeclaration
            | GoKind::MethodElem => self.identifier_field("name"),
            GoKind::ImportSpec => self.import_name(),
            GoKind::SourceFile => self.package_name(),
            _ => None,
        }
    }

    /// Local name of an import: an identifier, `_`, or `.` for dot imports.
    fn import_name(&self) -> Option<&'tree str> {
        let child = self.node.child_by_field_name("name")?;
        match child.kind() {
            "dot" => Some(&self.source[child.byte_range()]),
            _ => self.identifier_field("name"),
        }
    }

    /// Package named by a file's `package` clause.
    fn package_name(&self) -> Option<&'tree str> {
        let mut cursor = self.node.walk();
        let clause = self
            .node
            .named_children(&mut cursor)
            .find(|child| child.kind() == "package_clause")?;

        let mut cursor = clause.walk();
        let ident = clause
            .named_children(&mut cursor)
            .find(|child| child.kind() == "package_identifier")?;
        Some(&self.source[ident.byte_range()])
    }

    /// Package-qualified type references (`context.Context`) are
    /// `qualified_type` nodes, separate from value-level `selector_expression`.
    fn member_name(&self) -> Option<&'tree str> {
        match self.kind() {
            GoKind::SelectorExpression => self.identifier_field("field"),
            GoKind::QualifiedType => self.identifier_field("name"),
            _ => None,
        }
    }

    /// Text of the child in `field`, if that child is an identifier.
    fn identifier_field(&self, field: &str) -> Option<&'tree str> {
        let child = self.node.child_by_field_name(field)?;
        GoKind::from_grammar(child.kind())
            .is_identifier()
            .then(|| &self.source[child.byte_range()])
    }

    fn first_named_child(&self) -> Option<Node<'tree>> {
        let mut cursor = self.node.walk();
        let first = self.node.named_children(&mut cursor).next();
        first
    }
}

impl PartialEq for GoNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id() == other.node.id() && std::ptr::eq(self.source, other.source)
    }
}

impl Eq for GoNode<'_> {}

impl fmt::Debug for GoNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoNode")
            .field("kind", &self.node.kind())
            .field("range", &self.node.byte_range())
            .field("name", &self.name())
            .finish()
    }
}

impl SyntaxNode for GoNode<'_> {
    type Kind = GoKind;

    fn kind(&self) -> GoKind {
        GoKind::from_grammar(self.node.kind())
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .map(|child| self.wrap(child))
            .collect()
    }

    fn primary_identifier(&self) -> Option<&str> {
        self.declared_name()
    }

    fn member_identifier(&self) -> Option<&str> {
        self.member_name()
    }

    fn receiver_types(&self) -> Option<Vec<Self>> {
        match self.kind() {
            GoKind::MethodDeclaration => {
                let Some(list) = self.node.child_by_field_name("receiver") else {
                    return Some(Vec::new());
                };
                let mut cursor = list.walk();
                // One entry per declaration: `(a, b T)` declares a single
                // receiver field. A declaration without a type stands in for
                // itself and fails resolution.
                let types = list
                    .named_children(&mut cursor)
                    .filter(|param| {
                        matches!(
                            param.kind(),
                            "parameter_declaration" | "variadic_parameter_declaration"
                        )
                    })
                    .map(|param| self.wrap(param.child_by_field_name("type").unwrap_or(param)))
                    .collect();
                Some(types)
            }
            GoKind::FunctionDeclaration | GoKind::FuncLiteral => Some(Vec::new()),
            _ => None,
        }
    }

    fn type_shape(&self) -> TypeShape<'_, Self> {
        match self.kind() {
            GoKind::PointerType => match self.first_named_child() {
                Some(inner) => TypeShape::Indirection(self.wrap(inner)),
                None => TypeShape::Unsupported("pointer_type"),
            },
            GoKind::TypeIdentifier => TypeShape::Named(self.text()),
            _ => TypeShape::Unsupported(self.node.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{PatternFilter, SetFilter};
    use crate::find::find;
    use crate::go::parser::GoParser;
    use crate::resolve::{base_type_name, TypeResolveError};
    use crate::walk::walk;

    fn collect<'t>(root: GoNode<'t>, kind: GoKind) -> Vec<GoNode<'t>> {
        let mut out = Vec::new();
        walk(root, |node| {
            if node.kind() == kind {
                out.push(node);
            }
            true
        });
        out
    }

    #[test]
    fn declaration_names() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source(
                "a.go",
                r#"package a

import (
	alias "fmt"
	. "strings"
	_ "embed"
	"os"
)

type ServiceOne struct{}
type Alias = ServiceOne

func Free() {}
func (s *ServiceOne) Get() {}

type Getter interface {
	Get() error
}
"#
                .to_string(),
            )
            .unwrap();
        assert!(!file.has_errors());
        let root = file.root();

        let names = |kind| -> Vec<_> {
            collect(root, kind)
                .into_iter()
                .map(|n| n.name())
                .collect()
        };
        assert_eq!(names(GoKind::TypeSpec), vec![Some("ServiceOne"), Some("Getter")]);
        assert_eq!(names(GoKind::TypeAlias), vec![Some("Alias")]);
        assert_eq!(names(GoKind::FunctionDeclaration), vec![Some("Free")]);
        assert_eq!(names(GoKind::MethodDeclaration), vec![Some("Get")]);
        assert_eq!(names(GoKind::MethodElem), vec![Some("Get")]);
        assert_eq!(
            names(GoKind::ImportSpec),
            vec![Some("alias"), Some("."), Some("_"), None]
        );
        assert_eq!(names(GoKind::SourceFile), vec![Some("a")]);
    }

    #[test]
    fn files_match_by_package_name() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source("a.go", "package svc

type T int
".to_string())
            .unwrap();

        let found = find([file.root()], &SetFilter::new(["svc"], GoKind::SourceFile));
        assert_eq!(found, vec![file.root()]);
        assert!(find([file.root()], &SetFilter::new(["T"], GoKind::SourceFile)).is_empty());
    }

    #[test]
    fn qualified_types_are_not_selectors() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source(
                "a.go",
                "package a

func (s *ServiceOne) Get(ctx context.Context) error { return s.auth.Check() }
"
                    .to_string(),
            )
            .unwrap();
        let method = collect(file.root(), GoKind::MethodDeclaration)[0];

        let selectors = PatternFilter::new(".*", GoKind::SelectorExpression).unwrap();
        let names: Vec<_> = find([method], &selectors).iter().map(|n| n.name()).collect();
        assert_eq!(names, vec![Some("Check")]);

        let qualified = PatternFilter::new(".*", GoKind::QualifiedType).unwrap();
        let found = find([method], &qualified);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), Some("Context"));
        assert_eq!(found[0].text(), "context.Context");
    }

    #[test]
    fn selector_uses_field_name() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source(
                "a.go",
                "package a\n\nfunc f() { s.auth.Check(ctx) }\n".to_string(),
            )
            .unwrap();
        let selectors = collect(file.root(), GoKind::SelectorExpression);
        let names: Vec<_> = selectors.iter().map(|n| n.name()).collect();
        assert_eq!(names, vec![Some("Check"), Some("auth")]);
        assert_eq!(selectors[0].text(), "s.auth.Check");
    }

    #[test]
    fn plain_identifiers_have_no_name() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source("a.go", "package a\n\nvar x = y\n".to_string())
            .unwrap();
        for ident in collect(file.root(), GoKind::Identifier) {
            assert_eq!(ident.name(), None);
        }
    }

    #[test]
    fn receivers_and_type_shapes() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source(
                "a.go",
                r#"package a

func (s *ServiceOne) A() {}
func (s ServiceOne) B() {}
func (a ServiceOne, b ServiceOne) C() {}
func (s *pkg.Remote) D() {}
func Free() {}
"#
                .to_string(),
            )
            .unwrap();
        let methods = collect(file.root(), GoKind::MethodDeclaration);
        assert_eq!(methods.len(), 4);

        let resolved: Vec<_> = methods
            .iter()
            .map(|m| {
                let receivers = m.receiver_types().unwrap();
                (receivers.len(), base_type_name(&receivers[0]))
            })
            .collect();
        assert_eq!(resolved[0], (1, Ok("ServiceOne".to_string())));
        assert_eq!(resolved[1], (1, Ok("ServiceOne".to_string())));
        assert_eq!(resolved[2].0, 2);
        assert_eq!(
            resolved[3].1,
            Err(TypeResolveError::UnsupportedShape {
                shape: "qualified_type"
            })
        );

        let free = collect(file.root(), GoKind::FunctionDeclaration);
        assert_eq!(free[0].receiver_types(), Some(Vec::new()));
        assert_eq!(file.root().receiver_types(), None);
    }

    #[test]
    fn positions_are_one_based() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source("a.go", "package a\n\ntype T int\n".to_string())
            .unwrap();
        let spec = collect(file.root(), GoKind::TypeSpec)[0];
        assert_eq!(spec.position(), Position { line: 3, column: 6 });
    }
}
