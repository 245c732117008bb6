//! In-memory tree used to exercise the generic engine without a parser.
//!
//! Trees are written as s-expressions: `(kind [name] children...)`, e.g.
//! `(file (type A) (method Get (recv (ptr (tref A))) (call Check)))`.

use crate::tree::{SyntaxNode, TypeShape};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    File,
    Block,
    Type,
    Func,
    Method,
    Recv,
    Call,
    Ptr,
    TypeRef,
    Qualified,
}

impl Kind {
    fn parse(keyword: &str) -> Kind {
        match keyword {
            "file" => Kind::File,
            "block" => Kind::Block,
            "type" => Kind::Type,
            "func" => Kind::Func,
            "method" => Kind::Method,
            "recv" => Kind::Recv,
            "call" => Kind::Call,
            "ptr" => Kind::Ptr,
            "tref" => Kind::TypeRef,
            "qual" => Kind::Qualified,
            other => panic!("unknown test node kind {other:?}"),
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Kind::File => "file",
            Kind::Block => "block",
            Kind::Type => "type",
            Kind::Func => "func",
            Kind::Method => "method",
            Kind::Recv => "recv",
            Kind::Call => "call",
            Kind::Ptr => "ptr",
            Kind::TypeRef => "tref",
            Kind::Qualified => "qual",
        }
    }
}

/// Owned description of a subtree, used to build arenas and by proptest.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    pub kind: Kind,
    pub name: Option<String>,
    pub children: Vec<NodeSpec>,
}

#[derive(Debug)]
struct ArenaNode {
    kind: Kind,
    name: Option<String>,
    children: Vec<usize>,
}

#[derive(Debug)]
pub struct ArenaTree {
    nodes: Vec<ArenaNode>,
}

impl ArenaTree {
    pub fn parse(input: &str) -> Self {
        let tokens = tokenize(input);
        let mut pos = 0;
        let spec = parse_spec(&tokens, &mut pos);
        assert_eq!(pos, tokens.len(), "trailing input in {input:?}");
        Self::from_spec(&spec)
    }

    pub fn from_spec(spec: &NodeSpec) -> Self {
        let mut tree = ArenaTree { nodes: Vec::new() };
        tree.push(spec);
        tree
    }

    /// `file` root followed by `depth` nested blocks.
    pub fn chain(depth: usize) -> Self {
        let mut nodes = Vec::with_capacity(depth + 1);
        for index in 0..=depth {
            nodes.push(ArenaNode {
                kind: if index == 0 { Kind::File } else { Kind::Block },
                name: None,
                children: if index < depth { vec![index + 1] } else { Vec::new() },
            });
        }
        ArenaTree { nodes }
    }

    fn push(&mut self, spec: &NodeSpec) -> usize {
        let index = self.nodes.len();
        self.nodes.push(ArenaNode {
            kind: spec.kind,
            name: spec.name.clone(),
            children: Vec::new(),
        });
        let children: Vec<usize> = spec.children.iter().map(|c| self.push(c)).collect();
        self.nodes[index].children = children;
        index
    }

    pub fn root(&self) -> Handle<'_> {
        Handle {
            tree: self,
            index: 0,
        }
    }

    /// Every node in pre-order.
    pub fn all(&self) -> Vec<Handle<'_>> {
        (0..self.nodes.len())
            .map(|index| Handle { tree: self, index })
            .collect()
    }

    /// Whether `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: Handle<'_>, node: Handle<'_>) -> bool {
        let mut stack = self.nodes[ancestor.index].children.clone();
        while let Some(index) = stack.pop() {
            if index == node.index {
                return true;
            }
            stack.extend(self.nodes[index].children.iter().copied());
        }
        false
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Handle<'a> {
    tree: &'a ArenaTree,
    index: usize,
}

impl PartialEq for Handle<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for Handle<'_> {}

impl<'a> Handle<'a> {
    fn node(&self) -> &'a ArenaNode {
        &self.tree.nodes[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Name if the node has one, otherwise its kind keyword.
    pub fn label(&self) -> &'a str {
        let node = self.node();
        node.name.as_deref().unwrap_or(node.kind.keyword())
    }
}

impl SyntaxNode for Handle<'_> {
    type Kind = Kind;

    fn kind(&self) -> Kind {
        self.node().kind
    }

    fn children(&self) -> Vec<Self> {
        self.node()
            .children
            .iter()
            .map(|&index| Handle {
                tree: self.tree,
                index,
            })
            .collect()
    }

    fn primary_identifier(&self) -> Option<&str> {
        match self.kind() {
            Kind::Type | Kind::Func | Kind::Method => self.node().name.as_deref(),
            _ => None,
        }
    }

    fn member_identifier(&self) -> Option<&str> {
        match self.kind() {
            Kind::Call | Kind::Qualified => self.node().name.as_deref(),
            _ => None,
        }
    }

    fn receiver_types(&self) -> Option<Vec<Self>> {
        match self.kind() {
            Kind::Func => Some(Vec::new()),
            Kind::Method => Some(
                self.children()
                    .into_iter()
                    .filter(|c| c.kind() == Kind::Recv)
                    .flat_map(|recv| recv.children())
                    .collect(),
            ),
            _ => None,
        }
    }

    fn type_shape(&self) -> TypeShape<'_, Self> {
        match self.kind() {
            Kind::Ptr => match self.children().first() {
                Some(&inner) => TypeShape::Indirection(inner),
                None => TypeShape::Unsupported("empty pointer"),
            },
            Kind::TypeRef => match self.node().name.as_deref() {
                Some(name) => TypeShape::Named(name),
                None => TypeShape::Unsupported("anonymous type"),
            },
            other => TypeShape::Unsupported(other.keyword()),
        }
    }
}

fn tokenize(input: &str) -> Vec<String> {
    input
        .replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn parse_spec(tokens: &[String], pos: &mut usize) -> NodeSpec {
    assert_eq!(tokens[*pos], "(", "expected '(' at token {pos}");
    *pos += 1;
    let kind = Kind::parse(&tokens[*pos]);
    *pos += 1;

    let mut name = None;
    if tokens[*pos] != "(" && tokens[*pos] != ")" {
        name = Some(tokens[*pos].clone());
        *pos += 1;
    }

    let mut children = Vec::new();
    while tokens[*pos] != ")" {
        children.push(parse_spec(tokens, pos));
    }
    *pos += 1;

    NodeSpec {
        kind,
        name,
        children,
    }
}

/// Random trees mixing named declarations, member accesses and containers.
pub fn arb_tree() -> impl Strategy<Value = NodeSpec> {
    let names = prop::sample::select(vec!["A", "B", "Get", "get", "Check", "MyA"]);
    let leaf = (
        prop::sample::select(vec![Kind::Type, Kind::Call, Kind::Func, Kind::Block]),
        names,
    )
        .prop_map(|(kind, name)| NodeSpec {
            kind,
            name: (kind != Kind::Block).then(|| name.to_string()),
            children: Vec::new(),
        });

    leaf.prop_recursive(5, 64, 4, |inner| {
        (
            prop::sample::select(vec![Kind::Type, Kind::Func, Kind::Block, Kind::Call]),
            prop::sample::select(vec!["A", "B", "Get", "Check"]),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(kind, name, children)| NodeSpec {
                kind,
                name: (kind != Kind::Block).then(|| name.to_string()),
                children,
            })
    })
    .prop_map(|body| NodeSpec {
        kind: Kind::File,
        name: None,
        children: vec![body],
    })
}
