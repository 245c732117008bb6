use std::fmt;

/// Node kinds of the Go grammar that queries can name.
///
/// Kinds the tool has no use for are carried as [`GoKind::Other`] with the
/// grammar's own kind string.
///
/// The grammar separates member access on values (`s.auth.Check`,
/// [`GoKind::SelectorExpression`]) from package-qualified type names
/// (`context.Context`, [`GoKind::QualifiedType`]). Both expose the name after
/// the dot, but a query has to name the kind it wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoKind {
    SourceFile,
    PackageClause,
    ImportDeclaration,
    ImportSpec,
    TypeDeclaration,
    TypeSpec,
    TypeAlias,
    FunctionDeclaration,
    MethodDeclaration,
    FuncLiteral,
    MethodElem,
    ParameterList,
    ParameterDeclaration,
    VariadicParameterDeclaration,
    FieldDeclaration,
    ConstSpec,
    VarSpec,
    Block,
    CallExpression,
    SelectorExpression,
    QualifiedType,
    PointerType,
    GenericType,
    StructType,
    InterfaceType,
    TypeIdentifier,
    Identifier,
    FieldIdentifier,
    PackageIdentifier,
    BlankIdentifier,
    Other(&'static str),
}

impl GoKind {
    /// Every named kind, in the order `astquery kinds` lists them.
    pub const ALL: &'static [GoKind] = &[
        GoKind::SourceFile,
        GoKind::PackageClause,
        GoKind::ImportDeclaration,
        GoKind::ImportSpec,
        GoKind::TypeDeclaration,
        GoKind::TypeSpec,
        GoKind::TypeAlias,
        GoKind::FunctionDeclaration,
        GoKind::MethodDeclaration,
        GoKind::FuncLiteral,
        GoKind::MethodElem,
        GoKind::ParameterList,
        GoKind::ParameterDeclaration,
        GoKind::VariadicParameterDeclaration,
        GoKind::FieldDeclaration,
        GoKind::ConstSpec,
        GoKind::VarSpec,
        GoKind::Block,
        GoKind::CallExpression,
        GoKind::SelectorExpression,
        GoKind::QualifiedType,
        GoKind::PointerType,
        GoKind::GenericType,
        GoKind::StructType,
        GoKind::InterfaceType,
        GoKind::TypeIdentifier,
        GoKind::Identifier,
        GoKind::FieldIdentifier,
        GoKind::PackageIdentifier,
        GoKind::BlankIdentifier,
    ];

    /// Map a grammar kind string to its tag.
    pub fn from_grammar(kind: &'static str) -> Self {
        match kind {
            "source_file" => GoKind::SourceFile,
            "package_clause" => GoKind::PackageClause,
            "import_declaration" => GoKind::ImportDeclaration,
            "import_spec" => GoKind::ImportSpec,
            "type_declaration" => GoKind::TypeDeclaration,
            "type_spec" => GoKind::TypeSpec,
            "type_alias" => GoKind::TypeAlias,
            "function_declaration" => GoKind::FunctionDeclaration,
            "method_declaration" => GoKind::MethodDeclaration,
            "func_literal" => GoKind::FuncLiteral,
            // Older grammars call interface methods `method_spec`.
            "method_elem" | "method_spec" => GoKind::MethodElem,
            "parameter_list" => GoKind::ParameterList,
            "parameter_declaration" => GoKind::ParameterDeclaration,
            "variadic_parameter_declaration" => GoKind::VariadicParameterDeclaration,
            "field_declaration" => GoKind::FieldDeclaration,
            "const_spec" => GoKind::ConstSpec,
            "var_spec" => GoKind::VarSpec,
            "block" => GoKind::Block,
            "call_expression" => GoKind::CallExpression,
            "selector_expression" => GoKind::SelectorExpression,
            "qualified_type" => GoKind::QualifiedType,
            "pointer_type" => GoKind::PointerType,
            "generic_type" => GoKind::GenericType,
            "struct_type" => GoKind::StructType,
            "interface_type" => GoKind::InterfaceType,
            "type_identifier" => GoKind::TypeIdentifier,
            "identifier" => GoKind::Identifier,
            "field_identifier" => GoKind::FieldIdentifier,
            "package_identifier" => GoKind::PackageIdentifier,
            "blank_identifier" => GoKind::BlankIdentifier,
            other => GoKind::Other(other),
        }
    }

    /// Look up a named kind by its grammar name, as written in query files
    /// and on the command line. `Other` kinds cannot be named.
    pub fn from_name(name: &str) -> Option<Self> {
        GoKind::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoKind::SourceFile => "source_file",
            GoKind::PackageClause => "package_clause",
            GoKind::ImportDeclaration => "import_declaration",
            GoKind::ImportSpec => "import_spec",
            GoKind::TypeDeclaration => "type_declaration",
            GoKind::TypeSpec => "type_spec",
            GoKind::TypeAlias => "type_alias",
            GoKind::FunctionDeclaration => "function_declaration",
            GoKind::MethodDeclaration => "method_declaration",
            GoKind::FuncLiteral => "func_literal",
            GoKind::MethodElem => "method_elem",
            GoKind::ParameterList => "parameter_list",
            GoKind::ParameterDeclaration => "parameter_declaration",
            GoKind::VariadicParameterDeclaration => "variadic_parameter_declaration",
            GoKind::FieldDeclaration => "field_declaration",
            GoKind::ConstSpec => "const_spec",
            GoKind::VarSpec => "var_spec",
            GoKind::Block => "block",
            GoKind::CallExpression => "call_expression",
            GoKind::SelectorExpression => "selector_expression",
            GoKind::QualifiedType => "qualified_type",
            GoKind::PointerType => "pointer_type",
            GoKind::GenericType => "generic_type",
            GoKind::StructType => "struct_type",
            GoKind::InterfaceType => "interface_type",
            GoKind::TypeIdentifier => "type_identifier",
            GoKind::Identifier => "identifier",
            GoKind::FieldIdentifier => "field_identifier",
            GoKind::PackageIdentifier => "package_identifier",
            GoKind::BlankIdentifier => "blank_identifier",
            GoKind::Other(kind) => kind,
        }
    }

    /// Kinds whose text is an identifier.
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            GoKind::Identifier
                | GoKind::TypeIdentifier
                | GoKind::FieldIdentifier
                | GoKind::PackageIdentifier
                | GoKind::BlankIdentifier
        )
    }
}

impl fmt::Display for GoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
