use crate::tree::{SyntaxNode, TypeShape};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeResolveError {
    #[error("unsupported type reference shape: {shape}")]
    UnsupportedShape { shape: &'static str },

    #[error("nested indirection is not resolved")]
    NestedIndirection,
}

/// Base name of a type reference.
///
/// `T` resolves to `T`, and a single indirection `*T` is unwrapped once to
/// `T`. Every other shape, including `**T`, is an error.
pub fn base_type_name<N: SyntaxNode>(type_ref: &N) -> Result<String, TypeResolveError> {
    match type_ref.type_shape() {
        TypeShape::Named(name) => Ok(name.to_string()),
        TypeShape::Indirection(inner) => match inner.type_shape() {
            TypeShape::Named(name) => Ok(name.to_string()),
            TypeShape::Indirection(_) => Err(TypeResolveError::NestedIndirection),
            TypeShape::Unsupported(shape) => Err(TypeResolveError::UnsupportedShape { shape }),
        },
        TypeShape::Unsupported(shape) => Err(TypeResolveError::UnsupportedShape { shape }),
    }
}
