use crate::filter::Filter;
use crate::ident::is_exported;
use crate::resolve::base_type_name;
use crate::tree::SyntaxNode;

/// Matches methods bound to a receiver type.
///
/// A candidate must declare exactly one receiver parameter whose type
/// resolves (by value or through one pointer) to `receiver_type`. Free
/// functions and receiver lists with several parameters never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodFilter {
    receiver_type: String,
    exported_only: bool,
}

impl MethodFilter {
    /// `receiver_type` is the base name, without any `*`.
    pub fn new(receiver_type: impl Into<String>, exported_only: bool) -> Self {
        Self {
            receiver_type: receiver_type.into(),
            exported_only,
        }
    }

    pub fn receiver_type(&self) -> &str {
        &self.receiver_type
    }

    pub fn exported_only(&self) -> bool {
        self.exported_only
    }
}

impl<N: SyntaxNode> Filter<N> for MethodFilter {
    fn matches(&self, node: &N) -> bool {
        let Some(receivers) = node.receiver_types() else {
            return false;
        };
        let [receiver] = receivers.as_slice() else {
            return false;
        };

        match base_type_name(receiver) {
            Ok(name) if name == self.receiver_type => {}
            Ok(_) => return false,
            Err(error) => {
                tracing::trace!(%error, "receiver type not resolvable");
                return false;
            }
        }

        !self.exported_only || node.primary_identifier().is_some_and(is_exported)
    }
}
