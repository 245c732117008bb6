use crate::config::schema::{FilterSpec, QueryDefinition};
use crate::filter::{Filter, FilterError, MethodFilter, PatternFilter, SetFilter};
use crate::find::find;
use crate::go::GoKind;
use crate::tree::SyntaxNode;

/// A [`FilterSpec`] with its kind name and pattern checked.
#[derive(Debug, Clone)]
pub enum CompiledFilter {
    Set(SetFilter<GoKind>),
    Pattern(PatternFilter<GoKind>),
    Method(MethodFilter),
}

impl<N> Filter<N> for CompiledFilter
where
    N: SyntaxNode<Kind = GoKind>,
{
    fn matches(&self, node: &N) -> bool {
        match self {
            CompiledFilter::Set(filter) => filter.matches(node),
            CompiledFilter::Pattern(filter) => filter.matches(node),
            CompiledFilter::Method(filter) => filter.matches(node),
        }
    }
}

impl FilterSpec {
    pub fn compile(&self) -> Result<CompiledFilter, FilterError> {
        match self {
            FilterSpec::Set { names, kind } => Ok(CompiledFilter::Set(SetFilter::new(
                names.iter().cloned(),
                parse_kind(kind)?,
            ))),
            FilterSpec::Pattern { pattern, kind } => Ok(CompiledFilter::Pattern(
                PatternFilter::new(pattern, parse_kind(kind)?)?,
            )),
            FilterSpec::Method {
                receiver,
                exported_only,
            } => {
                let receiver = receiver.trim().trim_start_matches('*');
                if receiver.is_empty() {
                    return Err(FilterError::EmptyReceiver);
                }
                Ok(CompiledFilter::Method(MethodFilter::new(receiver, *exported_only)))
            }
        }
    }
}

fn parse_kind(name: &str) -> Result<GoKind, FilterError> {
    GoKind::from_name(name).ok_or_else(|| FilterError::UnknownKind {
        name: name.to_string(),
    })
}

/// A compiled [`QueryDefinition`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    id: String,
    steps: Vec<CompiledFilter>,
}

impl Pipeline {
    pub fn new(id: impl Into<String>, steps: Vec<CompiledFilter>) -> Self {
        Self {
            id: id.into(),
            steps,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn steps(&self) -> &[CompiledFilter] {
        &self.steps
    }

    /// Run every step, feeding each step's matches to the next as roots.
    pub fn run<N, I>(&self, roots: I) -> Vec<N>
    where
        N: SyntaxNode<Kind = GoKind>,
        I: IntoIterator<Item = N>,
    {
        let mut current: Vec<N> = roots.into_iter().collect();
        for (index, step) in self.steps.iter().enumerate() {
            current = find(current, step);
            tracing::debug!(
                query = %self.id,
                step = index + 1,
                matches = current.len(),
                "step complete"
            );
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

impl QueryDefinition {
    pub fn compile(&self) -> Result<Pipeline, FilterError> {
        let steps = self
            .steps
            .iter()
            .map(FilterSpec::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Pipeline::new(self.id.clone(), steps))
    }
}
