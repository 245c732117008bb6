use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// A file of named queries.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct QueryConfig {
    #[serde(default)]
    pub meta: Metadata,
    #[serde(default)]
    pub queries: Vec<QueryDefinition>,
}

impl QueryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.queries.is_empty() {
            issues.push(ValidationIssue::EmptyQueryList);
        }

        let mut seen = HashSet::new();
        for query in &self.queries {
            if query.id.trim().is_empty() {
                issues.push(ValidationIssue::MissingField {
                    query_id: None,
                    field: "id",
                });
            } else if !seen.insert(query.id.as_str()) {
                issues.push(ValidationIssue::DuplicateId {
                    id: query.id.clone(),
                });
            }

            if query.steps.is_empty() {
                issues.push(ValidationIssue::MissingField {
                    query_id: Some(query.id.clone()),
                    field: "steps",
                });
            }

            for (index, step) in query.steps.iter().enumerate() {
                if let Err(error) = step.compile() {
                    issues.push(ValidationIssue::InvalidStep {
                        query_id: query.id.clone(),
                        step: index + 1,
                        message: error.to_string(),
                    });
                }
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    pub fn get(&self, id: &str) -> Option<&QueryDefinition> {
        self.queries.iter().find(|query| query.id == id)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A named pipeline of filters.
///
/// The first step searches the input roots; each later step searches inside
/// every node the previous step returned.
#[derive(Debug, Deserialize, Clone)]
pub struct QueryDefinition {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<FilterSpec>,
}

/// Declarative form of a filter, as written in query files.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FilterSpec {
    /// Identifier is one of `names`.
    Set { names: Vec<String>, kind: String },
    /// Identifier contains a match of `pattern` (unanchored).
    Pattern { pattern: String, kind: String },
    /// Method whose single receiver resolves to `receiver`.
    Method {
        receiver: String,
        #[serde(default)]
        exported_only: bool,
    },
}

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyQueryList,
    MissingField {
        query_id: Option<String>,
        field: &'static str,
    },
    DuplicateId {
        id: String,
    },
    InvalidStep {
        query_id: String,
        step: usize,
        message: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyQueryList => write!(f, "query config contains no queries"),
            ValidationIssue::MissingField { query_id, field } => match query_id {
                Some(id) => write!(f, "query '{id}' missing required field '{field}'"),
                None => write!(f, "query missing required field '{field}'"),
            },
            ValidationIssue::DuplicateId { id } => {
                write!(f, "query id '{id}' is used more than once")
            }
            ValidationIssue::InvalidStep {
                query_id,
                step,
                message,
            } => write!(f, "query '{query_id}' step {step} is invalid: {message}"),
        }
    }
}
