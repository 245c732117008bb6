//! Thread-local parser reuse.
//!
//! Loading a package parses many files in a row; one `GoParser` per thread
//! is created on first use and reused afterwards.

use crate::go::{GoParser, SourceError};
use std::cell::RefCell;

thread_local! {
    static GO_PARSER: RefCell<Option<GoParser>> = const { RefCell::new(None) };
}

/// Execute `f` with this thread's pooled parser.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use astquery::pool::with_parser;
///
/// let file = with_parser(|parser| {
///     parser.parse_source("main.go", "package main".to_string())
/// })??;
/// assert_eq!(file.package_name(), Some("main"));
/// # Ok(())
/// # }
/// ```
pub fn with_parser<F, R>(f: F) -> Result<R, SourceError>
where
    F: FnOnce(&mut GoParser) -> R,
{
    GO_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let parser = match slot.take() {
            Some(parser) => parser,
            None => GoParser::new()?,
        };
        Ok(f(slot.insert(parser)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_is_reused() {
        let first = with_parser(|parser| parser as *const GoParser as usize).unwrap();
        let second = with_parser(|parser| parser as *const GoParser as usize).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parses_through_pool() {
        let file = with_parser(|parser| {
            parser.parse_source("a.go", "package a\n".to_string())
        })
        .unwrap()
        .unwrap();
        assert_eq!(file.package_name(), Some("a"));
    }
}
