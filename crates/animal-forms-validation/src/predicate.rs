//! Acceptance predicates
//!
//! A predicate decides whether a name/description pair is acceptable. Forms
//! take one as a strategy instead of hard-coding the rule, so callers can plug
//! in a uniqueness lookup, a format check, or any closure.

use crate::string::{is_blank, validate_max_length};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Decides whether a record's name and description are acceptable
pub trait AcceptancePredicate: Send + Sync {
    fn accept(&self, name: &str, description: Option<&str>) -> bool;
}

impl<F> AcceptancePredicate for F
where
    F: Fn(&str, Option<&str>) -> bool + Send + Sync,
{
    fn accept(&self, name: &str, description: Option<&str>) -> bool {
        self(name, description)
    }
}

/// Accepts any record whose name is not blank
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireName;

impl AcceptancePredicate for RequireName {
    fn accept(&self, name: &str, _description: Option<&str>) -> bool {
        !is_blank(name)
    }
}

/// Upper bounds on field lengths, in characters
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLength {
    pub name: Option<usize>,
    pub description: Option<usize>,
}

impl AcceptancePredicate for MaxLength {
    fn accept(&self, name: &str, description: Option<&str>) -> bool {
        let name_ok = self
            .name
            .map_or(true, |max| validate_max_length(name, max).is_ok());
        let description_ok = match (self.description, description) {
            (Some(max), Some(d)) => validate_max_length(d, max).is_ok(),
            _ => true,
        };
        name_ok && description_ok
    }
}

/// Name must match a regular expression
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl AcceptancePredicate for NamePattern {
    fn accept(&self, name: &str, _description: Option<&str>) -> bool {
        self.regex.is_match(name.trim())
    }
}

/// A set of names already taken
pub trait NameLookup: Send + Sync {
    fn contains_name(&self, name: &str) -> bool;
}

fn contains_ignore_case<'a>(mut names: impl Iterator<Item = &'a String>, name: &str) -> bool {
    let wanted = name.trim().to_lowercase();
    names.any(|n| n.trim().to_lowercase() == wanted)
}

impl NameLookup for HashSet<String> {
    fn contains_name(&self, name: &str) -> bool {
        self.contains(name) || contains_ignore_case(self.iter(), name)
    }
}

impl NameLookup for BTreeSet<String> {
    fn contains_name(&self, name: &str) -> bool {
        self.contains(name) || contains_ignore_case(self.iter(), name)
    }
}

impl NameLookup for Vec<String> {
    fn contains_name(&self, name: &str) -> bool {
        contains_ignore_case(self.iter(), name)
    }
}

/// Rejects names already present in a lookup (case-insensitive)
#[derive(Debug, Clone, Default)]
pub struct UniqueName<L> {
    existing: L,
}

impl<L: NameLookup> UniqueName<L> {
    pub fn new(existing: L) -> Self {
        Self { existing }
    }
}

impl<L: NameLookup> AcceptancePredicate for UniqueName<L> {
    fn accept(&self, name: &str, _description: Option<&str>) -> bool {
        !self.existing.contains_name(name)
    }
}

/// Conjunction of predicates. An empty `AllOf` accepts everything.
#[derive(Default)]
pub struct AllOf {
    predicates: Vec<Box<dyn AcceptancePredicate>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, predicate: impl AcceptancePredicate + 'static) -> Self {
        self.push(predicate);
        self
    }

    pub fn push(&mut self, predicate: impl AcceptancePredicate + 'static) {
        self.predicates.push(Box::new(predicate));
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl fmt::Debug for AllOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl AcceptancePredicate for AllOf {
    fn accept(&self, name: &str, description: Option<&str>) -> bool {
        self.predicates.iter().all(|p| p.accept(name, description))
    }
}
