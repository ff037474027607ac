//! Runtime criteria built from textual clauses.
//!
//! A [`Clause`] compares one product attribute with `=` or `!=`. A
//! [`Criteria`] gathers clauses into three groups with fixed semantics:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! [`Criteria::build`] compiles the groups into one boxed specification.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::attribute::Is;
use crate::combinator::{AllOf, AnyOf};
use crate::error::{Result, SpecError};
use crate::product::{Color, Product, Size};
use crate::spec::{BoxedSpecification, Specification};

/// One attribute value of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAttribute {
    Color(Color),
    Size(Size),
}

impl ProductAttribute {
    /// Parses `value` for the named field.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match field.trim().to_ascii_lowercase().as_str() {
            "color" => Ok(ProductAttribute::Color(value.parse()?)),
            "size" => Ok(ProductAttribute::Size(value.parse()?)),
            other => Err(SpecError::UnknownField(other.to_string())),
        }
    }

    pub fn field(self) -> &'static str {
        match self {
            ProductAttribute::Color(_) => "color",
            ProductAttribute::Size(_) => "size",
        }
    }

    fn to_spec(self) -> BoxedSpecification<Product> {
        match self {
            ProductAttribute::Color(c) => Is::<Product, Color>::new(c).boxed(),
            ProductAttribute::Size(s) => Is::<Product, Size>::new(s).boxed(),
        }
    }
}

impl fmt::Display for ProductAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductAttribute::Color(c) => write!(f, "{c}"),
            ProductAttribute::Size(s) => write!(f, "{s}"),
        }
    }
}

/// Clause operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseOp {
    /// Attribute equals the value.
    Eq,
    /// Attribute differs from the value.
    Ne,
}

impl ClauseOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ClauseOp::Eq => "=",
            ClauseOp::Ne => "!=",
        }
    }
}

impl fmt::Display for ClauseOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `<field><op><value>` comparison.
///
/// ```
/// use specter::{Clause, ClauseOp, Color, ProductAttribute};
///
/// let clause: Clause = "color != red".parse().unwrap();
/// assert_eq!(clause.op(), ClauseOp::Ne);
/// assert_eq!(clause.attribute(), ProductAttribute::Color(Color::Red));
/// assert_eq!(clause.to_string(), "color!=red");
///
/// assert!("weight=heavy".parse::<Clause>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause {
    attribute: ProductAttribute,
    op: ClauseOp,
}

impl Clause {
    pub fn new(attribute: ProductAttribute, op: ClauseOp) -> Self {
        Self { attribute, op }
    }

    pub fn equals(attribute: ProductAttribute) -> Self {
        Self::new(attribute, ClauseOp::Eq)
    }

    pub fn not_equals(attribute: ProductAttribute) -> Self {
        Self::new(attribute, ClauseOp::Ne)
    }

    /// Parses `field=value` or `field!=value`. Whitespace around the parts
    /// is ignored and field names are case-insensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let (field, op, value) = if let Some((field, value)) = s.split_once("!=") {
            (field, ClauseOp::Ne, value)
        } else if let Some((field, value)) = s.split_once('=') {
            (field, ClauseOp::Eq, value)
        } else {
            return Err(SpecError::MalformedClause(s.to_string()));
        };

        if field.trim().is_empty() || value.trim().is_empty() {
            return Err(SpecError::MalformedClause(s.to_string()));
        }

        Ok(Self::new(ProductAttribute::parse(field, value)?, op))
    }

    pub fn attribute(&self) -> ProductAttribute {
        self.attribute
    }

    pub fn op(&self) -> ClauseOp {
        self.op
    }

    /// Compiles the clause into a specification.
    pub fn to_spec(&self) -> BoxedSpecification<Product> {
        let spec = self.attribute.to_spec();
        match self.op {
            ClauseOp::Eq => spec,
            ClauseOp::Ne => spec.not().boxed(),
        }
    }
}

impl FromStr for Clause {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.attribute.field(), self.op, self.attribute)
    }
}

/// Clause groups that compile into one product specification.
///
/// # Example
///
/// ```
/// use specter::{filter, Catalog, Clause, Criteria};
///
/// let spec = Criteria::new()
///     .and(Clause::parse("size=big").unwrap())
///     .not(Clause::parse("color=green").unwrap())
///     .build()
///     .unwrap();
///
/// let catalog = Catalog::sample();
/// let names: Vec<_> = filter(&catalog, &*spec).map(|p| p.name()).collect();
/// assert_eq!(names, ["House"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
}

impl Criteria {
    /// Creates criteria with no clauses.
    ///
    /// Empty criteria have no specification; [`build`](Self::build) fails.
    pub fn new() -> Self {
        Criteria::default()
    }

    /// Adds a clause every product must satisfy.
    pub fn and(mut self, clause: Clause) -> Self {
        self.and_clauses.push(clause);
        self
    }

    /// Adds a clause to the group of which at least one must match.
    pub fn or(mut self, clause: Clause) -> Self {
        self.or_clauses.push(clause);
        self
    }

    /// Adds a clause no product may satisfy.
    pub fn not(mut self, clause: Clause) -> Self {
        self.not_clauses.push(clause);
        self
    }

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    /// Returns `true` if no clause was added.
    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    /// Compiles the clause groups.
    ///
    /// Fails with [`SpecError::MissingPredicate`] when there are no clauses.
    pub fn build(&self) -> Result<BoxedSpecification<Product>> {
        if self.is_empty() {
            return Err(SpecError::MissingPredicate);
        }

        let mut parts: Vec<BoxedSpecification<Product>> =
            self.and_clauses.iter().map(Clause::to_spec).collect();

        match self.or_clauses.as_slice() {
            [] => {}
            [single] => parts.push(single.to_spec()),
            many => parts.push(AnyOf::new(many.iter().map(Clause::to_spec).collect())?.boxed()),
        }

        parts.extend(self.not_clauses.iter().map(|c| c.to_spec().not().boxed()));

        let spec = if parts.len() == 1 {
            parts.remove(0)
        } else {
            AllOf::new(parts)?.boxed()
        };

        debug!(spec = %spec.describe(), "built criteria specification");
        Ok(spec)
    }
}
