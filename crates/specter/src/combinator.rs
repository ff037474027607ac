//! Composite specifications.
//!
//! Binary combinators ([`And`], [`Or`]) and [`Not`] compose statically typed
//! children. [`AllOf`] and [`AnyOf`] hold boxed children chosen at runtime.
//! Every composite is itself a [`Specification`], so composition nests to any
//! depth. Children are owned and built bottom-up, so cycles cannot exist.

use std::fmt;

use crate::error::{Result, SpecError};
use crate::spec::{BoxedSpecification, Specification};

/// Satisfied when both children are. The right child is not evaluated when
/// the left one fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    left: A,
    right: B,
}

impl<A, B> And<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) && self.right.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} AND {})", self.left.describe(), self.right.describe())
    }
}

/// Satisfied when either child is. The right child is not evaluated when the
/// left one passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.left.is_satisfied(item) || self.right.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("({} OR {})", self.left.describe(), self.right.describe())
    }
}

/// Satisfied when the wrapped specification is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<S> {
    inner: S,
}

impl<S> Not<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Unwraps the negation.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for Not<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn describe(&self) -> String {
        let inner = self.inner.describe();
        // Binary composites are already parenthesized; nested negation is not.
        if inner.starts_with("NOT ") {
            format!("NOT ({inner})")
        } else {
            format!("NOT {inner}")
        }
    }
}

fn require_children<T: ?Sized>(
    combinator: &'static str,
    children: &[BoxedSpecification<T>],
) -> Result<()> {
    if children.len() < 2 {
        return Err(SpecError::MissingChild {
            combinator,
            required: 2,
            actual: children.len(),
        });
    }
    Ok(())
}

fn describe_children<T: ?Sized>(children: &[BoxedSpecification<T>], joiner: &str) -> String {
    let parts: Vec<String> = children.iter().map(|c| c.describe()).collect();
    format!("({})", parts.join(joiner))
}

/// Satisfied when every child is. Stops at the first failing child.
///
/// # Example
///
/// ```
/// use specter::{AllOf, Color, Is, Product, Size, Specification};
///
/// let spec = AllOf::new(vec![
///     Is::<Product, _>::new(Color::Green).boxed(),
///     Is::<Product, _>::new(Size::Big).boxed(),
/// ])
/// .unwrap();
///
/// assert!(spec.is_satisfied(&Product::new("Tree", Color::Green, Size::Big)));
/// assert!(!spec.is_satisfied(&Product::new("Apple", Color::Green, Size::Small)));
///
/// // A composite needs at least two children.
/// assert!(AllOf::<Product>::new(vec![]).is_err());
/// ```
pub struct AllOf<T: ?Sized> {
    children: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> AllOf<T> {
    /// Builds the conjunction of `children`.
    ///
    /// Fails with [`SpecError::MissingChild`] for fewer than two children.
    pub fn new(children: Vec<BoxedSpecification<T>>) -> Result<Self> {
        require_children("AllOf", &children)?;
        Ok(Self { children })
    }

    /// Adds another child (builder pattern).
    pub fn with(mut self, child: BoxedSpecification<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; a constructed composite has at least two children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().all(|c| c.is_satisfied(item))
    }

    fn describe(&self) -> String {
        describe_children(&self.children, " AND ")
    }
}

impl<T: ?Sized> fmt::Debug for AllOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllOf")
            .field("children", &self.describe())
            .finish()
    }
}

/// Satisfied when at least one child is. Stops at the first passing child.
pub struct AnyOf<T: ?Sized> {
    children: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> AnyOf<T> {
    /// Builds the disjunction of `children`.
    ///
    /// Fails with [`SpecError::MissingChild`] for fewer than two children.
    pub fn new(children: Vec<BoxedSpecification<T>>) -> Result<Self> {
        require_children("AnyOf", &children)?;
        Ok(Self { children })
    }

    /// Adds another child (builder pattern).
    pub fn with(mut self, child: BoxedSpecification<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; a constructed composite has at least two children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: ?Sized> Specification<T> for AnyOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.children.iter().any(|c| c.is_satisfied(item))
    }

    fn describe(&self) -> String {
        describe_children(&self.children, " OR ")
    }
}

impl<T: ?Sized> fmt::Debug for AnyOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf")
            .field("children", &self.describe())
            .finish()
    }
}

/// A specification backed by a closure.
///
/// Created with [`from_fn`].
#[derive(Clone)]
pub struct FnSpecification<F> {
    label: String,
    predicate: F,
}

/// Wraps a closure as a named specification.
///
/// ```
/// use specter::{from_fn, Specification};
///
/// let short = from_fn("short name", |s: &String| s.len() < 5);
/// assert!(short.is_satisfied(&"Tree".to_string()));
/// assert_eq!(short.describe(), "short name");
/// ```
pub fn from_fn<F>(label: impl Into<String>, predicate: F) -> FnSpecification<F> {
    FnSpecification {
        label: label.into(),
        predicate,
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for FnSpecification<F> {
    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

impl<F> fmt::Debug for FnSpecification<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSpecification")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
