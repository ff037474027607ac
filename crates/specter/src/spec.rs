//! The [`Specification`] trait.
//!
//! A specification is a side-effect-free test over a single item. Everything
//! else in the crate (attribute predicates, combinators, the filter engine)
//! is written against this one trait.

use crate::combinator::{And, Not, Or};

/// A boxed, thread-safe specification.
///
/// Used wherever children are chosen at runtime, e.g. [`AllOf`](crate::AllOf)
/// or [`Criteria::build`](crate::Criteria::build).
pub type BoxedSpecification<T> = Box<dyn Specification<T> + Send + Sync>;

/// A boolean test over one item.
///
/// Implementations must be total and pure: the answer for a given item only
/// depends on the item and on values fixed when the specification was built.
///
/// # Example
///
/// ```
/// use specter::Specification;
///
/// struct Even;
///
/// impl Specification<u32> for Even {
///     fn is_satisfied(&self, item: &u32) -> bool {
///         item % 2 == 0
///     }
/// }
///
/// assert!(Even.is_satisfied(&4));
/// assert!(!Even.not().is_satisfied(&4));
/// ```
pub trait Specification<T: ?Sized> {
    /// Returns `true` if `item` matches.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human-readable rendering, used in logs and CLI output.
    fn describe(&self) -> String {
        String::from("<specification>")
    }

    /// Combines with `other`; satisfied when both are.
    fn and<S>(self, other: S) -> And<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        And::new(self, other)
    }

    /// Combines with `other`; satisfied when either is.
    fn or<S>(self, other: S) -> Or<Self, S>
    where
        Self: Sized,
        S: Specification<T>,
    {
        Or::new(self, other)
    }

    /// Negates this specification.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxedSpecification<T>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;

    impl Specification<i32> for Positive {
        fn is_satisfied(&self, item: &i32) -> bool {
            *item > 0
        }

        fn describe(&self) -> String {
            "positive".to_string()
        }
    }

    #[test]
    fn default_describe() {
        struct Anything;
        impl Specification<i32> for Anything {
            fn is_satisfied(&self, _item: &i32) -> bool {
                true
            }
        }

        assert_eq!(Anything.describe(), "<specification>");
    }

    #[test]
    fn reference_delegates() {
        let spec = Positive;
        let by_ref = &spec;

        assert!(by_ref.is_satisfied(&3));
        assert!(!by_ref.is_satisfied(&-3));
        assert_eq!(by_ref.describe(), "positive");
    }

    #[test]
    fn boxed_delegates() {
        let spec: BoxedSpecification<i32> = Positive.boxed();

        assert!(spec.is_satisfied(&1));
        assert!(!spec.is_satisfied(&0));
        assert_eq!(spec.describe(), "positive");
    }

    #[test]
    fn fluent_combinators() {
        let not_positive = Positive.not();
        assert!(not_positive.is_satisfied(&0));
        assert!(!not_positive.is_satisfied(&5));
    }
}
