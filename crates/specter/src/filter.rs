//! The filter engine.
//!
//! [`filter`] pairs any sequence of borrowed items with any
//! [`Specification`] and returns a lazy [`Filtered`] iterator. The engine's
//! shape is fixed: new criteria are new specifications, never new engine
//! methods.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Result, SpecError};
use crate::spec::Specification;

/// Lazily selects the items of `items` that satisfy `spec`.
///
/// Items are yielded in input order, each at most once. Nothing is
/// evaluated until the iterator is pulled, so a consumer can stop early.
/// Calling `filter` again restarts from the beginning of `items`.
///
/// ```
/// use specter::{filter, Catalog, Is, Size};
///
/// let catalog = Catalog::sample();
/// let big_items = Is::new(Size::Big);
/// let mut big = filter(&catalog, &big_items);
///
/// assert_eq!(big.next().map(|p| p.name()), Some("Tree"));
/// assert_eq!(big.next().map(|p| p.name()), Some("House"));
/// assert!(big.next().is_none());
/// ```
pub fn filter<'a, 's, T, I, S>(items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    Filtered {
        items: items.into_iter(),
        spec,
    }
}

/// Like [`filter`], for a specification that may be absent.
///
/// A `None` specification is [`SpecError::MissingPredicate`]; the filter never
/// silently matches everything.
pub fn try_filter<'a, 's, T, I, S>(
    items: I,
    spec: Option<&'s S>,
) -> Result<Filtered<'s, I::IntoIter, S>>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    let spec = spec.ok_or(SpecError::MissingPredicate)?;
    Ok(filter(items, spec))
}

/// Iterator returned by [`filter`].
///
/// Forward-only: matches come out in input order and nothing walks the
/// input from the back.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'s, I, S: ?Sized> {
    items: I,
    spec: &'s S,
}

impl<'a, 's, T, I, S> Iterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let spec = self.spec;
        self.items.find(|item| spec.is_satisfied(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.items.size_hint();
        (0, upper)
    }
}

// Manual impls: `Filtered` only holds `&S`, so `S` needs neither `Clone`
// nor `Debug` (trait objects have neither).
impl<I: Clone, S: ?Sized> Clone for Filtered<'_, I, S> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            spec: self.spec,
        }
    }
}

impl<I: fmt::Debug, S: ?Sized> fmt::Debug for Filtered<'_, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<'a, 's, T, I, S> FusedIterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: FusedIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
}

/// A filter over collections of `T`.
///
/// The signature takes a sequence and a specification and nothing else, so
/// implementations never grow per-criterion methods.
pub trait Filter<T: ?Sized> {
    fn filter<'a, 's, I, S>(&self, items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized;
}

/// The stateless [`Filter`] implementation, backed by [`filter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecFilter;

impl<T: ?Sized> Filter<T> for SpecFilter {
    fn filter<'a, 's, I, S>(&self, items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
        S: Specification<T> + ?Sized,
    {
        filter(items, spec)
    }
}

/// Adapter form of [`filter`] for iterators of borrowed items.
///
/// ```
/// use specter::{Catalog, Color, Is, SpecIteratorExt};
///
/// let catalog = Catalog::sample();
/// let blue = Is::new(Color::Blue);
/// let names: Vec<_> = catalog.iter().satisfying(&blue).map(|p| p.name()).collect();
/// assert_eq!(names, ["House"]);
/// ```
pub trait SpecIteratorExt<'a, T: ?Sized + 'a>: Iterator<Item = &'a T> + Sized {
    fn satisfying<S>(self, spec: &S) -> Filtered<'_, Self, S>
    where
        S: Specification<T> + ?Sized,
    {
        filter(self, spec)
    }
}

impl<'a, T: ?Sized + 'a, I: Iterator<Item = &'a T>> SpecIteratorExt<'a, T> for I {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::combinator::from_fn;
    use crate::{Catalog, Color, Is, Product, Size};

    fn names<'a>(items: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        items.map(Product::name).collect()
    }

    #[test]
    fn filters_by_color() {
        let catalog = Catalog::sample();
        let green = Is::new(Color::Green);

        assert_eq!(names(filter(&catalog, &green)), ["Apple", "Tree"]);
    }

    #[test]
    fn filters_by_color_and_size() {
        let catalog = Catalog::sample();
        let spec = Is::new(Color::Blue).and(Is::new(Size::Big));

        assert_eq!(names(filter(&catalog, &spec)), ["House"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let empty: Vec<Product> = Vec::new();
        assert_eq!(filter(&empty, &Is::new(Color::Red)).count(), 0);
    }

    #[test]
    fn always_false_yields_nothing() {
        let catalog = Catalog::sample();
        let never = from_fn("never", |_: &Product| false);

        assert_eq!(filter(&catalog, &never).count(), 0);
    }

    #[test]
    fn works_over_slices_and_vecs() {
        let products = vec![
            Product::new("Ball", Color::Red, Size::Small),
            Product::new("Boat", Color::Blue, Size::Big),
        ];
        let red = Is::new(Color::Red);

        assert_eq!(names(filter(&products, &red)), ["Ball"]);
        assert_eq!(names(filter(&products[1..], &red)), Vec::<&str>::new());
    }

    #[test]
    fn lazy_and_stops_early() {
        let catalog = Catalog::sample();
        let calls = Cell::new(0);
        let counting = from_fn("counting", |_: &Product| {
            calls.set(calls.get() + 1);
            true
        });

        let mut it = filter(&catalog, &counting);
        assert_eq!(calls.get(), 0);

        it.next();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn restarts_on_reinvocation() {
        let catalog = Catalog::sample();
        let big = Is::new(Size::Big);

        let first: Vec<_> = filter(&catalog, &big).collect();
        let second: Vec<_> = filter(&catalog, &big).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn partial_consumption_keeps_input_order() {
        let products: Vec<Product> = (0..6)
            .map(|i| {
                let color = if i % 2 == 0 { Color::Red } else { Color::Blue };
                Product::new(format!("p{i}"), color, Size::Small)
            })
            .collect();
        let red = Is::new(Color::Red);

        let mut it = filter(&products, &red);
        assert_eq!(it.next().map(Product::name), Some("p0"));
        assert_eq!(names(it), ["p2", "p4"]);
    }

    #[test]
    fn clone_and_debug_over_dynamic_specification() {
        let catalog = Catalog::sample();
        let spec = Is::new(Size::Big).boxed();

        let mut it = filter(&catalog, &*spec);
        assert_eq!(it.next().map(Product::name), Some("Tree"));

        let resumed = it.clone();
        assert_eq!(names(resumed), ["House"]);
        assert_eq!(names(it), ["House"]);

        let debug = format!("{:?}", filter(&catalog, &*spec));
        assert!(debug.starts_with("Filtered"));
    }

    #[test]
    fn try_filter_requires_a_specification() {
        let catalog = Catalog::sample();
        let missing: Option<&Is<Product, Color>> = None;

        let err = try_filter(&catalog, missing).unwrap_err();
        assert_eq!(err, SpecError::MissingPredicate);

        let green = Is::new(Color::Green);
        let found = try_filter(&catalog, Some(&green)).unwrap();
        assert_eq!(names(found), ["Apple", "Tree"]);
    }

    #[test]
    fn filter_trait_matches_free_function() {
        let catalog = Catalog::sample();
        let small = Is::new(Size::Small);

        let via_trait = names(SpecFilter.filter(&catalog, &small));
        let via_fn = names(filter(&catalog, &small));
        assert_eq!(via_trait, via_fn);
    }

    #[test]
    fn boxed_dynamic_specification() {
        let catalog = Catalog::sample();
        let spec = Is::new(Color::Green).not().boxed();

        assert_eq!(names(filter(&catalog, &*spec)), ["House"]);
    }

    #[test]
    fn size_hint_bounded_by_input() {
        let catalog = Catalog::sample();
        let green = Is::new(Color::Green);

        assert_eq!(filter(&catalog, &green).size_hint(), (0, Some(3)));
    }
}
