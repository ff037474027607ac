//! Specter - composable specification-pattern filtering for Rust collections.
//!
//! Specter separates *what* matches from *how* a collection is walked. A
//! [`Specification`] answers one question about one item, and the filter
//! engine applies any specification across any sequence of borrowed items:
//!
//! - Attribute equality: [`Is`] compares one enumerated attribute of an item
//! - Composition: [`And`], [`Or`], [`Not`], [`AllOf`], [`AnyOf`]
//! - Ad-hoc predicates: [`from_fn`] wraps a closure
//! - Lazy evaluation: [`filter`] returns an iterator, nothing runs until it is pulled
//!
//! # Quick Start
//!
//! ```rust
//! use specter::{filter, Catalog, Color, Is, Size, Specification};
//!
//! let catalog = Catalog::sample();
//!
//! let green: Vec<_> = filter(&catalog, &Is::new(Color::Green))
//!     .map(|p| p.name())
//!     .collect();
//! assert_eq!(green, ["Apple", "Tree"]);
//!
//! let big_blue = Is::new(Color::Blue).and(Is::new(Size::Big));
//! let found: Vec<_> = filter(&catalog, &big_blue).map(|p| p.name()).collect();
//! assert_eq!(found, ["House"]);
//! ```
//!
//! # Extending
//!
//! New criteria never touch the engine. Either implement [`Specification`]
//! for a new type, or add a new attribute dimension: an enum implementing
//! [`Attribute`] plus a [`HasAttribute`] impl on the item type. [`Is`] then
//! works for it without further code.
//!
//! # Runtime criteria
//!
//! [`Criteria`] assembles a product specification from textual clauses with
//! fixed group semantics:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```

mod attribute;
mod catalog;
mod combinator;
mod criteria;
mod error;
mod filter;
mod product;
mod spec;

pub use attribute::{parse_variant, Attribute, HasAttribute, Is};
pub use catalog::Catalog;
pub use combinator::{from_fn, AllOf, And, AnyOf, FnSpecification, Not, Or};
pub use criteria::{Clause, ClauseOp, Criteria, ProductAttribute};
pub use error::{CatalogError, Result, SpecError};
pub use filter::{filter, try_filter, Filter, Filtered, SpecFilter, SpecIteratorExt};
pub use product::{Color, ColorSpecification, Product, Size, SizeSpecification};
pub use spec::{BoxedSpecification, Specification};
