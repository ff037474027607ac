//! Attribute-equality specifications.
//!
//! An [`Attribute`] is a small closed enumeration (a color, a size). Items
//! expose the value they carry for each dimension through [`HasAttribute`],
//! and [`Is`] matches items whose attribute equals a fixed value.

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Result, SpecError};
use crate::spec::Specification;

/// A closed enumeration usable as a filter dimension.
///
/// # Example
///
/// ```
/// use std::fmt;
/// use specter::{parse_variant, Attribute};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Material { Wood, Steel }
///
/// impl fmt::Display for Material {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self {
///             Material::Wood => "wood",
///             Material::Steel => "steel",
///         })
///     }
/// }
///
/// impl Attribute for Material {
///     const NAME: &'static str = "material";
///     const VARIANTS: &'static [Self] = &[Material::Wood, Material::Steel];
/// }
///
/// assert_eq!(parse_variant::<Material>("Steel").unwrap(), Material::Steel);
/// assert!(parse_variant::<Material>("glass").is_err());
/// ```
pub trait Attribute: Copy + PartialEq + fmt::Display + 'static {
    /// Dimension name, as used in clauses and error messages.
    const NAME: &'static str;

    /// Every value of the enumeration.
    const VARIANTS: &'static [Self];
}

/// Parses a variant of `A` by its display name, ignoring ASCII case.
///
/// Anything outside the enumeration is [`SpecError::UnknownValue`].
pub fn parse_variant<A: Attribute>(s: &str) -> Result<A> {
    let needle = s.trim();
    A::VARIANTS
        .iter()
        .copied()
        .find(|v| v.to_string().eq_ignore_ascii_case(needle))
        .ok_or_else(|| SpecError::UnknownValue {
            attribute: A::NAME,
            value: s.to_string(),
            expected: A::VARIANTS
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Items that carry a value of attribute `A`.
pub trait HasAttribute<A: Attribute> {
    fn attribute(&self) -> A;
}

/// Matches items whose `A` attribute equals a fixed value.
///
/// `T` is the item type; it is usually inferred from the collection being
/// filtered.
///
/// ```
/// use specter::{Color, Is, Product, Size, Specification};
///
/// let green = Is::new(Color::Green);
/// assert!(green.is_satisfied(&Product::new("Apple", Color::Green, Size::Small)));
/// assert_eq!(green.describe(), "color = green");
///
/// let parsed: Is<Product, Size> = Is::parse("BIG").unwrap();
/// assert_eq!(parsed.value(), Size::Big);
/// ```
pub struct Is<T: ?Sized, A> {
    value: A,
    _item: PhantomData<fn(&T)>,
}

impl<T: ?Sized, A: Attribute> Is<T, A> {
    pub fn new(value: A) -> Self {
        Self {
            value,
            _item: PhantomData,
        }
    }

    /// Builds the specification from the attribute's display name.
    pub fn parse(value: &str) -> Result<Self> {
        parse_variant(value).map(Self::new)
    }

    /// The value items are compared against.
    pub fn value(&self) -> A {
        self.value
    }
}

impl<T: ?Sized, A: Attribute> Specification<T> for Is<T, A>
where
    T: HasAttribute<A>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        item.attribute() == self.value
    }

    fn describe(&self) -> String {
        format!("{} = {}", A::NAME, self.value)
    }
}

impl<T: ?Sized, A: Clone> Clone for Is<T, A> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _item: PhantomData,
        }
    }
}

impl<T: ?Sized, A: Copy> Copy for Is<T, A> {}

impl<T: ?Sized, A: PartialEq> PartialEq for Is<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: ?Sized, A: fmt::Debug> fmt::Debug for Is<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Is").field(&self.value).finish()
    }
}
