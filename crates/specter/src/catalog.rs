//! Product catalogs: the built-in sample and file-backed lists.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CatalogError;
use crate::product::{Color, Product, Size};

/// An ordered, read-only list of products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Apple (green, small), Tree (green, big), House (blue, big).
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Big),
            Product::new("House", Color::Blue, Size::Big),
        ])
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(s)?))
    }

    /// Parses a YAML sequence of products.
    pub fn from_yaml_str(s: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_yaml::from_str(s)?))
    }

    /// Loads a catalog file, choosing the format by extension.
    ///
    /// `.json` is parsed as JSON, `.yaml` and `.yml` as YAML. Anything else
    /// is [`CatalogError::UnsupportedFormat`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = parse(&content)?;

        debug!(
            path = %path.display(),
            products = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn sample_order() {
        let catalog = Catalog::sample();
        let names: Vec<&str> = catalog.iter().map(Product::name).collect();
        assert_eq!(names, ["Apple", "Tree", "House"]);
    }

    #[test]
    fn parses_yaml() {
        let catalog = Catalog::from_yaml_str(
            "- name: Lamp\n  color: red\n  size: medium\n- name: Rug\n  color: blue\n  size: big\n",
        )
        .unwrap();

        assert_eq!(
            catalog.products(),
            [
                Product::new("Lamp", Color::Red, Size::Medium),
                Product::new("Rug", Color::Blue, Size::Big),
            ]
        );
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"name": "Kite", "color": "red", "size": "small"}}]"#
        )
        .unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].name(), "Kite");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = Catalog::from_path("products.csv").unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_path(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn out_of_domain_value_fails_to_load() {
        let err = Catalog::from_json_str(r#"[{"name": "Sun", "color": "yellow", "size": "big"}]"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
