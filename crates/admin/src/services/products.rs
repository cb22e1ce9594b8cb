//! Product management listing.

use bitewala_core::{Catalog, Price, Product, ProductFilter, ProductId};
use serde::Serialize;

/// Listing status shown in the product table.
///
/// The built-in catalog carries only products that are for sale, so every
/// row is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
}

/// One row of the product management table.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: &'static str,
    pub variant: String,
    pub status: ProductStatus,
}

impl ProductRow {
    fn new(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: category_of(product),
            variant: product.variant.clone(),
            status: ProductStatus::Active,
        }
    }
}

/// Storefront category label for a product, or "Other".
fn category_of(product: &Product) -> &'static str {
    ProductFilter::ALL
        .into_iter()
        .filter(|filter| *filter != ProductFilter::All)
        .find(|filter| filter.matches(product))
        .map_or("Other", ProductFilter::label)
}

/// Catalog rows whose name, variant, or category contains `term`.
///
/// Every built-in product is listed as active.
#[must_use]
pub fn search(catalog: &Catalog, term: &str) -> Vec<ProductRow> {
    let term = term.trim().to_lowercase();
    catalog
        .all()
        .iter()
        .map(ProductRow::new)
        .filter(|row| {
            term.is_empty()
                || row.name.to_lowercase().contains(&term)
                || row.variant.to_lowercase().contains(&term)
                || row.category.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_everything_active() {
        let rows = search(&Catalog::builtin(), "");
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.status == ProductStatus::Active));
    }

    #[test]
    fn test_categories() {
        let rows = search(&Catalog::builtin(), "");
        let categories: Vec<&str> = rows.iter().map(|row| row.category).collect();
        assert_eq!(
            categories,
            [
                "Powder Packs",
                "Other",
                "Ready to Drink",
                "Other",
                "Gift Packs",
                "Other"
            ]
        );
    }

    #[test]
    fn test_search_by_category_or_name() {
        let catalog = Catalog::builtin();
        let ids = |term: &str| -> Vec<String> {
            search(&catalog, term)
                .into_iter()
                .map(|row| row.id.into_inner())
                .collect()
        };

        assert_eq!(ids("ready to drink"), ["3"]);
        assert_eq!(ids("SUGAR"), ["6"]);
        assert!(ids("burger").is_empty());
    }
}
