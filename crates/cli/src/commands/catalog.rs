//! Catalog listing.

use std::fmt::Write;

use bitewala_core::{Catalog, ProductFilter};

/// Render the products in `filter` whose name or variant contains `search`.
pub fn list(catalog: &Catalog, filter: ProductFilter, search: &str) -> String {
    let mut out = format!("{}\n", filter.label());
    let mut shown = 0_usize;

    for product in catalog.search(search).filter(|p| filter.matches(p)) {
        let _ = writeln!(
            out,
            "  {:<4} {:<38} {:<22} {:>6}",
            product.id,
            product.name,
            product.variant,
            product.price.to_string()
        );
        shown += 1;
    }

    if shown == 0 {
        out.push_str("  No products found\n");
    }
    let _ = writeln!(out, "{shown} of {} products", catalog.len());
    out
}
