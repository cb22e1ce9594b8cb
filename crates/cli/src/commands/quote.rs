//! Cart quotes priced through the ledger.

use std::fmt::Write;

use bitewala_core::{Cart, Catalog, ProductId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("invalid item '{0}': expected <product-id>:<quantity>")]
    InvalidItem(String),

    #[error("invalid quantity in '{0}': must be a whole number of at least 1")]
    InvalidQuantity(String),

    #[error("unknown product: {0}")]
    UnknownProduct(String),
}

/// Parse one `<id>:<qty>` item. A bare `<id>` means quantity 1.
pub fn parse_item(raw: &str) -> Result<(ProductId, u32), QuoteError> {
    let raw = raw.trim();
    let (id, quantity) = match raw.split_once(':') {
        Some((id, qty)) => {
            let quantity = qty
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|q| *q >= 1)
                .ok_or_else(|| QuoteError::InvalidQuantity(raw.to_string()))?;
            (id.trim(), quantity)
        }
        None => (raw, 1),
    };

    if id.is_empty() {
        return Err(QuoteError::InvalidItem(raw.to_string()));
    }
    Ok((ProductId::new(id), quantity))
}

/// Build a cart from item specs. Repeated products accumulate.
pub fn build(catalog: &Catalog, items: &[String]) -> Result<Cart, QuoteError> {
    let mut cart = Cart::new();
    for raw in items {
        let (id, quantity) = parse_item(raw)?;
        if catalog.get(&id).is_none() {
            return Err(QuoteError::UnknownProduct(id.into_inner()));
        }
        cart.add(id, quantity);
    }
    Ok(cart)
}

/// Render line items and totals for a cart.
pub fn render(catalog: &Catalog, cart: &Cart) -> String {
    let mut out = String::new();

    for line in cart.lines() {
        let Some(product) = catalog.get(&line.product_id) else {
            continue;
        };
        let _ = writeln!(
            out,
            "  {:<38} {:>6} x {:<3} {:>8}",
            product.name,
            product.price.to_string(),
            line.quantity,
            product.price.times(line.quantity).to_string()
        );
    }

    let summary = cart.summary(catalog);
    let totals = summary.totals;
    let _ = writeln!(out, "Items:    {}", summary.item_count);
    let _ = writeln!(out, "Subtotal: {}", totals.subtotal);
    let _ = writeln!(out, "Shipping: {}", totals.shipping);
    let _ = writeln!(out, "GST 18%:  {}", totals.tax);
    let _ = writeln!(out, "Total:    {}", totals.total);
    out
}

/// Parse `items`, price them, and render the quote.
pub fn run(catalog: &Catalog, items: &[String]) -> Result<String, QuoteError> {
    let cart = build(catalog, items)?;
    tracing::debug!(lines = cart.len(), "Built quote");
    Ok(render(catalog, &cart))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bitewala_core::Price;

    use super::*;

    fn items(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_parse_item() {
        assert_eq!(parse_item("3:2").unwrap(), (ProductId::new("3"), 2));
        assert_eq!(parse_item(" 5 ").unwrap(), (ProductId::new("5"), 1));
        assert_eq!(
            parse_item("1:0"),
            Err(QuoteError::InvalidQuantity("1:0".to_string()))
        );
        assert_eq!(
            parse_item("1:two"),
            Err(QuoteError::InvalidQuantity("1:two".to_string()))
        );
        assert_eq!(parse_item(":2"), Err(QuoteError::InvalidItem(":2".to_string())));
    }

    #[test]
    fn test_build_accumulates_repeats() {
        let catalog = Catalog::builtin();
        let cart = build(&catalog, &items(&["1:2", "3", "1:1"])).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(&ProductId::new("1")), Some(3));
        assert_eq!(cart.quantity_of(&ProductId::new("3")), Some(1));
    }

    #[test]
    fn test_build_unknown_product() {
        let err = build(&Catalog::builtin(), &items(&["1:1", "99:1"])).unwrap_err();
        assert_eq!(err, QuoteError::UnknownProduct("99".to_string()));
    }

    #[test]
    fn test_render_totals() {
        let catalog = Catalog::builtin();
        let cart = build(&catalog, &items(&["1:2", "3:1"])).unwrap();
        assert_eq!(cart.derived_total(&catalog), Price::new(340));

        let out = render(&catalog, &cart);
        assert!(out.contains("Kaccha Cooler Powder Pack"));
        assert!(out.contains("Items:    3\n"));
        assert!(out.contains("Subtotal: ₹247\n"));
        assert!(out.contains("Shipping: ₹49\n"));
        assert!(out.contains("GST 18%:  ₹44\n"));
        assert!(out.contains("Total:    ₹340\n"));
    }
}
