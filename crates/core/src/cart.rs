//! The cart/pricing ledger.
//!
//! A [`Cart`] holds one [`LineItem`] per product with a quantity of at least
//! one. It stores only product IDs and quantities; unit prices come from a
//! [`PriceLookup`] (normally the [`Catalog`](crate::Catalog)) when totals are
//! derived, so a stored cart never carries stale prices.
//!
//! # Invariants
//!
//! - Every line item has `quantity >= 1`. Operations that would drop a
//!   quantity below one remove the line instead.
//! - A product ID appears at most once. Adding a product that is already in
//!   the cart increases its quantity.
//!
//! Both invariants also hold for carts deserialized from session storage:
//! zero-quantity lines are dropped and duplicate lines are merged.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId, TaxRate};

/// Flat shipping charge applied to every order.
pub const SHIPPING_FLAT: Price = Price::new(49);

/// GST applied to the subtotal, in percent.
pub const TAX_PERCENT: u32 = 18;

/// Resolves a product ID to its current unit price.
pub trait PriceLookup {
    /// Unit price of `id`, or `None` if the product is unknown.
    fn unit_price(&self, id: &ProductId) -> Option<Price>;
}

/// A product and how many of it the shopper wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Derived money totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl CartTotals {
    /// Apply flat shipping and GST to a subtotal.
    ///
    /// `tax = round(subtotal × 0.18)` (half-up), `total = subtotal + shipping + tax`.
    #[must_use]
    pub fn from_subtotal(subtotal: Price) -> Self {
        let tax = TaxRate::from_percent(TAX_PERCENT).tax_on(subtotal);
        Self {
            subtotal,
            shipping: SHIPPING_FLAT,
            tax,
            total: subtotal + SHIPPING_FLAT + tax,
        }
    }
}

/// What the header badge and other cart observers see after each change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: u64,
    pub totals: CartTotals,
}

/// The shopper's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` of a product.
    ///
    /// Increments the existing line if the product is already present,
    /// otherwise appends a new line. A zero quantity changes nothing.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.line_mut(&product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(LineItem {
                product_id,
                quantity,
            }),
        }
    }

    /// Remove a product's line. Removing an absent product is a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|line| &line.product_id != product_id);
    }

    /// Overwrite a product's quantity.
    ///
    /// A quantity of zero removes the line. Products not in the cart are
    /// left out; use [`add`](Self::add) to insert.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.items
    }

    /// Quantity of a product, if it is in the cart.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|line| &line.product_id == product_id)
            .map(|line| line.quantity)
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of quantities over lines whose price is known.
    ///
    /// This is the count a shopper sees: lines for products the catalog no
    /// longer carries are neither shown nor charged.
    #[must_use]
    pub fn priced_items(&self, prices: &impl PriceLookup) -> u64 {
        self.items
            .iter()
            .filter(|line| prices.unit_price(&line.product_id).is_some())
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Sum of `unit price × quantity` over lines whose price is known.
    #[must_use]
    pub fn subtotal(&self, prices: &impl PriceLookup) -> Price {
        self.items
            .iter()
            .filter_map(|line| {
                prices
                    .unit_price(&line.product_id)
                    .map(|unit| unit.times(line.quantity))
            })
            .sum()
    }

    /// Subtotal plus shipping and tax.
    #[must_use]
    pub fn totals(&self, prices: &impl PriceLookup) -> CartTotals {
        CartTotals::from_subtotal(self.subtotal(prices))
    }

    /// Grand total: `subtotal + shipping + round(subtotal × 0.18)`.
    #[must_use]
    pub fn derived_total(&self, prices: &impl PriceLookup) -> Price {
        self.totals(prices).total
    }

    /// Priced item count and totals together.
    #[must_use]
    pub fn summary(&self, prices: &impl PriceLookup) -> CartSummary {
        CartSummary {
            item_count: self.priced_items(prices),
            totals: self.totals(prices),
        }
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item.product_id, item.quantity);
        }
        cart
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    struct Prices(HashMap<ProductId, Price>);

    impl PriceLookup for Prices {
        fn unit_price(&self, id: &ProductId) -> Option<Price> {
            self.0.get(id).copied()
        }
    }

    fn prices() -> Prices {
        Prices(HashMap::from([
            (ProductId::new("a"), Price::new(99)),
            (ProductId::new("b"), Price::new(49)),
        ]))
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn add_same_product_twice_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(id("a"), 2);
        cart.add(id("a"), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&id("a")), Some(5));
    }

    #[test]
    fn add_zero_is_noop() {
        let mut cart = Cart::new();
        cart.add(id("a"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn subtotal_and_derived_total() {
        let mut cart = Cart::new();
        cart.add(id("a"), 2);
        cart.add(id("b"), 4);

        let prices = prices();
        assert_eq!(cart.subtotal(&prices), Price::new(394));

        let totals = cart.totals(&prices);
        assert_eq!(totals.shipping, Price::new(49));
        assert_eq!(totals.tax, Price::new(71));
        assert_eq!(totals.total, Price::new(514));
        assert_eq!(cart.derived_total(&prices), Price::new(514));
    }

    #[test]
    fn unknown_products_do_not_count_toward_subtotal() {
        let mut cart = Cart::new();
        cart.add(id("a"), 1);
        cart.add(id("gone"), 7);

        assert_eq!(cart.subtotal(&prices()), Price::new(99));
        assert_eq!(cart.total_items(), 8);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(id("a"), 1);
        let before = cart.clone();

        cart.remove(&id("missing"));
        assert_eq!(cart, before);
    }

    #[test]
    fn set_quantity_below_one_removes() {
        let mut cart = Cart::new();
        cart.add(id("a"), 3);
        cart.add(id("b"), 1);

        cart.set_quantity(&id("a"), 10);
        assert_eq!(cart.quantity_of(&id("a")), Some(10));

        cart.set_quantity(&id("a"), 0);
        assert_eq!(cart.quantity_of(&id("a")), None);
        assert_eq!(cart.len(), 1);

        cart.set_quantity(&id("zzz"), 4);
        assert_eq!(cart.quantity_of(&id("zzz")), None);
    }

    #[test]
    fn clear_resets_item_count() {
        let mut cart = Cart::new();
        cart.add(id("a"), 3);
        cart.add(id("b"), 9);
        cart.clear();
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(id("b"), 1);
        cart.add(id("a"), 1);
        cart.add(id("b"), 1);

        let order: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
    }

    #[test]
    fn deserializing_normalizes_stored_lines() {
        let json = r#"[
            {"product_id": "a", "quantity": 1},
            {"product_id": "b", "quantity": 0},
            {"product_id": "a", "quantity": 2}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&id("a")), Some(3));
    }

    #[test]
    fn serializes_as_line_list() {
        let mut cart = Cart::new();
        cart.add(id("a"), 2);
        assert_eq!(
            serde_json::to_value(&cart).unwrap(),
            serde_json::json!([{"product_id": "a", "quantity": 2}])
        );
    }

    #[test]
    fn empty_cart_summary() {
        let summary = Cart::new().summary(&prices());
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.totals.subtotal, Price::ZERO);
        assert_eq!(summary.totals.tax, Price::ZERO);
    }

    #[test]
    fn summary_counts_only_priced_lines() {
        let mut cart = Cart::new();
        cart.add(id("a"), 2);
        cart.add(id("gone"), 5);

        assert_eq!(cart.total_items(), 7);
        assert_eq!(cart.priced_items(&prices()), 2);
        assert_eq!(cart.summary(&prices()).item_count, 2);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, u32),
        Remove(u8),
        Set(u8, u32),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0u8..5, 1u32..20).prop_map(|(p, q)| Op::Add(p, q)),
            2 => (0u8..5).prop_map(Op::Remove),
            3 => (0u8..5, 0u32..20).prop_map(|(p, q)| Op::Set(p, q)),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of ledger operations, the item count
        /// equals the sum of line quantities, no line has quantity zero, and
        /// no product appears twice.
        #[test]
        fn ledger_invariants_hold(ops in prop::collection::vec(op(), 0..60)) {
            let mut cart = Cart::new();
            for op in ops {
                match op {
                    Op::Add(p, q) => cart.add(id(&p.to_string()), q),
                    Op::Remove(p) => cart.remove(&id(&p.to_string())),
                    Op::Set(p, q) => cart.set_quantity(&id(&p.to_string()), q),
                    Op::Clear => cart.clear(),
                }
            }

            let sum: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
            prop_assert_eq!(cart.total_items(), sum);
            prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));

            let mut seen: Vec<&ProductId> = cart.lines().iter().map(|l| &l.product_id).collect();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), cart.len());
        }

        /// Property: adding q1 then q2 of one product yields a single line of q1 + q2.
        #[test]
        fn additive_quantity(q1 in 1u32..10_000, q2 in 1u32..10_000) {
            let mut cart = Cart::new();
            cart.add(id("a"), q1);
            cart.add(id("a"), q2);
            prop_assert_eq!(cart.len(), 1);
            prop_assert_eq!(cart.quantity_of(&id("a")), Some(q1 + q2));
        }
    }
}
