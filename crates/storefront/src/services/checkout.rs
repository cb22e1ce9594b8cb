//! Checkout: form validation and order placement.
//!
//! Placing an order validates the form, waits out the simulated processing
//! delay, and snapshots the priced cart into an [`Order`]. Clearing the
//! session cart is left to the caller, after the order has been built.

use std::time::Duration;

use bitewala_core::{
    Cart, CartTotals, Catalog, Customer, Email, EmailError, Order, OrderId, OrderLine,
    OrderStatus, Payment, PaymentMethod, PaymentStatus, ShippingAddress,
};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that reject a checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to buy.
    #[error("your cart is empty")]
    EmptyCart,

    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email address did not parse.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Checkout form as submitted by the shopper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// A checkout form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub customer: Customer,
    pub shipping: ShippingAddress,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Check that every field is filled in and the email parses.
    ///
    /// Fields are checked in form order; the first blank one is reported.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::MissingField` or `CheckoutError::InvalidEmail`.
    pub fn validate(self) -> Result<CheckoutDetails, CheckoutError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CheckoutError::MissingField(field));
        }

        let email = Email::parse(&self.email)?;

        Ok(CheckoutDetails {
            customer: Customer {
                name: self.name.trim().to_owned(),
                email,
                phone: self.phone.trim().to_owned(),
            },
            shipping: ShippingAddress {
                address: self.address.trim().to_owned(),
                city: self.city.trim().to_owned(),
                state: self.state.trim().to_owned(),
                zip: self.pincode.trim().to_owned(),
            },
            payment_method: self.payment_method,
        })
    }
}

/// What the shopper gets back after placing an order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderConfirmation {
    pub order: Order,
    pub totals: CartTotals,
}

/// Snapshot a cart into a pending order.
///
/// Lines for products the catalog no longer carries are left out.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if no priced line remains.
pub fn build_order(
    cart: &Cart,
    catalog: &Catalog,
    details: CheckoutDetails,
    id: OrderId,
    created_at: NaiveDateTime,
) -> Result<OrderConfirmation, CheckoutError> {
    let items: Vec<OrderLine> = cart
        .lines()
        .iter()
        .filter_map(|line| {
            catalog.get(&line.product_id).map(|product| OrderLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity: line.quantity,
                variant: product.variant.clone(),
            })
        })
        .collect();

    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let totals = cart.totals(catalog);

    Ok(OrderConfirmation {
        order: Order {
            id,
            customer: details.customer,
            items,
            shipping: details.shipping,
            payment: Payment {
                method: details.payment_method,
                status: PaymentStatus::Pending,
                transaction_id: None,
            },
            status: OrderStatus::Pending,
            created_at,
            total_amount: totals.total,
        },
        totals,
    })
}

/// Take what was checked out off the visitor's current cart.
///
/// `checked_out` is the cart as it was read before the processing delay.
/// Quantities added to `current` since then stay behind for the next order.
pub fn settle_cart(current: &mut Cart, checked_out: &Cart) {
    for line in checked_out.lines() {
        let remaining = current
            .quantity_of(&line.product_id)
            .unwrap_or(0)
            .saturating_sub(line.quantity);
        current.set_quantity(&line.product_id, remaining);
    }
}

/// Generate a fresh order number such as `ORD-3F2A9C1B`.
#[must_use]
pub fn next_order_id() -> OrderId {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect();
    OrderId::new(format!("ORD-{}", suffix.to_uppercase()))
}

/// Checkout service.
pub struct CheckoutService<'a> {
    catalog: &'a Catalog,
    delay: Duration,
}

impl<'a> CheckoutService<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    /// Validate the form, wait out the processing delay, and build the order.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError` if the cart is empty or the form is invalid.
    /// Validation runs before the delay.
    pub async fn place_order(
        &self,
        cart: &Cart,
        form: CheckoutForm,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let details = form.validate()?;

        tokio::time::sleep(self.delay).await;

        let confirmation = build_order(
            cart,
            self.catalog,
            details,
            next_order_id(),
            Utc::now().naive_utc(),
        )?;

        tracing::info!(
            order_id = %confirmation.order.id,
            items = confirmation.order.item_count(),
            total = %confirmation.order.total_amount,
            payment_method = confirmation.order.payment.method.label(),
            "Order placed"
        );

        Ok(confirmation)
    }
}
