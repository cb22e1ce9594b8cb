//! Order snapshot types.
//!
//! An [`Order`] is a frozen record of what was bought, by whom, and where it
//! ships. Line items copy the product name, variant, and price at the time of
//! purchase so later catalog edits don't rewrite history.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::{Email, OrderId, OrderStatus, PaymentMethod, PaymentStatus, Price, ProductId};

/// Who placed the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: Email,
    pub phone: String,
}

/// One purchased product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub variant: String,
}

impl OrderLine {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    /// Postal (PIN) code.
    pub zip: String,
}

/// How the order was paid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub items: Vec<OrderLine>,
    pub shipping: ShippingAddress,
    pub payment: Payment,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub total_amount: Price,
}

impl Order {
    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of line totals, before shipping and tax.
    #[must_use]
    pub fn items_subtotal(&self) -> Price {
        self.items.iter().map(OrderLine::line_total).sum()
    }

    /// Case-insensitive match on order ID, customer name, or customer email.
    ///
    /// `term` must already be lowercase; a blank term matches every order.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        term.is_empty()
            || self.id.as_str().to_lowercase().contains(term)
            || self.customer.name.to_lowercase().contains(term)
            || self.customer.email.as_str().to_lowercase().contains(term)
    }
}

/// Timestamp for compiled-in data. Invalid dates fall back to the epoch.
fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn line(id: &str, name: &str, price: i64, quantity: u32, variant: &str) -> OrderLine {
    OrderLine {
        product_id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::new(price),
        quantity,
        variant: variant.to_owned(),
    }
}

fn customer(name: &str, email: &'static str, phone: &str) -> Customer {
    Customer {
        name: name.to_owned(),
        email: Email::from_static(email),
        phone: phone.to_owned(),
    }
}

fn address(address: &str, city: &str, state: &str, zip: &str) -> ShippingAddress {
    ShippingAddress {
        address: address.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        zip: zip.to_owned(),
    }
}

fn paid_online(transaction_id: &str) -> Payment {
    Payment {
        method: PaymentMethod::Online,
        status: PaymentStatus::Completed,
        transaction_id: Some(transaction_id.to_owned()),
    }
}

const fn cash_on_delivery() -> Payment {
    Payment {
        method: PaymentMethod::Cod,
        status: PaymentStatus::Pending,
        transaction_id: None,
    }
}

/// The five sample orders shown in the admin console.
///
/// Totals are stored as recorded, not recomputed from the lines.
#[must_use]
pub fn demo_orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD001"),
            customer: customer("Rahul Sharma", "rahul.sharma@example.com", "+91 9876543210"),
            items: vec![
                line("1", "Kaccha Cooler Powder Pack", 99, 2, "100g Powder Pack"),
                line("3", "Kaccha Cooler Ready-to-Drink Bottle", 49, 4, "150ml Bottle"),
            ],
            shipping: address("123 Main Street, Apartment 4B", "Mumbai", "Maharashtra", "400001"),
            payment: paid_online("TXN123456789"),
            status: OrderStatus::Delivered,
            created_at: at(2025, 4, 15, 9, 24),
            total_amount: Price::new(394),
        },
        Order {
            id: OrderId::new("ORD002"),
            customer: customer("Priya Patel", "priya.patel@example.com", "+91 8765432109"),
            items: vec![line("4", "Kaccha Cooler Family Pack", 249, 1, "250g Family Pack")],
            shipping: address("456 Park Avenue, Villa 7", "Bangalore", "Karnataka", "560001"),
            payment: cash_on_delivery(),
            status: OrderStatus::Shipped,
            created_at: at(2025, 4, 16, 14, 35),
            total_amount: Price::new(249),
        },
        Order {
            id: OrderId::new("ORD003"),
            customer: customer("Aditya Singh", "aditya.singh@example.com", "+91 7654321098"),
            items: vec![
                line("2", "Kaccha Cooler Mini Sachets", 149, 3, "Box of 10 Sachets"),
                line("5", "Kaccha Cooler Premium Gift Box", 599, 1, "Premium Gift Box"),
            ],
            shipping: address("789 Lake Road, Tower B, Floor 9", "Delhi", "Delhi", "110001"),
            payment: paid_online("TXN987654321"),
            status: OrderStatus::Pending,
            created_at: at(2025, 4, 17, 11, 12),
            total_amount: Price::new(1046),
        },
        Order {
            id: OrderId::new("ORD004"),
            customer: customer("Meera Reddy", "meera.reddy@example.com", "+91 6543210987"),
            items: vec![line("6", "Kaccha Cooler Sugar-Free", 129, 2, "100g Sugar-Free Pack")],
            shipping: address("101 Green Street, Apartment 12C", "Chennai", "Tamil Nadu", "600001"),
            payment: cash_on_delivery(),
            status: OrderStatus::Packed,
            created_at: at(2025, 4, 18, 16, 48),
            total_amount: Price::new(258),
        },
        Order {
            id: OrderId::new("ORD005"),
            customer: customer("Vikram Joshi", "vikram.joshi@example.com", "+91 5432109876"),
            items: vec![
                line("1", "Kaccha Cooler Powder Pack", 99, 1, "100g Powder Pack"),
                line("3", "Kaccha Cooler Ready-to-Drink Bottle", 49, 6, "150ml Bottle"),
                line("4", "Kaccha Cooler Family Pack", 249, 1, "250g Family Pack"),
            ],
            shipping: address("222 River View, Building D", "Hyderabad", "Telangana", "500001"),
            payment: paid_online("TXN567890123"),
            status: OrderStatus::Cancelled,
            created_at: at(2025, 4, 14, 10, 30),
            total_amount: Price::new(642),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order {
            id: OrderId::new("ORD001"),
            customer: Customer {
                name: "Rahul Sharma".to_owned(),
                email: Email::parse("rahul.sharma@example.com").unwrap(),
                phone: "+91 9876543210".to_owned(),
            },
            items: vec![
                OrderLine {
                    product_id: ProductId::new("1"),
                    name: "Kaccha Cooler Powder Pack".to_owned(),
                    price: Price::new(99),
                    quantity: 2,
                    variant: "100g Powder Pack".to_owned(),
                },
                OrderLine {
                    product_id: ProductId::new("3"),
                    name: "Kaccha Cooler Ready-to-Drink Bottle".to_owned(),
                    price: Price::new(49),
                    quantity: 4,
                    variant: "150ml Bottle".to_owned(),
                },
            ],
            shipping: ShippingAddress {
                address: "123 Main Street, Apartment 4B".to_owned(),
                city: "Mumbai".to_owned(),
                state: "Maharashtra".to_owned(),
                zip: "400001".to_owned(),
            },
            payment: Payment {
                method: PaymentMethod::Online,
                status: PaymentStatus::Completed,
                transaction_id: Some("TXN123456789".to_owned()),
            },
            status: OrderStatus::Delivered,
            created_at: NaiveDate::from_ymd_opt(2025, 4, 15)
                .unwrap()
                .and_hms_opt(9, 24, 0)
                .unwrap(),
            total_amount: Price::new(394),
        }
    }

    #[test]
    fn test_counts_and_subtotal() {
        let order = order();
        assert_eq!(order.item_count(), 6);
        assert_eq!(order.items_subtotal(), Price::new(394));
    }

    #[test]
    fn test_matches_search() {
        let order = order();
        assert!(order.matches_search(""));
        assert!(order.matches_search("ord001"));
        assert!(order.matches_search("rahul"));
        assert!(order.matches_search("sharma@example"));
        assert!(!order.matches_search("priya"));
    }

    #[test]
    fn test_demo_orders() {
        let orders = demo_orders();
        assert_eq!(orders.len(), 5);

        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["ORD001", "ORD002", "ORD003", "ORD004", "ORD005"]);

        let third = &orders[2];
        assert_eq!(third.items_subtotal(), Price::new(1046));
        assert_eq!(third.payment.transaction_id.as_deref(), Some("TXN987654321"));
        assert_eq!(third.created_at, at(2025, 4, 17, 11, 12));
        assert_ne!(third.created_at, NaiveDateTime::default());
    }

    #[test]
    fn test_payment_without_transaction_id_omits_field() {
        let payment = Payment {
            method: PaymentMethod::Cod,
            status: PaymentStatus::Pending,
            transaction_id: None,
        };
        assert_eq!(
            serde_json::to_value(&payment).unwrap(),
            serde_json::json!({"method": "cod", "status": "pending"})
        );
    }
}
