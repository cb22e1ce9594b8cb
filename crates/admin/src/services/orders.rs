//! Read-only order book.
//!
//! Orders are fixed at startup. Status changes requested from the console are
//! logged and acknowledged but never applied.

use bitewala_core::{
    BadgeTone, Email, Order, OrderId, OrderStatus, ParseStatusError, PaymentMethod,
    PaymentStatus, Price, demo_orders,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status filter for the order list: everything, or a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Order list query.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    /// Matched case-insensitively against order ID, customer name, and email.
    pub search: String,
    pub status: StatusFilter,
}

/// One row of the order table.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRow {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: Email,
    pub item_count: u64,
    pub total: Price,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub status_tone: BadgeTone,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub created_at: NaiveDateTime,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer_name: order.customer.name.clone(),
            customer_email: order.customer.email.clone(),
            item_count: order.item_count(),
            total: order.total_amount,
            status: order.status,
            status_label: order.status.label(),
            status_tone: order.status.tone(),
            payment_method: order.payment.method,
            payment_status: order.payment.status,
            created_at: order.created_at,
        }
    }
}

/// Reply to a status change request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeAck {
    pub order_id: OrderId,
    pub current: OrderStatus,
    pub requested: OrderStatus,
    /// Always `false`: the order book is read-only.
    pub applied: bool,
}

/// The orders visible in the admin console.
#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// The five sample orders.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_orders())
    }

    /// Every order, in book order.
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Orders matching both the search term and the status filter.
    pub fn list<'a>(&'a self, query: &OrderQuery) -> impl Iterator<Item = &'a Order> + use<'a> {
        let term = query.search.trim().to_lowercase();
        let status = query.status;
        self.orders
            .iter()
            .filter(move |order| status.matches(order.status) && order.matches_search(&term))
    }

    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// The first `n` orders in book order.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[Order] {
        let end = self.orders.len().min(n);
        self.orders.get(..end).unwrap_or_default()
    }

    /// Record a requested status change without applying it.
    ///
    /// Returns `None` if the order does not exist.
    #[must_use]
    pub fn acknowledge_status_change(
        &self,
        id: &OrderId,
        requested: OrderStatus,
    ) -> Option<StatusChangeAck> {
        let order = self.get(id)?;

        tracing::info!(
            order_id = %order.id,
            current = %order.status,
            requested = %requested,
            "Status change requested"
        );

        Some(StatusChangeAck {
            order_id: order.id.clone(),
            current: order.status,
            requested,
            applied: false,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids<'a>(orders: impl Iterator<Item = &'a Order>) -> Vec<&'a str> {
        orders.map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_list_all() {
        let book = OrderBook::demo();
        assert_eq!(ids(book.list(&OrderQuery::default())).len(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let book = OrderBook::demo();

        let query = OrderQuery {
            search: "PRIYA".to_owned(),
            ..OrderQuery::default()
        };
        assert_eq!(ids(book.list(&query)), ["ORD002"]);

        let query = OrderQuery {
            search: "ord00".to_owned(),
            ..OrderQuery::default()
        };
        assert_eq!(ids(book.list(&query)).len(), 5);

        let query = OrderQuery {
            search: "meera.reddy@".to_owned(),
            ..OrderQuery::default()
        };
        assert_eq!(ids(book.list(&query)), ["ORD004"]);
    }

    #[test]
    fn test_status_filter() {
        let book = OrderBook::demo();
        let query = OrderQuery {
            search: String::new(),
            status: "cancelled".parse().unwrap(),
        };
        assert_eq!(ids(book.list(&query)), ["ORD005"]);
    }

    #[test]
    fn test_search_and_status_combine() {
        let book = OrderBook::demo();
        let query = OrderQuery {
            search: "sharma".to_owned(),
            status: StatusFilter::Only(OrderStatus::Pending),
        };
        assert!(book.list(&query).next().is_none());
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!("".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!("All".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "packed".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(OrderStatus::Packed)
        );
        assert!("lost".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_recent() {
        let book = OrderBook::demo();
        assert_eq!(ids(book.recent(2).iter()), ["ORD001", "ORD002"]);
        assert_eq!(book.recent(50).len(), 5);
    }

    #[test]
    fn test_acknowledge_does_not_mutate() {
        let book = OrderBook::demo();
        let id = OrderId::new("ORD003");

        let ack = book
            .acknowledge_status_change(&id, OrderStatus::Shipped)
            .unwrap();
        assert_eq!(ack.current, OrderStatus::Pending);
        assert_eq!(ack.requested, OrderStatus::Shipped);
        assert!(!ack.applied);
        assert_eq!(book.get(&id).unwrap().status, OrderStatus::Pending);

        assert!(
            book.acknowledge_status_change(&OrderId::new("ORD999"), OrderStatus::Packed)
                .is_none()
        );
    }

    #[test]
    fn test_order_row() {
        let book = OrderBook::demo();
        let row = OrderRow::from(book.get(&OrderId::new("ORD001")).unwrap());
        assert_eq!(row.item_count, 6);
        assert_eq!(row.status_label, "Delivered");
        assert_eq!(row.status_tone, BadgeTone::Success);
    }
}
