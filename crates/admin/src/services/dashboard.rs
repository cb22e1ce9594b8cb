//! Dashboard metrics derived from the order book.
//!
//! Revenue, units sold, and product performance count only billable
//! (non-cancelled) orders. Order and customer counts include every order.

use std::collections::{BTreeMap, HashSet};

use bitewala_core::{BadgeTone, OrderStatus, Price, ProductId};
use serde::Serialize;

use super::orders::{OrderBook, OrderRow};

/// Number of orders in the dashboard's recent-orders table.
pub const RECENT_ORDERS: usize = 5;

/// How many orders sit in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub label: &'static str,
    pub tone: BadgeTone,
    pub count: usize,
}

/// Sales of one product across billable orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPerformance {
    pub product_id: ProductId,
    pub name: String,
    pub units: u64,
    pub revenue: Price,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub total_orders: usize,
    pub revenue: Price,
    pub customers: usize,
    pub units_sold: u64,
    pub status_counts: Vec<StatusCount>,
    /// Sorted by units sold, most first; ties by product ID.
    pub product_performance: Vec<ProductPerformance>,
    pub recent_orders: Vec<OrderRow>,
}

impl DashboardMetrics {
    #[must_use]
    pub fn compute(book: &OrderBook) -> Self {
        let orders = book.all();
        let billable = || orders.iter().filter(|order| order.status.is_billable());

        let customers: HashSet<&str> = orders
            .iter()
            .map(|order| order.customer.email.as_str())
            .collect();

        let status_counts = OrderStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                label: status.label(),
                tone: status.tone(),
                count: orders.iter().filter(|order| order.status == status).count(),
            })
            .collect();

        let mut per_product: BTreeMap<&ProductId, ProductPerformance> = BTreeMap::new();
        for line in billable().flat_map(|order| &order.items) {
            let entry = per_product
                .entry(&line.product_id)
                .or_insert_with(|| ProductPerformance {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    units: 0,
                    revenue: Price::ZERO,
                });
            entry.units += u64::from(line.quantity);
            entry.revenue += line.line_total();
        }
        let mut product_performance: Vec<ProductPerformance> = per_product.into_values().collect();
        // Stable sort: ties stay in product ID order.
        product_performance.sort_by(|a, b| b.units.cmp(&a.units));

        Self {
            total_orders: orders.len(),
            revenue: billable().map(|order| order.total_amount).sum(),
            customers: customers.len(),
            units_sold: billable().map(bitewala_core::Order::item_count).sum(),
            status_counts,
            product_performance,
            recent_orders: book.recent(RECENT_ORDERS).iter().map(OrderRow::from).collect(),
        }
    }
}
