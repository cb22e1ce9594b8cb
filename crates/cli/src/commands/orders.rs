//! Order book listing.

use std::fmt::Write;

use bitewala_admin::services::{OrderBook, OrderQuery};

/// Render the orders matching `query`, one per line.
pub fn list(book: &OrderBook, query: &OrderQuery) -> String {
    let mut out = String::new();
    let mut shown = 0_usize;

    for order in book.list(query) {
        let _ = writeln!(
            out,
            "{:<8} {:<16} {:<10} {:>3} items {:>8}  {:<7} {}",
            order.id,
            order.customer.name,
            order.status.label(),
            order.item_count(),
            order.total_amount.to_string(),
            order.payment.method.label(),
            order.created_at.format("%Y-%m-%d %H:%M")
        );
        shown += 1;
    }

    if shown == 0 {
        out.push_str("No orders found\n");
    }
    let _ = writeln!(out, "{shown} of {} orders", book.len());
    out
}
