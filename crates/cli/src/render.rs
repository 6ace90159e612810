//! Console formatting for lots and reports.

use chrono::{DateTime, Utc};

use lotflow_inventory::{InventoryReport, Lot, ProductSummary};

/// Second precision; lots are tracked far coarser than sub-second anyway.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One-line description of a lot, for stage/dispatch confirmations.
pub fn describe_lot(lot: &Lot) -> String {
    format!(
        "lot {}, quantity {}, received {}",
        lot.lot_number(),
        lot.quantity(),
        format_timestamp(lot.received_at())
    )
}

/// Render both report sections as aligned tables.
pub fn render_report(report: &InventoryReport) -> String {
    let mut out = String::new();
    out.push_str("--- Receiving ---\n");
    push_section(&mut out, &report.receiving);
    out.push_str("--- Outbound preparation ---\n");
    push_section(&mut out, &report.preparation);
    out
}

fn push_section(out: &mut String, rows: &[ProductSummary]) {
    out.push_str(&format!(
        "{:<12}: {:<12}: {:<20}\n",
        "product id", "quantity", "oldest received"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<12}: {:<12}: {:<20}\n",
            row.product_id,
            row.total_quantity,
            format_timestamp(row.oldest_received_at)
        ));
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
