//! Monthly revenue rollups.

use chrono::Datelike;
use crm_core::{estimate_revenue, Booking, BookingStatus};
use std::collections::BTreeMap;

use crate::types::MonthlyRevenue;

#[derive(Debug, Default)]
struct MonthTotals {
    label: String,
    confirmed: f64,
    pending: f64,
    projected: f64,
}

/// Groups bookings by calendar month and sums estimated revenue.
///
/// One entry per distinct (year, month) pair present in the booking set,
/// ascending. Every dated booking adds its estimate to `projected` and
/// `total`; Confirmed bookings also add to `confirmed`, Pending to
/// `pending`. Cancelled bookings add to neither, so `total` can exceed
/// `confirmed + pending`. Bookings without a parseable date have no
/// month to land in and are skipped.
pub fn compute_monthly_revenue(bookings: &[Booking]) -> Vec<MonthlyRevenue> {
    let mut months: BTreeMap<(i32, u32), MonthTotals> = BTreeMap::new();

    for booking in bookings {
        let Some(when) = booking.date_time else {
            continue;
        };
        let key = (when.year(), when.month());
        let entry = months.entry(key).or_insert_with(|| MonthTotals {
            label: when.format("%b %Y").to_string(),
            ..MonthTotals::default()
        });

        let estimate = estimate_revenue(&booking.service, None);
        entry.projected += estimate;
        match booking.status {
            BookingStatus::Confirmed => entry.confirmed += estimate,
            BookingStatus::Pending => entry.pending += estimate,
            BookingStatus::Cancelled => {}
        }
    }

    months
        .into_iter()
        .map(|((year, month_num), totals)| MonthlyRevenue {
            month: totals.label,
            month_num,
            year,
            confirmed: totals.confirmed,
            pending: totals.pending,
            projected: totals.projected,
            total: totals.projected,
        })
        .collect()
}
