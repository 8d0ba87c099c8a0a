//! Five-stage lead funnel.
//!
//! Stage membership is an inclusion filter, not a partition: one lead
//! can count toward several stages at once, and a later stage can be
//! larger than the one before it (which makes its dropoff negative,
//! reported as-is).

use crm_core::{
    estimate_revenue, normalize_name, Booking, BookingStatus, Interaction, Lead, LeadStatus,
};
use std::collections::HashSet;

use crate::types::FunnelStage;

/// Funnel stage names in their fixed order.
pub const STAGE_NAMES: [&str; 5] = ["New", "Contacted", "Qualified", "Booked", "Completed"];

/// Computes the five funnel stages.
///
/// Always returns exactly five entries in fixed stage order, zeroed when
/// the inputs are empty. Membership rules:
/// 1. New: leads with status New.
/// 2. Contacted: leads with status Contacted, or any lead whose name
///    matches an interaction's customer name.
/// 3. Qualified: leads with status Qualified.
/// 4. Booked: leads whose name matches a booking's customer name.
/// 5. Completed: bookings with status Confirmed. This is a
///    booking-level count, not joined back to leads; the asymmetry with
///    stage 4 is inherited dashboard behavior.
pub fn compute_funnel(
    leads: &[Lead],
    bookings: &[Booking],
    interactions: &[Interaction],
) -> Vec<FunnelStage> {
    let interaction_names: HashSet<String> = interactions
        .iter()
        .map(|i| normalize_name(&i.customer_name))
        .collect();
    let booking_names: HashSet<String> = bookings
        .iter()
        .map(|b| normalize_name(&b.customer_name))
        .collect();

    let new: Vec<&Lead> = leads.iter().filter(|l| l.status == LeadStatus::New).collect();
    let contacted: Vec<&Lead> = leads
        .iter()
        .filter(|l| {
            l.status == LeadStatus::Contacted
                || interaction_names.contains(&normalize_name(&l.name))
        })
        .collect();
    let qualified: Vec<&Lead> = leads
        .iter()
        .filter(|l| l.status == LeadStatus::Qualified)
        .collect();
    let booked: Vec<&Lead> = leads
        .iter()
        .filter(|l| booking_names.contains(&normalize_name(&l.name)))
        .collect();
    let completed: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .collect();

    let lead_revenue = |stage: &[&Lead]| -> f64 {
        stage.iter().map(|l| estimate_revenue(&l.company, None)).sum()
    };

    let counts = [
        new.len(),
        contacted.len(),
        qualified.len(),
        booked.len(),
        completed.len(),
    ];
    let revenues: [f64; 5] = [
        lead_revenue(&new),
        lead_revenue(&contacted),
        lead_revenue(&qualified),
        lead_revenue(&booked),
        completed
            .iter()
            .map(|b| estimate_revenue(&b.service, None))
            .sum(),
    ];

    let top = counts[0];
    STAGE_NAMES
        .iter()
        .enumerate()
        .map(|(i, &stage)| {
            let count = counts[i];
            let percentage = if top > 0 {
                count as f64 / top as f64 * 100.0
            } else {
                0.0
            };
            let dropoff = if i == 0 {
                0.0
            } else if counts[i - 1] > 0 {
                (counts[i - 1] as f64 - count as f64) / counts[i - 1] as f64 * 100.0
            } else {
                0.0
            };
            FunnelStage {
                stage: stage.to_string(),
                count,
                percentage,
                dropoff,
                revenue: revenues[i],
            }
        })
        .collect()
}
