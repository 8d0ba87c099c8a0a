//! Fixed price table and revenue estimation.
//!
//! Every revenue figure in the analytics output is an estimate derived
//! from the event-type label through this table. Unknown labels fall
//! back to the Other tier; the estimator never fails.

/// A pricing tier: base venue fee plus a per-guest charge.
#[derive(Debug, Clone, Copy)]
pub struct PriceTier {
    pub label: &'static str,
    pub base: f64,
    pub per_person: f64,
}

/// Fixed price table. The last entry (Other) is the fallback tier.
pub const PRICE_TABLE: [PriceTier; 7] = [
    PriceTier { label: "Wedding", base: 5000.0, per_person: 150.0 },
    PriceTier { label: "Corporate", base: 3000.0, per_person: 100.0 },
    PriceTier { label: "Birthday", base: 1500.0, per_person: 75.0 },
    PriceTier { label: "Anniversary", base: 2000.0, per_person: 100.0 },
    PriceTier { label: "Conference", base: 4000.0, per_person: 125.0 },
    PriceTier { label: "Meeting", base: 1000.0, per_person: 50.0 },
    PriceTier { label: "Other", base: 2000.0, per_person: 100.0 },
];

/// Looks up the pricing tier for an event-type label, case-insensitively.
/// Unmatched labels get the Other tier.
pub fn tier_for(event_type: &str) -> PriceTier {
    let needle = event_type.trim().to_lowercase();
    PRICE_TABLE
        .iter()
        .find(|t| t.label.to_lowercase() == needle)
        .copied()
        .unwrap_or(PRICE_TABLE[PRICE_TABLE.len() - 1])
}

/// Estimates revenue for an event-type label and optional headcount.
///
/// Result = base + per_person × headcount when headcount is positive,
/// else the base fee alone. Pure and infallible.
pub fn estimate_revenue(event_type: &str, headcount: Option<u32>) -> f64 {
    let tier = tier_for(event_type);
    match headcount {
        Some(n) if n > 0 => tier.base + tier.per_person * f64::from(n),
        _ => tier.base,
    }
}
