//! Time-pattern mining over interaction history.
//!
//! Three independent frequency passes (weekday, hour, weekday+hour),
//! each sub-keyed by inferred event type, pooled and ranked by
//! frequency. Tables are insertion-ordered so ties resolve
//! first-encountered-wins deterministically.

use chrono::{Datelike, Timelike};
use crm_core::{names_match, Interaction, Lead};

use crate::types::TimeInsight;

/// Insights returned at most.
const MAX_INSIGHTS: usize = 5;
/// Peak hours reported.
const TOP_HOURS: usize = 3;
/// Minimum frequency for a weekday+hour pattern to be reported.
const SLOT_THRESHOLD: usize = 2;
/// Example customer names kept per insight.
const MAX_EXAMPLES: usize = 3;

/// Per-event-type tally within one time bucket.
#[derive(Debug, Clone)]
struct TypeEntry {
    label: String,
    count: usize,
    examples: Vec<String>,
}

/// One time bucket: total traffic plus per-type tallies, both in
/// first-encounter order.
#[derive(Debug, Clone, Default)]
struct Bucket {
    total: usize,
    types: Vec<TypeEntry>,
}

impl Bucket {
    fn record(&mut self, event_type: &str, example: &str) {
        self.total += 1;
        match self.types.iter_mut().find(|t| t.label == event_type) {
            Some(entry) => {
                entry.count += 1;
                if entry.examples.len() < MAX_EXAMPLES {
                    entry.examples.push(example.to_string());
                }
            }
            None => self.types.push(TypeEntry {
                label: event_type.to_string(),
                count: 1,
                examples: vec![example.to_string()],
            }),
        }
    }

    /// The most frequent event type; earlier-seen wins ties.
    fn top_type(&self) -> Option<&TypeEntry> {
        let mut best: Option<&TypeEntry> = None;
        for entry in &self.types {
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best
    }
}

/// Insertion-ordered bucket table.
#[derive(Debug, Default)]
struct BucketTable<K: PartialEq> {
    entries: Vec<(K, Bucket)>,
}

impl<K: PartialEq> BucketTable<K> {
    fn record(&mut self, key: K, event_type: &str, example: &str) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.record(event_type, example),
            None => {
                let mut bucket = Bucket::default();
                bucket.record(event_type, example);
                self.entries.push((key, bucket));
            }
        }
    }

    /// The busiest bucket; earlier-seen wins ties.
    fn busiest(&self) -> Option<&(K, Bucket)> {
        let mut best: Option<&(K, Bucket)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.1.total > b.1.total) {
                best = Some(entry);
            }
        }
        best
    }
}

/// Mines day-of-week, hour-of-day, and day+hour activity patterns.
///
/// Returns at most five insights, descending by frequency. Interactions
/// without a parseable timestamp are ignored. The event type of an
/// interaction is the matching lead's company label, else the
/// interaction's own event-type field, else "Unknown".
pub fn compute_time_insights(interactions: &[Interaction], leads: &[Lead]) -> Vec<TimeInsight> {
    let mut by_day: BucketTable<String> = BucketTable::default();
    let mut by_hour: BucketTable<u32> = BucketTable::default();
    let mut by_slot: BucketTable<(String, u32)> = BucketTable::default();

    let mut total_dated = 0usize;
    for interaction in interactions {
        let Some(when) = interaction.timestamp else {
            continue;
        };
        total_dated += 1;

        let event_type = infer_event_type(interaction, leads);
        let day = when.format("%A").to_string();
        let hour = when.hour();

        by_day.record(day.clone(), &event_type, &interaction.customer_name);
        by_hour.record(hour, &event_type, &interaction.customer_name);
        by_slot.record((day, hour), &event_type, &interaction.customer_name);
    }

    if total_dated == 0 {
        return Vec::new();
    }

    let percentage = |frequency: usize| frequency as f64 / total_dated as f64 * 100.0;
    let mut insights = Vec::new();

    // Pass 1: the single busiest weekday, described by its top type.
    if let Some((day, bucket)) = by_day.busiest() {
        if let Some(top) = bucket.top_type() {
            insights.push(TimeInsight {
                pattern: day.clone(),
                description: format!(
                    "{day} is the busiest day, led by {} inquiries ({} of {} that day)",
                    top.label, top.count, bucket.total,
                ),
                frequency: top.count,
                percentage: percentage(top.count),
                examples: top.examples.clone(),
            });
        }
    }

    // Pass 2: the three busiest hours.
    let mut hour_order: Vec<&(u32, Bucket)> = by_hour.entries.iter().collect();
    hour_order.sort_by(|a, b| b.1.total.cmp(&a.1.total));
    // Buckets only exist once recorded into, so every entry has traffic.
    for (hour, bucket) in hour_order.into_iter().take(TOP_HOURS) {
        if let Some(top) = bucket.top_type() {
            insights.push(TimeInsight {
                pattern: format!("{hour:02}:00"),
                description: format!(
                    "Peak activity around {hour:02}:00, mostly {} inquiries",
                    top.label,
                ),
                frequency: top.count,
                percentage: percentage(top.count),
                examples: top.examples.clone(),
            });
        }
    }

    // Pass 3: every weekday+hour slot with a recurring top type.
    for ((day, hour), bucket) in &by_slot.entries {
        let Some(top) = bucket.top_type() else {
            continue;
        };
        if top.count < SLOT_THRESHOLD {
            continue;
        }
        insights.push(TimeInsight {
            pattern: format!("{day} {hour:02}:00"),
            description: format!(
                "{} inquiries cluster on {day}s around {hour:02}:00",
                top.label,
            ),
            frequency: top.count,
            percentage: percentage(top.count),
            examples: top.examples.clone(),
        });
    }

    // Stable sort keeps pass order on equal frequencies.
    insights.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    insights.truncate(MAX_INSIGHTS);
    insights
}

fn infer_event_type(interaction: &Interaction, leads: &[Lead]) -> String {
    if let Some(lead) = leads
        .iter()
        .find(|l| names_match(&l.name, &interaction.customer_name))
    {
        if !lead.company.trim().is_empty() {
            return lead.company.clone();
        }
    }
    match &interaction.event_type {
        Some(t) if !t.trim().is_empty() => t.clone(),
        _ => "Unknown".to_string(),
    }
}
