//! Per-channel conversion performance.

use crm_core::{estimate_revenue, names_match, Booking, Channel, Interaction, Lead};

use crate::types::ChannelPerformance;

/// Computes conversion performance for each interaction channel.
///
/// Always returns exactly three entries in fixed order Call, Chat,
/// Web Form, zeroed for channels with no traffic. A conversion is a
/// lead with a matching booking; it is attributed to the channel of the
/// first interaction (input order) matching that lead, with revenue
/// estimated from the booking's service label (or the lead's company
/// label when the booking has none).
pub fn compute_channel_performance(
    interactions: &[Interaction],
    leads: &[Lead],
    bookings: &[Booking],
) -> Vec<ChannelPerformance> {
    let mut totals = [0usize; 3];
    let mut converted = [0usize; 3];
    let mut revenue = [0f64; 3];

    for interaction in interactions {
        totals[channel_index(interaction.channel)] += 1;
    }

    for lead in leads {
        let Some(booking) = bookings
            .iter()
            .find(|b| names_match(&b.customer_name, &lead.name))
        else {
            continue;
        };
        let Some(first) = interactions
            .iter()
            .find(|i| names_match(&i.customer_name, &lead.name))
        else {
            continue;
        };

        let label = if booking.service.trim().is_empty() {
            &lead.company
        } else {
            &booking.service
        };
        let idx = channel_index(first.channel);
        converted[idx] += 1;
        revenue[idx] += estimate_revenue(label, None);
    }

    Channel::ALL
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            let conversion_rate = if totals[i] > 0 {
                converted[i] as f64 / totals[i] as f64 * 100.0
            } else {
                0.0
            };
            let avg_revenue = if converted[i] > 0 {
                revenue[i] / converted[i] as f64
            } else {
                0.0
            };
            ChannelPerformance {
                channel: channel.as_str().to_string(),
                total: totals[i],
                converted: converted[i],
                conversion_rate,
                avg_revenue,
                total_revenue: revenue[i],
            }
        })
        .collect()
}

fn channel_index(channel: Channel) -> usize {
    match channel {
        Channel::Call => 0,
        Channel::Chat => 1,
        Channel::WebForm => 2,
    }
}
