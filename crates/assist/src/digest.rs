//! Manager digest: one headline plus a handful of highlights.
//!
//! When a text generator is injected we ask it to write the digest from
//! the aggregates; its output must be `{ "headline": string,
//! "highlights": [string] }`. Any failure or shape mismatch falls back
//! to the deterministic rule-based digest, so the endpoint always
//! answers.

use analytics::{ChannelPerformance, FunnelStage, MonthlyRevenue, TimeInsight};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::TextGenerator;

/// Aggregates the digest is written from.
#[derive(Debug, Clone, Copy)]
pub struct DigestInput<'a> {
    pub funnel: &'a [FunnelStage],
    pub monthly: &'a [MonthlyRevenue],
    pub channels: &'a [ChannelPerformance],
    pub insights: &'a [TimeInsight],
}

/// The digest returned to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    pub headline: String,
    pub highlights: Vec<String>,
    /// "generated" when the capability produced it, "fallback" otherwise.
    pub source: String,
}

/// Builds the digest, preferring the injected generator.
pub async fn build_digest(
    generator: Option<&dyn TextGenerator>,
    input: DigestInput<'_>,
) -> Digest {
    if let Some(generator) = generator {
        match generator.generate_structured(&render_prompt(input)).await {
            Ok(value) => match parse_generated(&value) {
                Some(digest) => return digest,
                None => warn!("Generator returned malformed digest shape, using fallback"),
            },
            Err(e) => warn!(error = %e, "Digest generation failed, using fallback"),
        }
    }
    fallback_digest(input)
}

/// Renders the generation prompt: instructions plus the aggregates as
/// compact JSON.
fn render_prompt(input: DigestInput<'_>) -> String {
    let aggregates = serde_json::json!({
        "funnel": input.funnel,
        "monthlyRevenue": input.monthly,
        "channelPerformance": input.channels,
        "insights": input.insights,
    });
    format!(
        "Write a short daily digest for a venue manager from these CRM \
         analytics. Respond with JSON: {{\"headline\": string, \
         \"highlights\": [string]}}.\n{aggregates}"
    )
}

fn parse_generated(value: &Value) -> Option<Digest> {
    let headline = value.get("headline")?.as_str()?.trim();
    if headline.is_empty() {
        return None;
    }
    let highlights = value
        .get("highlights")?
        .as_array()?
        .iter()
        .filter_map(|h| h.as_str())
        .map(str::to_string)
        .collect();
    Some(Digest {
        headline: headline.to_string(),
        highlights,
        source: "generated".to_string(),
    })
}

/// Deterministic rule-based digest: same aggregates in, same text out.
pub fn fallback_digest(input: DigestInput<'_>) -> Digest {
    let new_leads = input.funnel.first().map_or(0, |s| s.count);
    let projected: f64 = input.monthly.iter().map(|m| m.total).sum();
    let headline = format!("{new_leads} new leads in the pipeline, ${projected:.0} projected");

    let mut highlights = Vec::new();

    // Steepest funnel drop (skipping the fixed-zero New stage).
    if let Some((i, worst)) = input
        .funnel
        .iter()
        .enumerate()
        .skip(1)
        .max_by(|a, b| a.1.dropoff.total_cmp(&b.1.dropoff))
    {
        if worst.dropoff > 0.0 {
            highlights.push(format!(
                "Steepest drop: {:.0}% from {} to {}",
                worst.dropoff,
                input.funnel[i - 1].stage,
                worst.stage,
            ));
        }
    }

    if let Some(best) = input
        .monthly
        .iter()
        .max_by(|a, b| a.total.total_cmp(&b.total))
    {
        highlights.push(format!("Best month: {} (${:.0} total)", best.month, best.total));
    }

    if let Some(best) = input
        .channels
        .iter()
        .filter(|c| c.total > 0)
        .max_by(|a, b| a.conversion_rate.total_cmp(&b.conversion_rate))
    {
        highlights.push(format!(
            "{} converts best at {:.0}% ({} of {})",
            best.channel, best.conversion_rate, best.converted, best.total,
        ));
    }

    if let Some(top) = input.insights.first() {
        highlights.push(top.description.clone());
    }

    Digest {
        headline,
        highlights,
        source: "fallback".to_string(),
    }
}
