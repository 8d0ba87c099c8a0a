//! Record builders and a standard sample dataset.

use chrono::{DateTime, Utc};
use crm_core::{
    timeparse, Booking, BookingStatus, Channel, Interaction, InteractionStatus, Lead, LeadStatus,
};

fn ts(s: &str) -> Option<DateTime<Utc>> {
    timeparse::parse_str(s)
}

pub fn interaction(customer: &str, when: &str, channel: Channel) -> Interaction {
    Interaction {
        id: format!("int-{customer}-{when}"),
        customer_name: customer.into(),
        contact: format!("{}@example.com", customer.to_lowercase().replace(' ', ".")),
        timestamp: ts(when),
        status: InteractionStatus::Completed,
        channel,
        transcript: String::new(),
        tags: vec![],
        event_type: None,
        headcount: None,
        description: None,
    }
}

pub fn lead(name: &str, company: &str, status: LeadStatus) -> Lead {
    Lead {
        id: format!("lead-{name}"),
        name: name.into(),
        company: company.into(),
        contact: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        status,
        last_interaction: None,
    }
}

pub fn booking(customer: &str, service: &str, when: &str, status: BookingStatus) -> Booking {
    Booking {
        id: format!("bk-{customer}-{when}"),
        customer_name: customer.into(),
        service: service.into(),
        staff: "Dana Reyes".into(),
        date_time: ts(when),
        status,
    }
}

/// A small but representative CRM snapshot.
///
/// - Sarah Hartley: wedding lead, called twice, confirmed July booking.
/// - Mo Adler: corporate lead, chatted once, pending July booking.
/// - Jen Wu: new lead, no interactions or bookings yet.
/// - A walk-in confirmed booking with no lead on record.
pub fn sample_dataset() -> (Vec<Interaction>, Vec<Lead>, Vec<Booking>) {
    let interactions = vec![
        interaction("Sarah Hartley", "2024-07-05T14:10:00Z", Channel::Call),
        interaction("Sarah Hartley", "2024-07-12T14:40:00Z", Channel::Call),
        interaction("Mo Adler", "2024-07-06T10:15:00Z", Channel::Chat),
    ];
    let leads = vec![
        lead("Sarah Hartley", "Wedding", LeadStatus::Qualified),
        lead("Mo Adler", "Corporate", LeadStatus::Contacted),
        lead("Jen Wu", "Birthday", LeadStatus::New),
    ];
    let bookings = vec![
        booking(
            "Sarah Hartley",
            "Wedding",
            "2024-07-20T16:00:00Z",
            BookingStatus::Confirmed,
        ),
        booking(
            "Mo Adler",
            "Corporate",
            "2024-07-25T09:00:00Z",
            BookingStatus::Pending,
        ),
        booking(
            "Walk In",
            "Meeting",
            "2024-08-02T11:00:00Z",
            BookingStatus::Confirmed,
        ),
    ];
    (interactions, leads, bookings)
}
