//! Booking notifications.
//!
//! A new booking produces one `InquiryNotification` holding both renderings: an HTML
//! email and a plain WhatsApp text. Free-form messages relayed from the site's WhatsApp
//! widget reuse the same shape without a booking ID. Delivery goes through the
//! `Notifier` trait so the transport can be swapped without touching booking creation.

use async_trait::async_trait;

use crate::server::{error::notification::NotifyError, model::inquiry::Inquiry};

pub const EMAIL_SUBJECT: &str = "INQUIRY Successfully CREATED";

/// Rendered notification for the rental desk.
#[derive(Debug, Clone, PartialEq)]
pub struct InquiryNotification {
    /// `None` for relayed messages that are not tied to a booking.
    pub booking_id: Option<String>,
    pub subject: String,
    pub html_body: String,
    pub whatsapp_text: String,
}

impl InquiryNotification {
    /// Renders both message bodies for a stored inquiry.
    pub fn render(inquiry: &Inquiry) -> Result<Self, NotifyError> {
        let json = serde_json::to_string_pretty(&inquiry.clone().into_dto())?;

        Ok(Self {
            booking_id: Some(inquiry.booking_id.clone()),
            subject: EMAIL_SUBJECT.to_string(),
            html_body: render_html(inquiry),
            whatsapp_text: format!("New Enquiry received :\n{}", json),
        })
    }

    /// Wraps a free-form customer message for the rental desk.
    pub fn relay(message: &str) -> Self {
        let message = message.trim();

        Self {
            booking_id: None,
            subject: EMAIL_SUBJECT.to_string(),
            html_body: format!(
                "<html><body><h2>Inquiry Details:</h2><pre>{}</pre></body></html>",
                escape_html(message)
            ),
            whatsapp_text: message.to_string(),
        }
    }
}

fn render_html(inquiry: &Inquiry) -> String {
    let car = inquiry.car_label();
    let rows = [
        ("Booking ID", Some(inquiry.booking_id.as_str())),
        ("Name", Some(inquiry.name.as_str())),
        ("Car", car.as_deref()),
        ("From Date", inquiry.start_date.as_deref()),
        ("From Time", inquiry.pickup_time.as_deref()),
        ("To Date", inquiry.end_date.as_deref()),
        ("To Time", inquiry.drop_time.as_deref()),
        ("Pickup Location", inquiry.pick_up_loc.as_deref()),
        ("Drop Location", inquiry.drop_location.as_deref()),
        ("Phone Number", Some(inquiry.phone_number.as_str())),
        ("Email", inquiry.email.as_deref()),
        ("Package", inquiry.packages.as_deref()),
        ("Message", inquiry.message.as_deref()),
    ];

    let mut html = String::from(
        "<html><body><h2>Inquiry Details:</h2><table style=\"border-collapse: collapse;\">",
    );
    for (label, value) in rows {
        let value = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("N/A");
        html.push_str(&format!(
            "<tr><td><strong>{}:</strong></td><td>{}</td></tr>",
            label,
            escape_html(value)
        ));
    }
    html.push_str("</table></body></html>");

    html
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Delivery channel for booking notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &InquiryNotification) -> Result<(), NotifyError>;
}

/// Notifier that records each dispatch in the application log.
///
/// Used when no mail or messaging transport is configured for the deployment.
pub struct LogNotifier {
    email_recipient: Option<String>,
    whatsapp_recipient: Option<String>,
}

impl LogNotifier {
    pub fn new(email_recipient: Option<String>, whatsapp_recipient: Option<String>) -> Self {
        Self {
            email_recipient,
            whatsapp_recipient,
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notification: &InquiryNotification) -> Result<(), NotifyError> {
        let booking_id = notification.booking_id.as_deref().unwrap_or("none");

        match &self.email_recipient {
            Some(to) => tracing::info!(
                booking_id = %booking_id,
                to = %to,
                "Email notification: {}",
                notification.subject
            ),
            None => tracing::debug!("No email recipient configured, skipping email notification"),
        }

        match &self.whatsapp_recipient {
            Some(to) => tracing::info!(
                booking_id = %booking_id,
                to = %to,
                "WhatsApp notification: {}",
                notification.whatsapp_text
            ),
            None => {
                tracing::debug!("No WhatsApp recipient configured, skipping WhatsApp notification")
            }
        }

        Ok(())
    }
}
