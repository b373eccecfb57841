//! Email notification dispatch
//!
//! POSTs the booking confirmation request to the external notification
//! function: booking reference, type tag, recipient and (when rendering
//! succeeded) the receipt PDF as base64. The actual email sending lives
//! behind the endpoint, not here.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::json;

use crate::db::models::Booking;
use crate::utils::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct NotifyService {
    endpoint: Option<String>,
    service_key: Option<String>,
    client: reqwest::Client,
}

impl NotifyService {
    pub fn new(endpoint: Option<String>, service_key: Option<String>) -> Self {
        Self {
            endpoint,
            service_key,
            client: reqwest::Client::new(),
        }
    }

    /// Send the booking confirmation email request.
    ///
    /// With no endpoint configured the call is a no-op (local development).
    pub async fn send_booking_confirmation(
        &self,
        booking: &Booking,
        receipt_pdf: Option<&[u8]>,
    ) -> AppResult<()> {
        let Some(endpoint) = &self.endpoint else {
            tracing::debug!(
                reference = %booking.reference,
                "Notification endpoint not configured, skipping email dispatch"
            );
            return Ok(());
        };

        let body = json!({
            "booking_id": booking.reference,
            "type": "booking_confirmation",
            "to": booking.customer_email,
            "lang": booking.lang.code(),
            "attachment": receipt_pdf.map(|pdf| BASE64.encode(pdf)),
        });

        let mut request = self.client.post(format!("{endpoint}/send")).json(&body);
        if let Some(key) = &self.service_key {
            request = request.bearer_auth(key);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Notification endpoint unreachable: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::upstream(format!(
                "Notification endpoint returned {status}: {text}"
            )));
        }

        tracing::info!(reference = %booking.reference, "Confirmation email dispatched");
        Ok(())
    }
}
