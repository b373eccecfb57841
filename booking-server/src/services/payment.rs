//! Payment checkout sessions
//!
//! POSTs to the external payment function to create a hosted checkout
//! session; the caller redirects the browser to the returned URL. Payment
//! completion flows back through the provider, never through this layer.

use serde_json::json;

use shared::CheckoutSession;

use crate::db::models::Booking;
use crate::utils::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct PaymentService {
    endpoint: Option<String>,
    service_key: Option<String>,
    client: reqwest::Client,
}

impl PaymentService {
    pub fn new(endpoint: Option<String>, service_key: Option<String>) -> Self {
        Self {
            endpoint,
            service_key,
            client: reqwest::Client::new(),
        }
    }

    /// Create a hosted checkout session for a stored booking
    pub async fn create_checkout_session(&self, booking: &Booking) -> AppResult<CheckoutSession> {
        let Some(endpoint) = &self.endpoint else {
            return Err(AppError::upstream("Payment endpoint not configured"));
        };

        let body = json!({
            "booking_id": booking.reference,
            "amount": booking.total_price,
            "currency": "eur",
            "customer_email": booking.customer_email,
            "description": booking.item_title.pick(booking.lang),
        });

        let mut request = self
            .client
            .post(format!("{endpoint}/checkout-session"))
            .json(&body);
        if let Some(key) = &self.service_key {
            request = request.bearer_auth(key);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Payment endpoint unreachable: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::upstream(format!(
                "Payment endpoint returned {status}: {text}"
            )));
        }

        let session: CheckoutSession = resp
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("Invalid checkout session response: {e}")))?;

        tracing::info!(
            reference = %booking.reference,
            session = %session.session_id,
            "Checkout session created"
        );
        Ok(session)
    }
}
