// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Blocking client for the dealership backend, plus the two seams the
//! components talk through.

use crate::models::{CarListing, PaymentRecord};
use crate::utils::http_client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server in an error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub trait ListingSource {
    fn fetch_cars(&self) -> Result<Vec<CarListing>, ApiError>;
}

pub trait PaymentGateway {
    fn record_payment(&self, sale_id: &str, payment: &PaymentRecord) -> Result<(), ApiError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        Ok(ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http: http_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-2xx response into [`ApiError::Status`], keeping any `message`
/// the server put in the body.
fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty());
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

impl ListingSource for ApiClient {
    fn fetch_cars(&self) -> Result<Vec<CarListing>, ApiError> {
        let url = self.url("/cars");
        debug!(%url, "fetching listings");
        let resp = check(self.http.get(&url).send()?)?;
        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl PaymentGateway for ApiClient {
    fn record_payment(&self, sale_id: &str, payment: &PaymentRecord) -> Result<(), ApiError> {
        let url = self.url(&format!("/admin/sales/{}/payments", sale_id));
        debug!(%url, amount = %payment.amount, payment_type = %payment.payment_type, "posting payment");
        let mut req = self.http.post(&url).json(payment);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        check(req.send()?)?;
        info!(sale_id, amount = %payment.amount, "payment recorded");
        Ok(())
    }
}
