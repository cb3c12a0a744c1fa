// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Admin form for recording a payment against a sale.
//!
//! Validation runs synchronously before any request. `on_success` fires only
//! after the backend confirms the write, and always before `on_close`.

use crate::api::{ApiError, PaymentGateway};
use crate::models::{PaymentRecord, PaymentType, SaleBalance};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

pub const FALLBACK_ERROR: &str = "Failed to record payment";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter valid amount")]
    InvalidAmount,

    #[error("Amount exceeds remaining balance")]
    ExceedsRemaining,
}

pub fn validate_amount(raw: &str, balance: &SaleBalance) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    // Decimal parsing skips digit separators; a form field never should.
    if raw.contains('_') {
        return Err(ValidationError::InvalidAmount);
    }
    let amount = match raw.parse::<Decimal>() {
        Ok(a) => a,
        Err(_) if beyond_decimal_range(raw) => return Err(ValidationError::ExceedsRemaining),
        Err(_) => return Err(ValidationError::InvalidAmount),
    };
    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    if !balance.covers(amount) {
        return Err(ValidationError::ExceedsRemaining);
    }
    Ok(amount)
}

/// A well-formed positive number too large to hold in a `Decimal`.
fn beyond_decimal_range(raw: &str) -> bool {
    let max = Decimal::MAX.to_f64().unwrap_or(f64::MAX);
    raw.parse::<f64>()
        .map(|v| v.is_finite() && v > max)
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend confirmed the write; callbacks ran.
    Recorded,
    /// Local validation failed; nothing was sent.
    Invalid(ValidationError),
    /// Backend or network rejected the write; the form stays open.
    Failed(String),
    /// A submission is already in flight.
    Busy,
    /// The form was dismissed before the response settled.
    Dismissed,
}

#[derive(Debug)]
pub struct PaymentForm {
    sale_id: String,
    balance: SaleBalance,
    amount: String,
    payment_type: PaymentType,
    note: String,
    error: Option<String>,
    submitting: bool,
    open: bool,
    generation: u64,
}

impl PaymentForm {
    pub fn new(sale_id: impl Into<String>, remaining: Decimal) -> Self {
        PaymentForm {
            sale_id: sale_id.into(),
            balance: SaleBalance::new(remaining),
            amount: String::new(),
            payment_type: PaymentType::default(),
            note: String::new(),
            error: None,
            submitting: false,
            open: true,
            generation: 0,
        }
    }

    pub fn sale_id(&self) -> &str {
        &self.sale_id
    }

    pub fn remaining(&self) -> Decimal {
        self.balance.remaining
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    /// Closes the form. A submission still in flight settles silently.
    pub fn dismiss(&mut self) {
        self.open = false;
        self.generation += 1;
        self.submitting = false;
    }

    /// Validates and marks the form as submitting. The returned request must
    /// be settled with [`PaymentForm::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitOutcome> {
        if !self.open {
            return Err(SubmitOutcome::Dismissed);
        }
        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }
        self.error = None;

        let amount = validate_amount(&self.amount, &self.balance).map_err(|e| {
            self.error = Some(e.to_string());
            SubmitOutcome::Invalid(e)
        })?;

        self.submitting = true;
        Ok(PendingSubmission {
            generation: self.generation,
            sale_id: self.sale_id.clone(),
            record: PaymentRecord {
                amount,
                payment_type: self.payment_type,
                note: self.note.clone(),
            },
        })
    }

    pub fn finish_submit<S, C>(
        &mut self,
        pending: PendingSubmission,
        result: Result<(), ApiError>,
        on_success: S,
        on_close: C,
    ) -> SubmitOutcome
    where
        S: FnOnce(),
        C: FnOnce(),
    {
        if pending.generation != self.generation || !self.open {
            return SubmitOutcome::Dismissed;
        }
        self.submitting = false;

        match result {
            Ok(()) => {
                on_success();
                on_close();
                self.open = false;
                SubmitOutcome::Recorded
            }
            Err(e) => {
                let msg = e.server_message().unwrap_or(FALLBACK_ERROR).to_string();
                self.error = Some(msg.clone());
                SubmitOutcome::Failed(msg)
            }
        }
    }

    pub fn submit<G, S, C>(&mut self, gateway: &G, on_success: S, on_close: C) -> SubmitOutcome
    where
        G: PaymentGateway + ?Sized,
        S: FnOnce(),
        C: FnOnce(),
    {
        let pending = match self.begin_submit() {
            Ok(p) => p,
            Err(outcome) => return outcome,
        };
        let result = gateway.record_payment(&pending.sale_id, &pending.record);
        self.finish_submit(pending, result, on_success, on_close)
    }
}

/// A validated payment waiting on the backend.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    generation: u64,
    pub sale_id: String,
    pub record: PaymentRecord,
}
