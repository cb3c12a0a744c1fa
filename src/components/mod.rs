// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod featured;
pub mod payment_form;
pub mod status_badge;
pub mod why_choose_us;

pub use featured::{FeaturedListingsView, FetchTicket, ListingsState, featured_cars};
pub use payment_form::{PaymentForm, PendingSubmission, SubmitOutcome, ValidationError, validate_amount};
pub use status_badge::{BadgeKind, StatusBadge};
