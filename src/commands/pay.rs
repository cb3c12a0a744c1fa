// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::PaymentGateway;
use crate::components::{PaymentForm, SubmitOutcome};
use crate::models::PaymentType;
use crate::utils::parse_decimal;
use anyhow::{Result, anyhow};

pub fn handle(gateway: &dyn PaymentGateway, sub: &clap::ArgMatches) -> Result<()> {
    let sale = sub.get_one::<String>("sale").unwrap();
    let remaining = parse_decimal(sub.get_one::<String>("remaining").unwrap())?;
    let payment_type: PaymentType = sub
        .get_one::<String>("type")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;

    let amount = sub.get_one::<String>("amount").unwrap();

    let mut form = PaymentForm::new(sale.as_str(), remaining);
    form.set_amount(amount.as_str());
    form.set_payment_type(payment_type);
    if let Some(note) = sub.get_one::<String>("note") {
        form.set_note(note.as_str());
    }

    let outcome = form.submit(
        gateway,
        || {
            println!(
                "Recorded {} payment of {} against sale {}",
                payment_type,
                amount.trim(),
                sale
            )
        },
        || println!("Payment form closed"),
    );

    match outcome {
        SubmitOutcome::Recorded => Ok(()),
        SubmitOutcome::Invalid(e) => Err(anyhow!(e)),
        SubmitOutcome::Failed(msg) => Err(anyhow!(msg)),
        SubmitOutcome::Busy | SubmitOutcome::Dismissed => {
            Err(anyhow!("payment form is not accepting submissions"))
        }
    }
}
