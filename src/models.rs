// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A car record as served by the backend inventory. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarListing {
    #[serde(alias = "_id")]
    pub id: String,
    pub brand: String,
    #[serde(default)]
    pub variant: Option<String>,
    pub year: i32,
    #[serde(default)]
    pub km_driven: u64,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub admin_selling_price: Decimal,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_verified: bool,
}

impl CarListing {
    /// First gallery image, falling back to the single `image` field.
    pub fn primary_image(&self) -> String {
        self.images
            .first()
            .cloned()
            .or_else(|| self.image.clone())
            .unwrap_or_default()
    }
}

/// Card data for the featured grid, derived from a [`CarListing`] on every fetch.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayCar {
    pub id: String,
    pub image: String,
    pub brand: String,
    pub variant: String,
    pub price: Decimal,
    pub year: i32,
    pub km: u64,
    pub fuel: String,
    pub emi: Decimal,
    pub status: String,
    pub is_verified: bool,
}

impl From<&CarListing> for DisplayCar {
    fn from(car: &CarListing) -> Self {
        let price = car.admin_selling_price;
        DisplayCar {
            id: car.id.clone(),
            image: car.primary_image(),
            brand: car.brand.clone(),
            variant: car.variant.clone().unwrap_or_default(),
            price,
            year: car.year,
            km: car.km_driven,
            fuel: car.fuel_type.clone(),
            emi: emi_estimate(price),
            status: car.status.clone(),
            is_verified: true,
        }
    }
}

/// Display-only monthly installment: price / 100, rounded half away from zero.
pub fn emi_estimate(price: Decimal) -> Decimal {
    (price / Decimal::ONE_HUNDRED).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    #[default]
    Cash,
    Upi,
    Bank,
    Loan,
}

impl PaymentType {
    pub const ALL: [PaymentType; 4] = [
        PaymentType::Cash,
        PaymentType::Upi,
        PaymentType::Bank,
        PaymentType::Loan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Cash => "CASH",
            PaymentType::Upi => "UPI",
            PaymentType::Bank => "BANK",
            PaymentType::Loan => "LOAN",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CASH" => Ok(PaymentType::Cash),
            "UPI" => Ok(PaymentType::Upi),
            "BANK" => Ok(PaymentType::Bank),
            "LOAN" => Ok(PaymentType::Loan),
            other => Err(format!(
                "Unknown payment type '{}', expected CASH, UPI, BANK or LOAN",
                other
            )),
        }
    }
}

/// Body of `POST /admin/sales/{saleId}/payments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub payment_type: PaymentType,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleBalance {
    pub remaining: Decimal,
}

impl SaleBalance {
    pub fn new(remaining: Decimal) -> Self {
        SaleBalance { remaining }
    }

    pub fn covers(&self, amount: Decimal) -> bool {
        amount <= self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emi_rounds_half_up() {
        assert_eq!(emi_estimate(Decimal::new(500000, 0)), Decimal::new(5000, 0));
        assert_eq!(emi_estimate(Decimal::new(12350, 0)), Decimal::new(124, 0));
        assert_eq!(emi_estimate(Decimal::new(12349, 0)), Decimal::new(123, 0));
    }

    #[test]
    fn listing_accepts_backend_shape() {
        let raw = r#"{
            "_id": "c1",
            "brand": "Maruti",
            "year": 2024,
            "kmDriven": 12000,
            "fuelType": "Petrol",
            "images": ["a.jpg", "b.jpg"],
            "adminSellingPrice": 550000,
            "status": "available"
        }"#;
        let car: CarListing = serde_json::from_str(raw).unwrap();
        assert_eq!(car.id, "c1");
        assert_eq!(car.variant, None);
        assert_eq!(car.primary_image(), "a.jpg");
        assert!(!car.is_verified);

        let shown = DisplayCar::from(&car);
        assert_eq!(shown.variant, "");
        assert_eq!(shown.emi, Decimal::new(5500, 0));
        assert!(shown.is_verified);
    }

    #[test]
    fn payment_record_wire_format() {
        let rec = PaymentRecord {
            amount: Decimal::new(500050, 2),
            payment_type: PaymentType::Upi,
            note: String::new(),
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["amount"], serde_json::json!(5000.5));
        assert_eq!(v["paymentType"], "UPI");
        assert_eq!(v["note"], "");
    }

    #[test]
    fn payment_type_parses_case_insensitively() {
        assert_eq!("upi".parse::<PaymentType>().unwrap(), PaymentType::Upi);
        assert!("cheque".parse::<PaymentType>().is_err());
        assert_eq!(PaymentType::default(), PaymentType::Cash);
    }
}
