// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SellingPoint {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SELLING_POINTS: [SellingPoint; 4] = [
    SellingPoint {
        title: "Certified Inspection",
        description: "Every car passes a multi-point inspection before it is listed.",
    },
    SellingPoint {
        title: "Transparent Pricing",
        description: "The price you see is the price you pay. No hidden charges.",
    },
    SellingPoint {
        title: "Easy Financing",
        description: "Flexible EMI options with quick loan approval.",
    },
    SellingPoint {
        title: "Hassle-free Paperwork",
        description: "RC transfer and insurance handled end to end.",
    },
];

pub fn render() -> String {
    let rows = SELLING_POINTS
        .iter()
        .map(|p| vec![p.title.to_string(), p.description.to_string()])
        .collect();
    pretty_table(&["Why choose us", ""], rows).to_string()
}
