// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use showroom::api::{ApiError, ListingSource};
use showroom::components::featured::{EMPTY_TEXT, LOADING_TEXT};
use showroom::components::{FeaturedListingsView, ListingsState, featured_cars};
use showroom::models::CarListing;
use std::cell::Cell;

const THIS_YEAR: i32 = 2026;

fn car(id: &str, year: i32, price: i64) -> CarListing {
    CarListing {
        id: id.to_string(),
        brand: "Hyundai".to_string(),
        variant: Some("Creta SX".to_string()),
        year,
        km_driven: 15000,
        fuel_type: "Diesel".to_string(),
        images: vec![format!("{id}.jpg")],
        image: None,
        admin_selling_price: Decimal::new(price, 0),
        status: "available".to_string(),
        is_verified: false,
    }
}

struct FakeSource {
    result: fn() -> Result<Vec<CarListing>, ApiError>,
    calls: Cell<usize>,
}

impl FakeSource {
    fn new(result: fn() -> Result<Vec<CarListing>, ApiError>) -> Self {
        FakeSource {
            result,
            calls: Cell::new(0),
        }
    }
}

impl ListingSource for FakeSource {
    fn fetch_cars(&self) -> Result<Vec<CarListing>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        (self.result)()
    }
}

#[test]
fn only_recent_cars_survive_with_emi() {
    let listings = vec![car("a", THIS_YEAR, 500000), car("b", THIS_YEAR - 3, 300000)];
    let shown = featured_cars(&listings, THIS_YEAR);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "a");
    assert_eq!(shown[0].emi, Decimal::new(5000, 0));
    assert!(shown[0].is_verified);
}

#[test]
fn cap_at_six_preserves_source_order() {
    let years = [
        THIS_YEAR - 1,
        THIS_YEAR - 5,
        THIS_YEAR,
        THIS_YEAR - 2,
        THIS_YEAR - 3,
        THIS_YEAR,
        THIS_YEAR - 1,
        THIS_YEAR,
        THIS_YEAR - 2,
    ];
    let listings: Vec<CarListing> = years
        .iter()
        .enumerate()
        .map(|(i, y)| car(&format!("c{i}"), *y, 100000 + i as i64))
        .collect();

    let shown = featured_cars(&listings, THIS_YEAR);
    let ids: Vec<&str> = shown.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["c0", "c2", "c3", "c5", "c6", "c7"]);
    assert!(shown.iter().all(|c| c.year >= THIS_YEAR - 2));
}

#[test]
fn mount_fetches_once_and_shows_grid() {
    let source = FakeSource::new(|| Ok(vec![car("a", THIS_YEAR, 750000)]));
    let mut view = FeaturedListingsView::new();
    view.mount(&source, THIS_YEAR);
    view.mount(&source, THIS_YEAR);

    assert_eq!(source.calls.get(), 1);
    assert!(!view.is_loading());
    match view.state() {
        ListingsState::Grid(cars) => assert_eq!(cars[0].emi, Decimal::new(7500, 0)),
        other => panic!("expected grid, got {other:?}"),
    }
    let out = view.render();
    assert!(out.contains("Hyundai Creta SX"));
    assert!(out.contains("₹7,50,000"));
}

#[test]
fn fetch_failure_leaves_empty_state() {
    let source = FakeSource::new(|| {
        Err(ApiError::Status {
            status: 500,
            message: None,
        })
    });
    let mut view = FeaturedListingsView::new();
    view.mount(&source, THIS_YEAR);

    assert!(!view.is_loading());
    assert_eq!(view.state(), ListingsState::Empty);
    assert_eq!(view.render(), EMPTY_TEXT);
}

#[test]
fn loading_state_until_settled() {
    let mut view = FeaturedListingsView::new();
    let ticket = view.begin_fetch();
    assert_eq!(view.state(), ListingsState::Loading);
    assert_eq!(view.render(), LOADING_TEXT);

    assert!(view.complete(ticket, Ok(vec![]), THIS_YEAR));
    assert_eq!(view.state(), ListingsState::Empty);
}

#[test]
fn response_after_unmount_is_dropped() {
    let mut view = FeaturedListingsView::new();
    let ticket = view.begin_fetch();
    view.unmount();

    let applied = view.complete(ticket, Ok(vec![car("a", THIS_YEAR, 100000)]), THIS_YEAR);
    assert!(!applied);
    assert!(view.cars().is_empty());
    assert!(!view.is_mounted());
}

#[test]
fn extreme_year_does_not_overflow() {
    let listings = vec![car("a", i32::MIN, 100000), car("b", 1990, 200000)];
    let shown = featured_cars(&listings, i32::MIN);
    let ids: Vec<&str> = shown.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}
