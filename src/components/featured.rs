// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{ApiError, ListingSource};
use crate::models::{CarListing, DisplayCar};
use crate::utils::{fmt_inr, pretty_table};
use tracing::error;

pub const MAX_FEATURED: usize = 6;
pub const RECENT_YEARS: i32 = 2;

pub const LOADING_TEXT: &str = "Loading featured cars...";
pub const EMPTY_TEXT: &str = "No featured cars available right now.";

/// Cars from the last two model years, first six in source order.
pub fn featured_cars(listings: &[CarListing], current_year: i32) -> Vec<DisplayCar> {
    let min_year = current_year.saturating_sub(RECENT_YEARS);
    listings
        .iter()
        .filter(|car| car.year >= min_year)
        .take(MAX_FEATURED)
        .map(DisplayCar::from)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, PartialEq)]
pub enum ListingsState<'a> {
    Loading,
    Empty,
    Grid(&'a [DisplayCar]),
}

#[derive(Debug, Default)]
pub struct FeaturedListingsView {
    cars: Vec<DisplayCar>,
    loading: bool,
    mounted: bool,
    generation: u64,
}

impl FeaturedListingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn cars(&self) -> &[DisplayCar] {
        &self.cars
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Applies a settled fetch. Returns false when the ticket is stale and the
    /// response was dropped.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CarListing>, ApiError>,
        current_year: i32,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(listings) => self.cars = featured_cars(&listings, current_year),
            Err(e) => error!(error = %e, "failed to fetch featured cars"),
        }
        self.loading = false;
        true
    }

    /// Fetches once per mount; later calls on a mounted view do nothing.
    pub fn mount<S: ListingSource + ?Sized>(&mut self, source: &S, current_year: i32) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let ticket = self.begin_fetch();
        let result = source.fetch_cars();
        self.complete(ticket, result, current_year);
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.loading = false;
    }

    pub fn state(&self) -> ListingsState<'_> {
        if self.loading {
            ListingsState::Loading
        } else if self.cars.is_empty() {
            ListingsState::Empty
        } else {
            ListingsState::Grid(&self.cars)
        }
    }

    pub fn render(&self) -> String {
        match self.state() {
            ListingsState::Loading => LOADING_TEXT.to_string(),
            ListingsState::Empty => EMPTY_TEXT.to_string(),
            ListingsState::Grid(cars) => {
                let rows = cars
                    .iter()
                    .map(|c| {
                        let name = if c.variant.is_empty() {
                            c.brand.clone()
                        } else {
                            format!("{} {}", c.brand, c.variant)
                        };
                        vec![
                            name,
                            c.year.to_string(),
                            format!("{} km", c.km),
                            c.fuel.clone(),
                            fmt_inr(&c.price),
                            format!("{}/mo", fmt_inr(&c.emi)),
                            c.status.clone(),
                            if c.is_verified { "✔".into() } else { String::new() },
                        ]
                    })
                    .collect();
                pretty_table(
                    &["Car", "Year", "Driven", "Fuel", "Price", "EMI", "Status", "Verified"],
                    rows,
                )
                .to_string()
            }
        }
    }
}
