//! Hotel list page.

use maud::{html, Markup};
use std::sync::Arc;

use crate::catalog::{Hotel, HotelId, HotelStore, Snapshot};
use crate::observability::metrics;
use crate::views::layout;
use crate::views::state::{ViewError, ViewState};

/// Message shown when the catalog cannot be loaded.
pub const LIST_ERROR: &str = "Error loading hotels";

/// Lists every hotel in the catalog.
pub struct ListView {
    store: Arc<HotelStore>,
    state: ViewState<Snapshot>,
}

impl ListView {
    pub fn new(store: Arc<HotelStore>) -> Self {
        Self {
            store,
            state: ViewState::Loading,
        }
    }

    /// Fetch the catalog and settle the view state.
    pub async fn activate(&mut self) {
        self.state = match self.store.list_all().await {
            Ok(snapshot) => ViewState::Loaded(snapshot),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching hotels");
                ViewState::Error(ViewError::new(LIST_ERROR, e))
            }
        };
    }

    pub fn state(&self) -> &ViewState<Snapshot> {
        &self.state
    }

    /// Hotels to display; `None` unless loaded.
    pub fn hotels(&self) -> Option<&[Hotel]> {
        self.state.data().map(|snapshot| snapshot.hotels())
    }

    /// Placeholder booking action: notifies the user and changes nothing.
    pub fn book_hotel(&self, hotel: &Hotel) -> BookingNotice {
        tracing::info!(hotel_id = hotel.id, name = %hotel.name, "Booking hotel");
        metrics::record_booking();
        BookingNotice {
            hotel_id: hotel.id,
            message: format!("You have booked {}!", hotel.name),
        }
    }

    pub fn render(&self) -> Markup {
        let body = html! {
            h2 { "Hotels" }
            @match &self.state {
                ViewState::Loading => {
                    div { "Loading Hotels..." }
                },
                ViewState::Loaded(snapshot) => {
                    div {
                        @for hotel in snapshot.hotels() {
                            (hotel_card(hotel))
                        }
                    }
                },
                ViewState::Error(err) => {
                    div class="error" { (err.message) }
                },
            }
        };
        layout::page("Hotels", body)
    }
}

fn hotel_card(hotel: &Hotel) -> Markup {
    html! {
        div class="hotel" {
            img src=(hotel.image) alt=(hotel.name) width="200";
            h3 { a href=(format!("/hotels/{}", hotel.id)) { (hotel.name) } }
            p { (hotel.description) }
            p { "Price: $" (hotel.price) }
            form method="post" action=(format!("/hotels/{}/book", hotel.id)) {
                button type="submit" { "Book Now" }
            }
        }
    }
}

/// Result of the placeholder booking action.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingNotice {
    pub hotel_id: HotelId,
    pub message: String,
}

impl BookingNotice {
    pub fn render(&self) -> Markup {
        let body = html! {
            div class="notice" role="alert" { (self.message) }
            p { a href="/hotels" { "Back to hotels" } }
        };
        layout::page("Booking", body)
    }
}
