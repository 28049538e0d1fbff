//! Single hotel page.

use maud::{html, Markup};
use std::sync::Arc;

use crate::catalog::{Hotel, HotelId, HotelStore};
use crate::views::layout;
use crate::views::state::{ErrorCause, ViewError, ViewState};

/// Message shown for any failure on the detail page.
pub const DETAIL_ERROR: &str = "Error loading hotel details";

/// Parse a routed id. Only positive integers are accepted.
pub fn parse_hotel_id(raw: &str) -> Option<HotelId> {
    raw.parse::<HotelId>().ok().filter(|&id| id > 0)
}

/// Shows one hotel resolved from the `:id` route parameter.
pub struct DetailView {
    store: Arc<HotelStore>,
    state: ViewState<Hotel>,
}

impl DetailView {
    pub fn new(store: Arc<HotelStore>) -> Self {
        Self {
            store,
            state: ViewState::Loading,
        }
    }

    /// Resolve `raw_id` and settle the view state.
    ///
    /// Invalid ids fail without touching the store. Every failure carries the
    /// same user-facing message; only the cause differs.
    pub async fn activate(&mut self, raw_id: &str) {
        let Some(id) = parse_hotel_id(raw_id) else {
            tracing::warn!(raw_id = %raw_id, "Invalid hotel id");
            self.state = ViewState::Error(ViewError::new(
                DETAIL_ERROR,
                ErrorCause::InvalidId(raw_id.to_string()),
            ));
            return;
        };

        self.state = match self.store.get_by_id(id).await {
            Ok(hotel) => ViewState::Loaded(hotel),
            Err(e) => {
                tracing::error!(hotel_id = id, error = %e, "Error fetching hotel details");
                ViewState::Error(ViewError::new(DETAIL_ERROR, e))
            }
        };
    }

    pub fn state(&self) -> &ViewState<Hotel> {
        &self.state
    }

    pub fn hotel(&self) -> Option<&Hotel> {
        self.state.data()
    }

    pub fn render(&self) -> Markup {
        let title = self.hotel().map_or("Hotel", |h| h.name.as_str());
        let body = html! {
            @match &self.state {
                ViewState::Loading => {
                    div { "Loading Hotel..." }
                },
                ViewState::Loaded(hotel) => {
                    div class="hotel-details" {
                        h2 { (hotel.name) }
                        img src=(hotel.image) alt=(hotel.name) width="400";
                        p { (hotel.description) }
                        p { "Price: $" (hotel.price) }
                        p { "Location: " (hotel.location) }
                    }
                },
                ViewState::Error(err) => {
                    div class="error" { (err.message) }
                },
            }
        };
        layout::page(title, body)
    }
}
