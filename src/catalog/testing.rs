//! Fixtures for unit tests.

use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{DataSource, Hotel, HotelStore};

pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: 1,
            name: "Luxury Hotel".into(),
            description: "Five-star hotel with amazing views.".into(),
            image: "https://via.placeholder.com/200".into(),
            price: 299.0,
            location: "New York".into(),
        },
        Hotel {
            id: 2,
            name: "Budget Inn".into(),
            description: "Affordable and comfortable stay.".into(),
            image: "https://via.placeholder.com/200".into(),
            price: 99.0,
            location: "Los Angeles".into(),
        },
    ]
}

pub fn sample_store() -> Arc<HotelStore> {
    Arc::new(HotelStore::new(DataSource::Inline(sample_hotels())))
}

/// A store whose source can never be read.
pub fn broken_store() -> Arc<HotelStore> {
    Arc::new(HotelStore::new(DataSource::File(PathBuf::from(
        "/nonexistent/hotels.json",
    ))))
}
