//! Server-rendered pages.
//!
//! # Data Flow
//! ```text
//! RouteTable match
//!     → view constructed with Arc<HotelStore>
//!     → activate() awaits the store, settles ViewState
//!     → render() (pure: state → HTML)
//! ```
//!
//! # Design Decisions
//! - One view instance per request; no view outlives its response
//! - User-facing error text is fixed per view; causes are only logged

pub mod detail;
pub mod layout;
pub mod list;
pub mod state;

pub use detail::{parse_hotel_id, DetailView, DETAIL_ERROR};
pub use list::{BookingNotice, ListView, LIST_ERROR};
pub use state::{ErrorCause, ViewError, ViewState};
