//! Page routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (route table lookup)
//!     → matcher.rs (segment-by-segment pattern match)
//!     → Return: RouteMatch or NoMatch
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Deterministic: same path always resolves to the same route
//! - First match wins (table order)

pub mod matcher;
pub mod router;

pub use router::{RouteMatch, RouteTable, Target};
