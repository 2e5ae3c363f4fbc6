//! Route Configuration Module
//!
//! - **`router`** - Main router creation and route assembly

pub mod router;

pub use router::create_router;
