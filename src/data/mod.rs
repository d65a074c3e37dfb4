//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  upload (.csv/.txt/.xlsx/.xls)  or  bundled file
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ cache/loader  │  parse + validate columns → Dataset
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │  date_range   │  inclusive [start, end] on Order Date
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │    filter     │  Region → State → City selections
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │   aggregate   │  by category / region / month → export
//!   └───────────────┘
//! ```
//!
//! `session` strings the stages together for one user.

pub mod aggregate;
pub mod cache;
pub mod date_range;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod session;
