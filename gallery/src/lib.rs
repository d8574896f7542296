//! Domain model for the portfolio site: photo lists, the project catalog,
//! and resume reference data.
//!
//! This crate is pure Rust with no DOM or async dependencies. The UI layer
//! holds each gallery section as a `Vec<Photo>` in reactive state and
//! replaces it wholesale with the result of a list operation from [`ops`];
//! everything else here is static reference data read at render time.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`photo`] | Photo record, gallery sections, and id generation |
//! | [`ops`] | Pure ordered-list operations (insert / remove / move) |
//! | [`catalog`] | Project records, tech categories, and category filtering |
//! | [`seed`] | Photo seed data for both gallery sections |
//! | [`resume`] | Static resume/about reference records |

pub mod catalog;
pub mod ops;
pub mod photo;
pub mod resume;
pub mod seed;
