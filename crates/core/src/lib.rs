//! Core business logic for Healwise.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `pricing` - Quarterly graft price table and its validation
//! - `progression` - Wound-healing revenue progression engine
//! - `report` - Rendering of progression estimates

pub mod pricing;
pub mod progression;
pub mod report;
