//! Common types and traits for all aggregates

pub mod entity;

pub use entity::Entity;
