pub mod bulk_action;
pub mod components;
pub mod config;
pub mod data;
pub mod date_utils;
pub mod debounce;
pub mod error;
pub mod export;
pub mod icons;
pub mod list_actions;
pub mod list_state;
pub mod list_utils;
pub mod pagination;
pub mod repository;
pub mod selection;
pub mod viewport;
