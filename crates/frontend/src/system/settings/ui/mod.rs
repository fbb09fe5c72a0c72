pub mod details;

pub use details::SettingsPage;
