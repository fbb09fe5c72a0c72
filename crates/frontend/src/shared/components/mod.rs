pub mod bar_chart;
pub mod confirm_dialog;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;

pub use bar_chart::{BarChart, BarDatum};
pub use confirm_dialog::ConfirmDialog;
pub use filter_panel::{CategorySelect, FilterPanel};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, ValueFormat};
