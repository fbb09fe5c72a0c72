use std::cmp::Ordering;

use contracts::domain::a001_product::Product;

use crate::shared::components::table::format_currency;
use crate::shared::date_utils::format_date;
use crate::shared::export::{CsvColumn, CsvExportable};
use crate::shared::list_utils::{compare_number, compare_text, Searchable, Sortable};

pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_STATUS: &str = "status";

pub const PRICE_DIGITS: u8 = 2;

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.sku.as_str(), self.category.display_name()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_CATEGORY => Some(self.category.code().to_string()),
            FILTER_STATUS => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "sku" => compare_text(&self.sku, &other.sku),
            "category" => compare_text(self.category.display_name(), other.category.display_name()),
            "price" => compare_number(self.price, other.price),
            "stock" => self.stock.cmp(&other.stock),
            "status" => compare_text(self.status.display_name(), other.status.display_name()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for Product {
    const ENTITY: &'static str = "products";

    fn columns() -> Vec<CsvColumn<Self>> {
        vec![
            CsvColumn::new("Name", |p: &Product| p.name.clone()),
            CsvColumn::new("SKU", |p: &Product| p.sku.clone()),
            CsvColumn::new("Category", |p: &Product| p.category.display_name().to_string()),
            CsvColumn::new("Price", |p: &Product| format_currency(p.price, PRICE_DIGITS)),
            CsvColumn::new("Stock", |p: &Product| p.stock.to_string()),
            CsvColumn::new("Status", |p: &Product| p.status.display_name().to_string()),
            CsvColumn::new("Created", |p: &Product| format_date(&p.created_at)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock;
    use crate::shared::export::export_selected;
    use crate::shared::export::test_support::RecordingSaver;
    use crate::shared::list_state::ListState;
    use crate::shared::list_utils::SortSpec;
    use crate::shared::selection::SelectionSet;
    use chrono::NaiveDate;

    fn state() -> ListState {
        ListState::new(&[FILTER_CATEGORY, FILTER_STATUS], None)
    }

    #[test]
    fn search_matches_sku_and_category() {
        let products = mock::products();
        let mut s = state();

        s.set_search("sku-10017".to_string());
        let view = s.view(&products, 10);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.page_items[0].id, "product-1");

        s.set_search("BOOKS".to_string());
        let view = s.view(&products, 100);
        assert!(view.total_count > 0);
        assert!(view.filtered.iter().all(|p| p.category.code() == "books"));
    }

    #[test]
    fn category_and_status_filters_combine() {
        let products = mock::products();
        let mut s = state();
        s.set_filter(FILTER_CATEGORY, "electronics".to_string());
        s.set_filter(FILTER_STATUS, "active".to_string());

        let view = s.view(&products, 100);
        let expected = products
            .iter()
            .filter(|p| p.category.code() == "electronics" && p.status.code() == "active")
            .count();
        assert_eq!(view.total_count, expected);
        assert_eq!(s.active_filters_count(), 2);
    }

    #[test]
    fn price_sort_descending_orders_by_value() {
        let products = mock::products();
        let mut s = ListState::new(&[FILTER_CATEGORY, FILTER_STATUS], Some(SortSpec::asc("price")));
        s.toggle_sort("price");

        let view = s.view(&products, 100);
        let prices: Vec<f64> = view.filtered.iter().map(|p| p.price).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn export_quotes_names_with_commas() {
        let products = mock::products();
        let mut selection = SelectionSet::new();
        selection.set("product-8", true);
        selection.set("product-1", true);

        let saver = RecordingSaver::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let count = export_selected(&products, &selection, &saver, date).unwrap();
        assert_eq!(count, 2);

        let saved = saver.saved.borrow();
        let (filename, content) = &saved[0];
        assert_eq!(filename, "products_2026-03-05.csv");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Name,SKU,Category,Price,Stock,Status,Created");
        assert!(lines[1].starts_with("Wireless Headphones,SKU-10017,"));
        assert!(lines[2].starts_with("\"Desk Lamp, \"\"Nordic\"\" Edition\",SKU-10136,Home & Garden,"));
    }
}
