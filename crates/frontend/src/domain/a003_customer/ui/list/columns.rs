use std::cmp::Ordering;

use contracts::domain::a003_customer::Customer;

use crate::shared::components::table::format_currency;
use crate::shared::date_utils::format_date;
use crate::shared::export::{CsvColumn, CsvExportable};
use crate::shared::list_utils::{compare_number, compare_text, Searchable, Sortable};

pub const FILTER_STATUS: &str = "status";

/// Траты клиентов показываются в целых долларах
pub const SPENT_DIGITS: u8 = 0;

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.location.as_str()]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Customer {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "location" => compare_text(&self.location, &other.location),
            "orders_count" => self.orders_count.cmp(&other.orders_count),
            "total_spent" => compare_number(self.total_spent, other.total_spent),
            "joined_at" => self.joined_at.cmp(&other.joined_at),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for Customer {
    const ENTITY: &'static str = "customers";

    fn columns() -> Vec<CsvColumn<Self>> {
        vec![
            CsvColumn::new("Name", |c: &Customer| c.name.clone()),
            CsvColumn::new("Email", |c: &Customer| c.email.clone()),
            CsvColumn::new("Phone", |c: &Customer| c.phone.clone()),
            CsvColumn::new("Location", |c: &Customer| c.location.clone()),
            CsvColumn::new("Orders", |c: &Customer| c.orders_count.to_string()),
            CsvColumn::new("Total Spent", |c: &Customer| format_currency(c.total_spent, SPENT_DIGITS)),
            CsvColumn::new("Status", |c: &Customer| c.status.display_name().to_string()),
            CsvColumn::new("Joined", |c: &Customer| format_date(&c.joined_at)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bulk_action::{BulkAction, BulkKind};
    use crate::shared::data::mock;
    use crate::shared::export::{export_selected, to_csv};
    use crate::shared::export::test_support::RecordingSaver;
    use crate::shared::error::ListError;
    use crate::shared::list_state::ListState;
    use crate::shared::repository::{InMemoryRepository, Repository};
    use chrono::NaiveDate;

    #[test]
    fn search_by_location_matches_city_and_state() {
        let customers = mock::customers();
        let mut s = ListState::new(&[FILTER_STATUS], None);
        s.set_search("  seattle, wa ".to_string());

        let view = s.view(&customers, 100);
        assert!(view.total_count > 0);
        assert!(view.filtered.iter().all(|c| c.location == "Seattle, WA"));
    }

    #[test]
    fn location_with_comma_is_quoted_in_csv() {
        let customers = mock::customers();
        let csv = to_csv(&customers[..1], &Customer::columns()).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains(&format!("\"{}\"", customers[0].location)));
    }

    #[test]
    fn export_without_selection_touches_nothing() {
        let customers = mock::customers();
        let saver = RecordingSaver::default();
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

        let result = export_selected(&customers, &Default::default(), &saver, date);
        assert_eq!(result, Err(ListError::EmptySelection));
        assert!(saver.saved.borrow().is_empty());
    }

    #[test]
    fn delete_removes_selected_and_clears_selection() {
        let mut repo = InMemoryRepository::new(mock::customers());
        let mut s = ListState::new(&[FILTER_STATUS], None);
        s.selection.set("customer-2", true);
        s.selection.set("customer-5", true);

        let mut action = BulkAction::new(BulkKind::Delete);
        assert_eq!(action.request(&s.selection), Ok(2));
        let ids = action.confirm(&mut s.selection).unwrap();
        let snapshot = repo.remove_many(&ids);

        let deleted = action.complete(&mut repo, snapshot, Ok(()), &mut s.selection).unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(repo.len(), 28);
        assert!(repo.get("customer-2").is_none());
        assert!(s.selection.is_empty());
    }
}
