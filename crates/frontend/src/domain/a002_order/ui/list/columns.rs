use std::cmp::Ordering;

use contracts::domain::a002_order::Order;
use contracts::enums::OrderStatus;

use crate::shared::components::table::format_currency;
use crate::shared::date_utils::format_date;
use crate::shared::export::{CsvColumn, CsvExportable};
use crate::shared::list_utils::{compare_number, compare_text, Searchable, Sortable};
use crate::shared::repository::{Repository, Snapshot};

pub const FILTER_STATUS: &str = "status";

pub const TOTAL_DIGITS: u8 = 2;

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.customer_name.as_str(),
            self.customer_email.as_str(),
        ]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            FILTER_STATUS => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "order_number" => compare_text(&self.order_number, &other.order_number),
            "customer_name" => compare_text(&self.customer_name, &other.customer_name),
            "total" => compare_number(self.total, other.total),
            "items" => self.items.cmp(&other.items),
            "status" => compare_text(self.status.display_name(), other.status.display_name()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

impl CsvExportable for Order {
    const ENTITY: &'static str = "orders";

    fn columns() -> Vec<CsvColumn<Self>> {
        vec![
            CsvColumn::new("Order", |o: &Order| o.order_number.clone()),
            CsvColumn::new("Customer", |o: &Order| o.customer_name.clone()),
            CsvColumn::new("Email", |o: &Order| o.customer_email.clone()),
            CsvColumn::new("Total", |o: &Order| format_currency(o.total, TOTAL_DIGITS)),
            CsvColumn::new("Items", |o: &Order| o.items.to_string()),
            CsvColumn::new("Status", |o: &Order| o.status.display_name().to_string()),
            CsvColumn::new("Date", |o: &Order| format_date(&o.created_at)),
        ]
    }
}

/// Отменяет выбранные заказы; доставленные и уже отменённые пропускаются
pub fn cancel_orders<R>(repository: &mut R, ids: &[String]) -> Snapshot<Order>
where
    R: Repository<Order> + ?Sized,
{
    let cancellable: Vec<String> = ids
        .iter()
        .filter(|id| repository.get(id).is_some_and(|o| o.status.is_cancellable()))
        .cloned()
        .collect();
    if cancellable.len() < ids.len() {
        log::debug!("{} orders skipped: not cancellable", ids.len() - cancellable.len());
    }
    repository.update_many(&cancellable, &|o: &mut Order| o.status = OrderStatus::Cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::bulk_action::{BulkAction, BulkKind};
    use crate::shared::data::mock;
    use crate::shared::list_state::ListState;
    use crate::shared::repository::InMemoryRepository;
    use crate::shared::selection::SelectionSet;

    fn state() -> ListState {
        ListState::new(&[FILTER_STATUS], None)
    }

    #[test]
    fn cancelled_filter_on_first_page() {
        let orders = mock::orders();
        assert_eq!(orders.len(), 45);

        let mut s = state();
        s.set_search(String::new());
        s.set_filter(FILTER_STATUS, "cancelled".to_string());
        let view = s.view(&orders, 10);

        let expected = orders.iter().filter(|o| o.status == OrderStatus::Cancelled).count();
        assert_eq!(view.total_count, expected);
        assert_eq!(view.filtered.len(), expected);
        let first_page_len = expected.min(10);
        assert_eq!(view.page_items, view.filtered[..first_page_len].to_vec());
        assert!(view.page_items.iter().all(|o| o.status == OrderStatus::Cancelled));
    }

    #[test]
    fn search_by_email_is_case_insensitive() {
        let orders = mock::orders();
        let target = orders[0].customer_email.to_uppercase();

        let mut s = state();
        s.set_search(target);
        let view = s.view(&orders, 100);
        assert!(view.total_count >= 1);
        assert!(view
            .filtered
            .iter()
            .all(|o| o.customer_email == orders[0].customer_email));
    }

    #[test]
    fn items_sort_keeps_ties_in_source_order() {
        let orders = mock::orders();
        let mut s = state();
        s.toggle_sort("items");
        let view = s.view(&orders, 100);

        for pair in view.filtered.windows(2) {
            assert!(pair[0].items <= pair[1].items);
            if pair[0].items == pair[1].items {
                let a: usize = pair[0].id.trim_start_matches("order-").parse().unwrap();
                let b: usize = pair[1].id.trim_start_matches("order-").parse().unwrap();
                assert!(a < b);
            }
        }
    }

    #[test]
    fn cancel_skips_delivered_orders() {
        let mut repo = InMemoryRepository::new(mock::orders());
        // order-1 доставлен, order-2 отправлен, order-3 в обработке
        let ids = vec!["order-1".to_string(), "order-2".to_string(), "order-3".to_string()];

        let snapshot = cancel_orders(&mut repo, &ids);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(repo.get("order-1").unwrap().status, OrderStatus::Delivered);
        assert_eq!(repo.get("order-2").unwrap().status, OrderStatus::Cancelled);
        assert_eq!(repo.get("order-3").unwrap().status, OrderStatus::Cancelled);
    }

    #[test]
    fn failed_cancel_restores_statuses_and_keeps_selection() {
        let mut repo = InMemoryRepository::new(mock::orders());
        let mut selection = SelectionSet::new();
        selection.set("order-2", true);
        selection.set("order-7", true);

        let mut action = BulkAction::new(BulkKind::Cancel);
        action.request(&selection).unwrap();
        let ids = action.confirm(&mut selection).unwrap();
        let snapshot = cancel_orders(&mut repo, &ids);
        assert_eq!(repo.get("order-7").unwrap().status, OrderStatus::Cancelled);

        let result = action.complete(&mut repo, snapshot, Err("timeout".to_string()), &mut selection);
        assert!(result.is_err());
        assert_eq!(repo.get("order-2").unwrap().status, OrderStatus::Shipped);
        assert_eq!(repo.get("order-7").unwrap().status, OrderStatus::Pending);
        assert_eq!(selection.len(), 2);
    }
}
