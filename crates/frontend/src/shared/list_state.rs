//! Состояние страницы-списка: поиск, фильтры, сортировка, страница, выбор.
//!
//! Данные выводятся конвейером `source -> filter -> sort -> paginate`
//! в [`ListState::view`]. Любое изменение поиска, фильтра или сортировки
//! сбрасывает выбор и возвращает на первую страницу.

use crate::shared::list_utils::{filter_list, sort_list, toggle_sort, CategoryFilter, Searchable, SortSpec, Sortable};
use crate::shared::pagination::{clamp_page, paginate, total_pages};
use crate::shared::selection::SelectionSet;

#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    pub search_query: String,
    pub filters: Vec<CategoryFilter>,
    pub sort: Option<SortSpec>,
    /// Текущая страница, начиная с 1
    pub page: usize,
    pub selection: SelectionSet,
    pub is_loaded: bool,
}

/// Результат конвейера для одного рендера
#[derive(Clone, Debug, PartialEq)]
pub struct ListView<T> {
    pub filtered: Vec<T>,
    pub page_items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    /// Страница после приведения к `[1, total_pages]`
    pub page: usize,
    pub page_size: usize,
}

impl ListState {
    /// Все фильтры создаются в положении "all"
    pub fn new(filter_fields: &[&'static str], sort: Option<SortSpec>) -> Self {
        Self {
            search_query: String::new(),
            filters: filter_fields.iter().copied().map(CategoryFilter::all).collect(),
            sort,
            page: 1,
            selection: SelectionSet::new(),
            is_loaded: false,
        }
    }

    fn reset_view(&mut self) {
        self.page = 1;
        self.selection.clear();
    }

    pub fn set_search(&mut self, query: String) {
        if self.search_query != query {
            self.search_query = query;
            self.reset_view();
        }
    }

    pub fn set_filter(&mut self, field: &str, value: String) {
        if let Some(filter) = self.filters.iter_mut().find(|f| f.field == field) {
            if filter.value != value {
                filter.value = value;
                self.reset_view();
            }
        }
    }

    pub fn filter_value(&self, field: &str) -> String {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    pub fn active_filters_count(&self) -> usize {
        let query = usize::from(!self.search_query.trim().is_empty());
        query + self.filters.iter().filter(|f| f.is_active()).count()
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(toggle_sort(self.sort.take(), field));
        self.reset_view();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        for filter in &mut self.filters {
            *filter = CategoryFilter::all(filter.field);
        }
        self.reset_view();
    }

    pub fn view<T>(&self, source: &[T], page_size: usize) -> ListView<T>
    where
        T: Searchable + Sortable + Clone,
    {
        let filtered = filter_list(source, &self.search_query, &self.filters);
        let sorted = sort_list(&filtered, self.sort.as_ref());
        let total_count = sorted.len();
        let pages = total_pages(total_count, page_size);
        let page = clamp_page(self.page, pages);
        let page_items = paginate(&sorted, page, page_size).to_vec();

        ListView {
            filtered: sorted,
            page_items,
            total_count,
            total_pages: pages,
            page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::test_support::{sample, Row};

    fn state() -> ListState {
        ListState::new(&["status"], None)
    }

    #[test]
    fn view_runs_filter_sort_paginate() {
        let rows = sample();
        let mut state = state();
        state.set_filter("status", "active".to_string());
        state.toggle_sort("amount");

        let view = state.view(&rows, 2);
        let ids: Vec<u32> = view.filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page_items, view.filtered[0..2].to_vec());
    }

    #[test]
    fn page_is_clamped_when_result_shrinks() {
        let rows = sample();
        let mut state = state();
        state.go_to_page(3);
        assert_eq!(state.view(&rows, 2).page, 3);

        state.search_query = "dave".to_string();
        let view = state.view(&rows, 2);
        assert_eq!(view.page, 1);
        assert_eq!(view.page_items.len(), 1);

        state.search_query = "nobody".to_string();
        let view: ListView<Row> = state.view(&rows, 2);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 1);
        assert!(view.page_items.is_empty());
    }

    #[test]
    fn search_filter_and_sort_changes_clear_selection() {
        let mut state = state();
        state.selection.set("1", true);
        state.set_search("al".to_string());
        assert!(state.selection.is_empty());

        state.selection.set("1", true);
        state.set_filter("status", "vip".to_string());
        assert!(state.selection.is_empty());

        state.selection.set("1", true);
        state.toggle_sort("name");
        assert!(state.selection.is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_change_keeps_selection() {
        let mut state = state();
        state.selection.set("1", true);
        state.go_to_page(2);
        assert!(state.selection.contains("1"));
    }

    #[test]
    fn same_query_does_not_reset() {
        let mut state = state();
        state.set_search("al".to_string());
        state.go_to_page(2);
        state.selection.set("1", true);
        state.set_search("al".to_string());
        assert_eq!(state.page, 2);
        assert!(state.selection.contains("1"));
    }

    #[test]
    fn active_filters_count_includes_query() {
        let mut state = state();
        assert_eq!(state.active_filters_count(), 0);
        state.set_search("x".to_string());
        state.set_filter("status", "vip".to_string());
        assert_eq!(state.active_filters_count(), 2);
        state.reset_filters();
        assert_eq!(state.active_filters_count(), 0);
        assert_eq!(state.filter_value("status"), "all");
    }
}
