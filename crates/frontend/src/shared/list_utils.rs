/// Универсальные утилиты для работы со списками (поиск, фильтры, сортировка, UI компоненты)
use leptos::prelude::*;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::shared::debounce::{Debouncer, TimeoutScheduler};

/// Значение фильтра, означающее "любое значение"
pub const FILTER_ALL: &str = "all";

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Текстовые поля, по которым работает строка поиска
    fn search_fields(&self) -> Vec<&str>;

    /// Возвращает значение категориального поля (статус, категория)
    fn field_value(&self, field: &str) -> Option<String>;

    /// Проверяет, соответствует ли объект поисковому запросу.
    /// Запрос должен быть уже приведён к нижнему регистру.
    fn matches_query(&self, query_lower: &str) -> bool {
        query_lower.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(query_lower))
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Фильтр по точному значению поля
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    pub field: &'static str,
    pub value: String,
}

impl CategoryFilter {
    pub fn all(field: &'static str) -> Self {
        Self {
            field,
            value: FILTER_ALL.to_string(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.value != FILTER_ALL
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        !self.is_active() || item.field_value(self.field).as_deref() == Some(self.value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: false,
        }
    }
}

/// Переключение сортировки по клику на заголовок:
/// то же поле меняет направление, новое поле сортируется по возрастанию
pub fn toggle_sort(current: Option<SortSpec>, field: &str) -> SortSpec {
    match current {
        Some(spec) if spec.field == field => SortSpec {
            field: spec.field,
            ascending: !spec.ascending,
        },
        _ => SortSpec::asc(field),
    }
}

/// Фильтрует список по поисковому запросу и категориальным фильтрам.
/// Исходный срез не изменяется, порядок сохраняется.
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str, filters: &[CategoryFilter]) -> Vec<T> {
    let query_lower = query.trim().to_lowercase();

    items
        .iter()
        .filter(|item| item.matches_query(&query_lower))
        .filter(|item| filters.iter().all(|f| f.matches(*item)))
        .cloned()
        .collect()
}

/// Возвращает новый отсортированный список.
/// Сортировка стабильная: при равных ключах сохраняется исходный порядок
/// в обоих направлениях.
pub fn sort_list<T: Sortable + Clone>(items: &[T], sort: Option<&SortSpec>) -> Vec<T> {
    let mut sorted = items.to_vec();
    if let Some(spec) = sort {
        sorted.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, &spec.field);
            if spec.ascending { cmp } else { cmp.reverse() }
        });
    }
    sorted
}

/// Ключ первичного сравнения: без диакритики и без учёта регистра
fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Сравнение строк по алфавиту: "É" стоит рядом с "E", а не после "z".
/// При равенстве решают диакритика, затем регистр.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

pub fn compare_number(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(spec) if spec.field == field => {
            if spec.ascending { " ▲" } else { " ▼" }
        }
        _ => " ⇅",
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(spec) if spec.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее применённое значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Окно тишины перед применением запроса
    #[prop(into)]
    debounce_ms: Signal<u32>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debouncer = StoredValue::new_local(Debouncer::new(
        TimeoutScheduler,
        debounce_ms.get_untracked(),
    ));

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.update_value(|d| {
            d.set_delay_ms(debounce_ms.get_untracked());
            d.call(move || on_change.run(new_value));
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debouncer.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Row {
        pub id: u32,
        pub name: String,
        pub email: String,
        pub status: &'static str,
        pub amount: f64,
    }

    pub fn row(id: u32, name: &str, status: &'static str, amount: f64) -> Row {
        Row {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            status,
            amount,
        }
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.email.as_str()]
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(&self.name, &other.name),
                "amount" => compare_number(self.amount, other.amount),
                "status" => self.status.cmp(other.status),
                _ => self.id.cmp(&other.id),
            }
        }
    }

    pub fn sample() -> Vec<Row> {
        vec![
            row(1, "Alice Smith", "active", 120.0),
            row(2, "bob Jones", "inactive", 80.5),
            row(3, "Carol White", "active", 120.0),
            row(4, "Dave Brown", "vip", 15.0),
            row(5, "alice Cooper", "active", 300.0),
        ]
    }
}
