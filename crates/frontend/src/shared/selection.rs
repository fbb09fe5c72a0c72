//! Набор выбранных записей для массовых действий
use std::collections::HashSet;

/// Состояние чекбокса "выбрать все" в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// "Выбрать все" на текущей странице.
    /// Снятие флажка очищает весь набор, а не только видимые строки.
    pub fn toggle_all<I, S>(&mut self, visible_ids: I, checked: bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if checked {
            self.ids.extend(visible_ids.into_iter().map(Into::into));
        } else {
            self.ids.clear();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Объединяет с другим выбором
    pub fn extend(&mut self, other: SelectionSet) {
        self.ids.extend(other.ids);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    /// Убирает идентификаторы, которых больше нет в исходной коллекции
    pub fn retain_existing<'a>(&mut self, source_ids: impl IntoIterator<Item = &'a str>) {
        let existing: HashSet<&str> = source_ids.into_iter().collect();
        self.ids.retain(|id| existing.contains(id.as_str()));
    }

    pub fn header_state<'a>(&self, visible_ids: impl IntoIterator<Item = &'a str>) -> HeaderCheckState {
        let mut total = 0;
        let mut selected = 0;
        for id in visible_ids {
            total += 1;
            if self.ids.contains(id) {
                selected += 1;
            }
        }
        if total == 0 || selected == 0 {
            HeaderCheckState::Unchecked
        } else if selected == total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}
