//! Источник записей для страниц-списков.
//!
//! Страницы работают только через [`Repository`]; статический массив демо-данных
//! подключается как [`InMemoryRepository`].

use contracts::domain::common::Entity;
use std::collections::HashSet;

/// Состояние записей до изменения, достаточное для отката
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<T> {
    /// Удалённые записи вместе с их исходными позициями (по возрастанию)
    Removed(Vec<(usize, T)>),
    /// Прежние значения изменённых записей
    Updated(Vec<T>),
}

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        match self {
            Snapshot::Removed(items) => items.len(),
            Snapshot::Updated(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait Repository<T: Entity + Clone> {
    fn list(&self) -> Vec<T>;

    fn get(&self, id: &str) -> Option<T>;

    fn remove_many(&mut self, ids: &[String]) -> Snapshot<T>;

    fn update_many(&mut self, ids: &[String], apply: &dyn Fn(&mut T)) -> Snapshot<T>;

    fn rollback(&mut self, snapshot: Snapshot<T>);
}

#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Entity + Clone> Repository<T> for InMemoryRepository<T> {
    fn list(&self) -> Vec<T> {
        self.items.clone()
    }

    fn get(&self, id: &str) -> Option<T> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }

    fn remove_many(&mut self, ids: &[String]) -> Snapshot<T> {
        let targets: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.drain(..).enumerate() {
            if targets.contains(item.id()) {
                removed.push((index, item));
            } else {
                kept.push(item);
            }
        }
        self.items = kept;
        Snapshot::Removed(removed)
    }

    fn update_many(&mut self, ids: &[String], apply: &dyn Fn(&mut T)) -> Snapshot<T> {
        let targets: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let mut previous = Vec::new();
        for item in self.items.iter_mut() {
            if targets.contains(item.id()) {
                previous.push(item.clone());
                apply(item);
            }
        }
        Snapshot::Updated(previous)
    }

    fn rollback(&mut self, snapshot: Snapshot<T>) {
        match snapshot {
            Snapshot::Removed(removed) => {
                // позиции возрастают, поэтому каждая вставка уже видит предыдущие
                for (index, item) in removed {
                    let index = index.min(self.items.len());
                    self.items.insert(index, item);
                }
            }
            Snapshot::Updated(previous) => {
                for old in previous {
                    if let Some(slot) = self.items.iter_mut().find(|item| item.id() == old.id()) {
                        *slot = old;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: &'static str,
    }

    impl Entity for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn repo() -> InMemoryRepository<Item> {
        InMemoryRepository::new(
            ["a", "b", "c", "d", "e"]
                .iter()
                .map(|id| Item {
                    id: id.to_string(),
                    label: "new",
                })
                .collect(),
        )
    }

    fn ids(repo: &InMemoryRepository<Item>) -> Vec<String> {
        repo.list().into_iter().map(|i| i.id).collect()
    }

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn get_finds_by_id() {
        let repo = repo();
        assert_eq!(repo.get("c").map(|i| i.id), Some("c".to_string()));
        assert!(repo.get("zzz").is_none());
    }

    #[test]
    fn remove_then_rollback_restores_order() {
        let mut repo = repo();
        let original = repo.clone();
        let snapshot = repo.remove_many(&owned(&["e", "b", "d", "missing"]));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(ids(&repo), vec!["a", "c"]);

        repo.rollback(snapshot);
        assert_eq!(repo, original);
    }

    #[test]
    fn update_then_rollback_restores_values() {
        let mut repo = repo();
        let original = repo.clone();
        let snapshot = repo.update_many(&owned(&["b", "c"]), &|item| item.label = "changed");
        assert_eq!(repo.get("b").map(|i| i.label), Some("changed"));
        assert_eq!(repo.get("a").map(|i| i.label), Some("new"));

        repo.rollback(snapshot);
        assert_eq!(repo, original);
    }
}
