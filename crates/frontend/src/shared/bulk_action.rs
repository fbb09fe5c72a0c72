//! Массовые действия над выбранными записями.
//!
//! `Idle -> ConfirmPending (диалог) -> InFlight (ожидание хранилища) -> Idle`.
//! Изменение применяется к репозиторию сразу (оптимистично), а при ответе
//! хранилища либо подтверждается, либо откатывается по снимку.
//! На время `InFlight` выбор хранится в самом действии, поэтому в списке
//! нет идентификаторов уже удалённых записей.

use contracts::domain::common::Entity;

use crate::shared::error::ListError;
use crate::shared::repository::{Repository, Snapshot};
use crate::shared::selection::SelectionSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkKind {
    Delete,
    Cancel,
}

impl BulkKind {
    pub fn verb(&self) -> &'static str {
        match self {
            BulkKind::Delete => "Delete",
            BulkKind::Cancel => "Cancel",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            BulkKind::Delete => "deleted",
            BulkKind::Cancel => "cancelled",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BulkPhase {
    #[default]
    Idle,
    ConfirmPending {
        ids: Vec<String>,
    },
    InFlight {
        ids: Vec<String>,
        held: SelectionSet,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BulkAction {
    kind: BulkKind,
    phase: BulkPhase,
}

impl BulkAction {
    pub fn new(kind: BulkKind) -> Self {
        Self {
            kind,
            phase: BulkPhase::Idle,
        }
    }

    pub fn kind(&self) -> BulkKind {
        self.kind
    }

    pub fn phase(&self) -> &BulkPhase {
        &self.phase
    }

    pub fn is_confirm_pending(&self) -> bool {
        matches!(self.phase, BulkPhase::ConfirmPending { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, BulkPhase::InFlight { .. })
    }

    /// Количество записей в текущем действии
    pub fn pending_count(&self) -> usize {
        match &self.phase {
            BulkPhase::Idle => 0,
            BulkPhase::ConfirmPending { ids } | BulkPhase::InFlight { ids, .. } => ids.len(),
        }
    }

    /// Открывает подтверждение для текущего выбора
    pub fn request(&mut self, selection: &SelectionSet) -> Result<usize, ListError> {
        if selection.is_empty() {
            return Err(ListError::EmptySelection);
        }
        if self.phase != BulkPhase::Idle {
            log::warn!("bulk {} requested while busy", self.kind.verb());
            return Ok(self.pending_count());
        }
        let mut ids: Vec<String> = selection.ids().iter().cloned().collect();
        ids.sort();
        let count = ids.len();
        self.phase = BulkPhase::ConfirmPending { ids };
        Ok(count)
    }

    /// Закрывает диалог без действия; выполняющееся действие не прерывается
    pub fn dismiss(&mut self) {
        if self.is_confirm_pending() {
            self.phase = BulkPhase::Idle;
        }
    }

    /// Переход в `InFlight`, возвращает идентификаторы для применения.
    ///
    /// Выбор забирается из списка до ответа хранилища и возвращается
    /// только при ошибке.
    pub fn confirm(&mut self, selection: &mut SelectionSet) -> Option<Vec<String>> {
        match std::mem::take(&mut self.phase) {
            BulkPhase::ConfirmPending { ids } => {
                let held = std::mem::take(selection);
                self.phase = BulkPhase::InFlight { ids: ids.clone(), held };
                Some(ids)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Завершает действие по ответу хранилища.
    ///
    /// Успех очищает выбор; ошибка откатывает снимок и возвращает выбор,
    /// сделанный до подтверждения, чтобы действие можно было повторить.
    pub fn complete<T, R>(
        &mut self,
        repository: &mut R,
        snapshot: Snapshot<T>,
        outcome: Result<(), String>,
        selection: &mut SelectionSet,
    ) -> Result<usize, ListError>
    where
        T: Entity + Clone,
        R: Repository<T> + ?Sized,
    {
        let held = match std::mem::take(&mut self.phase) {
            BulkPhase::InFlight { held, .. } => held,
            _ => {
                log::warn!("bulk {} completed without being in flight", self.kind.verb());
                SelectionSet::new()
            }
        };

        match outcome {
            Ok(()) => {
                let affected = snapshot.len();
                selection.clear();
                log::info!("bulk {}: {} records {}", self.kind.verb(), affected, self.kind.past_tense());
                Ok(affected)
            }
            Err(reason) => {
                repository.rollback(snapshot);
                selection.extend(held);
                let remaining: Vec<String> = repository.list().iter().map(|r| r.id().to_string()).collect();
                selection.retain_existing(remaining.iter().map(String::as_str));
                log::error!("bulk {} rolled back: {}", self.kind.verb(), reason);
                Err(ListError::BulkActionFailed(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::repository::InMemoryRepository;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        cancelled: bool,
    }

    impl Entity for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn repo() -> InMemoryRepository<Item> {
        InMemoryRepository::new(
            (1..=5)
                .map(|n| Item {
                    id: format!("item-{}", n),
                    cancelled: false,
                })
                .collect(),
        )
    }

    fn selected(ids: &[&str]) -> SelectionSet {
        let mut selection = SelectionSet::new();
        selection.toggle_all(ids.iter().copied(), true);
        selection
    }

    #[test]
    fn empty_selection_is_rejected_without_state_change() {
        let mut action = BulkAction::new(BulkKind::Delete);
        assert_eq!(action.request(&SelectionSet::new()), Err(ListError::EmptySelection));
        assert_eq!(action.phase(), &BulkPhase::Idle);
    }

    #[test]
    fn dismiss_returns_to_idle() {
        let mut action = BulkAction::new(BulkKind::Delete);
        action.request(&selected(&["item-1"])).unwrap();
        assert!(action.is_confirm_pending());
        action.dismiss();
        assert_eq!(action.phase(), &BulkPhase::Idle);
        let mut selection = selected(&["item-1"]);
        assert_eq!(action.confirm(&mut selection), None);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn successful_delete_clears_selection() {
        let mut repo = repo();
        let mut selection = selected(&["item-2", "item-4"]);
        let mut action = BulkAction::new(BulkKind::Delete);

        assert_eq!(action.request(&selection), Ok(2));
        let ids = action.confirm(&mut selection).unwrap();
        assert_eq!(ids, vec!["item-2".to_string(), "item-4".to_string()]);
        assert!(action.is_in_flight());
        assert_eq!(action.pending_count(), 2);

        let snapshot = repo.remove_many(&ids);
        let result = action.complete(&mut repo, snapshot, Ok(()), &mut selection);

        assert_eq!(result, Ok(2));
        assert_eq!(action.phase(), &BulkPhase::Idle);
        assert!(selection.is_empty());
        assert_eq!(repo.len(), 3);
        assert!(repo.get("item-2").is_none());
    }

    #[test]
    fn failed_cancel_rolls_back_and_keeps_selection() {
        let mut repo = repo();
        let before = repo.clone();
        let mut selection = selected(&["item-1", "item-3"]);
        let mut action = BulkAction::new(BulkKind::Cancel);

        action.request(&selection).unwrap();
        let ids = action.confirm(&mut selection).unwrap();
        let snapshot = repo.update_many(&ids, &|item| item.cancelled = true);
        assert_eq!(repo.get("item-1").map(|i| i.cancelled), Some(true));

        let result = action.complete(&mut repo, snapshot, Err("storage offline".to_string()), &mut selection);

        assert_eq!(result, Err(ListError::BulkActionFailed("storage offline".to_string())));
        assert_eq!(repo, before);
        assert_eq!(selection.len(), 2);
        assert_eq!(action.phase(), &BulkPhase::Idle);
    }

    #[test]
    fn selection_holds_only_existing_ids_while_delete_is_in_flight() {
        let mut repo = repo();
        let mut selection = selected(&["item-2", "item-5"]);
        let mut action = BulkAction::new(BulkKind::Delete);

        action.request(&selection).unwrap();
        let ids = action.confirm(&mut selection).unwrap();
        let snapshot = repo.remove_many(&ids);

        let source: Vec<String> = repo.list().iter().map(|i| i.id.clone()).collect();
        assert!(selection.ids().iter().all(|id| source.contains(id)));
        assert!(selection.is_empty());

        // новый выбор во время ожидания не теряется при ошибке
        selection.set("item-1", true);
        let result = action.complete(&mut repo, snapshot, Err("storage offline".to_string()), &mut selection);
        assert!(result.is_err());
        assert_eq!(repo.len(), 5);
        assert_eq!(selection.len(), 3);
        assert!(selection.contains("item-2") && selection.contains("item-5"));
    }

    #[test]
    fn request_while_in_flight_keeps_phase() {
        let mut action = BulkAction::new(BulkKind::Delete);
        let mut selection = selected(&["item-1"]);
        action.request(&selection).unwrap();
        action.confirm(&mut selection);
        assert_eq!(action.request(&selected(&["item-2", "item-3"])), Ok(1));
        assert!(action.is_in_flight());
        action.dismiss();
        assert!(action.is_in_flight());
    }
}
