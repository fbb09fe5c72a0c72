//! Действия страницы-списка, общие для всех агрегатов: массовые операции
//! через диалог подтверждения и выгрузка выбранных строк в CSV.

use chrono::Utc;
use contracts::domain::common::Entity;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::notification_service::{NotificationKind, NotificationService};
use crate::shared::bulk_action::{BulkAction, BulkKind};
use crate::shared::export::{export_selected, BrowserDownload, CsvExportable};
use crate::shared::list_state::ListState;
use crate::shared::repository::{Repository, Snapshot};

/// Видимость диалога подтверждения, связанная с фазой действия.
///
/// Закрытие диалога пользователем в фазе подтверждения отменяет действие.
pub fn bulk_dialog_open(action: RwSignal<BulkAction>) -> RwSignal<bool> {
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        let busy = action.with(|a| a.is_confirm_pending() || a.is_in_flight());
        open.set(busy);
    });

    Effect::new(move |_| {
        if !open.get() && action.with_untracked(|a| a.is_confirm_pending()) {
            action.update(|a| a.dismiss());
        }
    });

    open
}

/// Запрашивает подтверждение для текущего выбора
pub fn request_bulk(
    action: RwSignal<BulkAction>,
    state: RwSignal<ListState>,
    notifications: NotificationService,
) {
    let selection = state.with_untracked(|s| s.selection.clone());
    if let Some(Err(err)) = action.try_update(|a| a.request(&selection)) {
        let hint = action.with_untracked(|a| format!("Select records to {}", a.kind().verb().to_lowercase()));
        notifications.list_error(&err, &hint);
    }
}

/// Подтверждает действие: изменение применяется сразу, ответ хранилища
/// приходит после `delay_ms`.
pub fn confirm_bulk<T, R, F>(
    action: RwSignal<BulkAction>,
    state: RwSignal<ListState>,
    repository: RwSignal<R>,
    apply: F,
    noun: &'static str,
    delay_ms: u32,
    notifications: NotificationService,
) where
    T: Entity + Clone + 'static,
    R: Repository<T> + Send + Sync + 'static,
    F: FnOnce(&mut R, &[String]) -> Snapshot<T>,
{
    // Выбор уходит в действие до изменения репозитория
    let Some(ids) = state
        .try_update(|s| action.try_update(|a| a.confirm(&mut s.selection)).flatten())
        .flatten()
    else {
        return;
    };
    let Some(snapshot) = repository.try_update(|repo| apply(repo, &ids)) else {
        return;
    };
    let kind = action.with_untracked(|a| a.kind());
    log::debug!("bulk {} in flight for {} {}", kind.verb(), ids.len(), noun);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        // Имитация хранилища всегда отвечает успехом
        let outcome: Result<(), String> = Ok(());

        let result = state
            .try_update(|s| {
                repository.try_update(|repo| {
                    action.try_update(|a| a.complete(repo, snapshot, outcome, &mut s.selection))
                })
            })
            .flatten()
            .flatten();

        match result {
            Some(Ok(count)) => {
                let (notice, message) = completion_notice(kind, noun, count);
                notifications.push(notice, message);
            }
            Some(Err(err)) => notifications.list_error(&err, ""),
            None => log::warn!("bulk {} finished after the page was closed", kind.verb()),
        }
    });
}

/// Сообщение об успешном завершении; если ни одна запись не подошла, это не успех
fn completion_notice(kind: BulkKind, noun: &str, count: usize) -> (NotificationKind, String) {
    if count == 0 {
        (NotificationKind::Info, format!("No {} could be {}", noun, kind.past_tense()))
    } else {
        (NotificationKind::Success, format!("{} {} {}", count, noun, kind.past_tense()))
    }
}

/// Выгружает выбранные записи и сообщает результат
pub fn export_selection<T, R>(
    repository: RwSignal<R>,
    state: RwSignal<ListState>,
    notifications: NotificationService,
) where
    T: Entity + CsvExportable + Clone + 'static,
    R: Repository<T> + Send + Sync + 'static,
{
    let records = repository.with_untracked(|repo| repo.list());
    let today = Utc::now().date_naive();
    let result = state.with_untracked(|s| export_selected(&records, &s.selection, &BrowserDownload, today));

    match result {
        Ok(count) => notifications.success(format!("Exported {} {}", count, T::ENTITY)),
        Err(err) => notifications.list_error(&err, "Select records to export"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_cancelled_is_reported_as_info() {
        let (kind, message) = completion_notice(BulkKind::Cancel, "orders", 0);
        assert_eq!(kind, NotificationKind::Info);
        assert_eq!(message, "No orders could be cancelled");

        let (kind, message) = completion_notice(BulkKind::Delete, "customers", 3);
        assert_eq!(kind, NotificationKind::Success);
        assert_eq!(message, "3 customers deleted");
    }
}
