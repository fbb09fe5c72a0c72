use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::error::ListError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Info => "toast toast--info",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Сервис всплывающих уведомлений
///
/// Страницы только сообщают текст и тип; показ, время жизни и порядок
/// (новые снизу) остаются здесь.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    duration_ms: RwSignal<u32>,
}

impl NotificationService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            duration_ms: RwSignal::new(duration_ms),
        }
    }

    pub fn set_duration_ms(&self, duration_ms: u32) {
        self.duration_ms.set(duration_ms);
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let this = *self;
        Timeout::new(self.duration_ms.get_untracked(), move || this.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationKind::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NotificationKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message);
    }

    /// Показывает ошибку операции со списком; пустой выбор это предупреждение
    pub fn list_error(&self, error: &ListError, empty_selection_hint: &str) {
        match error {
            ListError::EmptySelection => self.warning(empty_selection_hint),
            other => self.error(other.to_string()),
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <span class="toast__message">{n.message.clone()}</span>
                            <button class="toast__close" title="Dismiss" on:click=move |_| service.dismiss(id)>
                                {crate::shared::icons::icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
