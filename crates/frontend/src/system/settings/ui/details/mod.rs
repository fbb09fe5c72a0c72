pub mod form;

use leptos::prelude::*;
use thaw::*;

use self::form::SettingsForm;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::config::{use_settings, AppSettings};

/// Поля формы как отдельные сигналы для `thaw::Input`
#[derive(Clone, Copy)]
struct FormFields {
    search_debounce_ms: RwSignal<String>,
    loading_delay_ms: RwSignal<String>,
    bulk_action_delay_ms: RwSignal<String>,
    notification_duration_ms: RwSignal<String>,
    page_size_mobile: RwSignal<String>,
    page_size_tablet: RwSignal<String>,
    page_size_desktop: RwSignal<String>,
}

impl FormFields {
    fn new(form: SettingsForm) -> Self {
        Self {
            search_debounce_ms: RwSignal::new(form.search_debounce_ms),
            loading_delay_ms: RwSignal::new(form.loading_delay_ms),
            bulk_action_delay_ms: RwSignal::new(form.bulk_action_delay_ms),
            notification_duration_ms: RwSignal::new(form.notification_duration_ms),
            page_size_mobile: RwSignal::new(form.page_size_mobile),
            page_size_tablet: RwSignal::new(form.page_size_tablet),
            page_size_desktop: RwSignal::new(form.page_size_desktop),
        }
    }

    fn fill(&self, form: SettingsForm) {
        self.search_debounce_ms.set(form.search_debounce_ms);
        self.loading_delay_ms.set(form.loading_delay_ms);
        self.bulk_action_delay_ms.set(form.bulk_action_delay_ms);
        self.notification_duration_ms.set(form.notification_duration_ms);
        self.page_size_mobile.set(form.page_size_mobile);
        self.page_size_tablet.set(form.page_size_tablet);
        self.page_size_desktop.set(form.page_size_desktop);
    }

    fn read(&self) -> SettingsForm {
        SettingsForm {
            search_debounce_ms: self.search_debounce_ms.get_untracked(),
            loading_delay_ms: self.loading_delay_ms.get_untracked(),
            bulk_action_delay_ms: self.bulk_action_delay_ms.get_untracked(),
            notification_duration_ms: self.notification_duration_ms.get_untracked(),
            page_size_mobile: self.page_size_mobile.get_untracked(),
            page_size_tablet: self.page_size_tablet.get_untracked(),
            page_size_desktop: self.page_size_desktop.get_untracked(),
        }
    }
}

#[component]
fn NumberField(#[prop(into)] label: String, value: RwSignal<String>, #[prop(into)] hint: String) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <Input input_type=InputType::Number value=value />
            <span class="form__hint">{hint}</span>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = use_settings();
    let notifications = use_notifications();
    let fields = FormFields::new(settings.with_untracked(|s| SettingsForm::from(s)));
    let error = RwSignal::new(None::<String>);

    let apply = move |next: AppSettings, reset: bool| {
        notifications.set_duration_ms(next.notification_duration_ms);
        let saved = next.save();
        settings.set(next);
        match saved {
            Ok(()) if reset => notifications.info("Settings restored to defaults"),
            Ok(()) => notifications.success("Settings saved"),
            Err(e) => {
                log::error!("failed to persist settings: {}", e);
                notifications.warning(format!("Settings applied for this session only: {}", e));
            }
        }
    };

    let on_save = move |_| match fields.read().to_settings() {
        Ok(next) => {
            error.set(None);
            apply(next, false);
        }
        Err(e) => error.set(Some(e)),
    };

    let on_reset = move |_| {
        let defaults = AppSettings::default();
        fields.fill(SettingsForm::from(&defaults));
        error.set(None);
        apply(defaults, true);
    };

    view! {
        <div class="page" data-page-id="sys_settings">
            <PageHeader title="Settings" subtitle="Stored in this browser".to_string()>
                <Button appearance=ButtonAppearance::Secondary on_click=on_reset>
                    "Reset to defaults"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=on_save>
                    "Save"
                </Button>
            </PageHeader>

            {move || error.get().map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{err}</span>
                </div>
            })}

            <div class="page__content settings__grid">
                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Timing"</h3>
                    </div>
                    <div class="card__body">
                        <Flex vertical=true gap=FlexGap::Medium>
                            <NumberField label="Search debounce (ms)" value=fields.search_debounce_ms hint="Quiet period before a search is applied" />
                            <NumberField label="Loading delay (ms)" value=fields.loading_delay_ms hint="Simulated latency when a list opens" />
                            <NumberField label="Bulk action delay (ms)" value=fields.bulk_action_delay_ms hint="Simulated latency of delete and cancel" />
                            <NumberField label="Notification duration (ms)" value=fields.notification_duration_ms hint="How long a toast stays visible" />
                        </Flex>
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Page size"</h3>
                    </div>
                    <div class="card__body">
                        <Flex vertical=true gap=FlexGap::Medium>
                            <NumberField label="Mobile" value=fields.page_size_mobile hint="Below 768 px" />
                            <NumberField label="Tablet" value=fields.page_size_tablet hint="768 to 1023 px" />
                            <NumberField label="Desktop" value=fields.page_size_desktop hint="1024 px and wider" />
                        </Flex>
                    </div>
                </div>
            </div>
        </div>
    }
}
