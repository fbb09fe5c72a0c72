use leptos::prelude::*;
use thaw::*;

/// ConfirmDialog - modal confirmation for destructive bulk actions.
///
/// While `busy` is true both buttons are disabled and the confirm button
/// shows a progress label.
#[component]
pub fn ConfirmDialog(
    /// Dialog visibility
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: Signal<String>,
    /// Action is in progress
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{move || title.get()}</DialogTitle>
                    <DialogContent>
                        <div class="confirm-dialog__message">{move || message.get()}</div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=busy
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=move |_| on_confirm.run(())
                        >
                            {move || if busy.get() { "Working…".to_string() } else { confirm_label.get() }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
