use leptos::prelude::*;

use super::columns::FILTER_STATUS;
use crate::shared::list_state::ListState;

pub fn create_state() -> RwSignal<ListState> {
    RwSignal::new(ListState::new(&[FILTER_STATUS], None))
}
