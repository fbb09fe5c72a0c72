use leptos::prelude::*;

use super::columns::FILTER_STATUS;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::SortSpec;

pub fn create_state() -> RwSignal<ListState> {
    RwSignal::new(ListState::new(&[FILTER_STATUS], Some(SortSpec::desc("created_at"))))
}
