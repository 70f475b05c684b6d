use matrix::persist::PersistedFilters;
use matrix::FilterAssignment;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Читает сохранённые фильтры; отсутствие или битое значение дают `None`
pub fn load_filters(key: &str) -> Option<FilterAssignment> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    PersistedFilters::from_json(&raw).map(PersistedFilters::into_assignment)
}

pub fn save_filters(key: &str, assignment: &FilterAssignment) {
    let Some(storage) = storage() else {
        log::warn!("localStorage unavailable, filters are not saved");
        return;
    };
    PersistedFilters::from_assignment(assignment).store(|raw| storage.set_item(key, raw));
}
