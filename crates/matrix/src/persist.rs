//! Сериализация состояния фильтров для localStorage.
//!
//! Хранится плоский JSON объект `{ "function": "...", ..., "role": "..." }`,
//! пустая строка означает «Все». Само хранилище живёт во фронтенде.

use crate::field::FilterField;
use crate::filter::FilterAssignment;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedFilters {
    pub function: String,
    pub department: String,
    pub division: String,
    pub position: String,
    pub role: String,
}

impl PersistedFilters {
    fn slot(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Function => &mut self.function,
            FilterField::Department => &mut self.department,
            FilterField::Division => &mut self.division,
            FilterField::Position => &mut self.position,
            FilterField::Role => &mut self.role,
        }
    }

    pub fn from_assignment(assignment: &FilterAssignment) -> Self {
        let mut st = Self::default();
        for (field, value) in assignment.active() {
            *st.slot(field) = value.to_string();
        }
        st
    }

    pub fn into_assignment(mut self) -> FilterAssignment {
        let mut assignment = FilterAssignment::new();
        for field in FilterField::ALL {
            assignment.set(field, std::mem::take(self.slot(field)));
        }
        assignment
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Сериализует и отдаёт строку хранилищу; отказ записи только логируется
    pub fn store<E: std::fmt::Debug>(&self, write: impl FnOnce(&str) -> Result<(), E>) -> bool {
        let Some(raw) = self.to_json() else {
            return false;
        };
        match write(&raw) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to persist filters: {:?}", e);
                false
            }
        }
    }

    /// Битый JSON не ошибка: состояние просто не восстанавливается
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(raw) {
            Ok(st) => Some(st),
            Err(e) => {
                log::warn!("Ignoring persisted filters: {}", e);
                None
            }
        }
    }
}
