use crate::field::FilterField;
use crate::filter::{self, FilterAssignment, FilterView};
use crate::record::{Dataset, Record};
use crate::resolver::ColumnResolution;
use crate::view::{self, DisplayRow};

/// Единственный владелец состояния страницы: данные одной загрузки,
/// сопоставление колонок и текущие фильтры.
///
/// Любое изменение фильтров сопровождается полным пересогласованием, так что
/// [`MatrixSession::assignment`] всегда содержит только достижимые значения.
#[derive(Debug, Clone)]
pub struct MatrixSession {
    dataset: Dataset,
    resolution: ColumnResolution,
    assignment: FilterAssignment,
}

impl MatrixSession {
    pub fn new(dataset: Dataset) -> Self {
        let resolution = ColumnResolution::for_dataset(&dataset);
        Self::with_resolution(dataset, resolution)
    }

    pub fn with_resolution(dataset: Dataset, resolution: ColumnResolution) -> Self {
        Self {
            dataset,
            resolution,
            assignment: FilterAssignment::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn resolution(&self) -> &ColumnResolution {
        &self.resolution
    }

    pub fn assignment(&self) -> &FilterAssignment {
        &self.assignment
    }

    /// Выбор значения в списке; пустая строка означает «Все»
    pub fn select(&mut self, field: FilterField, value: &str) {
        let next = self.assignment.clone().with(field, value);
        self.assignment = filter::reconcile(&self.dataset, &self.resolution, &next, Some(field));
        log::debug!("Filters after {} change: {:?}", field.key(), self.assignment);
    }

    pub fn clear_all(&mut self) {
        self.assignment = self.assignment.cleared();
    }

    /// Восстановление сохранённых фильтров: устаревшие значения отбрасываются
    pub fn restore(&mut self, assignment: FilterAssignment) {
        self.assignment = filter::restore_assignment(&self.dataset, &self.resolution, &assignment);
    }

    pub fn view(&self) -> FilterView {
        FilterView::compute(&self.dataset, &self.resolution, &self.assignment)
    }

    pub fn visible_rows(&self) -> Vec<&Record> {
        filter::filtered_rows(&self.dataset, &self.resolution, &self.assignment)
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        view::display_rows(self.visible_rows(), &self.resolution)
    }
}
