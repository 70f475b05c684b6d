use serde::{Deserialize, Serialize};

/// Логическое поле матрицы ответственности.
///
/// Не зависит от того, как колонка называется в конкретном CSV файле:
/// сопоставление с реальными заголовками выполняет [`crate::resolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalField {
    Number,
    Function,
    Product,
    Department,
    Division,
    Position,
    Role,
    Input,
    FromHow,
    Output,
    ToWhom,
    Software,
    Metric,
    HowToDigitize,
    Comment,
}

impl LogicalField {
    /// Все поля в порядке отображения колонок таблицы и экспорта
    pub const ALL: [LogicalField; 15] = [
        LogicalField::Number,
        LogicalField::Function,
        LogicalField::Product,
        LogicalField::Department,
        LogicalField::Division,
        LogicalField::Position,
        LogicalField::Role,
        LogicalField::Input,
        LogicalField::FromHow,
        LogicalField::Output,
        LogicalField::ToWhom,
        LogicalField::Software,
        LogicalField::Metric,
        LogicalField::HowToDigitize,
        LogicalField::Comment,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LogicalField::Number => "number",
            LogicalField::Function => "function",
            LogicalField::Product => "product",
            LogicalField::Department => "department",
            LogicalField::Division => "division",
            LogicalField::Position => "position",
            LogicalField::Role => "role",
            LogicalField::Input => "input",
            LogicalField::FromHow => "from_how",
            LogicalField::Output => "output",
            LogicalField::ToWhom => "to_whom",
            LogicalField::Software => "software",
            LogicalField::Metric => "metric",
            LogicalField::HowToDigitize => "how_to_digitize",
            LogicalField::Comment => "comment",
        }
    }

    /// Заголовок колонки для таблицы и файла Excel
    pub fn title(&self) -> &'static str {
        match self {
            LogicalField::Number => "№",
            LogicalField::Function => "Функция",
            LogicalField::Product => "Продукт",
            LogicalField::Department => "Департамент",
            LogicalField::Division => "Отдел",
            LogicalField::Position => "Должность",
            LogicalField::Role => "Роль",
            LogicalField::Input => "Вход",
            LogicalField::FromHow => "От кого",
            LogicalField::Output => "Выход",
            LogicalField::ToWhom => "Кому",
            LogicalField::Software => "ПО",
            LogicalField::Metric => "Метрика",
            LogicalField::HowToDigitize => "Как оцифровать",
            LogicalField::Comment => "Комментарий",
        }
    }

    /// Кандидаты для поиска колонки в заголовках файла, в порядке приоритета.
    ///
    /// Латинское имя идёт первым: в части выгрузок заголовки латинские,
    /// в остальных русские деловые термины.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            LogicalField::Number => &["number", "№", "номер", "№ п/п"],
            LogicalField::Function => &["function", "функция", "наименование функции"],
            LogicalField::Product => &["product", "продукт", "результат функции"],
            LogicalField::Department => &["department", "департамент", "дирекция"],
            LogicalField::Division => &["division", "отдел", "подразделение", "управление"],
            LogicalField::Position => &["position", "должность", "позиция"],
            LogicalField::Role => &["role", "роль", "raci"],
            LogicalField::Input => &["input", "вход", "входящий документ", "входные данные"],
            LogicalField::FromHow => &["from_how", "from how", "от кого", "откуда"],
            LogicalField::Output => &["output", "выход", "исходящий документ", "выходные данные"],
            LogicalField::ToWhom => &["to_whom", "to whom", "кому", "куда"],
            LogicalField::Software => &["software", "по", "программное обеспечение", "система"],
            LogicalField::Metric => &["metric", "метрика", "показатель", "kpi"],
            LogicalField::HowToDigitize => &[
                "how_to_digitize",
                "how to digitize",
                "как оцифровать",
                "оцифровка",
            ],
            LogicalField::Comment => &["comment", "комментарий", "примечание"],
        }
    }

    /// Позиция поля в [`LogicalField::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Измерение каскадного фильтра (выпадающий список на странице)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Function,
    Department,
    Division,
    Position,
    Role,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Function,
        FilterField::Department,
        FilterField::Division,
        FilterField::Position,
        FilterField::Role,
    ];

    pub fn logical(&self) -> LogicalField {
        match self {
            FilterField::Function => LogicalField::Function,
            FilterField::Department => LogicalField::Department,
            FilterField::Division => LogicalField::Division,
            FilterField::Position => LogicalField::Position,
            FilterField::Role => LogicalField::Role,
        }
    }

    pub fn key(&self) -> &'static str {
        self.logical().key()
    }

    pub fn title(&self) -> &'static str {
        self.logical().title()
    }
}
