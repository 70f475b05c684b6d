/// Коды ролей матрицы в порядке легенды
pub const ROLE_CODES: [&str; 7] = ["О", "В", "У", "К", "И", "П", "ПК"];

/// Описание роли для всплывающей подсказки в таблице.
/// Неизвестный код не ошибка: подсказки просто не будет.
pub fn describe(code: &str) -> Option<&'static str> {
    let text = match code.trim() {
        "О" => "Ответственный: отвечает за организацию и координацию выполнения функции. Назначает исполнителей, контролирует сроки и качество.",
        "В" => "Выполняющий: непосредственно выполняет работу по заданию ответственного.",
        "У" => "Утверждающий: принимает и утверждает результат, несёт финальную ответственность.",
        "К" => "Консультант: даёт экспертную консультацию.",
        "И" => "Информируемый: получает информацию о ходе или результате.",
        "П" => "Помощник: содействует выполнению функции дополнительными ресурсами.",
        "ПК" => "Помощник, консультант: объединённая роль помощника и консультанта.",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_description() {
        for code in ROLE_CODES {
            assert!(describe(code).is_some(), "no description for {}", code);
        }
    }

    #[test]
    fn test_unknown_and_latin_codes() {
        assert_eq!(describe("X"), None);
        assert_eq!(describe(""), None);
        // латинская "K" не совпадает с кириллической "К"
        assert_eq!(describe("K"), None);
        assert!(describe(" ПК ").unwrap().starts_with("Помощник, консультант"));
    }
}
