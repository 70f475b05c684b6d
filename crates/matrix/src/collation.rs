//! Сортировка значений фильтров с учётом русского алфавита.
//!
//! Порядок близок к `localeCompare("ru")`: регистр не важен, `ё` стоит вместе с `е`,
//! группы цифр сравниваются как числа ("2" < "10"). При равенстве на первом
//! уровне решают вторичные признаки (`е` < `ё`, строчная < прописной), а затем
//! сами кодовые точки, поэтому порядок полный и воспроизводимый.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Unit {
    // цифры сортируются раньше букв, как в localeCompare
    Number(String),
    Letter(char),
}

fn fold(c: char) -> char {
    match c {
        'ё' | 'Ё' => 'е',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

fn next_unit(chars: &mut Peekable<Chars<'_>>) -> Option<Unit> {
    let c = chars.next()?;
    if c.is_ascii_digit() {
        let mut digits = String::from(c);
        while let Some(&d) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        let trimmed = digits.trim_start_matches('0');
        return Some(Unit::Number(trimmed.to_string()));
    }
    Some(Unit::Letter(fold(c)))
}

fn compare_units(a: &Unit, b: &Unit) -> Ordering {
    match (a, b) {
        // более длинное число без ведущих нулей больше
        (Unit::Number(x), Unit::Number(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
        _ => a.cmp(b),
    }
}

fn primary(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (next_unit(&mut left), next_unit(&mut right)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_units(&x, &y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn secondary(a: &str, b: &str) -> Ordering {
    let weight = |c: char| matches!(c, 'ё' | 'Ё');
    a.chars().map(weight).cmp(b.chars().map(weight))
}

fn tertiary(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
}

/// Сравнение двух значений для отображения в выпадающем списке
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| secondary(a, b))
        .then_with(|| tertiary(a, b))
        .then_with(|| a.cmp(b))
}

pub fn sort_values(values: &mut [String]) {
    values.sort_by(|a, b| compare(a, b));
}
