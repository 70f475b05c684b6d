use gloo_net::http::Request;
use matrix::{load_dataset, LoadError, ParsedCsv};

/// Загружает CSV матрицы и разбирает его.
///
/// Единственная асинхронная точка приложения: дальше всё считается синхронно.
pub async fn fetch_matrix(url: &str) -> Result<ParsedCsv, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Http {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    load_dataset(&text)
}
