use axum::{extract::State, response::Html};
use serde::Serialize;
use serde_json::json;

use crate::types::{app_state::AppState, city::City};

const INDEX_HTML: &str = include_str!("../ui/index.html");

/// JSON literal safe to drop inside a `<script>` block.
fn script_literal<T: Serialize>(value: T) -> String {
    json!(value).to_string().replace('<', "\\u003c")
}

/// Serves the search page with the API base URL and city list filled in.
pub async fn get_ui(State(state): State<AppState>) -> Html<String> {
    let cities: Vec<&str> = City::ALL.iter().map(City::as_str).collect();

    Html(
        INDEX_HTML
            .replace("__API_BASE_URL__", &script_literal(&state.ui_api_base_url))
            .replace("__DEFAULT_CITY__", &script_literal(state.default_city.as_str()))
            .replace("__CITIES__", &script_literal(cities)),
    )
}
