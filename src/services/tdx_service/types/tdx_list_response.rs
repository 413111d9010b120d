use serde::Deserialize;

/// Most TDX endpoints answer with a bare array, a few wrap it in `data`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum TdxListResponse<T> {
    List(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new")]
        data: Vec<T>,
    },
}

impl<T> TdxListResponse<T> {
    pub fn into_rows(self) -> Vec<T> {
        match self {
            TdxListResponse::List(rows) => rows,
            TdxListResponse::Wrapped { data } => data,
        }
    }
}
