use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String, // free-form, never parsed
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub director: Director,
    pub rating: i64,
    pub genre: String,
    pub isbn: String,
    pub poster: String, // URL or path
}
