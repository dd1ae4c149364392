/*
Decoding of loosely-typed request bodies into movie input.
Kept apart from the HTTP handlers so it can be tested on plain JSON values.
*/

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::MovieError;
use crate::models::{Director, Movie};

// Checked in order; the first missing key wins.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "title",
    "year",
    "rating",
    "genre",
    "isbn",
    "director",
    "poster",
    "director.firstName",
    "director.lastName",
    "director.birthDate",
];

// Body of a create request once every required field is known to be present
#[derive(Debug, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i64,
    pub rating: i64,
    pub genre: String,
    pub isbn: String,
    pub poster: String,
    pub director: Director,
}

impl NewMovie {
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            rating: self.rating,
            genre: self.genre,
            isbn: self.isbn,
            poster: self.poster,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
}

// Partial update: absent (or null) fields leave the movie untouched
#[derive(Debug, Default, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub rating: Option<i64>,
    pub year: Option<i64>,
    pub poster: Option<String>,
    pub director: Option<DirectorPatch>,
}

impl MoviePatch {
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(isbn) = self.isbn {
            movie.isbn = isbn;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(director) = self.director {
            if let Some(first_name) = director.first_name {
                movie.director.first_name = first_name;
            }
            if let Some(last_name) = director.last_name {
                movie.director.last_name = last_name;
            }
            if let Some(birth_date) = director.birth_date {
                movie.director.birth_date = birth_date;
            }
        }
    }
}

// Walk each dotted path through nested objects.
// Reports the segment that was missing, e.g. "firstName is required".
pub fn check_required(data: &Map<String, Value>) -> Result<(), MovieError> {
    for path in REQUIRED_FIELDS {
        let mut current = data;
        let mut parts = path.split('.').peekable();

        while let Some(part) = parts.next() {
            let Some(value) = current.get(part) else {
                return Err(MovieError::Validation(format!("{part} is required")));
            };

            if parts.peek().is_some() {
                current = value
                    .as_object()
                    .ok_or_else(|| MovieError::Validation(format!("{part} must be an object")))?;
            }
        }
    }
    Ok(())
}

pub fn decode_new(data: Map<String, Value>) -> Result<NewMovie, MovieError> {
    check_required(&data)?;
    serde_json::from_value(Value::Object(data)).map_err(invalid_data)
}

pub fn decode_patch(data: Map<String, Value>) -> Result<MoviePatch, MovieError> {
    if let Some(director) = data.get("director") {
        if !(director.is_object() || director.is_null()) {
            return Err(MovieError::Validation("director must be an object".into()));
        }
    }
    serde_json::from_value(Value::Object(data)).map_err(invalid_data)
}

fn invalid_data(err: serde_json::Error) -> MovieError {
    MovieError::Validation(format!("invalid movie data: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn full_body() -> Value {
        json!({
            "title": "Heat",
            "year": 1995,
            "rating": 8,
            "genre": "Crime",
            "isbn": "978-3-16-148410-0",
            "poster": "https://example.com/heat.jpg",
            "director": {
                "firstName": "Michael",
                "lastName": "Mann",
                "birthDate": "1943-02-05"
            }
        })
    }

    fn without(mut body: Value, key: &str) -> Map<String, Value> {
        body.as_object_mut().unwrap().remove(key);
        object(body)
    }

    #[test]
    fn complete_body_passes() {
        let movie = decode_new(object(full_body())).unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.director.first_name, "Michael");
    }

    #[test]
    fn missing_genre_is_named() {
        let err = decode_new(without(full_body(), "genre")).unwrap_err();
        assert_eq!(err, MovieError::Validation("genre is required".into()));
    }

    #[test]
    fn first_missing_field_wins() {
        let mut body = full_body();
        body.as_object_mut().unwrap().remove("poster");
        let err = decode_new(without(body, "title")).unwrap_err();
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn missing_nested_director_field_is_named() {
        let mut body = full_body();
        body["director"].as_object_mut().unwrap().remove("lastName");
        let err = decode_new(object(body)).unwrap_err();
        assert_eq!(err.to_string(), "lastName is required");
    }

    #[test]
    fn director_must_be_an_object() {
        let mut body = full_body();
        body["director"] = json!("Michael Mann");
        let err = check_required(&object(body)).unwrap_err();
        assert_eq!(err.to_string(), "director must be an object");
    }

    #[test]
    fn wrong_type_is_a_validation_error() {
        let mut body = full_body();
        body["year"] = json!("nineteen ninety-five");
        let err = decode_new(object(body)).unwrap_err();
        assert!(matches!(err, MovieError::Validation(msg) if msg.starts_with("invalid movie data")));
    }

    #[test]
    fn null_required_field_is_rejected() {
        let mut body = full_body();
        body["genre"] = Value::Null;
        assert!(matches!(
            decode_new(object(body)),
            Err(MovieError::Validation(_))
        ));
    }

    #[test]
    fn patch_touches_only_supplied_fields() {
        let mut movie = decode_new(object(full_body()))
            .unwrap()
            .into_movie("42".into());
        let before = movie.clone();

        let patch = decode_patch(object(json!({
            "title": "Heat (Director's Cut)",
            "director": { "birthDate": "1943-02-06" }
        })))
        .unwrap();
        patch.apply(&mut movie);

        assert_eq!(movie.title, "Heat (Director's Cut)");
        assert_eq!(movie.director.birth_date, "1943-02-06");
        assert_eq!(movie.director.first_name, before.director.first_name);
        assert_eq!(movie.year, before.year);
        assert_eq!(movie.id, "42");
    }

    #[test]
    fn patch_with_scalar_director_is_rejected() {
        let err = decode_patch(object(json!({ "director": 7 }))).unwrap_err();
        assert_eq!(err.to_string(), "director must be an object");
    }

    #[test]
    fn patch_ignores_null_and_unknown_keys() {
        let patch = decode_patch(object(json!({ "title": null, "studio": "Warner" }))).unwrap();
        assert!(patch.title.is_none());
    }
}
