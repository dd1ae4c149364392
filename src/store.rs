use std::{fs, path::Path};

use crate::error::StoreError;
use crate::models::Movie;

pub const DEFAULT_DATA_FILE: &str = "data/movies.json";

pub fn load_movies(path: &Path) -> Result<Vec<Movie>, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let movies: Vec<Movie> = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(movies)
}

pub fn save_movies(path: &Path, movies: &[Movie]) -> Result<(), StoreError> {
    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let text = serde_json::to_string_pretty(movies).map_err(StoreError::Encode)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    fs::write(&tmp_path, text).map_err(write_err)?;
    fs::rename(&tmp_path, path).map_err(write_err)?;
    Ok(())
}
