use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{MovieError, StoreError};
use crate::models::Movie;
use crate::store;
use crate::validation;

/// Owns the movie collection for the lifetime of the process.
///
/// Every mutation is applied to a copy of the collection, written to disk,
/// and only then swapped in. The lock is held across the write, so writers
/// never interleave and memory always matches the last successful write.
#[derive(Debug)]
pub struct MovieRepo {
    path: PathBuf,
    movies: Mutex<Vec<Movie>>,
}

impl MovieRepo {
    /// Load the backing file. Any failure here must stop startup.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let movies = store::load_movies(&path)?;

        let mut seen = HashSet::new();
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                tracing::warn!(id = %movie.id, "duplicate movie id in data file");
            }
        }

        Ok(Self::with_movies(path, movies))
    }

    pub fn with_movies(path: impl Into<PathBuf>, movies: Vec<Movie>) -> Self {
        Self {
            path: path.into(),
            movies: Mutex::new(movies),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Movie>> {
        // the vec is only ever replaced wholesale, so a poisoned guard is still consistent
        self.movies.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<Movie> {
        self.lock().clone()
    }

    pub fn get(&self, id: &str) -> Result<Movie, MovieError> {
        self.lock()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(MovieError::NotFound)
    }

    pub fn create(&self, data: Map<String, Value>) -> Result<Movie, MovieError> {
        let input = validation::decode_new(data)?;

        let mut movies = self.lock();
        let movie = input.into_movie(fresh_id(&movies));

        let mut next = movies.clone();
        next.push(movie.clone());
        self.commit(&mut movies, next, "Failed to save movie to file")?;

        tracing::debug!(id = %movie.id, "movie created");
        Ok(movie)
    }

    pub fn update(&self, id: &str, data: Map<String, Value>) -> Result<Movie, MovieError> {
        let mut movies = self.lock();
        let pos = position(&movies, id)?;
        let patch = validation::decode_patch(data)?;

        let mut next = movies.clone();
        patch.apply(&mut next[pos]);
        let updated = next[pos].clone();
        self.commit(&mut movies, next, "Failed to update movie to file")?;

        tracing::debug!(id = %updated.id, "movie updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), MovieError> {
        let mut movies = self.lock();
        let pos = position(&movies, id)?;

        let mut next = movies.clone();
        next.remove(pos);
        self.commit(&mut movies, next, "Failed to delete movie from file")?;

        tracing::debug!(id, "movie deleted");
        Ok(())
    }

    // Persist `next`, then make it the live collection.
    fn commit(
        &self,
        live: &mut MutexGuard<'_, Vec<Movie>>,
        next: Vec<Movie>,
        failure: &str,
    ) -> Result<(), MovieError> {
        if let Err(err) = store::save_movies(&self.path, &next) {
            tracing::error!(error = %err, "failed to persist movies");
            return Err(MovieError::Persistence(failure.to_string()));
        }
        **live = next;
        Ok(())
    }
}

fn position(movies: &[Movie], id: &str) -> Result<usize, MovieError> {
    movies
        .iter()
        .position(|m| m.id == id)
        .ok_or(MovieError::NotFound)
}

fn fresh_id(movies: &[Movie]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !movies.iter().any(|m| m.id == id) {
            return id;
        }
    }
}
