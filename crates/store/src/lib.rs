//! In-memory graph store over the people, movies and cast relations.
//!
//! The store answers the adjacency question the search engine needs —
//! which (movie, person) pairs co-occur with a given person — plus the
//! name-index and presentation lookups the CLI needs. It is read-only
//! after loading, so one store can back any number of searches.

use std::collections::HashSet;

use protocol::{Movie, MovieId, Person, PersonId, Step};
use rustc_hash::FxHashMap;
use search::{SearchPolicy, SearchSpace};
use thiserror::Error;

mod loader;

pub use loader::LoadReport;

/// Failures at the store's search façade.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A search endpoint does not exist in the people relation. Validated
    /// here so the engine stays total over the ids it is given.
    #[error("unknown person id: {0}")]
    UnknownPerson(PersonId),

    #[error(transparent)]
    Search(#[from] search::SearchError),
}

/// Relation counts, for the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub people: usize,
    pub movies: usize,
    pub cast_entries: usize,
}

#[derive(Debug, Default)]
pub struct GraphStore {
    people: FxHashMap<PersonId, Person>,
    movies: FxHashMap<MovieId, Movie>,
    /// Lowercased name -> ids of every person carrying it.
    names: FxHashMap<String, HashSet<PersonId>>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_person(&mut self, person: Person) {
        self.names
            .entry(person.name.to_lowercase())
            .or_default()
            .insert(person.id.clone());
        self.people.insert(person.id.clone(), person);
    }

    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id.clone(), movie);
    }

    /// Record that `person_id` starred in `movie_id`, updating both sides
    /// of the relation so it stays symmetric. Returns `false` without
    /// touching anything when either id is unknown — dangling cast records
    /// are dropped, never an error.
    pub fn insert_star(&mut self, person_id: &PersonId, movie_id: &MovieId) -> bool {
        match (self.people.get_mut(person_id), self.movies.get_mut(movie_id)) {
            (Some(person), Some(movie)) => {
                person.movies.insert(movie_id.clone());
                movie.stars.insert(person_id.clone());
                true
            }
            _ => false,
        }
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Case-insensitive name lookup. Empty when the name is unknown;
    /// more than one id means the name is ambiguous and resolving it is
    /// the caller's job. Sorted for deterministic output.
    pub fn lookup_person_by_name(&self, name: &str) -> Vec<PersonId> {
        let mut ids: Vec<PersonId> = self
            .names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Every (movie, co-star) pair for the given person: for each movie
    /// they appear in, every star of that movie. The person themself is
    /// among the pairs; the search engine's explored set absorbs that.
    /// Sorted so repeated queries enumerate identically.
    pub fn neighbors(&self, person_id: &PersonId) -> Vec<(MovieId, PersonId)> {
        let Some(person) = self.people.get(person_id) else {
            return Vec::new();
        };
        let mut pairs = Vec::new();
        for movie_id in &person.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    pairs.push((movie_id.clone(), star.clone()));
                }
            }
        }
        pairs.sort();
        pairs
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            people: self.people.len(),
            movies: self.movies.len(),
            cast_entries: self.movies.values().map(|m| m.stars.len()).sum(),
        }
    }

    /// Shortest chain of co-appearances from `source` to `target`.
    ///
    /// `Ok(Some(vec![]))` when the two ids are equal, `Ok(None)` when the
    /// people are not connected. Both ids must exist in the people
    /// relation; an unknown id fails fast with [`StoreError::UnknownPerson`].
    pub fn shortest_path(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<Option<Vec<Step>>, StoreError> {
        self.shortest_path_with(source, target, SearchPolicy::default())
    }

    /// [`GraphStore::shortest_path`] with an explicit search budget.
    pub fn shortest_path_with(
        &self,
        source: &PersonId,
        target: &PersonId,
        policy: SearchPolicy,
    ) -> Result<Option<Vec<Step>>, StoreError> {
        if !self.people.contains_key(source) {
            return Err(StoreError::UnknownPerson(source.clone()));
        }
        if !self.people.contains_key(target) {
            return Err(StoreError::UnknownPerson(target.clone()));
        }

        let path = search::shortest_path_with(self, source.clone(), target, policy)?;
        Ok(path.map(|steps| {
            steps
                .into_iter()
                .map(|(movie, person)| Step::new(movie, person))
                .collect()
        }))
    }
}

impl SearchSpace for GraphStore {
    type State = PersonId;
    type Action = MovieId;

    fn neighbors(&self, state: &PersonId) -> Vec<(MovieId, PersonId)> {
        GraphStore::neighbors(self, state)
    }
}
