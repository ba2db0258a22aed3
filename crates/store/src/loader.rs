//! CSV ingestion for the three relations.
//!
//! `people.csv` is `id,name,birth`, `movies.csv` is `id,title,year` and
//! `stars.csv` is `person_id,movie_id`, all headered. Star rows referencing
//! an unknown person or movie are counted and dropped so later adjacency
//! lookups can never dangle.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use protocol::{Movie, MovieId, Person, PersonId};
use serde::Deserialize;
use tracing::{debug, info};

use crate::GraphStore;

/// Row counts from one [`GraphStore::load`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub people: usize,
    pub movies: usize,
    pub cast_entries: usize,
    /// Star rows dropped because their person or movie id was unknown.
    pub dropped_cast: usize,
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

impl GraphStore {
    /// Load the three relations from `dir` and return the populated store.
    pub fn load(dir: &Path) -> Result<Self> {
        let (store, _) = Self::load_with_report(dir)?;
        Ok(store)
    }

    /// [`GraphStore::load`], also returning what was read and dropped.
    pub fn load_with_report(dir: &Path) -> Result<(Self, LoadReport)> {
        let mut store = GraphStore::new();
        let mut report = LoadReport::default();

        let path = dir.join("people.csv");
        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        for row in reader.deserialize() {
            let row: PersonRow =
                row.with_context(|| format!("reading {}", path.display()))?;
            let birth = if row.birth.is_empty() {
                None
            } else {
                Some(row.birth)
            };
            store.insert_person(Person {
                id: PersonId::new(row.id),
                name: row.name,
                birth,
                movies: HashSet::new(),
            });
            report.people += 1;
        }

        let path = dir.join("movies.csv");
        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        for row in reader.deserialize() {
            let row: MovieRow =
                row.with_context(|| format!("reading {}", path.display()))?;
            store.insert_movie(Movie {
                id: MovieId::new(row.id),
                title: row.title,
                year: row.year,
                stars: HashSet::new(),
            });
            report.movies += 1;
        }

        let path = dir.join("stars.csv");
        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        for row in reader.deserialize() {
            let row: StarRow =
                row.with_context(|| format!("reading {}", path.display()))?;
            let person_id = PersonId::new(row.person_id);
            let movie_id = MovieId::new(row.movie_id);
            if store.insert_star(&person_id, &movie_id) {
                report.cast_entries += 1;
            } else {
                debug!(person = %person_id, movie = %movie_id, "dropping cast record with unknown id");
                report.dropped_cast += 1;
            }
        }

        info!(
            people = report.people,
            movies = report.movies,
            cast = report.cast_entries,
            dropped_cast = report.dropped_cast,
            "data loaded"
        );
        Ok((store, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &Path, people: &str, movies: &str, stars: &str) {
        fs::write(dir.join("people.csv"), people).unwrap();
        fs::write(dir.join("movies.csv"), movies).unwrap();
        fs::write(dir.join("stars.csv"), stars).unwrap();
    }

    #[test]
    fn loads_the_three_relations() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "id,name,birth\n1,Alice,1970\n2,Bob,1980\n",
            "id,title,year\n10,First,1990\n",
            "person_id,movie_id\n1,10\n2,10\n",
        );

        let (store, report) = GraphStore::load_with_report(dir.path()).unwrap();
        assert_eq!(
            report,
            LoadReport {
                people: 2,
                movies: 1,
                cast_entries: 2,
                dropped_cast: 0
            }
        );

        let alice = store.person(&PersonId::new("1")).unwrap();
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.birth.as_deref(), Some("1970"));
        assert!(alice.movies.contains(&MovieId::new("10")));

        let first = store.movie(&MovieId::new("10")).unwrap();
        assert_eq!(first.title, "First");
        assert_eq!(first.stars.len(), 2);
    }

    #[test]
    fn empty_birth_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "id,name,birth\n1,Alice,\n",
            "id,title,year\n",
            "person_id,movie_id\n",
        );

        let store = GraphStore::load(dir.path()).unwrap();
        assert_eq!(store.person(&PersonId::new("1")).unwrap().birth, None);
    }

    #[test]
    fn dangling_star_rows_load_without_error() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "id,name,birth\n1,Alice,1970\n",
            "id,title,year\n10,First,1990\n",
            "person_id,movie_id\n1,10\n99,10\n1,99\n",
        );

        let (store, report) = GraphStore::load_with_report(dir.path()).unwrap();
        assert_eq!(report.cast_entries, 1);
        assert_eq!(report.dropped_cast, 2);
        assert_eq!(store.stats().cast_entries, 1);
    }

    #[test]
    fn missing_file_is_an_error_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = GraphStore::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("people.csv"));
    }

    #[test]
    fn quoted_fields_with_commas_parse() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "id,name,birth\n1,\"Alice, Jr.\",1970\n",
            "id,title,year\n10,\"First, Part Two\",1990\n",
            "person_id,movie_id\n1,10\n",
        );

        let store = GraphStore::load(dir.path()).unwrap();
        assert_eq!(store.person(&PersonId::new("1")).unwrap().name, "Alice, Jr.");
        assert_eq!(
            store.movie(&MovieId::new("10")).unwrap().title,
            "First, Part Two"
        );
    }
}
