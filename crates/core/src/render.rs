//! Presentation of a computed path.
//!
//! The engine's steps start just after the source, so rendering prepends
//! the source as the implicit zeroth person of the trace.

use anyhow::Result;
use protocol::{PersonId, Step};
use serde::Serialize;
use store::GraphStore;

/// Human-readable trace, `degrees.py` style:
///
/// ```text
/// 2 degrees of separation.
/// 1: Kevin Bacon and Tom Hanks starred in Apollo 13
/// 2: Tom Hanks and Robin Wright starred in Forrest Gump
/// ```
pub fn render_trace(store: &GraphStore, source: &PersonId, steps: &[Step]) -> String {
    let mut out = format!("{} degrees of separation.\n", steps.len());
    let mut previous = source.clone();
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!(
            "{}: {} and {} starred in {}\n",
            i + 1,
            person_name(store, &previous),
            person_name(store, &step.person),
            store
                .movie(&step.movie)
                .map(|m| m.title.as_str())
                .unwrap_or("unknown"),
        ));
        previous = step.person.clone();
    }
    out
}

#[derive(Debug, Serialize)]
struct StepReport {
    movie: String,
    person: String,
    title: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct PathReport {
    degrees: usize,
    steps: Vec<StepReport>,
}

/// The `--json` report: `{ degrees, steps: [{movie, person, title, name}] }`.
pub fn render_json(store: &GraphStore, steps: &[Step]) -> Result<String> {
    let report = PathReport {
        degrees: steps.len(),
        steps: steps
            .iter()
            .map(|step| StepReport {
                movie: step.movie.to_string(),
                person: step.person.to_string(),
                title: store
                    .movie(&step.movie)
                    .map(|m| m.title.clone())
                    .unwrap_or_default(),
                name: person_name(store, &step.person).to_string(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn person_name<'a>(store: &'a GraphStore, id: &PersonId) -> &'a str {
    store
        .person(id)
        .map(|p| p.name.as_str())
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::{Movie, MovieId, Person};
    use std::collections::HashSet;

    fn two_hop_store() -> (GraphStore, PersonId, Vec<Step>) {
        let mut store = GraphStore::new();
        for (id, name) in [("1", "Kevin Bacon"), ("2", "Tom Hanks"), ("3", "Robin Wright")] {
            store.insert_person(Person {
                id: PersonId::new(id),
                name: name.to_string(),
                birth: None,
                movies: HashSet::new(),
            });
        }
        for (id, title) in [("10", "Apollo 13"), ("11", "Forrest Gump")] {
            store.insert_movie(Movie {
                id: MovieId::new(id),
                title: title.to_string(),
                year: "1995".to_string(),
                stars: HashSet::new(),
            });
        }
        let steps = vec![
            Step::new(MovieId::new("10"), PersonId::new("2")),
            Step::new(MovieId::new("11"), PersonId::new("3")),
        ];
        (store, PersonId::new("1"), steps)
    }

    #[test]
    fn trace_prepends_the_source() {
        let (store, source, steps) = two_hop_store();
        let trace = render_trace(&store, &source, &steps);
        assert_eq!(
            trace,
            "2 degrees of separation.\n\
             1: Kevin Bacon and Tom Hanks starred in Apollo 13\n\
             2: Tom Hanks and Robin Wright starred in Forrest Gump\n"
        );
    }

    #[test]
    fn degree_zero_renders_header_only() {
        let (store, source, _) = two_hop_store();
        let trace = render_trace(&store, &source, &[]);
        assert_eq!(trace, "0 degrees of separation.\n");
    }

    #[test]
    fn json_report_carries_ids_and_names() {
        let (store, _, steps) = two_hop_store();
        let json = render_json(&store, &steps).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["degrees"], 2);
        assert_eq!(value["steps"][0]["movie"], "10");
        assert_eq!(value["steps"][0]["title"], "Apollo 13");
        assert_eq!(value["steps"][1]["name"], "Robin Wright");
    }
}
