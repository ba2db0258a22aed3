//! Resolving a human-supplied name to a unique person id.
//!
//! Disambiguation is a caller capability: the search never sees an
//! unresolved name, and the chooser only ever picks from the candidate set.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use protocol::{Person, PersonId};
use store::GraphStore;

/// Resolve `name` to a single person id.
///
/// Zero candidates yields `Ok(None)`. A unique candidate is returned
/// directly. An ambiguous name is delegated to `chooser`, which may
/// decline; a choice outside the candidate set is rejected.
pub fn resolve_person<F>(store: &GraphStore, name: &str, chooser: F) -> Result<Option<PersonId>>
where
    F: FnOnce(&[&Person]) -> Option<PersonId>,
{
    let ids = store.lookup_person_by_name(name);
    match ids.as_slice() {
        [] => Ok(None),
        [id] => Ok(Some(id.clone())),
        _ => {
            let candidates: Vec<&Person> =
                ids.iter().filter_map(|id| store.person(id)).collect();
            let chosen = chooser(&candidates);
            Ok(chosen.filter(|id| ids.contains(id)))
        }
    }
}

/// Interactive chooser: list the candidates and read the intended id from
/// stdin. A read failure or an id outside the listing declines.
pub fn prompt_for_person(candidates: &[&Person]) -> Option<PersonId> {
    let name = candidates.first().map(|p| p.name.as_str()).unwrap_or("");
    println!("Which '{}'?", name);
    for person in candidates {
        println!(
            "ID: {}, Name: {}, Birth: {}",
            person.id,
            person.name,
            person.birth.as_deref().unwrap_or("unknown")
        );
    }
    print!("Intended Person ID: ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    let chosen = PersonId::new(line.trim());
    candidates
        .iter()
        .any(|p| p.id == chosen)
        .then_some(chosen)
}
