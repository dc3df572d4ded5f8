//! Store construction, indexes and lookups.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use neodb_model::{canonical_key, ApproachEvent, Body, BodyId, EventId};
use tracing::{debug, warn};

use crate::filter::BoxedFilter;
use crate::view::{Approach, Query};

/// In-memory database of near-Earth objects and their close approaches.
///
/// Construction links each [`ApproachEvent`] to the [`Body`] sharing its
/// designation and records the event on that body, in event order. Events
/// with no matching body are kept but stay unlinked.
///
/// Duplicate designations resolve first-seen-wins: later bodies with an
/// already indexed designation stay in [`Store::bodies`] but are not indexed
/// and never receive links. Their count is available through
/// [`Store::discarded_duplicates`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    bodies: Vec<Body>,
    events: Vec<ApproachEvent>,
    by_designation: HashMap<String, BodyId>,
    by_name: HashMap<String, BodyId>,
    discarded_duplicates: usize,
    unlinked_events: usize,
}

impl Store {
    /// Builds the store, its indexes and all body/event links in O(n + m).
    pub fn new(mut bodies: Vec<Body>, mut events: Vec<ApproachEvent>) -> Self {
        let mut by_designation = HashMap::with_capacity(bodies.len());
        let mut by_name = HashMap::new();
        let mut discarded_duplicates = 0;

        for (index, body) in bodies.iter_mut().enumerate() {
            body.clear_events();
            let id = BodyId::new(index);

            match by_designation.entry(body.designation.as_str().to_string()) {
                Entry::Occupied(_) => {
                    debug!(designation = %body.designation, "ignoring duplicate designation");
                    discarded_duplicates += 1;
                    continue;
                }
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
            }

            // Names are not unique in the source data; last write wins.
            if let Some(name) = body.name.as_deref() {
                let key = normalize_name(name);
                if !key.is_empty() {
                    by_name.insert(key, id);
                }
            }
        }

        let mut unlinked_events = 0;
        for (index, event) in events.iter_mut().enumerate() {
            match by_designation.get(event.body_designation.as_str()) {
                Some(&body_id) => {
                    event.set_body(Some(body_id));
                    bodies[body_id.index()].attach_event(EventId::new(index));
                }
                None => {
                    event.set_body(None);
                    unlinked_events += 1;
                }
            }
        }

        if discarded_duplicates > 0 {
            warn!(
                count = discarded_duplicates,
                "discarded bodies with duplicate designations"
            );
        }
        debug!(
            bodies = bodies.len(),
            events = events.len(),
            unlinked = unlinked_events,
            "store built"
        );

        Self {
            bodies,
            events,
            by_designation,
            by_name,
            discarded_duplicates,
            unlinked_events,
        }
    }

    /// Finds a body by primary designation, ignoring case.
    pub fn find_by_designation(&self, designation: &str) -> Option<&Body> {
        self.by_designation
            .get(&canonical_key(designation))
            .map(|id| &self.bodies[id.index()])
    }

    /// Finds a body by name, ignoring case.
    ///
    /// Names are compared in single-word title case (`halley` matches
    /// `Halley`). Unnamed bodies are never returned.
    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.by_name
            .get(&normalize_name(name))
            .map(|id| &self.bodies[id.index()])
    }

    /// Streams close approaches matching every filter, in insertion order.
    ///
    /// An empty filter slice yields every approach. Each call starts a fresh
    /// scan over the same events.
    pub fn query<'s, 'f>(&'s self, filters: &'f [BoxedFilter]) -> Query<'s, 'f> {
        Query::new(self, filters)
    }

    /// Returns every body, in input order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Returns every close approach, in input order.
    pub fn events(&self) -> &[ApproachEvent] {
        &self.events
    }

    /// Returns the body at `id`.
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    /// Returns the close approach at `id`.
    pub fn event(&self, id: EventId) -> Option<&ApproachEvent> {
        self.events.get(id.index())
    }

    /// Returns a view of the close approach at `id` joined with its body.
    pub fn approach(&self, id: EventId) -> Option<Approach<'_>> {
        let event = self.event(id)?;
        let body = event.body().and_then(|body_id| self.body(body_id));
        Some(Approach::new(id, event, body))
    }

    /// Iterates the close approaches linked to `body`, in event order.
    pub fn approaches_of<'s>(&'s self, body: &'s Body) -> impl Iterator<Item = Approach<'s>> + 's {
        body.events().iter().filter_map(move |&id| self.approach(id))
    }

    /// Number of bodies ignored because their designation was already indexed.
    pub fn discarded_duplicates(&self) -> usize {
        self.discarded_duplicates
    }

    /// Number of close approaches whose designation matched no body.
    pub fn unlinked_events(&self) -> usize {
        self.unlinked_events
    }
}

/// Title-cases a name as a single word: first character upper, rest lower.
fn normalize_name(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
