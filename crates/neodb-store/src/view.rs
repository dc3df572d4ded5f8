//! Borrowed approach views and the query iterator.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use neodb_model::{ApproachEvent, Body, Designation, EventId};

use crate::filter::BoxedFilter;
use crate::store::Store;

/// A close approach joined with its linked body, borrowed from a [`Store`].
///
/// Dereferences to the underlying [`ApproachEvent`].
#[derive(Debug, Clone, Copy)]
pub struct Approach<'s> {
    id: EventId,
    event: &'s ApproachEvent,
    body: Option<&'s Body>,
}

impl<'s> Approach<'s> {
    pub(crate) fn new(id: EventId, event: &'s ApproachEvent, body: Option<&'s Body>) -> Self {
        Self { id, event, body }
    }

    /// Position of the event in the store.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The underlying event record.
    pub fn event(&self) -> &'s ApproachEvent {
        self.event
    }

    /// The linked body, or `None` for an unlinked event.
    pub fn body(&self) -> Option<&'s Body> {
        self.body
    }

    /// Designation of the linked body, falling back to the event's own key.
    pub fn designation(&self) -> &'s Designation {
        match self.body {
            Some(body) => &body.designation,
            None => &self.event.body_designation,
        }
    }
}

impl Deref for Approach<'_> {
    type Target = ApproachEvent;

    fn deref(&self) -> &Self::Target {
        self.event
    }
}

impl fmt::Display for Approach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fullname = match self.body {
            Some(body) => body.fullname(),
            None => self.event.body_designation.to_string(),
        };
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s",
            self.event.time_str(),
            fullname,
            self.event.distance_au,
            self.event.velocity_km_s
        )
    }
}

/// Lazy scan over a store's close approaches.
///
/// Yields, in insertion order, every approach for which all filters match.
/// Dropping the iterator early abandons the scan at no cost.
pub struct Query<'s, 'f> {
    store: &'s Store,
    filters: &'f [BoxedFilter],
    next: usize,
}

impl<'s, 'f> Query<'s, 'f> {
    pub(crate) fn new(store: &'s Store, filters: &'f [BoxedFilter]) -> Self {
        Self {
            store,
            filters,
            next: 0,
        }
    }
}

impl<'s> Iterator for Query<'s, '_> {
    type Item = Approach<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.store.events().len() {
            let id = EventId::new(self.next);
            self.next += 1;

            let Some(approach) = self.store.approach(id) else {
                continue;
            };
            if self.filters.iter().all(|f| f.as_ref().matches(&approach)) {
                return Some(approach);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.events().len().saturating_sub(self.next);
        if self.filters.is_empty() {
            (remaining, Some(remaining))
        } else {
            (0, Some(remaining))
        }
    }
}

impl FusedIterator for Query<'_, '_> {}

impl fmt::Debug for Query<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("filters", &self.filters.len())
            .field("next", &self.next)
            .finish()
    }
}
