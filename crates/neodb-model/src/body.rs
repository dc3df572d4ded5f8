use std::fmt;

use serde::{Serialize, Serializer};

use crate::identifiers::{Designation, EventId};

/// A near-Earth object.
///
/// `events` holds identifiers of the close approaches linked to this body.
/// It starts empty and is filled by the store during linking; the body does
/// not own the events themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    /// Primary designation (unique key).
    pub designation: Designation,
    /// IAU name, if the body has one. Never `Some("")`.
    #[serde(serialize_with = "name_or_empty")]
    pub name: Option<String>,
    /// Diameter in kilometers; NaN when unknown.
    pub diameter_km: f64,
    /// Whether the body is flagged as potentially hazardous.
    #[serde(rename = "potentially_hazardous")]
    pub is_hazardous: bool,
    #[serde(skip)]
    events: Vec<EventId>,
}

impl Body {
    /// Creates an unlinked body. Blank names are normalized to `None`.
    pub fn new(
        designation: Designation,
        name: Option<String>,
        diameter_km: f64,
        is_hazardous: bool,
    ) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self {
            designation,
            name,
            diameter_km,
            is_hazardous,
            events: Vec::new(),
        }
    }

    /// Returns `designation (name)`, or just the designation for unnamed bodies.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.to_string(),
        }
    }

    /// Returns the diameter when it is known.
    pub fn diameter(&self) -> Option<f64> {
        (!self.diameter_km.is_nan()).then_some(self.diameter_km)
    }

    /// Returns the linked close approaches, in event order.
    pub fn events(&self) -> &[EventId] {
        &self.events
    }

    /// Appends a linked close approach. Called by the store during linking.
    #[doc(hidden)]
    pub fn attach_event(&mut self, event: EventId) {
        self.events.push(event);
    }

    /// Drops all linked close approaches.
    #[doc(hidden)]
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.is_hazardous { "is" } else { "is not" };
        match self.diameter() {
            Some(diameter) => write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous",
                self.fullname(),
                diameter,
                hazard
            ),
            None => write!(
                f,
                "NEO {} has an unknown diameter and {} potentially hazardous",
                self.fullname(),
                hazard
            ),
        }
    }
}

fn name_or_empty<S: Serializer>(name: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(name.as_deref().unwrap_or(""))
}
