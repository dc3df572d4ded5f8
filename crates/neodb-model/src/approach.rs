use chrono::NaiveDateTime;

use crate::identifiers::{BodyId, Designation};
use crate::time::datetime_to_str;

/// A close approach of a near-Earth object to Earth.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachEvent {
    /// Designation of the approaching body (foreign key into the body catalog).
    pub body_designation: Designation,
    /// Time of closest approach, naive and interpreted as UTC.
    pub time: NaiveDateTime,
    /// Nominal approach distance in astronomical units.
    pub distance_au: f64,
    /// Velocity relative to Earth in km/s.
    pub velocity_km_s: f64,
    body: Option<BodyId>,
}

impl ApproachEvent {
    /// Creates an unlinked close approach.
    pub fn new(
        body_designation: Designation,
        time: NaiveDateTime,
        distance_au: f64,
        velocity_km_s: f64,
    ) -> Self {
        Self {
            body_designation,
            time,
            distance_au,
            velocity_km_s,
            body: None,
        }
    }

    /// Returns the linked body, if linking resolved one.
    pub fn body(&self) -> Option<BodyId> {
        self.body
    }

    /// Sets or clears the linked body. Called by the store during linking.
    #[doc(hidden)]
    pub fn set_body(&mut self, body: Option<BodyId>) {
        self.body = body;
    }

    /// Returns the approach time formatted for display.
    pub fn time_str(&self) -> String {
        datetime_to_str(&self.time)
    }
}
