//! Filter construction from user criteria.

use chrono::NaiveDate;

use crate::filter::{
    BoxedFilter, Comparison, DateFilter, DiameterFilter, DistanceFilter, HazardousFilter,
    VelocityFilter,
};

/// User-supplied query bounds. Every field is optional; unset fields add no filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Approach happens on this date.
    pub date: Option<NaiveDate>,
    /// Approach happens on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Approach happens on or before this date.
    pub end_date: Option<NaiveDate>,
    /// Minimum nominal approach distance (au).
    pub distance_min: Option<f64>,
    /// Maximum nominal approach distance (au).
    pub distance_max: Option<f64>,
    /// Minimum relative velocity (km/s).
    pub velocity_min: Option<f64>,
    /// Maximum relative velocity (km/s).
    pub velocity_max: Option<f64>,
    /// Minimum body diameter (km).
    pub diameter_min: Option<f64>,
    /// Maximum body diameter (km).
    pub diameter_max: Option<f64>,
    /// Required hazard flag of the body.
    pub hazardous: Option<bool>,
}

impl Criteria {
    /// Returns true if no bound is set.
    pub fn is_empty(&self) -> bool {
        *self == Criteria::default()
    }

    /// Builds one filter per set bound, in field order.
    pub fn into_filters(self) -> Vec<BoxedFilter> {
        let mut filters: Vec<BoxedFilter> = Vec::new();

        let dates = [
            (self.date, Comparison::Eq),
            (self.start_date, Comparison::AtLeast),
            (self.end_date, Comparison::AtMost),
        ];
        for (date, op) in dates {
            if let Some(date) = date {
                filters.push(Box::new(DateFilter { op, date }));
            }
        }

        let distances = [
            (self.distance_min, Comparison::AtLeast),
            (self.distance_max, Comparison::AtMost),
        ];
        for (distance_au, op) in distances {
            if let Some(distance_au) = distance_au {
                filters.push(Box::new(DistanceFilter { op, distance_au }));
            }
        }

        let velocities = [
            (self.velocity_min, Comparison::AtLeast),
            (self.velocity_max, Comparison::AtMost),
        ];
        for (velocity_km_s, op) in velocities {
            if let Some(velocity_km_s) = velocity_km_s {
                filters.push(Box::new(VelocityFilter { op, velocity_km_s }));
            }
        }

        let diameters = [
            (self.diameter_min, Comparison::AtLeast),
            (self.diameter_max, Comparison::AtMost),
        ];
        for (diameter_km, op) in diameters {
            if let Some(diameter_km) = diameter_km {
                filters.push(Box::new(DiameterFilter { op, diameter_km }));
            }
        }

        if let Some(hazardous) = self.hazardous {
            filters.push(Box::new(HazardousFilter { hazardous }));
        }

        filters
    }
}
