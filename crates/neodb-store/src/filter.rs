//! Close-approach filtering API.

use chrono::NaiveDate;

use crate::view::Approach;

/// Predicate over a close approach and its linked body.
///
/// Filters that read body attributes must treat an unlinked approach as
/// not matching.
pub trait ApproachFilter {
    /// Returns true if the approach matches the filter criteria.
    fn matches(&self, approach: &Approach<'_>) -> bool;
}

/// Owned, thread-safe filter as accepted by [`Store::query`](crate::Store::query).
pub type BoxedFilter = Box<dyn ApproachFilter + Send + Sync>;

impl<F> ApproachFilter for F
where
    F: Fn(&Approach<'_>) -> bool,
{
    fn matches(&self, approach: &Approach<'_>) -> bool {
        self(approach)
    }
}

/// Boxes a closure as a filter.
pub fn predicate<F>(f: F) -> BoxedFilter
where
    F: Fn(&Approach<'_>) -> bool + Send + Sync + 'static,
{
    Box::new(f)
}

/// How an attribute is compared against a filter's reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Attribute equals the reference value.
    Eq,
    /// Attribute is greater than or equal to the reference value.
    AtLeast,
    /// Attribute is less than or equal to the reference value.
    AtMost,
}

impl Comparison {
    /// Compares `actual` against `reference`. Any comparison involving NaN is false.
    pub fn evaluate<T: PartialOrd>(self, actual: T, reference: T) -> bool {
        match self {
            Comparison::Eq => actual == reference,
            Comparison::AtLeast => actual >= reference,
            Comparison::AtMost => actual <= reference,
        }
    }
}

/// Filter on the calendar date of the approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    /// Comparison to apply.
    pub op: Comparison,
    /// Reference date.
    pub date: NaiveDate,
}

impl ApproachFilter for DateFilter {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        self.op.evaluate(approach.time.date(), self.date)
    }
}

/// Filter on nominal approach distance (au).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFilter {
    /// Comparison to apply.
    pub op: Comparison,
    /// Reference distance.
    pub distance_au: f64,
}

impl ApproachFilter for DistanceFilter {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        self.op.evaluate(approach.distance_au, self.distance_au)
    }
}

/// Filter on relative approach velocity (km/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityFilter {
    /// Comparison to apply.
    pub op: Comparison,
    /// Reference velocity.
    pub velocity_km_s: f64,
}

impl ApproachFilter for VelocityFilter {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        self.op.evaluate(approach.velocity_km_s, self.velocity_km_s)
    }
}

/// Filter on the diameter of the linked body (km).
///
/// Unlinked approaches and bodies of unknown diameter never match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiameterFilter {
    /// Comparison to apply.
    pub op: Comparison,
    /// Reference diameter.
    pub diameter_km: f64,
}

impl ApproachFilter for DiameterFilter {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        approach
            .body()
            .and_then(|body| body.diameter())
            .map(|diameter| self.op.evaluate(diameter, self.diameter_km))
            .unwrap_or(false)
    }
}

/// Filter on the hazard flag of the linked body.
///
/// Unlinked approaches never match, whichever flag is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardousFilter {
    /// Required hazard flag.
    pub hazardous: bool,
}

impl ApproachFilter for HazardousFilter {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        approach
            .body()
            .map(|body| body.is_hazardous == self.hazardous)
            .unwrap_or(false)
    }
}

/// Composite filter: all filters must match (AND).
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<BoxedFilter>,
}

impl ApproachFilter for AndFilter {
    fn matches(&self, approach: &Approach<'_>) -> bool {
        self.filters.iter().all(|f| f.as_ref().matches(approach))
    }
}

/// Caps a stream at `n` items. `None` and `Some(0)` leave it unlimited.
pub fn limit<I: Iterator>(iter: I, n: Option<usize>) -> std::iter::Take<I> {
    match n {
        Some(n) if n > 0 => iter.take(n),
        _ => iter.take(usize::MAX),
    }
}
