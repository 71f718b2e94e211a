//! Trajectory - the evolution of one run
//!
//! - Every point belongs to the trajectory's space
//! - Points keep the order they were appended in
//! - Append is the only mutation: no removal, reordering or reset
//! - A failed append leaves the trajectory unchanged

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{TrajectoryError, TrajectoryResult};
use crate::observability::{log_event_with_fields, Event};
use crate::point::Point;
use crate::space::{same_space, Space};

/// Ordered, append-only sequence of points sharing one space.
///
/// Owns its points; shares the space.
///
/// A clone is a snapshot of the same run: it keeps the run id and start
/// time, and grows independently of the original afterwards.
#[derive(Debug, Clone)]
pub struct Trajectory {
    space: Arc<Space>,
    run_id: Uuid,
    started_at: DateTime<Utc>,
    points: Vec<Point>,
}

impl Trajectory {
    /// Creates an empty trajectory with a fresh run id.
    pub fn new(space: Arc<Space>) -> Self {
        Self::with_run_id(space, Uuid::new_v4())
    }

    /// Creates an empty trajectory for a known run.
    pub fn with_run_id(space: Arc<Space>, run_id: Uuid) -> Self {
        let started_at = Utc::now();
        let run = run_id.to_string();
        let started = started_at.to_rfc3339();
        log_event_with_fields(
            Event::TrajectoryStarted,
            &[
                ("run", run.as_str()),
                ("space", space.display_name()),
                ("started_at", started.as_str()),
            ],
        );

        Self {
            space,
            run_id,
            started_at,
            points: Vec::new(),
        }
    }

    /// Returns the space every point must belong to
    #[inline]
    pub fn space(&self) -> &Arc<Space> {
        &self.space
    }

    #[inline]
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Returns when the trajectory was created (UTC)
    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Appends a point at the end.
    ///
    /// # Errors
    ///
    /// `SpaceMismatch` if the point belongs to another space. The
    /// trajectory is unchanged in that case.
    pub fn append(&mut self, point: Point) -> TrajectoryResult<()> {
        self.check(&point)?;
        self.points.push(point);

        let len = self.points.len().to_string();
        log_event_with_fields(
            Event::TrajectoryAppended,
            &[("len", len.as_str()), ("space", self.space.display_name())],
        );
        Ok(())
    }

    /// Appends a batch of points: all of them, or none if any is rejected.
    ///
    /// Returns the number of points appended.
    pub fn append_all<I>(&mut self, points: I) -> TrajectoryResult<usize>
    where
        I: IntoIterator<Item = Point>,
    {
        let batch: Vec<Point> = points.into_iter().collect();
        for point in &batch {
            self.check(point)?;
        }

        let appended = batch.len();
        if appended == 0 {
            return Ok(0);
        }
        self.points.extend(batch);

        let len = self.points.len().to_string();
        let count = appended.to_string();
        log_event_with_fields(
            Event::TrajectoryAppended,
            &[
                ("appended", count.as_str()),
                ("len", len.as_str()),
                ("space", self.space.display_name()),
            ],
        );
        Ok(appended)
    }

    fn check(&self, point: &Point) -> TrajectoryResult<()> {
        if same_space(&self.space, point.space()) {
            return Ok(());
        }

        let run = self.run_id.to_string();
        log_event_with_fields(
            Event::TrajectoryRejected,
            &[
                ("actual", point.space().display_name()),
                ("expected", self.space.display_name()),
                ("run", run.as_str()),
            ],
        );
        Err(TrajectoryError::SpaceMismatch {
            expected: self.space.display_name().to_string(),
            actual: point.space().display_name().to_string(),
        })
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true before the first append.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points in append order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Returns the most recent point, the current state of the run.
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trajectory has points:")?;
        for point in &self.points {
            writeln!(f, "{}", point)?;
        }
        Ok(())
    }
}
