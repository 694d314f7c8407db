//! Trailing window of timestamped positions for release velocity estimation.
//!
//! Samples arrive in time order, so eviction only ever pops from the head.
//! The estimate is the average velocity between the oldest and the newest
//! sample still inside the window, which smooths out jitter in the last
//! few moves before release.

use floatchat_core::{Point, Velocity};
use std::collections::VecDeque;

/// Typical number of moves inside one window at 60-120 Hz input rates.
const INITIAL_CAPACITY: usize = 16;

/// A position recorded at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub time_ms: u64,
    pub position: Point,
}

#[derive(Clone, Debug)]
pub struct SampleBuffer {
    samples: VecDeque<PointerSample>,
    window_ms: u64,
}

impl SampleBuffer {
    pub fn new(window_ms: u64) -> Self {
        Self {
            samples: VecDeque::with_capacity(INITIAL_CAPACITY),
            window_ms,
        }
    }

    /// Appends a sample, then evicts every sample strictly older than the
    /// window measured back from `time_ms`.
    pub fn push(&mut self, time_ms: u64, position: Point) {
        self.samples.push_back(PointerSample { time_ms, position });
        let cutoff = time_ms.saturating_sub(self.window_ms);
        while self
            .samples
            .front()
            .is_some_and(|sample| sample.time_ms < cutoff)
        {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&PointerSample> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&PointerSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointerSample> {
        self.samples.iter()
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Velocity in px/ms between the oldest and newest buffered samples.
    ///
    /// Returns `None` with fewer than two samples. The elapsed time is
    /// floored at one millisecond so bursts stamped with the same time do
    /// not divide by zero.
    pub fn release_velocity(&self) -> Option<Velocity> {
        if self.samples.len() < 2 {
            return None;
        }
        let first = self.samples.front()?;
        let last = self.samples.back()?;
        let dt = last.time_ms.saturating_sub(first.time_ms).max(1) as f32;
        Some(Velocity::new(
            (last.position.x - first.position.x) / dt,
            (last.position.y - first.position.y) / dt,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_sample_have_no_velocity() {
        let mut buffer = SampleBuffer::new(120);
        assert_eq!(buffer.release_velocity(), None);
        buffer.push(0, Point::new(10.0, 10.0));
        assert_eq!(buffer.release_velocity(), None);
    }

    #[test]
    fn velocity_from_oldest_and_newest() {
        let mut buffer = SampleBuffer::new(120);
        buffer.push(0, Point::new(0.0, 0.0));
        buffer.push(100, Point::new(50.0, 0.0));

        let velocity = buffer.release_velocity().expect("two samples");
        assert_eq!(velocity.vx, 0.5);
        assert_eq!(velocity.vy, 0.0);
    }

    #[test]
    fn samples_older_than_window_are_evicted() {
        let mut buffer = SampleBuffer::new(120);
        buffer.push(0, Point::new(0.0, 0.0));
        buffer.push(100, Point::new(10.0, 0.0));
        buffer.push(200, Point::new(20.0, 0.0));

        // cutoff 80: the t=0 sample is gone, t=100 stays.
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.first().map(|s| s.time_ms), Some(100));
    }

    #[test]
    fn sample_exactly_at_cutoff_is_kept() {
        let mut buffer = SampleBuffer::new(120);
        buffer.push(10, Point::ZERO);
        buffer.push(130, Point::new(12.0, 0.0));

        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn same_timestamp_burst_floors_elapsed_time() {
        let mut buffer = SampleBuffer::new(120);
        buffer.push(50, Point::new(0.0, 0.0));
        buffer.push(50, Point::new(3.0, 4.0));

        let velocity = buffer.release_velocity().expect("two samples");
        assert_eq!(velocity, Velocity::new(3.0, 4.0));
    }

    #[test]
    fn long_pause_leaves_only_latest_sample() {
        let mut buffer = SampleBuffer::new(120);
        buffer.push(0, Point::ZERO);
        buffer.push(10, Point::new(5.0, 0.0));
        buffer.push(1_000, Point::new(5.0, 0.0));

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.release_velocity(), None);
    }
}
