//! Phosphor trail of recent trajectories
//!
//! Each segment is the interpolated path of one gate. Segments are tagged with
//! the history index of the state they lead to, which keeps undo in step with
//! the trail even after old segments have been evicted or the trail was
//! switched off for a while.

use blochy_core::BlochVector;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Interpolated Bloch vectors of one gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    /// History index of the state this segment ends on
    pub step: usize,
    /// Samples in order, from the state before the gate to the state after
    pub samples: Vec<BlochVector>,
}

impl TrailSegment {
    pub fn new(step: usize, samples: Vec<BlochVector>) -> Self {
        Self { step, samples }
    }

    /// First sample
    pub fn start(&self) -> Option<&BlochVector> {
        self.samples.first()
    }

    /// Last sample
    pub fn end(&self) -> Option<&BlochVector> {
        self.samples.last()
    }
}

/// FIFO of the most recent trail segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhosphorTrail {
    segments: VecDeque<TrailSegment>,
    capacity: usize,
}

impl PhosphorTrail {
    /// Empty trail holding at most `capacity` segments
    pub fn new(capacity: usize) -> Self {
        Self {
            segments: VecDeque::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Change the capacity, evicting the oldest segments if needed
    ///
    /// Returns the number of evicted segments.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        self.capacity = capacity;
        self.evict()
    }

    /// Append a segment, evicting from the front while over capacity
    ///
    /// Returns the number of evicted segments.
    pub fn append_segment(&mut self, segment: TrailSegment) -> usize {
        self.segments.push_back(segment);
        self.evict()
    }

    /// Remove and return the most recent segment
    pub fn pop_segment(&mut self) -> Option<TrailSegment> {
        self.segments.pop_back()
    }

    /// Remove the most recent segment only if it ends on history index `step`
    pub fn pop_segment_for(&mut self, step: usize) -> Option<TrailSegment> {
        match self.segments.back() {
            Some(last) if last.step == step => self.segments.pop_back(),
            _ => None,
        }
    }

    /// Most recent segment
    pub fn last(&self) -> Option<&TrailSegment> {
        self.segments.back()
    }

    /// Segments from oldest to newest
    pub fn segments(&self) -> impl Iterator<Item = &TrailSegment> + '_ {
        self.segments.iter()
    }

    /// Sample lists from oldest to newest, as handed to renderers
    pub fn to_vectors(&self) -> Vec<Vec<BlochVector>> {
        self.segments.iter().map(|s| s.samples.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    fn evict(&mut self) -> usize {
        let mut evicted = 0;
        while self.segments.len() > self.capacity {
            if let Some(old) = self.segments.pop_front() {
                tracing::trace!(step = old.step, "evicted trail segment");
                evicted += 1;
            }
        }
        evicted
    }
}

impl Default for PhosphorTrail {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut trail = PhosphorTrail::new(usize::MAX);
        assert_eq!(trail.capacity(), usize::MAX);
        assert!(trail.is_empty());
        assert_eq!(trail.append_segment(segment(1)), 0);
        assert_eq!(trail.len(), 1);
    }

    fn segment(step: usize) -> TrailSegment {
        TrailSegment::new(step, vec![BlochVector::NORTH; 3])
    }

    #[test]
    fn test_append_and_pop() {
        let mut trail = PhosphorTrail::new(3);
        assert_eq!(trail.append_segment(segment(1)), 0);
        assert_eq!(trail.append_segment(segment(2)), 0);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.pop_segment().map(|s| s.step), Some(2));
        assert_eq!(trail.pop_segment().map(|s| s.step), Some(1));
        assert_eq!(trail.pop_segment(), None);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut trail = PhosphorTrail::new(2);
        trail.append_segment(segment(1));
        trail.append_segment(segment(2));
        assert_eq!(trail.append_segment(segment(3)), 1);
        let steps: Vec<usize> = trail.segments().map(|s| s.step).collect();
        assert_eq!(steps, vec![2, 3]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut trail = PhosphorTrail::new(0);
        assert_eq!(trail.append_segment(segment(1)), 1);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_shrink_capacity() {
        let mut trail = PhosphorTrail::new(5);
        for step in 1..=5 {
            trail.append_segment(segment(step));
        }
        assert_eq!(trail.set_capacity(2), 3);
        assert_eq!(trail.last().map(|s| s.step), Some(5));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_pop_segment_for_matches_step() {
        let mut trail = PhosphorTrail::new(4);
        trail.append_segment(segment(1));
        trail.append_segment(segment(2));

        assert_eq!(trail.pop_segment_for(3), None);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.pop_segment_for(2).map(|s| s.step), Some(2));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_to_vectors() {
        let mut trail = PhosphorTrail::new(4);
        trail.append_segment(TrailSegment::new(1, vec![BlochVector::NORTH]));
        trail.append_segment(TrailSegment::new(2, vec![BlochVector::new(0.0, 0.0, -1.0)]));
        let vectors = trail.to_vectors();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[1][0].w, -1.0);
        assert_eq!(trail.segments().next().and_then(|s| s.start()).map(|v| v.w), Some(1.0));
    }
}
