use std::ops::Index;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use crate::scalar::coord::Coordinate;

/// An ordered sequence of coordinates of a single kind.
///
/// The kind is the type parameter, so a sequence can never mix dimensions. The `closed` flag
/// distinguishes a ring from an open path and is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordSequence<C: Coordinate> {
    coords: Vec<C>,
    closed: bool,
}

impl<C: Coordinate> CoordSequence<C> {
    /// Create an empty sequence.
    pub fn new(closed: bool) -> Self {
        Self {
            coords: vec![],
            closed,
        }
    }

    /// Create an empty sequence with room for `capacity` coordinates.
    pub fn with_capacity(capacity: usize, closed: bool) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
            closed,
        }
    }

    /// Create a sequence from existing coordinates.
    pub fn from_coords(coords: Vec<C>, closed: bool) -> Self {
        Self { coords, closed }
    }

    /// Append a coordinate.
    pub fn push(&mut self, coord: C) {
        self.coords.push(coord);
    }

    /// Insert a coordinate at `index`, shifting everything after it.
    pub(crate) fn insert(&mut self, index: usize, coord: C) {
        self.coords.insert(index, coord);
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn coords(&self) -> &[C] {
        &self.coords
    }

    pub fn iter(&self) -> Iter<'_, C> {
        self.coords.iter()
    }

    pub fn first(&self) -> Option<&C> {
        self.coords.first()
    }

    pub fn last(&self) -> Option<&C> {
        self.coords.last()
    }

    pub fn into_inner(self) -> Vec<C> {
        self.coords
    }
}

impl<C: Coordinate> Index<usize> for CoordSequence<C> {
    type Output = C;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl<C: Coordinate> Extend<C> for CoordSequence<C> {
    fn extend<T: IntoIterator<Item = C>>(&mut self, iter: T) {
        self.coords.extend(iter)
    }
}

impl<'a, C: Coordinate> IntoIterator for &'a CoordSequence<C> {
    type Item = &'a C;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}
