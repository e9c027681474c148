use serde::{Deserialize, Serialize};

use crate::errors::{LaueError, LaueResult};

/// Inputs and shared scale of one pole figure run.
///
/// `sphere_radius`, `min_scale` and `max_scale` are written back by
/// pole figure generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoleFigureConfiguration {
    /// Euler angles in radians, three per orientation
    pub eulers: Vec<f32>,
    /// Edge length of the square output images
    pub image_dim: usize,
    /// Edge length of the intermediate Lambert square
    pub lambert_dim: usize,
    pub sphere_radius: f32,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Overrides the default family labels, position by position
    pub labels: Vec<String>,
    /// Output position of each family; empty keeps the natural order
    pub order: Vec<usize>,
}

impl PoleFigureConfiguration {
    pub fn new(eulers: Vec<f32>, image_dim: usize, lambert_dim: usize) -> Self {
        PoleFigureConfiguration {
            eulers,
            image_dim,
            lambert_dim,
            sphere_radius: 1.0,
            min_scale: 0.0,
            max_scale: 0.0,
            labels: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Set family labels
    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set output positions of the three families
    pub fn with_order(mut self, order: Vec<usize>) -> Self {
        self.order = order;
        self
    }

    /// Number of complete Euler triples.
    pub fn num_orientations(&self) -> usize {
        self.eulers.len() / 3
    }

    /// Output position of each family. Errors unless `order` is empty or a
    /// permutation of `[0, 1, 2]`.
    pub fn resolve_order(&self) -> LaueResult<[usize; 3]> {
        if self.order.is_empty() {
            return Ok([0, 1, 2]);
        }
        let mut sorted = self.order.clone();
        sorted.sort_unstable();
        if sorted != [0, 1, 2] {
            return Err(LaueError::InvalidPoleFigureOrder(self.order.clone()));
        }
        Ok([self.order[0], self.order[1], self.order[2]])
    }

    /// Label of family `i`, falling back to `default`.
    pub fn label_or<'a>(&'a self, i: usize, default: &'a str) -> &'a str {
        self.labels.get(i).map(String::as_str).unwrap_or(default)
    }
}
