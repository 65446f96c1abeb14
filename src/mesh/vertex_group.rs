//! Named, weighted vertex groups, the way contact results are recorded on a mesh.

use crate::float_types::Real;
use hashbrown::HashMap;

/// How [`VertexGroup::add`] combines a new weight with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    /// Overwrite the weight.
    Replace,
    /// Add to the weight, saturating at 1.0.
    #[default]
    Add,
    /// Subtract from the weight; the vertex leaves the group at 0.0 or below.
    Subtract,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexGroup {
    pub name: String,
    weights: HashMap<usize, Real>,
}

impl VertexGroup {
    pub fn new(name: impl Into<String>) -> Self {
        VertexGroup {
            name: name.into(),
            weights: HashMap::new(),
        }
    }

    /// Assign `weight` (clamped to `[0, 1]`) to every vertex in `indices`.
    pub fn add(&mut self, indices: &[usize], weight: Real, mode: GroupMode) {
        let weight = weight.clamp(0.0, 1.0);
        for &index in indices {
            match mode {
                GroupMode::Replace => {
                    self.weights.insert(index, weight);
                },
                GroupMode::Add => {
                    let w = self.weights.entry(index).or_insert(0.0);
                    *w = (*w + weight).min(1.0);
                },
                GroupMode::Subtract => {
                    if let Some(w) = self.weights.get_mut(&index) {
                        *w -= weight;
                        if *w <= 0.0 {
                            self.weights.remove(&index);
                        }
                    }
                },
            }
        }
    }

    /// Drop vertices from the group.
    pub fn remove(&mut self, indices: &[usize]) {
        for index in indices {
            self.weights.remove(index);
        }
    }

    pub fn weight(&self, index: usize) -> Option<Real> {
        self.weights.get(&index).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.weights.contains_key(&index)
    }

    /// Member vertex indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.weights.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// First of `name`, `name.001`, `name.002`, … that is not taken yet.
pub(crate) fn unique_group_name(groups: &[VertexGroup], name: &str) -> String {
    let taken = |candidate: &str| groups.iter().any(|g| g.name == candidate);
    if !taken(name) {
        return name.to_string();
    }
    (1..)
        .map(|n| format!("{name}.{n:03}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| name.to_string())
}
