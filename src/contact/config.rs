use crate::float_types::Real;
use crate::mesh::vertex_group::GroupMode;

/// Settings for one contact run.
///
/// The defaults are a sample size of 3, a group called `contact`, full weight
/// and [`GroupMode::Add`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    /// How many of the closest pairs define the distance threshold.
    pub sample_size: usize,
    /// Name of the group created on both objects.
    pub group_name: String,
    /// Weight the matched vertices are recorded with.
    pub weight: Real,
    pub mode: GroupMode,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            sample_size: 3,
            group_name: "contact".to_string(),
            weight: 1.0,
            mode: GroupMode::Add,
        }
    }
}

impl ContactConfig {
    pub fn new(sample_size: usize) -> Self {
        ContactConfig {
            sample_size,
            ..Default::default()
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_group_name(mut self, name: impl Into<String>) -> Self {
        self.group_name = name.into();
        self
    }

    pub fn with_weight(mut self, weight: Real) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_mode(mut self, mode: GroupMode) -> Self {
        self.mode = mode;
        self
    }
}
