use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a student owned by a [`StudentRegistry`](super::registry::StudentRegistry).
    pub struct StudentId;
}

/// A student known to one optimization run.
///
/// The `position` is the student's ordinal in registry insertion order and is
/// the index used to address the relationship matrix. It is assigned once,
/// when the name is first resolved, and never moves within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    position: usize,
}

impl Student {
    pub(crate) fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
