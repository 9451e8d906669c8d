use super::student::{Student, StudentId};
use slotmap::SlotMap;
use std::collections::HashMap;

/// Deduplicating registry of every student encountered while scanning a roster.
///
/// Names are unique within a run: resolving the same name twice yields the
/// same [`StudentId`], so a student appearing as both a row and a column of
/// the relationship grid is a single entity with a single position. There is
/// no removal; the registry lives exactly as long as one optimization run.
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: SlotMap<StudentId, Student>,
    by_name: HashMap<String, StudentId>,
    order: Vec<StudentId>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of the student with this name, registering a new
    /// student with the next unused position if the name is unseen.
    pub fn resolve(&mut self, name: &str) -> StudentId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let position = self.order.len();
        let id = self.students.insert(Student::new(name, position));
        self.by_name.insert(name.to_string(), id);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    /// The student's matrix position. Panics only on a foreign id, which
    /// cannot be produced through this registry's API.
    pub fn position(&self, id: StudentId) -> usize {
        self.students[id].position()
    }

    pub fn name(&self, id: StudentId) -> &str {
        self.students[id].name()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates students in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = StudentId> + '_ {
        self.order.iter().copied()
    }
}
