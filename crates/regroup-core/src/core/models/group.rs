use super::student::StudentId;

/// A capacity-bounded collection of students within one candidate partition.
///
/// Capacity is fixed at creation and never changes during a run; membership
/// order carries no meaning.
#[derive(Debug, Clone)]
pub struct Group {
    members: Vec<StudentId>,
    capacity: usize,
}

impl Group {
    pub fn new(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds the student if the group still has room, reporting whether the
    /// student was accepted.
    pub fn try_add(&mut self, student: StudentId) -> bool {
        if self.members.len() < self.capacity {
            self.members.push(student);
            true
        } else {
            false
        }
    }

    pub fn members(&self) -> &[StudentId] {
        &self.members
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }
}
