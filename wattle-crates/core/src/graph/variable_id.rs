use crate::containers::StorageKey;

/// A stable handle to a variable registered in a [`ConstraintGraph`](crate::ConstraintGraph).
///
/// Ids are handed out in registration order starting at zero; they index the graph's arena of
/// variable records and the slots of an [`Assignment`](crate::Assignment).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct VariableId {
    pub id: u32,
}

impl VariableId {
    pub fn new(id: u32) -> Self {
        VariableId { id }
    }
}

impl StorageKey for VariableId {
    fn index(self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId { id: index as u32 }
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

/// A handle to a binary constraint stored in a [`ConstraintGraph`](crate::ConstraintGraph).
#[derive(Clone, PartialEq, Eq, Copy, Hash, Debug)]
pub struct ConstraintId {
    pub id: u32,
}

impl StorageKey for ConstraintId {
    fn index(self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId { id: index as u32 }
    }
}
