use crate::containers::KeyedVec;
use crate::graph::VariableId;

/// A (possibly partial) mapping from variables to values.
///
/// An unassigned variable holds [`None`]; there is no sentinel value. The assignment is owned by
/// the search which creates it; the [`ConstraintGraph`](crate::ConstraintGraph) it belongs to is
/// never modified while values are assigned and unassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<Value> {
    values: KeyedVec<VariableId, Option<Value>>,
    num_assigned: usize,
}

impl<Value: Clone> Assignment<Value> {
    /// Creates the empty assignment over `num_variables` variables.
    pub fn new(num_variables: usize) -> Self {
        Assignment {
            values: KeyedVec::filled(num_variables, None),
            num_assigned: 0,
        }
    }
}

impl<Value> Assignment<Value> {
    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    /// Returns `true` when every variable holds a value.
    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.values.len()
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.value(variable).is_some()
    }

    /// Returns the value of `variable`, or [`None`] if it is unassigned or unknown to this
    /// assignment.
    pub fn value(&self, variable: VariableId) -> Option<&Value> {
        self.values.get(variable).and_then(Option::as_ref)
    }

    /// Sets `variable` to `value`, returning the value it held before.
    pub fn assign(&mut self, variable: VariableId, value: Value) -> Option<Value> {
        let previous = self.values[variable].replace(value);
        if previous.is_none() {
            self.num_assigned += 1;
        }
        previous
    }

    /// Resets `variable` to unassigned, returning the value it held.
    pub fn unassign(&mut self, variable: VariableId) -> Option<Value> {
        let previous = self.values[variable].take();
        if previous.is_some() {
            self.num_assigned -= 1;
        }
        previous
    }

    /// Iterates over every variable in registration order together with its value, if any.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, Option<&Value>)> {
        self.values
            .key_values()
            .map(|(variable, value)| (variable, value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_and_unassigning_tracks_the_number_of_assigned_variables() {
        let mut assignment = Assignment::new(2);
        let x0 = VariableId::new(0);
        let x1 = VariableId::new(1);

        assert_eq!(assignment.num_assigned(), 0);

        assert_eq!(assignment.assign(x0, 'r'), None);
        assert_eq!(assignment.assign(x0, 'g'), Some('r'));
        assert_eq!(assignment.num_assigned(), 1);
        assert!(!assignment.is_complete());

        let _ = assignment.assign(x1, 'b');
        assert!(assignment.is_complete());

        assert_eq!(assignment.unassign(x0), Some('g'));
        assert_eq!(assignment.unassign(x0), None);
        assert_eq!(assignment.num_assigned(), 1);
        assert!(!assignment.is_assigned(x0));
        assert_eq!(assignment.value(x1), Some(&'b'));
    }

    #[test]
    fn empty_assignment_over_no_variables_is_complete() {
        let assignment = Assignment::<u8>::new(0);

        assert!(assignment.is_complete());
        assert_eq!(assignment.iter().count(), 0);
    }

    #[test]
    fn iteration_reports_unassigned_variables_as_none() {
        let mut assignment = Assignment::new(2);
        let _ = assignment.assign(VariableId::new(1), 5);

        assert_eq!(
            assignment.iter().collect::<Vec<_>>(),
            vec![(VariableId::new(0), None), (VariableId::new(1), Some(&5))]
        );
    }
}
