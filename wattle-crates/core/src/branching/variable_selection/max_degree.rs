use std::cmp::Reverse;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::graph::VariableId;

/// A [`VariableSelector`] which selects the unassigned variable that is constrained against the
/// largest number of unassigned variables (the degree heuristic).
///
/// Ties are broken in favour of the variable which was registered first.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxDegree;

impl<Var, Value> VariableSelector<Var, Value> for MaxDegree {
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, Var, Value>,
    ) -> Option<VariableId> {
        // `min_by_key` keeps the first of several equal elements
        context
            .unassigned_variables()
            .min_by_key(|&variable| Reverse(context.num_unassigned_neighbors(variable)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::create_path_for_testing;

    #[test]
    fn selects_the_variable_with_most_unassigned_neighbors() {
        // x0 - x1 - x2 - x3: x1 and x2 both have two neighbours, x1 was registered first
        let (graph, mut assignment) = create_path_for_testing(4);
        let mut strategy = MaxDegree;

        {
            let context = SelectionContext::new(&graph, &assignment);
            assert_eq!(strategy.select_variable(&context), Some(VariableId::new(1)));
        }

        // With x1 assigned, x2 and x3 both have one unassigned neighbour left
        let _ = assignment.assign(VariableId::new(1), 0);
        let context = SelectionContext::new(&graph, &assignment);
        assert_eq!(strategy.select_variable(&context), Some(VariableId::new(2)));
    }

    #[test]
    fn returns_none_when_everything_is_assigned() {
        let (graph, mut assignment) = create_path_for_testing(2);
        let _ = assignment.assign(VariableId::new(0), 0);
        let _ = assignment.assign(VariableId::new(1), 1);

        let context = SelectionContext::new(&graph, &assignment);
        assert_eq!(MaxDegree.select_variable(&context), None);
    }
}
