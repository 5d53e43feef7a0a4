use super::DynamicSelector;
use super::InputOrder;
use super::MaxDegree;
use super::RandomOrder;

/// The strategy used to pick the next variable to branch on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableOrdering {
    /// Branch on the variables in the order in which they were registered.
    #[default]
    InputOrder,
    /// Branch on the unassigned variable with the most unassigned neighbours first.
    MaxDegree,
    /// Branch on a random unassigned variable; reproducible for a given seed.
    Random,
}

impl VariableOrdering {
    /// Creates the selector implementing this ordering. The seed is only used by
    /// [`VariableOrdering::Random`].
    pub fn into_selector<Var, Value>(self, seed: u64) -> DynamicSelector<Var, Value>
    where
        Var: 'static,
        Value: 'static,
    {
        match self {
            VariableOrdering::InputOrder => Box::new(InputOrder::default()),
            VariableOrdering::MaxDegree => Box::new(MaxDegree),
            VariableOrdering::Random => Box::new(RandomOrder::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::create_path_for_testing;
    use crate::branching::SelectionContext;
    use crate::graph::VariableId;

    #[test]
    fn default_ordering_follows_registration_order() {
        let (graph, assignment) = create_path_for_testing(4);
        let context = SelectionContext::new(&graph, &assignment);

        let mut selector = VariableOrdering::default().into_selector(0);

        assert_eq!(selector.select_variable(&context), Some(VariableId::new(0)));
    }

    #[test]
    fn max_degree_prefers_inner_variables_of_a_path() {
        let (graph, assignment) = create_path_for_testing(4);
        let context = SelectionContext::new(&graph, &assignment);

        let mut selector = VariableOrdering::MaxDegree.into_selector(0);

        assert_eq!(selector.select_variable(&context), Some(VariableId::new(1)));
    }

    #[test]
    fn random_ordering_is_reproducible() {
        let (graph, assignment) = create_path_for_testing(6);
        let context = SelectionContext::new(&graph, &assignment);

        let mut first = VariableOrdering::Random.into_selector(7);
        let mut second = VariableOrdering::Random.into_selector(7);

        for _ in 0..5 {
            assert_eq!(
                first.select_variable(&context),
                second.select_variable(&context)
            );
        }
    }
}
