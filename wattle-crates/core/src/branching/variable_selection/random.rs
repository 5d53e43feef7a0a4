use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::graph::VariableId;

/// A [`VariableSelector`] which selects an unassigned variable uniformly at random.
///
/// The generator is seeded, so two selectors created with the same seed make the same choices on
/// the same graph.
#[derive(Debug, Clone)]
pub struct RandomOrder {
    random_generator: SmallRng,
}

impl RandomOrder {
    pub fn new(seed: u64) -> Self {
        RandomOrder {
            random_generator: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<Var, Value> VariableSelector<Var, Value> for RandomOrder {
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, Var, Value>,
    ) -> Option<VariableId> {
        let unassigned = context.unassigned_variables().collect::<Vec<_>>();
        if unassigned.is_empty() {
            return None;
        }

        let index = self.random_generator.gen_range(0..unassigned.len());
        Some(unassigned[index])
    }
}
