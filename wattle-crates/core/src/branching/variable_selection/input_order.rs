use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::graph::VariableId;

/// A [`VariableSelector`] which selects the first unassigned variable given an order.
///
/// By default the order is the registration order of the graph. When constructed with
/// [`InputOrder::new`], the provided variables are considered first; any variable which is not in
/// the provided list is considered afterwards, in registration order.
#[derive(Debug, Default, Clone)]
pub struct InputOrder {
    variables: Vec<VariableId>,
}

impl InputOrder {
    pub fn new(variables: &[VariableId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl<Var, Value> VariableSelector<Var, Value> for InputOrder {
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, Var, Value>,
    ) -> Option<VariableId> {
        self.variables
            .iter()
            .copied()
            .find(|&variable| !context.is_assigned(variable))
            .or_else(|| context.unassigned_variables().next())
    }
}
