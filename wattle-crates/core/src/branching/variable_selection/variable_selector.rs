#[cfg(doc)]
use crate::branching::variable_selection::InputOrder;
use crate::branching::SelectionContext;
use crate::graph::VariableId;
#[cfg(doc)]
use crate::BacktrackingSolver;

/// A trait containing the interface for [`VariableSelector`]s, specifying the appropriate hooks
/// into the [`BacktrackingSolver`] and the method required for selecting variables.
pub trait VariableSelector<Var, Value> {
    /// Determines which variable to select next if there are any left to branch on.
    ///
    /// Should only return [`None`] when all variables of the graph have been assigned. Otherwise
    /// it should return an unassigned variable to branch on next.
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, Var, Value>,
    ) -> Option<VariableId>;

    /// A function which is called whenever a variable loses its value during backtracking, i.e.
    /// when every value of its domain has been tried.
    fn on_unassign(&mut self, _variable: VariableId) {}
}

impl<Var, Value, Selector: VariableSelector<Var, Value> + ?Sized> VariableSelector<Var, Value>
    for Box<Selector>
{
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, Var, Value>,
    ) -> Option<VariableId> {
        (**self).select_variable(context)
    }

    fn on_unassign(&mut self, variable: VariableId) {
        (**self).on_unassign(variable)
    }
}

impl<Var, Value, Selector: VariableSelector<Var, Value> + ?Sized> VariableSelector<Var, Value>
    for &mut Selector
{
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, Var, Value>,
    ) -> Option<VariableId> {
        (**self).select_variable(context)
    }

    fn on_unassign(&mut self, variable: VariableId) {
        (**self).on_unassign(variable)
    }
}

/// A [`VariableSelector`] whose concrete strategy is chosen at runtime.
pub type DynamicSelector<Var, Value> = Box<dyn VariableSelector<Var, Value>>;
