use std::fmt::Debug;

use log::debug;
use log::trace;
use log::warn;

use super::SolverStatistics;
use crate::basic_types::SearchCancelled;
use crate::basic_types::Solution;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::graph::VariableId;
use crate::termination::TerminationCondition;
use crate::wattle_assert_advanced;
use crate::wattle_assert_moderate;
use crate::Assignment;
use crate::ConstraintGraph;

/// A choice point of the search: the variable which was branched on and the index of the next
/// value of its domain which has not been tried yet.
#[derive(Debug, Clone, Copy)]
struct Frame {
    variable: VariableId,
    next_value_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchStatus {
    NotStarted,
    InProgress,
    Finished,
}

/// The state of a depth-first search which can be suspended after every solution.
///
/// The stack holds one [`Frame`] per assigned variable, so the search never goes deeper than the
/// number of variables; every variable on the stack is assigned, except for the top one while its
/// next value is being chosen. Resuming the search undoes the value of the top frame and continues
/// with the next value in domain order.
#[derive(Debug)]
pub(crate) struct Search<'graph, Var, Value> {
    graph: &'graph ConstraintGraph<Var, Value>,
    assignment: Assignment<Value>,
    frames: Vec<Frame>,
    status: SearchStatus,
}

impl<'graph, Var: Debug, Value: Clone + PartialEq + Debug> Search<'graph, Var, Value> {
    pub(crate) fn new(graph: &'graph ConstraintGraph<Var, Value>) -> Self {
        Search {
            graph,
            assignment: Assignment::new(graph.num_variables()),
            frames: Vec::with_capacity(graph.num_variables()),
            status: SearchStatus::NotStarted,
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.status == SearchStatus::Finished
    }

    /// Continues the search until the next solution is found.
    ///
    /// Returns `Ok(None)` once the search space is exhausted; after the search has been cancelled
    /// every subsequent call returns `Ok(None)` as well.
    pub(crate) fn next_solution(
        &mut self,
        selector: &mut impl VariableSelector<Var, Value>,
        termination: &mut impl TerminationCondition,
        statistics: &mut SolverStatistics,
    ) -> Result<Option<Solution<'graph, Var, Value>>, SearchCancelled> {
        match self.status {
            SearchStatus::Finished => return Ok(None),
            SearchStatus::NotStarted => {
                self.status = SearchStatus::InProgress;

                if self.graph.has_empty_domain() {
                    debug!("A variable has an empty domain, the problem is unsatisfiable");
                    self.status = SearchStatus::Finished;
                    return Ok(None);
                }

                if let Some(solution) = self.expand(selector, termination, statistics)? {
                    return Ok(Some(solution));
                }
            }
            SearchStatus::InProgress => {}
        }

        let graph = self.graph;
        loop {
            let Some(frame) = self.frames.last_mut() else {
                debug!("Search space exhausted");
                self.status = SearchStatus::Finished;
                return Ok(None);
            };
            let variable = frame.variable;

            if let Some(previous) = self.assignment.unassign(variable) {
                trace!("Undo {variable} ({:?}) = {previous:?}", graph.name(variable));
            }

            let domain = graph.domain(variable);
            let mut chosen = None;
            while frame.next_value_index < domain.len() {
                let value = &domain[frame.next_value_index];
                frame.next_value_index += 1;

                match graph.first_conflict(variable, value, &self.assignment) {
                    None => {
                        chosen = Some(value);
                        break;
                    }
                    Some(neighbor) => {
                        statistics.num_conflicts += 1;
                        trace!(
                            "Reject {variable} ({:?}) = {value:?}: conflicts with {neighbor} ({:?})",
                            graph.name(variable),
                            graph.name(neighbor),
                        );
                    }
                }
            }

            let Some(value) = chosen else {
                let _ = self.frames.pop();
                statistics.num_backtracks += 1;
                selector.on_unassign(variable);
                trace!(
                    "Backtrack from {variable} ({:?}): no consistent value left",
                    graph.name(variable)
                );
                continue;
            };

            trace!(
                "Assign {variable} ({:?}) = {value:?} at depth {}",
                graph.name(variable),
                self.frames.len()
            );
            let _ = self.assignment.assign(variable, value.clone());
            statistics.num_decisions += 1;
            termination.decision_has_been_made();

            if let Some(solution) = self.expand(selector, termination, statistics)? {
                return Ok(Some(solution));
            }
        }
    }

    /// Handles the node of the current partial assignment: either it is complete and forms a
    /// solution, or a new variable is selected and pushed onto the stack.
    fn expand(
        &mut self,
        selector: &mut impl VariableSelector<Var, Value>,
        termination: &mut impl TerminationCondition,
        statistics: &mut SolverStatistics,
    ) -> Result<Option<Solution<'graph, Var, Value>>, SearchCancelled> {
        if self.assignment.is_complete() {
            wattle_assert_advanced!(
                self.graph.is_satisfied_by(&self.assignment),
                "The search produced an assignment which violates a constraint"
            );
            statistics.num_solutions += 1;
            debug!("Found solution {}", statistics.num_solutions);

            if self.frames.is_empty() {
                // Without variables there is no choice point to resume from
                self.status = SearchStatus::Finished;
            }
            return Ok(Some(Solution::from_assignment(
                self.graph,
                &self.assignment,
            )));
        }

        if termination.should_stop() {
            debug!(
                "Search cancelled with {} of {} variables assigned",
                self.assignment.num_assigned(),
                self.graph.num_variables()
            );
            self.status = SearchStatus::Finished;
            return Err(SearchCancelled);
        }

        let variable = self.select_variable(selector);
        trace!(
            "Branch on {variable} ({:?}) at depth {}",
            self.graph.name(variable),
            self.frames.len()
        );
        self.frames.push(Frame {
            variable,
            next_value_index: 0,
        });
        statistics.max_depth = statistics.max_depth.max(self.frames.len() as u64);
        wattle_assert_moderate!(self.frames.len() <= self.graph.num_variables());

        Ok(None)
    }

    fn select_variable(&self, selector: &mut impl VariableSelector<Var, Value>) -> VariableId {
        let context = SelectionContext::new(self.graph, &self.assignment);
        let selected = selector
            .select_variable(&context)
            .filter(|&variable| !self.assignment.is_assigned(variable));

        if let Some(variable) = selected {
            return variable;
        }

        warn!("The variable selector did not select an unassigned variable, using input order");
        match context.unassigned_variables().next() {
            Some(variable) => variable,
            None => unreachable!("an incomplete assignment has an unassigned variable"),
        }
    }
}
