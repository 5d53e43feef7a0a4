//! Textual output of graphs and (partial) assignments.

use std::fmt::Display;
use std::fmt::Write;

use crate::edge_list::NO_NEIGHBOURS;
use crate::Assignment;
use crate::ConstraintGraph;
use crate::Solution;

/// Printed in place of the value of an unassigned variable.
pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Renders one `VARIABLE = VALUE` line per variable, in registration order.
pub fn render_solution<Var: Display, Value: Display>(
    solution: &Solution<'_, Var, Value>,
) -> String {
    let mut output = String::new();
    for (variable, value) in solution.iter() {
        let _ = writeln!(output, "{variable} = {value}");
    }
    output
}

/// Renders an assignment like [`render_solution`], writing [`NOT_ASSIGNED`] for every variable
/// without a value.
pub fn render_assignment<Var: Display, Value: Display>(
    graph: &ConstraintGraph<Var, Value>,
    assignment: &Assignment<Value>,
) -> String {
    let mut output = String::new();
    for (variable, value) in assignment.iter() {
        let name = graph.name(variable);
        let _ = match value {
            Some(value) => writeln!(output, "{name} = {value}"),
            None => writeln!(output, "{name} = {NOT_ASSIGNED}"),
        };
    }
    output
}

/// Renders the adjacency of the graph in the edge-list format. Reading the output back yields the
/// same regions and borders as long as every name is a valid region name (see
/// [`is_valid_region_name`](crate::edge_list::is_valid_region_name)); otherwise reading it back
/// fails.
pub fn render_adjacency<Var: Display, Value>(graph: &ConstraintGraph<Var, Value>) -> String {
    let mut output = String::new();
    for variable in graph.variable_ids() {
        let _ = write!(output, "{}:", graph.name(variable));

        let neighbours = graph.neighbor_ids(variable);
        if neighbours.is_empty() {
            let _ = write!(output, " {NO_NEIGHBOURS}");
        }
        for &neighbour in neighbours {
            let _ = write!(output, " {}", graph.name(neighbour));
        }
        output.push('\n');
    }
    output
}
