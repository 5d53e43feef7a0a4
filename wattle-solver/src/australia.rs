//! The map of the states and territories of Australia, the textbook example of map colouring.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::edge_list::EdgeList;
use crate::ConstraintGraph;
use crate::ConstraintGraphError;

/// The colours a region can be painted in, in the order in which they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// The first `num_colors` colours; asking for more than [`Color::ALL`] holds yields all of
    /// them.
    pub fn palette(num_colors: usize) -> &'static [Color] {
        &Color::ALL[..num_colors.min(Color::ALL.len())]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        };
        f.pad(name)
    }
}

/// The regions in registration order: Western Australia, Northern Territory, South Australia,
/// Queensland, New South Wales, Victoria and Tasmania.
pub const REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];

/// The land borders between the regions. Tasmania is an island.
///
/// This includes the border between Queensland and New South Wales, which the adjacency data this
/// map was first transcribed from leaves out. With it the map has 18 colourings in three
/// colours; without it there would be 36.
pub const BORDERS: [(&str, &str); 9] = [
    ("WA", "NT"),
    ("WA", "SA"),
    ("NT", "SA"),
    ("NT", "Q"),
    ("SA", "Q"),
    ("SA", "NSW"),
    ("SA", "V"),
    ("Q", "NSW"),
    ("NSW", "V"),
];

/// The adjacency of the Australia map.
pub fn australia_edge_list() -> EdgeList {
    EdgeList::from_known_borders(&REGIONS, &BORDERS)
}

/// Builds the constraint graph of the Australia map where every region can take one of the first
/// `num_colors` colours.
///
/// # Example
/// ```rust
/// # use wattle_solver::australia::australia_map;
/// # use wattle_solver::count_solutions;
/// let graph = australia_map(3).unwrap();
///
/// assert_eq!(graph.num_variables(), 7);
/// assert_eq!(count_solutions(&graph), 18);
/// ```
pub fn australia_map(
    num_colors: usize,
) -> Result<ConstraintGraph<String, Color>, ConstraintGraphError> {
    australia_edge_list().into_graph(Color::palette(num_colors))
}
