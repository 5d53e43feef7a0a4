//! A plain-text format describing which regions of a map border each other.
//!
//! Every line names a region followed by a colon and the regions it borders:
//! ```text
//! # Comments run to the end of the line
//! WA: NT SA
//! NT: WA SA Q
//! T: Null
//! ```
//! A region without neighbours is written with `Null` (or nothing) after the colon. Borders are
//! symmetric, so each border only has to be listed on one of its two lines; a region which only
//! appears as a neighbour is registered when it is first mentioned.
//!
//! Region names are non-empty, contain neither whitespace nor `:` or `#`, and are not `Null`.

use std::io::BufRead;

use log::debug;
use thiserror::Error;

use crate::australia::Color;
use crate::containers::HashMap;
use crate::containers::HashSet;
use crate::ConstraintGraph;
use crate::ConstraintGraphError;

/// The keyword marking a region without neighbours.
pub const NO_NEIGHBOURS: &str = "Null";

#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("failed to read the edge list: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected 'REGION: NEIGHBOUR NEIGHBOUR ...'")]
    MissingSeparator { line: usize },
    #[error("line {line}: the region name is empty")]
    MissingRegionName { line: usize },
    #[error("line {line}: region '{region}' is declared more than once")]
    DuplicateRegion { line: usize, region: String },
    #[error("line {line}: region '{region}' cannot border itself")]
    SelfBorder { line: usize, region: String },
    #[error("line {line}: 'Null' cannot be listed together with other neighbours")]
    NullWithNeighbours { line: usize },
    #[error("line {line}: '{region}' is not a valid region name")]
    InvalidRegionName { line: usize, region: String },
    #[error("'{0}' is not a valid region name")]
    UnrepresentableRegionName(String),
}

/// Whether `name` can be written to and read back from an edge list.
pub fn is_valid_region_name(name: &str) -> bool {
    !name.is_empty()
        && name != NO_NEIGHBOURS
        && !name.contains(|c: char| c.is_whitespace() || c == ':' || c == '#')
}

/// The regions of a map in registration order, together with the borders between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    regions: Vec<String>,
    borders: Vec<(String, String)>,
}

impl EdgeList {
    /// Creates an edge list from the given regions and borders.
    ///
    /// Regions which only occur in a border are appended in order of appearance; a border which
    /// is given twice (in either direction) is kept once. Fails on the first name which is not a
    /// valid region name.
    pub fn from_borders(
        regions: impl IntoIterator<Item = String>,
        borders: impl IntoIterator<Item = (String, String)>,
    ) -> Result<EdgeList, EdgeListError> {
        let mut builder = EdgeListBuilder::default();
        for region in regions {
            check_region_name(&region)?;
            let _ = builder.register(&region);
        }
        for (a, b) in borders {
            check_region_name(&a)?;
            check_region_name(&b)?;
            builder.add_border(&a, &b);
        }
        Ok(builder.edge_list)
    }

    /// Builds an edge list from names which are known to be valid region names.
    pub(crate) fn from_known_borders(regions: &[&str], borders: &[(&str, &str)]) -> EdgeList {
        let mut builder = EdgeListBuilder::default();
        for region in regions {
            let _ = builder.register(region);
        }
        for (a, b) in borders {
            builder.add_border(a, b);
        }
        builder.edge_list
    }

    /// Reads an edge list, reporting the first malformed line.
    ///
    /// # Example
    /// ```rust
    /// # use wattle_solver::edge_list::EdgeList;
    /// let edge_list = EdgeList::parse("A: B C\n# D is an island\nD: Null".as_bytes())
    ///     .unwrap();
    ///
    /// assert_eq!(edge_list.regions(), ["A", "B", "C", "D"]);
    /// assert_eq!(edge_list.borders().len(), 2);
    /// ```
    pub fn parse(source: impl BufRead) -> Result<EdgeList, EdgeListError> {
        let mut builder = EdgeListBuilder::default();
        let mut declared: HashSet<String> = HashSet::default();

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let line = line?;

            let content = line
                .split_once('#')
                .map_or(line.as_str(), |(content, _comment)| content)
                .trim();
            if content.is_empty() {
                continue;
            }

            let Some((region, neighbours)) = content.split_once(':') else {
                return Err(EdgeListError::MissingSeparator { line: line_number });
            };
            let region = region.trim();
            if region.is_empty() {
                return Err(EdgeListError::MissingRegionName { line: line_number });
            }
            if !is_valid_region_name(region) {
                return Err(EdgeListError::InvalidRegionName {
                    line: line_number,
                    region: region.to_owned(),
                });
            }
            if !declared.insert(region.to_owned()) {
                return Err(EdgeListError::DuplicateRegion {
                    line: line_number,
                    region: region.to_owned(),
                });
            }
            let _ = builder.register(region);

            let neighbours = neighbours.split_whitespace().collect::<Vec<_>>();
            if neighbours.contains(&NO_NEIGHBOURS) {
                if neighbours.len() > 1 {
                    return Err(EdgeListError::NullWithNeighbours { line: line_number });
                }
                continue;
            }
            for neighbour in neighbours {
                if !is_valid_region_name(neighbour) {
                    return Err(EdgeListError::InvalidRegionName {
                        line: line_number,
                        region: neighbour.to_owned(),
                    });
                }
                if neighbour == region {
                    return Err(EdgeListError::SelfBorder {
                        line: line_number,
                        region: region.to_owned(),
                    });
                }
                builder.add_border(region, neighbour);
            }
        }

        debug!(
            "Read edge list with {} regions and {} borders",
            builder.edge_list.regions.len(),
            builder.edge_list.borders.len()
        );

        Ok(builder.edge_list)
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// The borders in order of first appearance, each oriented as it was first given.
    pub fn borders(&self) -> &[(String, String)] {
        &self.borders
    }

    /// Builds the colouring problem of this map: every region takes one of `colors`, and
    /// bordering regions take different colours.
    pub fn into_graph(
        self,
        colors: &[Color],
    ) -> Result<ConstraintGraph<String, Color>, ConstraintGraphError> {
        ConstraintGraph::from_instance(
            self.regions
                .into_iter()
                .map(|region| (region, colors.iter().copied())),
            self.borders,
        )
    }
}

fn check_region_name(region: &str) -> Result<(), EdgeListError> {
    if is_valid_region_name(region) {
        Ok(())
    } else {
        Err(EdgeListError::UnrepresentableRegionName(region.to_owned()))
    }
}

#[derive(Debug, Default)]
struct EdgeListBuilder {
    edge_list: EdgeList,
    known_regions: HashMap<String, usize>,
    known_borders: HashSet<(usize, usize)>,
}

impl EdgeListBuilder {
    fn register(&mut self, region: &str) -> usize {
        if let Some(&index) = self.known_regions.get(region) {
            return index;
        }

        let index = self.edge_list.regions.len();
        self.edge_list.regions.push(region.to_owned());
        let _ = self.known_regions.insert(region.to_owned(), index);
        index
    }

    fn add_border(&mut self, a: &str, b: &str) {
        let a_index = self.register(a);
        let b_index = self.register(b);

        let key = (a_index.min(b_index), a_index.max(b_index));
        if self.known_borders.insert(key) {
            self.edge_list.borders.push((a.to_owned(), b.to_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<EdgeList, EdgeListError> {
        EdgeList::parse(text.as_bytes())
    }

    #[test]
    fn borders_listed_on_both_lines_are_kept_once() {
        let edge_list = parse("WA: NT SA\nNT: WA SA\nSA: WA NT\n").unwrap();

        assert_eq!(edge_list.regions(), ["WA", "NT", "SA"]);
        assert_eq!(
            edge_list.borders(),
            [
                ("WA".to_owned(), "NT".to_owned()),
                ("WA".to_owned(), "SA".to_owned()),
                ("NT".to_owned(), "SA".to_owned()),
            ]
        );
    }

    #[test]
    fn isolated_regions_may_use_the_keyword_or_nothing() {
        let edge_list = parse("T: Null\nKI:\n").unwrap();

        assert_eq!(edge_list.regions(), ["T", "KI"]);
        assert!(edge_list.borders().is_empty());
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let edge_list = parse("# a map\n\n  A: B   # trailing comment\n\n").unwrap();

        assert_eq!(edge_list.regions(), ["A", "B"]);
        assert_eq!(edge_list.borders().len(), 1);
    }

    #[test]
    fn neighbour_declared_later_keeps_its_first_position() {
        let edge_list = parse("A: C\nB: Null\nC: A\n").unwrap();

        assert_eq!(edge_list.regions(), ["A", "C", "B"]);
    }

    #[test]
    fn errors_report_the_line_number() {
        assert!(matches!(
            parse("A: B\nB C\n"),
            Err(EdgeListError::MissingSeparator { line: 2 })
        ));
        assert!(matches!(
            parse(": B\n"),
            Err(EdgeListError::MissingRegionName { line: 1 })
        ));
        assert!(matches!(
            parse("A: B\n\nA: C\n"),
            Err(EdgeListError::DuplicateRegion { line: 3, .. })
        ));
        assert!(matches!(
            parse("V: NSW\nSA: SA\n"),
            Err(EdgeListError::SelfBorder { line: 2, .. })
        ));
        assert!(matches!(
            parse("B: C\nA: Null B\n"),
            Err(EdgeListError::NullWithNeighbours { line: 2 })
        ));
        assert!(matches!(
            parse("A: B:C\n"),
            Err(EdgeListError::InvalidRegionName { line: 1, region }) if region == "B:C"
        ));
        assert!(matches!(
            parse("Null: A\n"),
            Err(EdgeListError::InvalidRegionName { line: 1, .. })
        ));
    }

    #[test]
    fn keyword_next_to_a_neighbour_does_not_become_a_region() {
        let error = parse("A: B Null\n").unwrap_err();

        assert_eq!(
            error.to_string(),
            "line 1: 'Null' cannot be listed together with other neighbours"
        );
    }

    #[test]
    fn names_which_cannot_be_read_back_are_rejected() {
        assert!(matches!(
            EdgeList::from_borders(["A:B".to_owned()], Vec::<(String, String)>::new()),
            Err(EdgeListError::UnrepresentableRegionName(region)) if region == "A:B"
        ));
        assert!(matches!(
            EdgeList::from_borders(
                Vec::<String>::new(),
                [("A".to_owned(), "New South Wales".to_owned())]
            ),
            Err(EdgeListError::UnrepresentableRegionName(_))
        ));

        let edge_list =
            EdgeList::from_borders(["A".to_owned()], [("A".to_owned(), "B".to_owned())]).unwrap();
        assert_eq!(edge_list.regions(), ["A", "B"]);
    }

    #[test]
    fn region_names_are_validated() {
        assert!(is_valid_region_name("NSW"));
        assert!(!is_valid_region_name(""));
        assert!(!is_valid_region_name("Null"));
        assert!(!is_valid_region_name("South Australia"));
        assert!(!is_valid_region_name("A#1"));
    }

    #[test]
    fn graph_has_one_constraint_per_border() {
        let graph = parse("A: B C\nB: C\n")
            .unwrap()
            .into_graph(&Color::ALL)
            .unwrap();

        assert_eq!(graph.num_variables(), 3);
        assert_eq!(graph.num_constraints(), 3);
        assert_eq!(graph.domain_of(&"A".to_owned()).unwrap(), &Color::ALL);
    }
}
