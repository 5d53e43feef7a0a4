mod os_signal_termination;
mod result;

use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::WattleResult;
use wattle_solver::australia::australia_map;
use wattle_solver::australia::Color;
use wattle_solver::branching::variable_selection::VariableOrdering;
use wattle_solver::branching::variable_selection::VariableSelector;
use wattle_solver::convert_case::Case;
use wattle_solver::edge_list::EdgeList;
use wattle_solver::render::render_adjacency;
use wattle_solver::render::render_solution;
use wattle_solver::results::IteratedSolution;
use wattle_solver::statistics::configure_statistic_logging;
use wattle_solver::termination::Combinator;
use wattle_solver::termination::DecisionBudget;
use wattle_solver::termination::TerminationCondition;
use wattle_solver::termination::TimeBudget;
use wattle_solver::BacktrackingSolver;
use wattle_solver::ConstraintGraph;
use wattle_solver::SearchCancelled;
use wattle_solver::Solution;

const MSG_SOLUTION_END: &str = "----------";
const MSG_COMPLETE: &str = "==========";
const MSG_UNKNOWN: &str = "=====UNKNOWN=====";
const MSG_UNSATISFIABLE: &str = "=====UNSATISFIABLE=====";

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about
)]
struct Args {
    /// The map to colour, given as an edge list: one line per region of the form
    /// 'REGION: NEIGHBOUR NEIGHBOUR ...', or 'REGION: Null' for a region without neighbours.
    ///
    /// When no instance is given, the map of Australia is coloured.
    #[clap(verbatim_doc_comment)]
    instance_path: Option<PathBuf>,

    /// The number of colours every region can be painted in; the colours are taken from red,
    /// green and blue in that order.
    ///
    /// Possible values: 1, 2 or 3
    #[arg(
        short = 'c',
        long = "num-colors",
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(1..=3),
        verbatim_doc_comment
    )]
    num_colors: u8,

    /// Instructs the solver to report all solutions instead of only the first one.
    ///
    /// Possible values: bool
    #[arg(short = 'a', long = "all-solutions", verbatim_doc_comment)]
    all_solutions: bool,

    /// Decides which unassigned region is coloured next. Values are always tried in the order
    /// red, green, blue.
    #[arg(long, value_enum, default_value_t)]
    variable_ordering: VariableOrdering,

    /// The random seed used by the "random" variable ordering.
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "random-seed",
        default_value_t = 42,
        verbatim_doc_comment
    )]
    random_seed: u64,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of values the solver may try to assign before it gives up.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "decision-limit", verbatim_doc_comment)]
    decision_limit: Option<u64>,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Logs every step of the search: each region which is branched on, each colour which is
    /// tried or rejected, and each backtrack.
    ///
    /// Possible values: bool
    #[arg(long = "trace", verbatim_doc_comment)]
    trace: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Prints the adjacency of the map before solving.
    ///
    /// Possible values: bool
    #[arg(long = "print-graph", verbatim_doc_comment)]
    print_graph: bool,
}

fn configure_logging(verbose: bool, trace: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%wattle-stat:",
            Some("%%%wattle-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if trace {
        LevelFilter::Trace
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> WattleResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.trace, args.log_statistics)?;

    if wattle_solver::asserts::WATTLE_ASSERT_LEVEL_DEFINITION
        >= wattle_solver::asserts::WATTLE_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Wattle assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            wattle_solver::asserts::WATTLE_ASSERT_LEVEL_DEFINITION
        );
    };

    let num_colors = usize::from(args.num_colors);
    let graph = match &args.instance_path {
        Some(path) => {
            let instance = BufReader::new(File::open(path)?);
            EdgeList::parse(instance)?.into_graph(Color::palette(num_colors))?
        }
        None => australia_map(num_colors)?,
    };
    info!(
        "Colouring {} regions with {num_colors} colours",
        graph.num_variables()
    );

    if args.print_graph {
        print!("{}", render_adjacency(&graph));
    }

    let termination = Combinator::new(
        os_signal_termination::install()?,
        Combinator::new(
            args.time_limit
                .map(|limit| TimeBudget::starting_now(Duration::from_millis(limit))),
            args.decision_limit.map(DecisionBudget::new),
        ),
    );
    let selector = args.variable_ordering.into_selector(args.random_seed);

    if args.all_solutions {
        enumerate(&graph, selector, termination);
    } else {
        satisfy(&graph, selector, termination);
    }

    Ok(())
}

fn satisfy(
    graph: &ConstraintGraph<String, Color>,
    mut selector: impl VariableSelector<String, Color>,
    mut termination: impl TerminationCondition,
) {
    let mut solver = BacktrackingSolver::new(graph);

    match solver.solve(&mut selector, &mut termination) {
        Ok(Some(solution)) => print_solution(&solution),
        Ok(None) => println!("{MSG_UNSATISFIABLE}"),
        Err(SearchCancelled) => println!("{MSG_UNKNOWN}"),
    }

    solver.log_statistics();
}

fn enumerate(
    graph: &ConstraintGraph<String, Color>,
    selector: impl VariableSelector<String, Color>,
    termination: impl TerminationCondition,
) {
    let mut solver = BacktrackingSolver::new(graph);
    let mut solutions = solver.solve_all(selector, termination);
    let mut num_solutions = 0;

    loop {
        match solutions.next_solution() {
            IteratedSolution::Solution(solution) => {
                num_solutions += 1;
                print_solution(&solution);
            }
            IteratedSolution::Finished => {
                println!("{MSG_COMPLETE}");
                break;
            }
            IteratedSolution::Unsatisfiable => {
                println!("{MSG_UNSATISFIABLE}");
                break;
            }
            IteratedSolution::Cancelled => {
                if num_solutions == 0 {
                    println!("{MSG_UNKNOWN}");
                } else {
                    warn!("Search cancelled after {num_solutions} solutions");
                }
                break;
            }
        }
    }

    solver.log_statistics();
}

fn print_solution(solution: &Solution<'_, String, Color>) {
    print!("{}", render_solution(solution));
    println!("{MSG_SOLUTION_END}");
}
