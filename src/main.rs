use std::env;
use std::process;

use clap::{App, Arg};
use prettytable::{Cell, Row, Table};

use ricochet_solver::config::{Dedup, Method, SearchConfig};
use ricochet_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let defaults = SearchConfig::default();
    let default_solutions = defaults.solution_count.to_string();
    let default_depth = defaults.max_depth.to_string();

    let app = App::new("ricochet-solver")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the shortest ways to get a robot to its target")
        .arg(
            Arg::with_name("solutions")
                .short("n")
                .long("solutions")
                .takes_value(true)
                .default_value(&default_solutions)
                .help("how many solutions to find"),
        )
        .arg(
            Arg::with_name("depth")
                .short("d")
                .long("depth")
                .takes_value(true)
                .default_value(&default_depth)
                .help("don't expand configurations more than this many moves deep"),
        )
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .possible_values(&["breadth-first", "iterative-deepening"])
                .default_value("breadth-first")
                .help("search method"),
        )
        .arg(
            Arg::with_name("dedup")
                .long("dedup")
                .help("skip configurations that were already reached"),
        )
        .arg(
            Arg::with_name("budget")
                .long("budget")
                .takes_value(true)
                .help("give up after creating this many nodes"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("don't print progress while searching"),
        )
        .arg(Arg::with_name("puzzle").required(true));
    #[cfg(feature = "graph")]
    let app = app.arg(
        Arg::with_name("graph")
            .long("graph")
            .takes_value(true)
            .help("write the solution tree as a dot file"),
    );
    let matches = app.get_matches();

    let mut config = SearchConfig::new(
        parse_number(matches.value_of("solutions"), "solutions"),
        parse_number(matches.value_of("depth"), "depth"),
    );
    if matches.value_of("method") == Some("iterative-deepening") {
        config = config.with_method(Method::IterativeDeepening);
    }
    if matches.is_present("dedup") {
        config = config.with_dedup(Dedup::Visited);
    }
    if matches.is_present("budget") {
        config = config.with_budget(parse_number(matches.value_of("budget"), "budget"));
    }
    let print_status = !matches.is_present("quiet");
    // required so always present
    let path = matches.value_of("puzzle").unwrap_or_default();

    let puzzle = path.load_puzzle().unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap_or_default();
        println!("Can't load puzzle {} in {}: {}", path, current_dir.display(), err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    println!("{}", puzzle);
    println!("Target: {}", puzzle.target);
    println!("Config: {}", config);
    println!();

    let solver_ok = puzzle.solve(config, print_status).unwrap_or_else(|err| {
        println!("Can't solve {}: {}", path, err);
        process::exit(1);
    });

    println!("{}", solver_ok.stats);
    println!("Outcome: {}", solver_ok.outcome);

    #[cfg(feature = "graph")]
    {
        if let Some(graph_path) = matches.value_of("graph") {
            if let Err(err) = solver_ok.write_graph(graph_path) {
                println!("Can't write graph to {}: {}", graph_path, err);
                process::exit(1);
            }
        }
    }

    let all_moves = solver_ok.solution_moves();
    if all_moves.is_empty() {
        println!("No solution");
        return;
    }

    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("#"),
        Cell::new("Moves"),
        Cell::new("Solution"),
    ]));
    for (i, moves) in all_moves.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(&moves.move_cnt().to_string()),
            Cell::new(&moves.to_string()),
        ]));
    }
    print!("{}", table);
    println!();

    for (i, (&solution, moves)) in solver_ok.solutions.iter().zip(&all_moves).enumerate() {
        println!("Solution {}: {}", i + 1, moves);
        println!("Robots: {}", solver_ok.final_robots(solution));
        println!(
            "{}",
            puzzle
                .board
                .format(Some(&solver_ok.final_robots(solution)), Some(puzzle.target.pos))
        );
    }
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>, name: &str) -> T {
    let value = value.unwrap_or_default();
    value.parse().unwrap_or_else(|_| {
        println!("Invalid {}: {}", name, value);
        process::exit(1);
    })
}
