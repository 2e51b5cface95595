use failure::{Fallible, ResultExt};
use seampath::{find_seam_with, DualGradientEnergy, FinderKind, SolverKind};
use std::process;
use tracing::Level;

extern crate clap;
extern crate image;

use clap::{App, Arg};

fn run() -> Fallible<()> {
    let matches = App::new("seampath")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Find the least-energy seam through an image")
        .arg(
            Arg::with_name("image")
                .help("The image to search")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("finder")
                .long("finder")
                .short("f")
                .takes_value(true)
                .possible_values(&["dp", "generative", "adjacency"])
                .default_value("dp")
                .help("How to find the seam"),
        )
        .arg(
            Arg::with_name("solver")
                .long("solver")
                .short("s")
                .takes_value(true)
                .possible_values(&["dijkstra", "toposort"])
                .default_value("dijkstra")
                .help("Shortest-path solver for the graph finders"),
        )
        .arg(
            Arg::with_name("sqrt")
                .long("sqrt")
                .help("Use the square root of the dual-gradient energy"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .multiple(true)
                .help("Log solver progress to stderr; twice for every vertex"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => None,
        1 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    };
    if let Some(level) = level {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let finder: FinderKind = matches.value_of("finder").unwrap_or("dp").parse()?;
    let solver: SolverKind = matches.value_of("solver").unwrap_or("dijkstra").parse()?;
    let energy = if matches.is_present("sqrt") {
        DualGradientEnergy::square_root()
    } else {
        DualGradientEnergy::new()
    };

    let path = matches.value_of("image").unwrap_or_default();
    let image = image::open(path).with_context(|_| format!("cannot read image {}", path))?;
    let seam = find_seam_with(finder, solver, &image, &energy)?;

    let rows: Vec<String> = seam.iter().map(|y| y.to_string()).collect();
    println!("{}", rows.join(","));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("seampath: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
