use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::debug;
use structopt::StructOpt;

use min_cut_split::{report, Graph};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "min-cut-split",
    about = "Splits a graph in two along its global minimum edge cut \
             and prints the product of the two component sizes"
)]
struct Opt {
    /// Adjacency list, one `LABEL: N1 N2 ...` record per line
    #[structopt(parse(from_os_str), default_value = "puzzle.in")]
    input: PathBuf,

    /// Print the parsed nodes and edges instead of cutting the graph
    #[structopt(short, long)]
    describe: bool,

    /// Log more, repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn init_logger(verbose: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::colored_default_format)
        .start()
}

fn run(opt: &Opt) -> min_cut_split::Result<()> {
    debug!("reading {}", opt.input.display());
    let mut reader = BufReader::new(File::open(&opt.input)?);
    let graph = Graph::from_reader(&mut reader)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opt.describe {
        report::describe(&graph, &mut out)?;
    } else {
        let partition = report::solve(graph)?;
        writeln!(out, "{}", partition.product)?;
    }

    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    let _logger = match init_logger(opt.verbose) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: could not start logger: {}", err);
            None
        }
    };

    if let Err(err) = run(&opt) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
