use clap::Parser;
use std::process::ExitCode;
use tapedeck::{builtin, builtin_names, CancelToken, ExecutionEngine, Ingest, RunOutcome};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The word to feed into the machine, one character at a time
    word: String,

    /// The built-in machine to run
    #[clap(short, long, default_value = "racecar")]
    machine: String,

    /// Print each transition as it executes
    #[clap(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let builder = match builtin(&cli.machine) {
        Some(builder) => builder,
        None => {
            eprintln!(
                "unknown machine '{}'; available: {}",
                cli.machine,
                builtin_names().join(", ")
            );
            return ExitCode::FAILURE;
        }
    };

    let mut engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("failed to build machine: {e}");
            return ExitCode::FAILURE;
        }
    };

    for c in cli.word.chars() {
        match engine.ingest(c) {
            Ok(Ingest::Accepted) => {
                if cli.trace {
                    print_last(&engine);
                }
            }
            Ok(Ingest::Rejected) => eprintln!("ignored character '{c}'"),
            Err(e) => {
                eprintln!("machine error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if let Err(e) = engine.submit_end_of_input() {
        eprintln!("machine error: {e}");
        return ExitCode::FAILURE;
    }

    let trace = cli.trace;
    let outcome = engine.run(&CancelToken::new(), |engine| {
        if trace {
            print_last(engine);
        }
    });

    match outcome {
        Ok(RunOutcome::Halted(output)) => {
            println!("input: {}", output.input);
            println!("tape:  {}", output.tape);
            println!("state: {}", output.state);
            println!("{}", output.verdict());
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Cancelled) => {
            eprintln!("run cancelled");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("machine error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_last(engine: &ExecutionEngine) {
    if let Some(event) = engine.last_event() {
        println!("{:>5}  {}", engine.step_count(), event);
    }
}
