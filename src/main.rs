// Sortty: step-by-step sorting visualizer for the terminal

use std::io;

use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::clock::NullClock;
use sortty::config::{usage, Options};
use sortty::controller::RunController;
use sortty::logging::{self, LogTarget};
use sortty::rng::SeededRng;
use sortty::ui::{App, TerminalSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "sortty".to_string());

    let options = match Options::parse(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(1);
        }
    };

    if options.show_help {
        println!("{}", usage(&program_name));
        return Ok(());
    }

    logging::init(&LogTarget::choose(
        options.log_file.as_deref(),
        options.headless,
    ))?;

    let rng = match options.seed {
        Some(seed) => SeededRng::new(seed),
        None => SeededRng::from_entropy(),
    };
    let controller = RunController::new(options.settings, rng);

    if options.headless {
        return run_headless(controller);
    }

    // Set up terminal; dropping the session restores it
    let session = TerminalSession::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    drop(terminal);
    drop(session);

    if let Err(err) = res {
        tracing::error!(target: "ui", error = %err, "session ended with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Sort once without a terminal and print the counters
fn run_headless(mut controller: RunController) -> Result<(), Box<dyn std::error::Error>> {
    let mut clock = NullClock::new();
    let state = controller.start(&mut clock)?;
    let sequence = controller.sequence();
    let counters = sequence.counters();

    println!("algorithm:   {}", controller.settings().algorithm);
    println!("size:        {}", sequence.len());
    println!("seed:        {}", controller.seed());
    println!("state:       {}", state);
    println!("comparisons: {}", counters.comparisons);
    println!("swaps:       {}", counters.swaps);
    println!("frames:      {}", clock.frames());
    println!("sorted:      {}", sequence.is_sorted());
    Ok(())
}
