//! Terminal client for quantum tic-tac-toe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, Command, Demo};
use qubit_sim::{Bb84, Simulator, presets};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play { seed } => play(seed),
        Command::Bb84 {
            bits,
            eavesdrop,
            seed,
        } => run_bb84(bits, eavesdrop, seed),
        Command::Sample { demo, shots, seed } => run_sample(demo, shots, seed),
    }
}

fn play(seed: Option<u64>) -> Result<()> {
    info!(?seed, "starting interactive game");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(seed);
    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char(c @ '1'..='9') => {
                    app.submit(c as u8 - b'0');
                }
                _ => {}
            }
        }
    }
}

fn run_bb84(bits: usize, eavesdrop: bool, seed: Option<u64>) -> Result<()> {
    let mut session = match seed {
        Some(seed) => Bb84::seeded(seed),
        None => Bb84::new(),
    };
    let run = session.run(bits, eavesdrop)?;

    println!("BB84 over {bits} transmitted qubits");
    println!(
        "  channel:    {}",
        if eavesdrop {
            "intercept-resend eavesdropper"
        } else {
            "clean"
        }
    );
    println!("  sifted key: {} bits", run.sifted_len());
    println!("  mismatches: {}", run.mismatches());
    println!("  error rate: {:.1}%", run.error_rate() * 100.0);

    let preview: String = run
        .sifted_bob
        .iter()
        .take(32)
        .map(|bit| char::from(b'0' + bit))
        .collect();
    if !preview.is_empty() {
        println!("  key prefix: {preview}");
    }
    if eavesdrop && run.mismatches() > 0 {
        println!("  the eavesdropper was detected by comparing sample bits");
    }
    Ok(())
}

fn run_sample(demo: Demo, shots: usize, seed: Option<u64>) -> Result<()> {
    let mut sim = match seed {
        Some(seed) => Simulator::seeded(seed),
        None => Simulator::new(),
    };
    let circuit = match demo {
        Demo::Superposition => presets::coin_flip(),
        Demo::Bell => presets::bell_pair(),
    };

    let counts = sim.run(&circuit, shots)?;
    println!("{circuit}");
    println!("{shots} shots:");
    for (bitstring, count) in counts.sorted() {
        println!(
            "  |{bitstring}⟩  {count:>6}  ({:>5.1}%)",
            counts.frequency(bitstring) * 100.0
        );
    }
    Ok(())
}
