//! A line-oriented terminal front end for keeping one color's sRGB, XYZ, and
//! CMYK coordinates in sync.

use std::io::{BufRead, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colorbridge::Session;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod env;
mod input;
mod render;

use env::{ColorChoice, Env};
use input::{Command, InputError, HELP};
use render::Renderer;

#[derive(Parser)]
#[command(
    name = "colorbridge",
    about = "Convert one color between sRGB, CIE XYZ, and CMYK",
    version
)]
struct Cli {
    /// Run the command and exit; may be repeated
    #[arg(short, long = "eval", value_name = "COMMAND")]
    eval: Vec<String>,

    /// When to show the color swatch
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Log more; may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Whether to keep reading commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive application, i.e., one session plus its renderer.
struct App {
    session: Session,
    renderer: Renderer,
}

impl App {
    fn new(renderer: Renderer) -> Self {
        Self {
            session: Session::new(),
            renderer,
        }
    }

    /// Execute one line of input.
    ///
    /// Input errors leave the session unchanged and are returned without
    /// writing anything. I/O errors are returned as the outer error.
    fn execute<W: Write + ?Sized>(
        &mut self,
        out: &mut W,
        line: &str,
    ) -> std::io::Result<core::result::Result<Flow, InputError>> {
        let command = match input::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Ok(Flow::Continue)),
            Err(error) => return Ok(Err(error)),
        };
        debug!(?command, "executing");

        let update = match command {
            Command::Rgb(r, g, b) => self.session.update_from_rgb(r, g, b),
            Command::Xyz(x, y, z) => self.session.update_from_xyz(x, y, z),
            Command::Cmyk(c, m, y, k) => self.session.update_from_cmyk(c, m, y, k),
            Command::Hex(ref value) => match self.session.update_from_hex(value) {
                Ok(update) => update,
                Err(error) => return Ok(Err(error.into())),
            },
            Command::Show => {
                self.renderer.state(out, &self.session.state())?;
                return Ok(Ok(Flow::Continue));
            }
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(Ok(Flow::Continue));
            }
            Command::Quit => return Ok(Ok(Flow::Quit)),
        };

        self.renderer.update(out, &update)?;
        Ok(Ok(Flow::Continue))
    }
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let use_color = cli.color.use_color(&Env::default(), stdout.is_terminal());
    info!(use_color, "starting");

    let mut app = App::new(Renderer::new(use_color));
    let mut out = stdout.lock();
    let mut err = std::io::stderr().lock();

    if !cli.eval.is_empty() {
        let mut status = ExitCode::SUCCESS;
        for line in &cli.eval {
            match app.execute(&mut out, line)? {
                Ok(Flow::Continue) => (),
                Ok(Flow::Quit) => break,
                Err(error) => {
                    writeln!(err, "error: {}", error)?;
                    status = ExitCode::FAILURE;
                }
            }
        }
        return Ok(status);
    }

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        writeln!(out, "type \"help\" for commands")?;
        app.renderer.state(&mut out, &app.session.state())?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("could not read from standard input")?;

        match app.execute(&mut out, &line)? {
            Ok(Flow::Continue) => (),
            Ok(Flow::Quit) => break,
            Err(error) => writeln!(err, "error: {}", error)?,
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}
