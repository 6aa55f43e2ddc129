mod app;
mod audio;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod ui;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::prelude::*;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [--config <path>]

Classic snake for the terminal.

Options:
  -c, --config <path>   Read configuration (theme) from <path>
  -h, --help            Show this help and exit
  -V, --version         Show program version and exit
";

fn main() -> ExitCode {
    match Args::parse() {
        Ok(Args::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Args::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Ok(Args::Run { config }) => match load_config(config.as_deref()) {
            Ok(config) => {
                let terminal = ratatui::init();
                let r = App::new(&config).run(terminal);
                ratatui::restore();
                io_exit(r)
            }
            Err(e) => {
                eprintln!("gridsnake: {e:#}");
                ExitCode::from(2)
            }
        },
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

enum Args {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Args {
    fn parse() -> Result<Args, lexopt::Error> {
        let mut config = None;
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => config = Some(PathBuf::from(parser.value()?)),
                Short('h') | Long("help") => return Ok(Args::Help),
                Short('V') | Long("version") => return Ok(Args::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Args::Run { config })
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Config::load(p, false)
            .with_context(|| format!("cannot load configuration from {}", p.display())),
        None => {
            let p = Config::default_path().context("cannot resolve configuration path")?;
            Config::load(&p, true)
                .with_context(|| format!("cannot load configuration from {}", p.display()))
        }
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
