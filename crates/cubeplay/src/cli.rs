use std::path::{Path, PathBuf};

use cubeplay_core::notation::{format_twists, invert_twists, parse_twists};
use cubeplay_core::{FaceletState, Twist};
use cubeplay_view::{ActionOutcome, CubeSession, HeadlessScene, Playback, Status};
use cubeprefs::Preferences;
use eyre::{OptionExt, Result, WrapErr};
use owo_colors::OwoColorize;

/// Rubik's cube player
///
/// Scrambles a virtual cube and solves it by replaying the scramble in
/// reverse. If no subcommand is specified, `demo` is run.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,

    /// Preferences file to use instead of the one in the config directory.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
    /// Play animations instantly instead of in real time.
    #[arg(long, global = true)]
    pub instant: bool,
    /// Print the cube as letters instead of colored cells.
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(clap::Subcommand, Debug, Default, PartialEq, Eq)]
pub(crate) enum Subcommand {
    /// Scramble the cube and then solve it.
    #[default]
    Demo,
    /// Scramble the cube and print the scramble.
    Scramble {
        /// Seed for the scramble generator.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of moves in the scramble.
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },
    /// Apply moves to a solved cube and print the result.
    Apply {
        /// Moves such as `R U R' U'`.
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Print the moves that undo a move sequence.
    Invert {
        /// Moves such as `R U R' U'`.
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Print the current preferences as YAML.
    Prefs {
        /// Also write them to the preferences file.
        #[arg(long)]
        save: bool,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let mut prefs = load_prefs(args.prefs.as_deref())?;
    let printer = Printer {
        plain: args.plain,
        prefs: prefs.clone(),
    };

    match args.subcommand.unwrap_or_default() {
        Subcommand::Demo => {
            let mut session = new_session(&prefs, args.instant);
            pollster::block_on(async {
                expect_completed(session.scramble().await?);
                println!(
                    "Scramble: {}",
                    format_twists(session.last_scramble().iter().copied()),
                );
                printer.print_state(session.state());

                expect_completed(session.solve().await?);
                printer.print_state(session.state());
                eyre::Ok(())
            })
        }

        Subcommand::Scramble { seed, length } => {
            if seed.is_some() {
                prefs.scramble.seed = seed;
            }
            if let Some(length) = length {
                prefs.scramble.length = length;
            }
            let mut session = new_session(&prefs, args.instant);
            expect_completed(pollster::block_on(session.scramble())?);
            println!("{}", format_twists(session.last_scramble().iter().copied()));
            printer.print_state(session.state());
            Ok(())
        }

        Subcommand::Apply { moves } => {
            let twists = parse_moves(&moves)?;
            let mut session = new_session(&prefs, args.instant);
            expect_completed(pollster::block_on(session.apply_sequence(&twists))?);
            printer.print_state(session.state());
            Ok(())
        }

        Subcommand::Invert { moves } => {
            let twists = parse_moves(&moves)?;
            println!("{}", format_twists(invert_twists(&twists)));
            Ok(())
        }

        Subcommand::Prefs { save } => {
            print!("{}", prefs.to_yaml_string()?);
            if save {
                let path = args
                    .prefs
                    .or_else(Preferences::default_path)
                    .ok_or_eyre("no preferences path")?;
                prefs.save(&path)?;
            }
            Ok(())
        }
    }
}

/// Loads preferences from `path`, or from the default location if `path` is
/// `None`. A missing or broken default file is not an error.
fn load_prefs(path: Option<&Path>) -> Result<Preferences> {
    match path {
        Some(path) => Preferences::try_load(Some(path))
            .wrap_err_with(|| format!("error loading preferences from {}", path.display())),
        None => Ok(Preferences::load(Preferences::default_path().as_deref())),
    }
}

fn parse_moves(moves: &[String]) -> Result<Vec<Twist>> {
    let s = moves.join(" ");
    parse_twists(&s)
        .collect::<Result<_, _>>()
        .wrap_err_with(|| format!("invalid move sequence {s:?}"))
}

fn new_session(prefs: &Preferences, instant: bool) -> CubeSession<HeadlessScene> {
    let playback = if instant {
        Playback::Instant
    } else {
        Playback::Realtime
    };
    let scene = HeadlessScene::new(playback, &prefs.animation);
    CubeSession::new(scene, prefs, |status: &Status| {
        eprintln!("{}", status.dimmed());
    })
}

/// Logs a warning if an action did not run to completion.
fn expect_completed(outcome: ActionOutcome) {
    if outcome != ActionOutcome::Completed {
        log::warn!("action did not complete: {outcome:?}");
    }
}

struct Printer {
    plain: bool,
    prefs: Preferences,
}
impl Printer {
    fn print_state(&self, state: &FaceletState) {
        if self.plain {
            print!("{state}");
        } else {
            println!("{}", crate::net::render_net(state, &self.prefs.colors));
        }
        if state.is_solved() {
            println!("{}", "solved".green());
        }
    }
}
