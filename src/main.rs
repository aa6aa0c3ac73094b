// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::error::Error;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::{debug, info};
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_arena::arena::Arena;
use sokoban_arena::config::{Format, Mode};
use sokoban_arena::level::LevelList;
use sokoban_arena::moves::{Dirs, Moves};
use sokoban_arena::replay_formatter::ReplayFormatter;
use sokoban_arena::session::{ScoreBoard, ScoreStore, Session, Step, DEFAULT_PACK};
use sokoban_arena::state::Snapshot;
use sokoban_arena::LoadLevels;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-arena")
        .author("martin-t")
        .version("0.1")
        .arg(
            Arg::with_name("list")
                .long("--list")
                .help("list the levels in the file"),
        ).arg(
            Arg::with_name("moves")
                .short("-m")
                .long("--moves")
                .takes_value(true)
                .value_name("MOVES")
                .help("moves to play in lurd notation, case is ignored"),
        ).arg(
            Arg::with_name("interactive")
                .short("-i")
                .long("--interactive")
                .help("read moves from stdin, :retry, :skip and :quit are also accepted"),
        ).group(
            ArgGroup::with_name("mode")
                .arg("list")
                .arg("moves")
                .arg("interactive"),
        ).arg(
            Arg::with_name("level")
                .short("-l")
                .long("--level")
                .takes_value(true)
                .value_name("N")
                .default_value("0")
                .help("level to start at, counting from 0"),
        ).arg(
            Arg::with_name("restore")
                .long("--restore")
                .takes_value(true)
                .value_name("SAVE")
                .help("continue a game saved with --save"),
        ).arg(
            Arg::with_name("save")
                .long("--save")
                .takes_value(true)
                .value_name("SAVE")
                .help("save the game after the moves are played"),
        ).arg(
            Arg::with_name("steps")
                .short("-s")
                .long("--steps")
                .help("print the board after every move, not just pushes"),
        ).arg(
            Arg::with_name("xsb")
                .short("-x")
                .long("--xsb")
                .help("print boards in XSB notation"),
        ).arg(
            Arg::with_name("file")
                .required(true)
                .help("level file, levels are separated by lines starting with ;"),
        ).get_matches();

    if let Err(err) = run(&matches) {
        println!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let path = matches.value_of("file").ok_or("No level file")?;
    let levels = path
        .load_levels()
        .map_err(|err| format!("Can't read file {}: {}", path, err))?;
    info!("Loaded {} levels from {}", levels.len(), path);

    let mode = if matches.is_present("list") {
        Mode::List
    } else if matches.is_present("interactive") {
        Mode::Interactive
    } else {
        Mode::Replay
    };
    let format = if matches.is_present("xsb") {
        Format::Xsb
    } else {
        Format::Native
    };
    debug!("Mode: {}, format: {}", mode, format);

    if mode == Mode::List {
        print!("{}", level_table(&levels));
        return Ok(());
    }

    let pack = Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(DEFAULT_PACK)
        .to_string();
    let session = match matches.value_of("restore") {
        Some(save) => {
            let snapshot =
                Snapshot::load(save).map_err(|err| format!("Can't load {}: {}", save, err))?;
            Session::restore(levels, &snapshot, ScoreBoard::new())?
        }
        None => {
            let level = matches.value_of("level").unwrap_or("0");
            let level = level
                .parse()
                .map_err(|_| format!("Invalid level number: {}", level))?;
            Session::new(levels, level, ScoreBoard::new())?
        }
    };
    let mut session = session.with_pack(pack);

    match mode {
        Mode::Interactive => interactive(&mut session, format)?,
        _ => {
            let dirs: Dirs = matches.value_of("moves").unwrap_or("").parse()?;
            replay(&mut session, &dirs, matches.is_present("steps"), format);
        }
    }

    if let Some(save) = matches.value_of("save") {
        session.snapshot().save(save)?;
        println!("Saved level {} to {}", session.level(), save);
    }

    if !session.scores().is_empty() {
        print!("{}", session.scores().table());
    }
    Ok(())
}

fn level_table(levels: &LevelList) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![
        Cell::new("Level"),
        Cell::new("Title"),
        Cell::new("Width"),
        Cell::new("Height"),
    ]));
    for (i, record) in levels.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&i.to_string()),
            Cell::new(record.title().unwrap_or("")),
            Cell::new(&record.width().to_string()),
            Cell::new(&record.height().to_string()),
        ]));
    }
    table
}

fn print_summary(arena: &Arena, moves: &Moves) {
    if moves.move_cnt() > 0 {
        println!("{}", moves);
    }
    println!("Moves: {}", moves.move_cnt().separated_string());
    println!("Pushes: {}", moves.push_cnt().separated_string());
    if arena.is_won() {
        println!("Solved");
    } else {
        println!("Crates placed: {}/{}", arena.placed_cnt(), arena.goal_cnt());
    }
}

/// Plays `dirs` on the current level. Stops once it's solved.
fn replay<S>(session: &mut Session<S>, dirs: &Dirs, include_steps: bool, format: Format)
where
    S: ScoreStore,
{
    let level = session.level();
    let start = session.arena().clone();
    let mut blocked = 0;
    let mut solved = None;

    for (i, &dir) in dirs.0.iter().enumerate() {
        match session.move_player(dir) {
            Step::Blocked => blocked += 1,
            Step::Moved(_) => {}
            Step::Solved { solution, .. } | Step::Finished { solution, .. } => {
                let left = dirs.0.len() - i - 1;
                if left > 0 {
                    info!("Ignoring {} moves after the level was solved", left);
                }
                solved = Some(solution);
                break;
            }
        }
    }

    println!("Level {}", level);
    match solved {
        Some(solution) => {
            print!("{}", ReplayFormatter::new(&start, &solution, include_steps, format));
            let mut end = start.clone();
            for mov in &solution {
                end.move_player(mov.dir);
            }
            print_summary(&end, &solution);
        }
        None => {
            let history = session.history();
            print!("{}", ReplayFormatter::new(&start, history, include_steps, format));
            print_summary(session.arena(), history);
        }
    }
    if blocked > 0 {
        println!("Blocked: {}", blocked.separated_string());
    }
}

fn print_status<S>(session: &Session<S>, format: Format)
where
    S: ScoreStore,
{
    println!(
        "Level {} | Moves: {}",
        session.level(),
        session.arena().moves().separated_string()
    );
    print!("{}", session.arena().format(format));
}

fn print_solved(level: usize, solution: &Moves) {
    println!(
        "Solved level {} in {} moves: {}",
        level,
        solution.move_cnt().separated_string(),
        solution
    );
}

fn interactive<S>(session: &mut Session<S>, format: Format) -> Result<(), Box<dyn Error>>
where
    S: ScoreStore,
{
    print_status(session, format);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":retry" | ":r" => session.retry()?,
            ":skip" | ":s" => {
                if let Err(err) = session.skip() {
                    println!("{}", err);
                    continue;
                }
            }
            input => {
                let dirs: Dirs = match input.parse() {
                    Ok(dirs) => dirs,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                for &dir in &dirs.0 {
                    match session.move_player(dir) {
                        Step::Blocked | Step::Moved(_) => {}
                        Step::Solved { level, solution } => {
                            print_solved(level, &solution);
                            break;
                        }
                        Step::Finished { level, solution } => {
                            print_solved(level, &solution);
                            println!("All levels solved");
                            return Ok(());
                        }
                    }
                }
            }
        }
        print_status(session, format);
    }
    Ok(())
}
