use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::consts::SEPARATOR_WIDTH;
use crate::fetch::fetch_launches;
use crate::output::{export_csv, export_json, render_launches};

/// Runtime settings after merging CLI flags, the config file, and the
/// built-in defaults
#[derive(Debug)]
pub(crate) struct AppOptions {
    pub(crate) api_url: String,
    pub(crate) limit: u32,
    pub(crate) timeout: Duration,
    pub(crate) json_path: PathBuf,
    pub(crate) csv_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Display,
    DisplayJson,
    DisplayCsv,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Display),
            "2" => Some(MenuChoice::DisplayJson),
            "3" => Some(MenuChoice::DisplayCsv),
            "4" => Some(MenuChoice::DisplayAll),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    fn wants_json(self) -> bool {
        matches!(self, MenuChoice::DisplayJson | MenuChoice::DisplayAll)
    }

    fn wants_csv(self) -> bool {
        matches!(self, MenuChoice::DisplayCsv | MenuChoice::DisplayAll)
    }
}

/// The interactive loop: prompt, dispatch, ask whether to continue.
/// Returns when the user exits or stdin runs dry.
pub(crate) fn run(opts: &AppOptions) {
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
    println!("SpaceX Launch Data Fetcher");
    println!("{}", "=".repeat(SEPARATOR_WIDTH));

    loop {
        show_menu();
        let Some(line) = read_line() else {
            break;
        };
        let Some(choice) = MenuChoice::parse(&line) else {
            println!("\nInvalid choice. Try again.");
            continue;
        };
        if choice == MenuChoice::Exit {
            println!("\nExiting. Goodbye!");
            break;
        }
        dispatch(choice, opts);
        if !ask_continue() {
            println!("\nExiting. Goodbye!");
            break;
        }
    }
}

/// Fetch once, always display, then run the selected exports. Failures
/// are reported on stderr and control returns to the menu.
fn dispatch(choice: MenuChoice, opts: &AppOptions) {
    let records = match fetch_launches(&opts.api_url, opts.limit, opts.timeout) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    print!("{}", render_launches(&records));

    if choice.wants_json()
        && let Err(e) = export_json(&records, &opts.json_path)
    {
        eprintln!("{e}");
    }
    if choice.wants_csv()
        && let Err(e) = export_csv(&records, &opts.csv_path)
    {
        eprintln!("{e}");
    }
}

fn show_menu() {
    println!("\n{}", "=".repeat(SEPARATOR_WIDTH));
    println!("SPACEX LAUNCH DATA FETCHER");
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
    println!("What would you like to do?");
    println!("1. Fetch launch data and display it");
    println!("2. Fetch launch data and save to JSON");
    println!("3. Fetch launch data and save to CSV (for Excel)");
    println!("4. Fetch launch data and save to all formats");
    println!("5. Exit");
    print!("\nSelect an action (1-5): ");
    let _ = io::stdout().flush();
}

/// One line from stdin; `None` once input is exhausted
fn read_line() -> Option<String> {
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf),
    }
}

fn ask_continue() -> bool {
    print!("\nContinue? (y/n): ");
    let _ = io::stdout().flush();
    match read_line() {
        Some(answer) => wants_continue(&answer),
        None => false,
    }
}

/// Only a trimmed, case-insensitive "y" keeps the loop going
fn wants_continue(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
