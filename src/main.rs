//! daypicker CLI - drive the calendar engine from a YAML config
//!
//! Commands:
//!   render   - Print the month grid
//!   select   - Click dates and print the selection
//!   focus    - Press keys and print the focused day
//!   schema   - Print the config JSON schema

mod logging;

use chrono::NaiveDate;
use daypicker::date::parse_date;
use daypicker::*;
use serde::Serialize;
use std::cell::RefCell;
use std::path::Path;
use std::process::ExitCode;
use std::str::FromStr;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    logging::init_subscriber(logging::Verbosity::from_flags(verbose, quiet));

    let args: Vec<String> = args
        .into_iter()
        .filter(|a| !matches!(a.as_str(), "-v" | "--verbose" | "-q" | "--quiet"))
        .collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "render" => cmd_render(&args[2..]),
        "select" => cmd_select(&args[2..]),
        "focus" => cmd_focus(&args[2..]),
        "schema" => cmd_schema(),
        "version" | "--version" => {
            println!("daypicker {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
daypicker - calendar engine for date pickers

USAGE:
    daypicker <COMMAND> [OPTIONS]

COMMANDS:
    render <config.yaml>                  Print the month grid
    select <config.yaml> <date>...        Click dates in order, print the selection
    focus <config.yaml> <key>...          Press keys in order, print the focused day
    schema                                Print the JSON schema of the config file
    version                               Print the version

OPTIONS:
    --month <YYYY-MM-DD>   Month to display (overrides the config)
    --today <YYYY-MM-DD>   Current date (overrides the config)
    --shift                Hold shift for arrow and page keys (focus)
    --json                 JSON output
    -v, --verbose          Debug logging (or set DAYPICKER_LOG / RUST_LOG)
    -q, --quiet            Errors only

KEYS:
    left right up down pageup pagedown home end enter space

EXAMPLES:
    daypicker render booking.yaml --month 2024-06-01
    daypicker select booking.yaml 2024-06-03 2024-06-07 --json
    daypicker focus booking.yaml down down end enter
"#
    );
}

/// Positional args, with `--flag value` pairs and bare flags removed
fn positional(args: &[String]) -> Vec<&String> {
    let mut out = Vec::new();
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        match arg.as_str() {
            "--month" | "--today" => skip = true,
            a if a.starts_with("--") => {}
            _ => out.push(arg),
        }
    }
    out
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
}

fn load_config(args: &[String], usage: &str) -> Result<PickerConfig> {
    let pos = positional(args);
    let Some(path) = pos.first() else {
        return Err(usage.into());
    };
    let mut config = PickerConfig::load_from_file(Path::new(path.as_str()))?;
    if let Some(month) = flag_value(args, "--month") {
        config.month = Some(parse_date(month)?);
    }
    if let Some(today) = flag_value(args, "--today") {
        config.today = Some(parse_date(today)?);
    }
    Ok(config)
}

fn build_picker(config: &PickerConfig) -> Result<DayPicker> {
    let props = config.to_props();
    Ok(match config.initial_selection()? {
        Some(selected) => DayPicker::with_selected(props, selected),
        None => DayPicker::new(props),
    })
}

#[derive(Serialize)]
struct DayReport {
    date: NaiveDate,
    modifiers: Modifiers,
}

#[derive(Serialize)]
struct WeekReport {
    week_number: u32,
    days: Vec<DayReport>,
}

#[derive(Serialize)]
struct MonthReport {
    month: NaiveDate,
    weeks: Vec<WeekReport>,
}

fn grid_report<S: SelectionSink>(picker: &DayPicker<S>) -> Vec<MonthReport> {
    picker
        .months()
        .iter()
        .map(|month| MonthReport {
            month: month.date,
            weeks: month
                .weeks
                .iter()
                .map(|week| WeekReport {
                    week_number: week.week_number,
                    days: week
                        .days
                        .iter()
                        .map(|day| DayReport {
                            date: day.date,
                            modifiers: picker.modifiers(day),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

fn cmd_render(args: &[String]) -> Result<()> {
    let config = load_config(args, "Usage: daypicker render <config.yaml> [--month YYYY-MM-DD]")?;
    let picker = build_picker(&config)?;

    if args.iter().any(|a| a == "--json") {
        println!("{}", serde_json::to_string_pretty(&grid_report(&picker))?);
    } else {
        print!("{}", render_calendar(&picker));
    }
    Ok(())
}

/// Outcome of clicking dates on a controlled picker
struct SelectRun {
    /// Each clicked date with the value it produced, `None` when ignored
    outcomes: Vec<(NaiveDate, Option<SelectionValue>)>,
    /// Events as the selection callback received them
    events: Vec<SelectEvent>,
    calendar: String,
}

/// Click `dates` in order on a controlled picker, feeding each change back
fn run_select(config: &PickerConfig, dates: &[NaiveDate]) -> Result<SelectRun> {
    let initial = config
        .initial_selection()?
        .ok_or_else(|| Error::Config("select needs a mode in the config".into()))?;

    let events: RefCell<Vec<SelectEvent>> = RefCell::default();
    let sink = OnSelect::new(initial, |event: &SelectEvent| {
        tracing::debug!(trigger = %event.trigger, selected = ?event.selected, "selection changed");
        events.borrow_mut().push(event.clone());
    });
    let mut picker = DayPicker::with_sink(config.to_props(), sink);

    let mut outcomes = Vec::with_capacity(dates.len());
    for &date in dates {
        let next = picker.click(date)?;
        if let (Some(value), Some(selection)) = (&next, picker.selection_mut()) {
            selection.sink_mut().set_selected(value.clone());
        }
        outcomes.push((date, next));
    }

    let calendar = render_calendar(&picker);
    drop(picker);
    Ok(SelectRun {
        outcomes,
        events: events.into_inner(),
        calendar,
    })
}

fn cmd_select(args: &[String]) -> Result<()> {
    let usage = "Usage: daypicker select <config.yaml> <date>...";
    let config = load_config(args, usage)?;
    let json_output = args.iter().any(|a| a == "--json");

    let dates = positional(args)
        .into_iter()
        .skip(1)
        .map(|s| parse_date(s))
        .collect::<Result<Vec<_>>>()?;
    if dates.is_empty() {
        return Err(usage.into());
    }

    let run = run_select(&config, &dates)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&run.events)?);
    } else {
        for (date, outcome) in &run.outcomes {
            match outcome {
                Some(value) => println!("{}: {}", date, describe_selection(value)),
                None => println!("{}: ignored", date),
            }
        }
        println!();
        print!("{}", run.calendar);
    }
    Ok(())
}

fn describe_selection(value: &SelectionValue) -> String {
    match value {
        SelectionValue::Single(None)
        | SelectionValue::Multiple(None)
        | SelectionValue::Range(None) => "nothing selected".to_string(),
        SelectionValue::Single(Some(d)) => d.to_string(),
        SelectionValue::Multiple(Some(ds)) => ds
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        SelectionValue::Range(Some(r)) => format!(
            "{} .. {}",
            r.from.map(|d| d.to_string()).unwrap_or_else(|| "?".into()),
            r.to.map(|d| d.to_string()).unwrap_or_else(|| "?".into())
        ),
    }
}

fn cmd_focus(args: &[String]) -> Result<()> {
    let usage = "Usage: daypicker focus <config.yaml> <key>...";
    let config = load_config(args, usage)?;
    let shift = args.iter().any(|a| a == "--shift");
    let json_output = args.iter().any(|a| a == "--json");

    let keys = positional(args)
        .into_iter()
        .skip(1)
        .map(|s| Key::from_str(s))
        .collect::<Result<Vec<_>>>()?;
    if keys.is_empty() {
        return Err(usage.into());
    }

    let mut picker = build_picker(&config)?;
    let mut trail = Vec::new();
    for key in keys {
        let press = KeyPress { key, shift };
        let focused = picker.key(press)?;
        trail.push((key, focused.map(|d| d.date)));
    }

    if json_output {
        let report: Vec<_> = trail
            .iter()
            .map(|(key, date)| serde_json::json!({ "key": key, "focused": date }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (key, date) in &trail {
            match date {
                Some(d) => println!("{:?}: {}", key, d),
                None => println!("{:?}: no focus", key),
            }
        }
        println!();
        print!("{}", render_calendar(&picker));
    }
    Ok(())
}

fn cmd_schema() -> Result<()> {
    let schema = schemars::schema_for!(PickerConfig);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
