use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;

use timeboard::error::BoardError;
use timeboard::io;
use timeboard::layout::{group_key, validate_request, GroupBy, LayoutEngine, LayoutRequest};
use timeboard::model::{BoardLayout, TimeUnit, Viewport};
use timeboard::settings::BoardSettings;

/// Width of one rendered column, including the emphasis marker.
const CELL_WIDTH: usize = 17;

#[derive(Parser, Debug)]
#[command(
    name = "timeboard",
    version,
    about = "Render a task file as a calendar-style board"
)]
struct Cli {
    /// Task file to display (.csv or .json)
    file: PathBuf,

    /// Time granularity: day, week, or month
    #[arg(long, value_parser = parse_unit)]
    unit: Option<TimeUnit>,

    /// Number of visible columns
    #[arg(long)]
    columns: Option<usize>,

    /// Group rows by none, status, priority, or category
    /// (unknown values fall back to none)
    #[arg(long = "group-by", value_parser = parse_group_by)]
    group_by: Option<GroupBy>,

    /// Anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Explicit viewport start (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// Explicit viewport end (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,
}

fn parse_unit(s: &str) -> Result<TimeUnit, String> {
    TimeUnit::parse(s).ok_or_else(|| format!("'{s}' is not one of day, week, month"))
}

fn parse_group_by(s: &str) -> Result<GroupBy, String> {
    Ok(GroupBy::parse(s))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The layout pipeline is all-or-nothing: show the empty
            // board rather than a half-rendered one.
            eprintln!("error loading board: {e}");
            let anchor = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());
            print_board(&BoardLayout::empty(
                cli.unit.unwrap_or(TimeUnit::Day),
                anchor,
            ));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BoardError> {
    let settings = BoardSettings::default_path()
        .map(|path| BoardSettings::load(&path))
        .unwrap_or_default();

    let unit = cli.unit.unwrap_or(settings.unit);
    let columns = cli.columns.unwrap_or(settings.columns);
    let group_by = cli.group_by.unwrap_or(settings.group_by);
    let current_date = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let viewport = match (cli.from, cli.to) {
        (Some(from), Some(to)) => Some(Viewport::new(from, to)),
        _ => None,
    };

    let tasks = load_tasks(&cli.file)?;

    // Group names in first-seen order stand in for the caller-remembered
    // ordering a full frontend would persist.
    let mut available_groups: Vec<String> = Vec::new();
    for task in &tasks {
        let key = group_key(task, group_by);
        if !available_groups.contains(&key) {
            available_groups.push(key);
        }
    }

    let request = LayoutRequest {
        tasks,
        unit,
        current_date,
        columns,
        viewport,
        group_by,
        available_groups,
    };
    validate_request(&request)?;

    let mut engine = LayoutEngine::new();
    let layout = engine.compute(&request);
    print_board(&layout);
    Ok(())
}

fn load_tasks(path: &PathBuf) -> Result<Vec<timeboard::Task>, BoardError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") | Some("txt") => {
            let (tasks, skipped) = io::import_csv(path)?;
            if skipped > 0 {
                eprintln!("Loaded {} tasks ({} rows skipped)", tasks.len(), skipped);
            }
            Ok(tasks)
        }
        Some("json") => io::load_tasks(path),
        _ => Err(BoardError::UnsupportedFormat {
            path: path.clone(),
        }),
    }
}

/// Plain-text rendition of the computed board, one line per row per
/// group. Column 0 holds the group labels; task bars span their
/// `x_start..=x_end` columns.
fn print_board(layout: &BoardLayout) {
    let label_width = layout
        .task_grids
        .iter()
        .map(|grid| grid.group.len())
        .max()
        .unwrap_or(0)
        .max("(empty)".len());

    let mut header = format!("{:label_width$}", "");
    for column in &layout.column_headers {
        let mark = if column.is_emphasized { '*' } else { ' ' };
        header.push_str(&format!(
            "|{}",
            pad(&format!("{mark}{}", column.label), CELL_WIDTH)
        ));
    }
    println!("{header}");

    if layout.task_grids.is_empty() {
        println!("{:label_width$}  (empty)", "");
    }

    for grid in &layout.task_grids {
        let rows = grid.tasks.iter().map(|t| t.y + 1).max().unwrap_or(1);
        for row in 0..rows {
            let mut cells: Vec<String> = vec![String::new(); layout.column_headers.len()];
            for task in grid.tasks.iter().filter(|t| t.y == row) {
                for column in task.x_start..=task.x_end {
                    cells[column - 1] = if column == task.x_start {
                        pad(&task.task.name, CELL_WIDTH)
                    } else {
                        "-".repeat(CELL_WIDTH)
                    };
                }
            }
            let label = if row == 0 { grid.group.as_str() } else { "" };
            let mut line = format!("{label:<label_width$}");
            for cell in &cells {
                line.push('|');
                if cell.is_empty() {
                    line.push_str(&" ".repeat(CELL_WIDTH));
                } else {
                    line.push_str(cell);
                }
            }
            println!("{line}");
        }
    }

    let task_count: usize = layout.task_grids.iter().map(|g| g.tasks.len()).sum();
    println!(
        "Tasks: {} · Window: {} → {} · Grid: {}x{}",
        task_count,
        layout.viewport.start,
        layout.viewport.end,
        layout.grid_width,
        layout.grid_height
    );
}

/// Truncate or right-pad to exactly `width` characters.
fn pad(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}
