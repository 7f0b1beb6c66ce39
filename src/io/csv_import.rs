use std::path::Path;

use chrono::NaiveDate;

use crate::error::BoardError;
use crate::model::Task;

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &[
        "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Map a priority cell to the 1–5 scale; words are accepted alongside
/// digits. Out-of-range values import as "no priority".
fn parse_priority(s: &str) -> Option<u8> {
    match s.trim().to_lowercase().as_str() {
        "highest" | "critical" => Some(5),
        "high" => Some(4),
        "medium" | "med" | "normal" => Some(3),
        "low" => Some(2),
        "lowest" => Some(1),
        other => other.parse::<u8>().ok().filter(|p| (1..=5).contains(p)),
    }
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to our column index:
///   0 = name, 1 = start, 2 = end, 3 = status, 4 = priority, 5 = category
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "name" | "task" | "tasklabel" | "taskname" | "label" | "title" => Some(0),

        "start" | "startdate" | "from" | "begin" | "begindate" => Some(1),

        "end" | "enddate" | "to" | "finish" | "finishdate" | "due" | "duedate" => Some(2),

        "status" | "state" | "stage" => Some(3),

        "priority" | "pri" | "importance" => Some(4),

        "category" | "group" | "area" | "project" => Some(5),

        _ => None,
    }
}

/// Import tasks from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column
/// headers flexibly ("Task Name", "Start Date", "Due", ...). Rows with a
/// missing name or unparseable start date are skipped, not fatal.
/// Returns `(tasks, skipped_count)`.
pub fn import_csv(path: &Path) -> Result<(Vec<Task>, usize), BoardError> {
    // Read the whole file to detect the delimiter from the first line.
    let content = std::fs::read_to_string(path).map_err(|e| BoardError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    let has_name = col_map.iter().any(|c| *c == Some(0));
    let has_start = col_map.iter().any(|c| *c == Some(1));
    if !has_name || !has_start {
        return Err(BoardError::CsvMissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let file_path = path.display().to_string();
    let mut tasks: Vec<Task> = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Skipping CSV row {}: {}", i + 2, e);
                skipped += 1;
                continue;
            }
        };

        let mut cells: [Option<&str>; 6] = [None; 6];
        for (col_idx, field) in record.iter().enumerate() {
            if let Some(Some(slot)) = col_map.get(col_idx) {
                cells[*slot] = Some(field.trim());
            }
        }

        let name = match cells[0] {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => {
                skipped += 1;
                continue;
            }
        };

        let start = match cells[1].and_then(parse_date) {
            Some(d) => d,
            None => {
                eprintln!(
                    "Skipping row {}: invalid start date '{}'",
                    i + 2,
                    cells[1].unwrap_or("")
                );
                skipped += 1;
                continue;
            }
        };

        // A malformed end date degrades to a single-day task; an end
        // before the start is lifted to the start.
        let end = cells[2].and_then(parse_date).map(|d| d.max(start));

        let mut task = Task::new(name, start);
        task.end = end;
        task.status = cells[3].filter(|s| !s.is_empty()).map(str::to_string);
        task.priority = cells[4].and_then(parse_priority);
        task.category = cells[5].filter(|s| !s.is_empty()).map(str::to_string);
        task.file_path = file_path.clone();
        tasks.push(task);
    }

    if tasks.is_empty() {
        return Err(BoardError::CsvEmpty { skipped });
    }

    Ok((tasks, skipped))
}
