use crate::config::InputFormat;
use crate::error::KpResult;
use crate::task::TypingTask;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Parses a JSON array of task records.
pub fn tasks_from_json_reader<R: Read>(reader: R) -> KpResult<Vec<TypingTask>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses CSV with a header row `alphabet,rowLength,startingFocus,word`.
/// Fields are taken verbatim, so spaces inside the alphabet are kept.
pub fn tasks_from_csv_reader<R: Read>(reader: R) -> KpResult<Vec<TypingTask>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut tasks = Vec::new();
    for record in rdr.deserialize() {
        let task: TypingTask = record?;
        tasks.push(task);
    }
    Ok(tasks)
}

pub fn resolve_format<P: AsRef<Path>>(path: P, format: InputFormat) -> InputFormat {
    match format {
        InputFormat::Auto => {
            let is_csv = path
                .as_ref()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
            if is_csv {
                InputFormat::Csv
            } else {
                InputFormat::Json
            }
        }
        explicit => explicit,
    }
}

pub fn load_tasks<P: AsRef<Path>>(path: P, format: InputFormat) -> KpResult<Vec<TypingTask>> {
    let path = path.as_ref();
    let format = resolve_format(path, format);
    debug!("Loading tasks from {:?} as {}", path, format);

    let reader = BufReader::new(File::open(path)?);
    let tasks = match format {
        InputFormat::Csv => tasks_from_csv_reader(reader)?,
        _ => tasks_from_json_reader(reader)?,
    };

    debug!("Loaded {} tasks", tasks.len());
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_json_records() {
        let data = r#"[{"alphabet":"abcdef","rowLength":3,"startingFocus":"a","word":"bd"}]"#;
        let tasks = tasks_from_json_reader(Cursor::new(data)).unwrap();
        assert_eq!(tasks, vec![TypingTask::new("abcdef", 3, 'a', "bd")]);
    }

    #[test]
    fn parses_csv_records() {
        let data = "alphabet,rowLength,startingFocus,word\nabcdef,3,a,bd\nxyz,2,z,\n";
        let tasks = tasks_from_csv_reader(Cursor::new(data)).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1], TypingTask::new("xyz", 2, 'z', ""));
    }

    #[test]
    fn multi_char_focus_is_rejected() {
        let data = r#"[{"alphabet":"abc","rowLength":3,"startingFocus":"ab","word":"c"}]"#;
        assert!(tasks_from_json_reader(Cursor::new(data)).is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(resolve_format("t.CSV", InputFormat::Auto), InputFormat::Csv);
        assert_eq!(resolve_format("t.json", InputFormat::Auto), InputFormat::Json);
        assert_eq!(resolve_format("t", InputFormat::Auto), InputFormat::Json);
        assert_eq!(resolve_format("t.csv", InputFormat::Json), InputFormat::Json);
    }
}
