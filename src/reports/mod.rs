use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keypath::path::{Transition, TypedPath};
use keypath::task::TaskOutcome;
use keypath::Keyboard;

pub fn keyboard_grid(kb: &Keyboard) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in kb.rows() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&c| {
                let s = if c == ' ' {
                    "␣".to_string()
                } else {
                    c.to_string()
                };
                Cell::new(s).set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    table
}

pub fn print_keyboard_grid(kb: &Keyboard) {
    println!("\nKeyboard ({} keys):", kb.len());
    println!("{}", keyboard_grid(kb));
}

pub fn print_transitions(transitions: &[Transition], typed: &TypedPath) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("From"),
        Cell::new("To"),
        Cell::new("Hops").fg(Color::Cyan),
        Cell::new("Moves"),
    ]);

    if let Some(col) = table.column_mut(3) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (i, t) in transitions.iter().enumerate() {
        let moves: String = t.moves.iter().map(|d| d.symbol()).collect();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(t.from),
            Cell::new(t.to).add_attribute(Attribute::Bold),
            Cell::new(t.moves.len()).fg(Color::Cyan),
            Cell::new(if moves.is_empty() { "-".to_string() } else { moves }),
        ]);
    }
    println!("\n{}", table);

    println!("Distance: {}", typed.distance);
    println!("Path: {}", typed.render());
}

pub fn results_table(outcomes: &[TaskOutcome]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Alphabet"),
        Cell::new("Row"),
        Cell::new("Focus"),
        Cell::new("Word"),
        Cell::new("Distance").fg(Color::Cyan),
        Cell::new("Path"),
    ]);

    for i in [2, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, outcome) in outcomes.iter().enumerate() {
        let task = outcome.task();
        let (distance, path) = match outcome {
            TaskOutcome::Solved(r) => (
                Cell::new(r.distance).fg(Color::Cyan),
                Cell::new(r.render_path()),
            ),
            TaskOutcome::Failed(f) => (Cell::new("-"), Cell::new(&f.error).fg(Color::Red)),
        };
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&task.alphabet),
            Cell::new(task.row_length),
            Cell::new(task.starting_focus),
            Cell::new(&task.word).add_attribute(Attribute::Bold),
            distance,
            path,
        ]);
    }
    table
}

pub fn print_results_table(outcomes: &[TaskOutcome]) {
    println!("{}", results_table(outcomes));
}
