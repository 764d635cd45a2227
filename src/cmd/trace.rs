use crate::reports;
use clap::Args;
use keypath::path::replay;
use keypath::{KpResult, TypingTask};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    #[arg(short, long)]
    pub alphabet: String,

    #[arg(short, long, allow_hyphen_values = true)]
    pub row_length: i64,

    /// Key the cursor starts on.
    #[arg(short, long)]
    pub focus: char,

    #[arg(short, long, default_value = "")]
    pub word: String,
}

pub fn run(args: TraceArgs) -> KpResult<()> {
    let task = TypingTask::new(&args.alphabet, args.row_length, args.focus, &args.word);
    let kb = task.keyboard()?;
    reports::print_keyboard_grid(&kb);

    let transitions = kb.transitions(task.starting_focus, &task.word)?;
    let typed = kb.assemble(task.starting_focus, &task.word)?;
    reports::print_transitions(&transitions, &typed);

    let typed_word: String = replay(&kb, task.starting_focus, &typed.path)?
        .into_iter()
        .collect();
    if typed_word == task.word {
        info!("✅ Replay types '{}'", typed_word);
    } else {
        warn!("Replay typed '{}', expected '{}'", typed_word, task.word);
    }
    Ok(())
}
