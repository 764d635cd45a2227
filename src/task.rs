use crate::error::KpResult;
use crate::grid::Keyboard;
use crate::path::PathToken;
use serde::{Deserialize, Serialize};

/// One typing job: which keyboard, where the cursor starts, what to type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypingTask {
    pub alphabet: String,
    pub row_length: i64,
    pub starting_focus: char,
    pub word: String,
}

impl TypingTask {
    pub fn new(alphabet: &str, row_length: i64, starting_focus: char, word: &str) -> Self {
        Self {
            alphabet: alphabet.to_string(),
            row_length,
            starting_focus,
            word: word.to_string(),
        }
    }

    pub fn keyboard(&self) -> KpResult<Keyboard> {
        Keyboard::build(&self.alphabet, self.row_length)
    }

    pub fn solve(&self) -> KpResult<TypingResult> {
        let typed = self.keyboard()?.assemble(self.starting_focus, &self.word)?;
        Ok(TypingResult {
            task: self.clone(),
            distance: typed.distance,
            path: typed.path,
        })
    }
}

/// The task echoed back with its move count and path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TypingResult {
    #[serde(flatten)]
    pub task: TypingTask,
    pub distance: usize,
    pub path: Vec<PathToken>,
}

impl TypingResult {
    pub fn render_path(&self) -> String {
        self.path.iter().map(|t| t.symbol()).collect()
    }
}

/// The task echoed back with the reason it could not be solved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskFailure {
    #[serde(flatten)]
    pub task: TypingTask,
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum TaskOutcome {
    Solved(TypingResult),
    Failed(TaskFailure),
}

impl TaskOutcome {
    pub fn task(&self) -> &TypingTask {
        match self {
            Self::Solved(r) => &r.task,
            Self::Failed(f) => &f.task,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_flat() {
        let result = TypingTask::new("abcdef", 3, 'a', "bd").solve().unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "alphabet": "abcdef",
                "rowLength": 3,
                "startingFocus": "a",
                "word": "bd",
                "distance": 3,
                "path": ["r", "p", "u", "l", "p"]
            })
        );
    }

    #[test]
    fn outcome_round_trips_through_json() {
        let failed = TaskOutcome::Failed(TaskFailure {
            task: TypingTask::new("abc", 0, 'a', "b"),
            error: "bad".to_string(),
        });
        let text = serde_json::to_string(&failed).unwrap();
        let back: TaskOutcome = serde_json::from_str(&text).unwrap();
        assert_eq!(back, failed);
        assert!(!back.is_solved());
    }
}
