//! Response formatting.
//!
//! Uppercases cipher output and packages it as a [`TransformResult`]. Only
//! ASCII is case-folded, so non-letters that passed through a cipher keep
//! their exact characters. The optional step list exists only for display pacing in a front end; it never
//! influences the result text.

use serde::{Deserialize, Serialize};

use crate::engine::{AlgorithmId, Direction};

/// Presentation options applied after the cipher has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Attach the four fixed step descriptions.
    #[serde(default)]
    pub show_steps: bool,
    /// Split transposition ciphertext into blocks of this many letters.
    #[serde(default)]
    pub group_size: Option<usize>,
}

/// Final output handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

/// Packages cipher output as a [`TransformResult`].
///
/// Grouping applies to transposition encode output only. Every other result
/// is returned with its spacing untouched.
pub fn format(
    output: &str,
    direction: Direction,
    algorithm: AlgorithmId,
    options: &FormatOptions,
) -> TransformResult {
    let mut result = output.to_ascii_uppercase();
    let size = options.group_size.unwrap_or(0);
    let groupable = algorithm == AlgorithmId::Transposition && direction == Direction::Encode;
    if groupable && size > 0 && result.chars().all(|c| c.is_ascii_alphabetic()) {
        result = group(&result, size);
    }

    TransformResult {
        result,
        steps: options.show_steps.then(|| steps(direction, algorithm)),
    }
}

/// The fixed step descriptions shown while a result is "being prepared".
pub fn steps(direction: Direction, algorithm: AlgorithmId) -> Vec<String> {
    vec![
        "Step 1: Received input text.".to_string(),
        format!("Step 2: Operation – {direction} with {algorithm}."),
        "Step 3: Processing algorithm…".to_string(),
        "Step 4: Generating final result…".to_string(),
    ]
}

fn group(letters: &str, size: usize) -> String {
    letters
        .as_bytes()
        .chunks(size)
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect::<Vec<_>>()
        .join(" ")
}
