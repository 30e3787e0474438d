//! # Command Suggestions
//!
//! Builds the message shown for an unrecognised command, with a
//! "did you mean" hint when the input is a near miss of a real one
//! (`comit` → `commit`, `forcepush` → `force-push`).

use crate::operation::COMMAND_NAMES;

/// Message for an unknown command, including a suggestion when one is close.
pub fn unknown_command(input: &str) -> String {
    match find_similar(input, COMMAND_NAMES) {
        Some(candidate) => format!("Unknown command: {input}\nhint: Did you mean '{candidate}'?"),
        None => format!("Unknown command: {input}"),
    }
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Single rolling row: previous[j] is the distance between a[..i] and b[..j]
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut current = vec![i + 1; b_chars.len() + 1];
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        previous = current;
    }

    previous[b_chars.len()]
}
