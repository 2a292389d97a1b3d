//! Utilities shared by the predecessor-based routers

use std::collections::HashMap;

/// Walk predecessor links from `end` back to `start` and reverse.
///
/// Callers only invoke this after establishing that `end` has a finite
/// distance, so the predecessor chain is complete.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<String, String>,
    start: &str,
    end: &str,
) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end;
    while current != start {
        match predecessors.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_path() {
        let mut predecessors = HashMap::new();
        predecessors.insert("C".to_string(), "B".to_string());
        predecessors.insert("B".to_string(), "A".to_string());

        assert_eq!(reconstruct_path(&predecessors, "A", "C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reconstruct_path_start_is_end() {
        let predecessors = HashMap::new();
        assert_eq!(reconstruct_path(&predecessors, "A", "A"), vec!["A"]);
    }
}
