//! Two-pointer string reversal step generator
//!
//! Emits a step per pointer pair before the swap and one after it,
//! terminating with a completion step once the pointers cross.

use crate::player::Step;

/// Snapshot of the character array and pointer positions
#[derive(Debug, Clone, PartialEq)]
pub struct ReverseSnapshot {
    pub chars: Vec<char>,
    pub left: usize,
    pub right: usize,
    /// True on the step captured just before a swap
    pub swapping: bool,
    /// Swaps completed so far
    pub swaps: usize,
    /// True on the final step once the pointers have crossed
    pub done: bool,
}

impl ReverseSnapshot {
    /// The string at this instant
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Reverse `input` with two pointers, recording each swap as a
/// before/after step pair. An empty input yields an empty sequence.
pub fn generate(input: &str) -> Vec<Step<ReverseSnapshot>> {
    let mut chars: Vec<char> = input.chars().collect();
    let mut steps = Vec::new();
    if chars.is_empty() {
        return steps;
    }

    let mut left = 0;
    let mut right = chars.len() - 1;
    let mut swaps = 0;

    while left < right {
        steps.push(Step::new(
            ReverseSnapshot {
                chars: chars.clone(),
                left,
                right,
                swapping: true,
                swaps,
                done: false,
            },
            format!(
                "Swapping '{}' at [{}] with '{}' at [{}].",
                chars[left], left, chars[right], right
            ),
        ));

        chars.swap(left, right);
        swaps += 1;

        let text: String = chars.iter().collect();
        steps.push(Step::new(
            ReverseSnapshot {
                chars: chars.clone(),
                left,
                right,
                swapping: false,
                swaps,
                done: false,
            },
            format!("Swapped. The string is now \"{}\".", text),
        ));

        left += 1;
        right -= 1;
    }

    let text: String = chars.iter().collect();
    steps.push(Step::new(
        ReverseSnapshot {
            chars,
            left,
            right,
            swapping: false,
            swaps,
            done: true,
        },
        format!("Pointers crossed. Reversal complete: \"{}\".", text),
    ));

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_step_count(steps: &[Step<ReverseSnapshot>]) -> usize {
        steps.iter().filter(|s| s.snapshot.swapping).count()
    }

    #[test]
    fn test_reverse_12345() {
        // Exactly 2 swap steps, ending with "54321"
        let steps = generate("12345");
        assert_eq!(swap_step_count(&steps), 2);

        let last = steps.last().unwrap();
        assert!(last.snapshot.done);
        assert_eq!(last.snapshot.text(), "54321");
        assert_eq!(last.snapshot.swaps, 2);
    }

    #[test]
    fn test_swap_count_is_half_length() {
        for input in ["ab", "abc", "abcdef", "abcdefg"] {
            let steps = generate(input);
            assert_eq!(
                swap_step_count(&steps),
                input.chars().count() / 2,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_final_text_is_reversed() {
        let input = "hello world";
        let steps = generate(input);
        let expected: String = input.chars().rev().collect();
        assert_eq!(steps.last().unwrap().snapshot.text(), expected);
    }

    #[test]
    fn test_multibyte_characters() {
        let steps = generate("héllo");
        assert_eq!(steps.last().unwrap().snapshot.text(), "olléh");
        assert_eq!(swap_step_count(&steps), 2);
    }

    #[test]
    fn test_single_character() {
        let steps = generate("a");
        assert_eq!(steps.len(), 1);
        assert!(steps[0].snapshot.done);
        assert_eq!(steps[0].snapshot.swaps, 0);
        assert_eq!(steps[0].snapshot.text(), "a");
    }

    #[test]
    fn test_empty_input() {
        assert!(generate("").is_empty());
    }

    #[test]
    fn test_before_and_after_steps_pair_up() {
        let steps = generate("abcd");
        // before, after, before, after, completion
        assert_eq!(steps.len(), 5);
        assert!(steps[0].snapshot.swapping);
        assert!(!steps[1].snapshot.swapping);
        assert_eq!(steps[0].snapshot.text(), "abcd");
        assert_eq!(steps[1].snapshot.text(), "dbca");
        assert_eq!(steps[3].snapshot.text(), "dcba");
    }
}
