use rand::rngs::ThreadRng;
use rand::thread_rng;
use rand::Rng;

use crate::quiz;

/// Smallest operand of an addition question.
pub const MIN_OPERAND: u32 = 1;
/// Largest operand of an addition question.
pub const MAX_OPERAND: u32 = 9;

/// Source of the integers the quiz draws: operands and phrase indexes.
pub trait NumberPicker {
    /// Returns an integer in `min..=max`.
    fn pick(&mut self, min: u32, max: u32) -> u32;
}

/// Uniform picker over any `rand` generator.
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<ThreadRng> {
    pub fn from_thread_rng() -> Self {
        Self::new(thread_rng())
    }
}

impl<R: Rng> NumberPicker for RandomPicker<R> {
    fn pick(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }
}

/// Draws two single-digit operands and builds "a+b".
pub fn generate_addition(picker: &mut impl NumberPicker) -> quiz::Question {
    let number1 = picker.pick(MIN_OPERAND, MAX_OPERAND);
    let number2 = picker.pick(MIN_OPERAND, MAX_OPERAND);

    quiz::Question::new(format!("{}+{}", number1, number2), number1 + number2)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    /// Replays a fixed list of numbers, clamped into the requested range.
    pub(crate) struct SequencePicker {
        numbers: VecDeque<u32>,
    }

    impl SequencePicker {
        pub(crate) fn new(numbers: &[u32]) -> Self {
            Self {
                numbers: numbers.iter().copied().collect(),
            }
        }
    }

    impl NumberPicker for SequencePicker {
        fn pick(&mut self, min: u32, max: u32) -> u32 {
            let next = self.numbers.pop_front().unwrap_or(min);
            next.clamp(min, max)
        }
    }

    #[test]
    fn question_text_matches_its_answer() {
        let mut picker = SequencePicker::new(&[3, 5]);
        let question = generate_addition(&mut picker);

        assert_eq!(question.text, "3+5");
        assert_eq!(question.answer, 8);
    }

    #[test]
    fn random_operands_stay_single_digit() {
        let mut picker = RandomPicker::new(StdRng::seed_from_u64(7));

        for _ in 0..500 {
            let question = generate_addition(&mut picker);
            let (left, right) = question.text.split_once('+').unwrap();
            let left: u32 = left.parse().unwrap();
            let right: u32 = right.parse().unwrap();

            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&left));
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&right));
            assert_eq!(question.answer, left + right);
        }
    }

    #[test]
    fn random_picker_covers_both_bounds() {
        let mut picker = RandomPicker::new(StdRng::seed_from_u64(42));
        let drawn: Vec<u32> = (0..1000).map(|_| picker.pick(1, 9)).collect();

        assert!(drawn.contains(&1));
        assert!(drawn.contains(&9));
    }
}
