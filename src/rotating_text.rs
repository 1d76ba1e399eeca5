use crate::schedule::{Recurring, Step};
use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(95);
pub const DELETE_DELAY: Duration = Duration::from_millis(55);
pub const HOLD_DELAY: Duration = Duration::from_millis(1100);
pub const START_DELAY: Duration = Duration::from_millis(2500);

/// Types and deletes a fixed list of roles forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotatingText {
    roles: Vec<Vec<char>>,
    role_index: usize,
    char_index: usize,
    deleting: bool,
}

impl RotatingText {
    /// Returns `None` for an empty role list.
    pub fn new<I, S>(roles: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles: Vec<Vec<char>> = roles
            .into_iter()
            .map(|role| role.as_ref().chars().collect())
            .collect();

        if roles.is_empty() {
            return None;
        }

        Some(Self {
            roles,
            role_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn visible(&self) -> String {
        self.roles[self.role_index][..self.char_index].iter().collect()
    }
}

impl Recurring for RotatingText {
    type Output = String;

    fn step(&mut self) -> Step<String> {
        let len = self.roles[self.role_index].len();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            let text = self.visible();

            if self.char_index == 0 {
                self.deleting = false;
                self.role_index = (self.role_index + 1) % self.roles.len();
                return Step::again(text, TYPE_DELAY);
            }

            return Step::again(text, DELETE_DELAY);
        }

        if self.char_index < len {
            self.char_index += 1;
        }
        let text = self.visible();

        if self.char_index >= len {
            self.deleting = true;
            return Step::again(text, HOLD_DELAY);
        }

        Step::again(text, TYPE_DELAY)
    }
}

/// Types a single string once, one character per step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    position: usize,
    speed: Duration,
}

impl Typewriter {
    pub fn new(text: &str, speed: Duration) -> Self {
        Self {
            chars: text.chars().collect(),
            position: 0,
            speed,
        }
    }

    pub fn is_done(&self) -> bool {
        self.position >= self.chars.len()
    }
}

impl Recurring for Typewriter {
    type Output = String;

    fn step(&mut self) -> Step<String> {
        if self.position < self.chars.len() {
            self.position += 1;
        }

        let text: String = self.chars[..self.position].iter().collect();
        if self.is_done() {
            Step::last(text)
        } else {
            Step::again(text, self.speed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualClock;

    #[test]
    fn types_holds_deletes_then_advances() {
        let mut roles = RotatingText::new(["AB", "C"]).expect("roles");

        let steps: Vec<_> = (0..6).map(|_| roles.step()).collect();
        let texts: Vec<_> = steps.iter().map(|step| step.output.as_str()).collect();
        let delays: Vec<_> = steps.iter().map(|step| step.next).collect();

        assert_eq!(texts, vec!["A", "AB", "A", "", "C", ""]);
        assert_eq!(
            delays,
            vec![
                Some(TYPE_DELAY),
                Some(HOLD_DELAY),
                Some(DELETE_DELAY),
                Some(TYPE_DELAY),
                Some(HOLD_DELAY),
                Some(TYPE_DELAY),
            ]
        );
        assert_eq!(roles.role_index(), 0);
    }

    #[test]
    fn full_role_after_len_typing_ticks() {
        let mut roles = RotatingText::new(["WEB DEVELOPER"]).expect("roles");
        let mut last = String::new();

        for _ in 0.."WEB DEVELOPER".len() {
            last = roles.step().output;
        }

        assert_eq!(last, "WEB DEVELOPER");
        assert!(roles.is_deleting());
    }

    #[test]
    fn empty_role_list_is_rejected() {
        assert!(RotatingText::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn empty_role_is_skipped_without_underflow() {
        let mut roles = RotatingText::new(["", "X"]).expect("roles");

        assert_eq!(roles.step().output, "");
        assert_eq!(roles.step().output, "");
        assert_eq!(roles.role_index(), 1);
        assert_eq!(roles.step().output, "X");
    }

    #[test]
    fn multibyte_roles_slice_on_characters() {
        let mut roles = RotatingText::new(["héé"]).expect("roles");

        assert_eq!(roles.step().output, "h");
        assert_eq!(roles.step().output, "hé");
        assert_eq!(roles.step().output, "héé");
    }

    #[test]
    fn schedule_is_deterministic_in_virtual_time() {
        let roles = RotatingText::new(["AB", "C"]).expect("roles");
        let mut clock = ManualClock::new(roles, START_DELAY);

        let outputs = clock.advance(START_DELAY + TYPE_DELAY + HOLD_DELAY);
        let timeline: Vec<_> = outputs
            .iter()
            .map(|(at, text)| (at.as_millis(), text.as_str()))
            .collect();

        assert_eq!(timeline, vec![(2500, "A"), (2595, "AB"), (3695, "A")]);
    }

    #[test]
    fn typewriter_finishes_after_last_character() {
        let mut clock = ManualClock::new(Typewriter::new("Hi!", Duration::from_millis(150)), Duration::ZERO);

        let texts: Vec<_> = clock.run_steps(10);

        assert_eq!(texts, vec!["H", "Hi", "Hi!"]);
        assert!(clock.is_finished());
        assert!(clock.task().is_done());
    }

    #[test]
    fn empty_typewriter_finishes_immediately() {
        let mut typewriter = Typewriter::new("", Duration::from_millis(50));

        assert_eq!(typewriter.step(), Step::last(String::new()));
    }
}
