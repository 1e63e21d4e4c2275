use crate::quiz::arithmetic::NumberPicker;

pub const CORRECT_PHRASES: [&str; 26] = [
    "Booya",
    "All righty",
    "Bam",
    "Bazinga",
    "Bingo",
    "Boom",
    "Bravo",
    "Cha Ching",
    "Cheers",
    "Dynomite",
    "Hip hip hooray",
    "Hurrah",
    "Hurray",
    "Huzzah",
    "Oh dear.  Just kidding.  Hurray",
    "Kaboom",
    "Kaching",
    "Phew",
    "Righto",
    "Way to go",
    "Well done",
    "Whee",
    "Woo hoo",
    "Yay",
    "Wowza",
    "Yowsa",
];

pub const WRONG_PHRASES: [&str; 23] = [
    "Argh",
    "Aw man",
    "Blarg",
    "Blast",
    "Boo",
    "Bummer",
    "Darn",
    "D'oh",
    "Dun dun dun",
    "Eek",
    "Honk",
    "Le sigh",
    "Mamma mia",
    "Oh boy",
    "Oh dear",
    "Oof",
    "Ouch",
    "Ruh roh",
    "Shucks",
    "Uh oh",
    "Wah wah",
    "Whoops a daisy",
    "Yikes",
];

/// An ordered pool of interjections spoken after an answer is judged.
#[derive(Debug, Clone)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    /// Returns `None` for an empty pool, since every judged answer needs a phrase.
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Option<Self> {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self { phrases })
    }

    pub fn correct() -> Self {
        Self {
            phrases: CORRECT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn wrong() -> Self {
        Self {
            phrases: WRONG_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.phrases.len()
    }

    #[cfg(test)]
    fn contains(&self, phrase: &str) -> bool {
        self.phrases.iter().any(|p| p == phrase)
    }

    /// Picks a phrase uniformly and wraps it as a spoken interjection.
    pub fn pick(&self, picker: &mut impl NumberPicker) -> String {
        let last = (self.phrases.len() - 1) as u32;
        let index = picker.pick(0, last) as usize;
        interjection(&self.phrases[index])
    }
}

pub fn interjection(phrase: &str) -> String {
    format!("<say-as interpret-as=\"interjection\">{}.</say-as>", phrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::arithmetic::tests::SequencePicker;

    #[test]
    fn empty_pool_is_rejected() {
        assert!(PhrasePool::new(Vec::<String>::new()).is_none());
    }

    #[test]
    fn pick_wraps_the_indexed_phrase() {
        let pool = PhrasePool::new(["Bingo", "Bravo"]).unwrap();
        let mut picker = SequencePicker::new(&[1]);

        assert_eq!(
            pool.pick(&mut picker),
            "<say-as interpret-as=\"interjection\">Bravo.</say-as>"
        );
    }

    #[test]
    fn pick_never_leaves_the_pool() {
        let pool = PhrasePool::wrong();
        let mut picker = SequencePicker::new(&[500]);

        assert_eq!(pool.pick(&mut picker), interjection("Yikes"));
    }

    #[test]
    fn default_pools_are_populated() {
        assert_eq!(PhrasePool::correct().len(), CORRECT_PHRASES.len());
        assert_eq!(PhrasePool::wrong().len(), WRONG_PHRASES.len());
        assert!(PhrasePool::correct().contains("Bazinga"));
        assert!(PhrasePool::wrong().contains("D'oh"));
    }
}
