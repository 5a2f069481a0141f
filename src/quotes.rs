//! Bundled quote list with a uniform random picker.

use tracing::warn;

/// Upper bound (exclusive) on the length of a stored quote, chosen so a
/// quote always fits a single small display surface.
pub const MAX_QUOTE_LENGTH: usize = 300;

const QUOTES: &[&str] = &[
    "Indeed, with hardship comes ease. (94:6)",
    "So remember Me; I will remember you. (2:152)",
    "And He found you lost and guided you. (93:7)",
    "Indeed, Allah is with the patient. (2:153)",
    "And whoever puts their trust in Allah, He will be sufficient for them. (65:3)",
    "Allah does not burden a soul beyond that it can bear. (2:286)",
    "And seek help through patience and prayer. (2:45)",
    "Indeed, my Lord is near and responsive. (11:61)",
    "And say: My Lord, increase me in knowledge. (20:114)",
    "Unquestionably, by the remembrance of Allah hearts are assured. (13:28)",
    "And do not despair of the mercy of Allah. (12:87)",
    "Indeed, the mercy of Allah is near to the doers of good. (7:56)",
    "Call upon Me; I will respond to you. (40:60)",
    "And We have certainly made the Quran easy for remembrance. (54:17)",
    "And whoever fears Allah, He will make for them a way out. (65:2)",
    "Indeed, good deeds do away with misdeeds. (11:114)",
    "And your Lord is going to give you, and you will be satisfied. (93:5)",
    "So which of the favors of your Lord would you deny? (55:13)",
    "Indeed, Allah loves those who rely upon Him. (3:159)",
    "And He is with you wherever you are. (57:4)",
    "Repel evil by that which is better. (41:34)",
    "And the Hereafter is better for you than the first life. (93:4)",
    "Whoever saves a life, it is as if he had saved mankind entirely. (5:32)",
    "And speak to people good words. (2:83)",
];

/// The bundled quotes, embedded in the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuranQuotes;

impl QuranQuotes {
    pub fn new() -> Self {
        Self
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        QUOTES.len()
    }

    pub fn is_empty(&self) -> bool {
        QUOTES.is_empty()
    }

    /// The quote at the given position, if any.
    pub fn quote(&self, index: usize) -> Option<&'static str> {
        QUOTES.get(index).copied()
    }

    /// A uniformly random quote. Falls back to the first quote if the
    /// system's entropy source is unavailable.
    pub fn next_random(&self) -> &'static str {
        let mut bytes = [0u8; 8];
        if let Err(e) = getrandom::fill(&mut bytes) {
            warn!("random source unavailable, falling back to first quote: {e}");
            return QUOTES[0];
        }
        let index = (u64::from_le_bytes(bytes) % QUOTES.len() as u64) as usize;
        QUOTES[index]
    }
}
