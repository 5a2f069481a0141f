//! Static chapter metadata: the 114 surahs with their verse counts.
//!
//! Built into the binary as an immutable table in mushaf order; never read
//! from the database. The verse counts follow the Hafs numbering and sum to
//! [`TOTAL_VERSE_COUNT`].

use serde::Serialize;

/// Number of chapters in the text.
pub const SURAH_COUNT: u16 = 114;

/// Total verses across all chapters.
pub const TOTAL_VERSE_COUNT: u32 = 6236;

/// Transliterated name and verse count per chapter, index 0 = surah 1.
const SURAHS: [(&str, u16); SURAH_COUNT as usize] = [
    ("Al-Fatihah", 7),
    ("Al-Baqarah", 286),
    ("Aal-i-Imran", 200),
    ("An-Nisa", 176),
    ("Al-Ma'idah", 120),
    ("Al-An'am", 165),
    ("Al-A'raf", 206),
    ("Al-Anfal", 75),
    ("At-Tawbah", 129),
    ("Yunus", 109),
    ("Hud", 123),
    ("Yusuf", 111),
    ("Ar-Ra'd", 43),
    ("Ibrahim", 52),
    ("Al-Hijr", 99),
    ("An-Nahl", 128),
    ("Al-Isra", 111),
    ("Al-Kahf", 110),
    ("Maryam", 98),
    ("Ta-Ha", 135),
    ("Al-Anbiya", 112),
    ("Al-Hajj", 78),
    ("Al-Mu'minun", 118),
    ("An-Nur", 64),
    ("Al-Furqan", 77),
    ("Ash-Shu'ara", 227),
    ("An-Naml", 93),
    ("Al-Qasas", 88),
    ("Al-Ankabut", 69),
    ("Ar-Rum", 60),
    ("Luqman", 34),
    ("As-Sajdah", 30),
    ("Al-Ahzab", 73),
    ("Saba", 54),
    ("Fatir", 45),
    ("Ya-Sin", 83),
    ("As-Saffat", 182),
    ("Sad", 88),
    ("Az-Zumar", 75),
    ("Ghafir", 85),
    ("Fussilat", 54),
    ("Ash-Shura", 53),
    ("Az-Zukhruf", 89),
    ("Ad-Dukhan", 59),
    ("Al-Jathiyah", 37),
    ("Al-Ahqaf", 35),
    ("Muhammad", 38),
    ("Al-Fath", 29),
    ("Al-Hujurat", 18),
    ("Qaf", 45),
    ("Adh-Dhariyat", 60),
    ("At-Tur", 49),
    ("An-Najm", 62),
    ("Al-Qamar", 55),
    ("Ar-Rahman", 78),
    ("Al-Waqi'ah", 96),
    ("Al-Hadid", 29),
    ("Al-Mujadila", 22),
    ("Al-Hashr", 24),
    ("Al-Mumtahanah", 13),
    ("As-Saff", 14),
    ("Al-Jumu'ah", 11),
    ("Al-Munafiqun", 11),
    ("At-Taghabun", 18),
    ("At-Talaq", 12),
    ("At-Tahrim", 12),
    ("Al-Mulk", 30),
    ("Al-Qalam", 52),
    ("Al-Haqqah", 52),
    ("Al-Ma'arij", 44),
    ("Nuh", 28),
    ("Al-Jinn", 28),
    ("Al-Muzzammil", 20),
    ("Al-Muddaththir", 56),
    ("Al-Qiyamah", 40),
    ("Al-Insan", 31),
    ("Al-Mursalat", 50),
    ("An-Naba", 40),
    ("An-Nazi'at", 46),
    ("Abasa", 42),
    ("At-Takwir", 29),
    ("Al-Infitar", 19),
    ("Al-Mutaffifin", 36),
    ("Al-Inshiqaq", 25),
    ("Al-Buruj", 22),
    ("At-Tariq", 17),
    ("Al-A'la", 19),
    ("Al-Ghashiyah", 26),
    ("Al-Fajr", 30),
    ("Al-Balad", 20),
    ("Ash-Shams", 15),
    ("Al-Layl", 21),
    ("Ad-Duha", 11),
    ("Ash-Sharh", 8),
    ("At-Tin", 8),
    ("Al-Alaq", 19),
    ("Al-Qadr", 5),
    ("Al-Bayyinah", 8),
    ("Az-Zalzalah", 8),
    ("Al-Adiyat", 11),
    ("Al-Qari'ah", 11),
    ("At-Takathur", 8),
    ("Al-Asr", 3),
    ("Al-Humazah", 9),
    ("Al-Fil", 5),
    ("Quraysh", 4),
    ("Al-Ma'un", 7),
    ("Al-Kawthar", 3),
    ("Al-Kafirun", 6),
    ("An-Nasr", 3),
    ("Al-Masad", 5),
    ("Al-Ikhlas", 4),
    ("Al-Falaq", 5),
    ("An-Nas", 6),
];

/// One chapter of the text, with its position, transliterated name and
/// verse count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Surah {
    number: u16,
    name: &'static str,
    verse_count: u16,
}

impl Surah {
    /// Look up a chapter by its 1..=114 number.
    pub fn from_number(number: u16) -> Option<Self> {
        if number == 0 || number > SURAH_COUNT {
            return None;
        }
        let (name, verse_count) = SURAHS[usize::from(number) - 1];
        Some(Self {
            number,
            name,
            verse_count,
        })
    }

    /// All chapters in mushaf order.
    pub fn all() -> impl Iterator<Item = Surah> {
        (1..=SURAH_COUNT).filter_map(Surah::from_number)
    }

    pub fn number(self) -> u16 {
        self.number
    }

    pub fn name(self) -> &'static str {
        self.name
    }

    pub fn verse_count(self) -> u16 {
        self.verse_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_yields_every_chapter_in_order() {
        let surahs: Vec<Surah> = Surah::all().collect();
        assert_eq!(surahs.len(), usize::from(SURAH_COUNT));
        for (i, surah) in surahs.iter().enumerate() {
            assert_eq!(usize::from(surah.number()), i + 1);
            assert!(!surah.name().is_empty());
        }
    }

    #[test]
    fn verse_counts_sum_to_total() {
        let total: u32 = Surah::all().map(|s| u32::from(s.verse_count())).sum();
        assert_eq!(total, TOTAL_VERSE_COUNT);
    }

    #[test]
    fn known_chapters() {
        let fatihah = Surah::from_number(1).unwrap();
        assert_eq!(fatihah.name(), "Al-Fatihah");
        assert_eq!(fatihah.verse_count(), 7);

        let nas = Surah::from_number(114).unwrap();
        assert_eq!(nas.name(), "An-Nas");
        assert_eq!(nas.verse_count(), 6);
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert!(Surah::from_number(0).is_none());
        assert!(Surah::from_number(115).is_none());
    }
}
