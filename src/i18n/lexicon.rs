/// The lexical tables and connector words for one language.
///
/// A `Lexicon` is the whole per-language strategy used by the converter:
/// adding a language means adding one of these, not editing the algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    /// Word for zero, returned when the whole input is 0
    pub zero: &'static str,

    /// Words for 0-19 (index = value), including the irregular teens
    pub units: [&'static str; 20],

    /// Words for multiples of ten (index = tens digit, index 0 never composed)
    pub tens: [&'static str; 10],

    /// Magnitude word for 10^6
    pub million: &'static str,

    /// Magnitude word for 10^3
    pub thousand: &'static str,

    /// Magnitude word for 10^2
    pub hundred: &'static str,

    /// Drop the leading "one" when the thousands multiplier is 1
    pub elide_one_thousand: bool,

    /// Drop the leading "one" when the hundreds multiplier is 1
    pub elide_one_hundred: bool,
}

impl Lexicon {
    /// Word for a value in 0..20, `None` outside the table.
    pub fn unit(&self, n: u64) -> Option<&'static str> {
        usize::try_from(n).ok().and_then(|i| self.units.get(i).copied())
    }

    /// Word for `digit * 10`, `None` for a digit outside 0..10.
    pub fn tens(&self, digit: u64) -> Option<&'static str> {
        usize::try_from(digit).ok().and_then(|i| self.tens.get(i).copied())
    }
}

// ==================== French ====================

/// French tables. Compound forms are space separated ("dix sept", "quatre vingt").
pub const FRENCH_LEXICON: Lexicon = Lexicon {
    zero: "zero",
    units: [
        "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix",
        "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix sept", "dix huit",
        "dix neuf",
    ],
    tens: [
        "zéro",
        "dix",
        "vingt",
        "trente",
        "quarante",
        "cinquante",
        "soixante",
        "soixante dix",
        "quatre vingt",
        "quatre vingt dix",
    ],
    million: "million",
    thousand: "mille",
    hundred: "cent",
    elide_one_thousand: true,
    elide_one_hundred: true,
};

// ==================== English ====================

/// English tables.
pub const ENGLISH_LEXICON: Lexicon = Lexicon {
    zero: "zero",
    units: [
        "zero",
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    tens: [
        "zero", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty",
        "ninety",
    ],
    million: "million",
    thousand: "thousand",
    hundred: "hundred",
    // English keeps "one thousand" but still says a bare "hundred"
    elide_one_thousand: false,
    elide_one_hundred: true,
};
