use std::cmp::Ordering;

/// Canonical ordering of the Limbu letters used for sorting and prefix search.
///
/// Letters of the Limbu block that are not listed here (U+1909, U+190A, U+191A,
/// vowel signs, digits) are treated as unknown and sort after every listed letter.
pub const LIMBU_ALPHABET: [char; 26] = [
    '\u{1900}', // ᤀ
    '\u{1901}', // ᤁ
    '\u{1902}', // ᤂ
    '\u{1903}', // ᤃ
    '\u{1904}', // ᤄ
    '\u{1905}', // ᤅ
    '\u{1906}', // ᤆ
    '\u{1907}', // ᤇ
    '\u{1908}', // ᤈ
    '\u{190B}', // ᤋ
    '\u{190C}', // ᤌ
    '\u{190D}', // ᤍ
    '\u{190E}', // ᤎ
    '\u{190F}', // ᤏ
    '\u{1910}', // ᤐ
    '\u{1911}', // ᤑ
    '\u{1912}', // ᤒ
    '\u{1913}', // ᤓ
    '\u{1914}', // ᤔ
    '\u{1915}', // ᤕ
    '\u{1916}', // ᤖ
    '\u{1917}', // ᤗ
    '\u{1918}', // ᤘ
    '\u{1919}', // ᤙ
    '\u{191B}', // ᤛ
    '\u{191C}', // ᤜ
];

/// Rank returned for characters missing from [`LIMBU_ALPHABET`].
pub const UNRANKED: usize = LIMBU_ALPHABET.len();

const BLOCK_START: u32 = 0x1900;
const BLOCK_LEN: usize = 0x20;

// Dense lookup over the consonant range so `rank` never scans the alphabet.
const RANKS: [usize; BLOCK_LEN] = build_ranks();

const fn build_ranks() -> [usize; BLOCK_LEN] {
    let mut ranks = [UNRANKED; BLOCK_LEN];
    let mut i = 0;
    while i < LIMBU_ALPHABET.len() {
        let offset = (LIMBU_ALPHABET[i] as u32 - BLOCK_START) as usize;
        ranks[offset] = i;
        i += 1;
    }
    ranks
}

/// Position of `ch` in [`LIMBU_ALPHABET`], or [`UNRANKED`] if it is not listed.
pub fn rank(ch: char) -> usize {
    let code = ch as u32;
    if (BLOCK_START..BLOCK_START + BLOCK_LEN as u32).contains(&code) {
        RANKS[(code - BLOCK_START) as usize]
    } else {
        UNRANKED
    }
}

/// Per-character sort key. Unknown characters share [`UNRANKED`] and fall back
/// to code point order among themselves, so distinct strings never compare equal.
#[inline]
fn sort_key(ch: char) -> (usize, char) {
    (rank(ch), ch)
}

/// Compares two words character by character under the Limbu collation.
///
/// A strict prefix sorts before any of its extensions, which makes the empty
/// string the minimum.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars().map(sort_key).cmp(b.chars().map(sort_key))
}

/// Compares a single pair of characters under the Limbu collation.
pub fn compare_chars(a: char, b: char) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_follows_alphabet_order() {
        for (i, ch) in LIMBU_ALPHABET.iter().enumerate() {
            assert_eq!(rank(*ch), i);
        }
        for pair in LIMBU_ALPHABET.windows(2) {
            assert!(rank(pair[0]) < rank(pair[1]));
        }
    }

    #[test]
    fn test_unknown_characters_rank_last() {
        assert_eq!(rank('a'), UNRANKED);
        assert_eq!(rank('\u{1909}'), UNRANKED);
        assert_eq!(rank('\u{1920}'), UNRANKED);
        assert_eq!(rank('क'), UNRANKED);
        assert!(LIMBU_ALPHABET.iter().all(|ch| rank(*ch) < UNRANKED));
    }

    #[test]
    fn test_compare_differs_from_code_point_order() {
        // U+1909 is below U+190B by code point but is not in the alphabet
        assert!('\u{1909}' < '\u{190B}');
        assert_eq!(compare("\u{1909}", "\u{190B}"), Ordering::Greater);
        assert_eq!(compare("\u{190B}", "\u{1909}"), Ordering::Less);
    }

    #[test]
    fn test_compare_prefix_and_empty() {
        assert_eq!(compare("ᤀ", "ᤀᤁ"), Ordering::Less);
        assert_eq!(compare("ᤀᤁ", "ᤀ"), Ordering::Greater);
        assert_eq!(compare("", "ᤀ"), Ordering::Less);
        assert_eq!(compare("ᤀ", ""), Ordering::Greater);
        assert_eq!(compare("", ""), Ordering::Equal);
        assert_eq!(compare("ᤀᤂ", "ᤀᤂ"), Ordering::Equal);
    }

    #[test]
    fn test_compare_first_difference_decides() {
        assert_eq!(compare("ᤀᤁ", "ᤀᤂ"), Ordering::Less);
        assert_eq!(compare("ᤀᤜᤜ", "ᤁᤀ"), Ordering::Less);
        assert_eq!(compare("ᤀx", "ᤀᤜ"), Ordering::Greater);
    }

    #[test]
    fn test_unknown_characters_stay_distinct() {
        assert_ne!(compare("ᤀa", "ᤀb"), Ordering::Equal);
        assert_eq!(compare("ᤀa", "ᤀb"), Ordering::Less);
        assert_eq!(compare_chars('\u{1909}', '\u{190A}'), Ordering::Less);
    }

    #[test]
    fn test_compare_is_a_total_order() {
        let words = [
            "", "ᤀ", "ᤀᤁ", "ᤀᤂ", "ᤁᤀ", "ᤜ", "\u{1909}", "ᤀ\u{1920}", "ᤀa", "abc", "ᤛᤀ",
        ];
        for a in &words {
            for b in &words {
                assert_eq!(compare(a, b), compare(b, a).reverse(), "{a:?} vs {b:?}");
                assert_eq!(compare(a, b) == Ordering::Equal, a == b);
                for c in &words {
                    if compare(a, b) == Ordering::Less && compare(b, c) == Ordering::Less {
                        assert_eq!(compare(a, c), Ordering::Less, "{a:?} < {b:?} < {c:?}");
                    }
                }
            }
        }
    }
}
