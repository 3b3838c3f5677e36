// core/src/initialism.rs
//
// Syllable-start detection for unsegmented pinyin strings.
//
// Typists abbreviate words by their syllable initials ("nihao" -> "nh"),
// but the input buffer carries no separators, so syllable starts have to
// be inferred. The detection here is a bounded heuristic, not a full
// segmenter: a letter opens a new syllable when it is a legal initial,
// is not the trailing half of a sh/zh/ch digraph, and a vowel nucleus
// follows within a short window.

use phf::phf_set;

/// Vowel letters, including the `v` placeholder typed for ü.
static VOWELS: phf::Set<char> = phf_set! {'a', 'e', 'i', 'o', 'u', 'v'};

/// Letters that can open a pinyin syllable. Vowels and `v` never do.
static INITIALS: phf::Set<char> = phf_set! {
    'b', 'p', 'm', 'f', 'd', 't', 'n', 'l', 'g', 'k', 'h',
    'j', 'q', 'x', 'r', 'z', 'c', 's', 'y', 'w',
};

/// Longest distance (inclusive of the start letter itself) within which a
/// syllable must show its vowel nucleus.
const VOWEL_LOOKAHEAD: usize = 5;

/// True if `ch` is a pinyin vowel letter (a, e, i, o, u, v).
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// True if a vowel occurs in `chars[from..from + VOWEL_LOOKAHEAD)`.
fn has_vowel_soon(chars: &[char], from: usize) -> bool {
    let end = chars.len().min(from + VOWEL_LOOKAHEAD);
    chars[from..end].iter().any(|c| is_vowel(*c))
}

/// True if `chars[i]` is the `h` completing a sh/zh/ch digraph. The
/// digraph counts as one initial unit anchored at `i - 1`.
fn is_digraph_second(chars: &[char], i: usize) -> bool {
    i > 0 && chars[i] == 'h' && matches!(chars[i - 1], 's' | 'z' | 'c')
}

/// True if position `i > 0` should be treated as a new syllable start.
fn is_syllable_start(chars: &[char], i: usize) -> bool {
    INITIALS.contains(&chars[i]) && !is_digraph_second(chars, i) && has_vowel_soon(chars, i)
}

/// Extract the initialism of an unsegmented romanization string: the first
/// letter of the input plus the first letter of every detected syllable
/// start after it.
///
/// ```
/// use pinmatch_core::initialism::initialism;
/// assert_eq!(initialism("nihao"), "nh");
/// assert_eq!(initialism("beijing"), "bj");
/// assert_eq!(initialism(""), "");
/// ```
pub fn initialism(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let Some(first) = chars.first() else {
        return String::new();
    };

    let mut out = String::new();
    out.push(*first);
    for i in 1..chars.len() {
        if is_syllable_start(&chars, i) {
            out.push(chars[i]);
        }
    }
    out
}
