//! Natural, accent- and case-aware string collation for cell text
//!
//! Cell keys compare the way a browser's `localeCompare` with numeric
//! collation does for the common cases found in data tables:
//!
//! 1. **Primary**: runs of ASCII digits compare by numeric value, everything
//!    else by base letter ignoring case and accents. Character classes order
//!    whitespace < punctuation and symbols < numbers < letters.
//! 2. **Secondary**: unaccented before accented.
//! 3. **Tertiary**: lowercase before uppercase.
//!
//! A later level only decides when every earlier level ties across the whole
//! string. Strings that tie on all levels (`"01"` and `"1"`) are `Equal`, so a
//! stable sort keeps their relative order.
//!
//! ```
//! use tabula_tables::collate::compare;
//! use std::cmp::Ordering;
//!
//! assert_eq!(compare("2", "10"), Ordering::Less);
//! assert_eq!(compare("apple", "Banana"), Ordering::Less);
//! assert_eq!(compare("a", "A"), Ordering::Less);
//! ```

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary weight of one collation element; variant order is class order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Primary {
	Space,
	Symbol(String),
	// `len` first so longer digit strings (without leading zeros) sort later.
	Number { len: usize, digits: String },
	Letter(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
	primary: Primary,
	marks: Vec<char>,
	uppercase: bool,
}

impl Element {
	fn number(run: &str) -> Self {
		let digits = run.trim_start_matches('0');
		// all-zero runs collapse to a single "0"
		let digits = if digits.is_empty() { "0" } else { digits };
		Self {
			primary: Primary::Number {
				len: digits.len(),
				digits: digits.to_string(),
			},
			marks: Vec::new(),
			uppercase: false,
		}
	}

	/// Element for one decomposed base character
	fn character(c: char) -> Self {
		let base: String = c.to_lowercase().collect();
		let primary = if c.is_whitespace() {
			Primary::Space
		} else if c.is_alphanumeric() {
			Primary::Letter(base)
		} else {
			Primary::Symbol(base)
		};
		Self {
			primary,
			marks: Vec::new(),
			uppercase: c.is_uppercase(),
		}
	}

	/// Element for a combining mark with nothing to attach to
	fn bare_mark(mark: char) -> Self {
		Self {
			primary: Primary::Letter(String::new()),
			marks: vec![mark],
			uppercase: false,
		}
	}
}

/// Precomputed collation key for one string
///
/// Sorting by `SortKey` is equivalent to sorting with [`compare`] but
/// decomposes each string only once. The string is canonically decomposed
/// first, so precomposed and decomposed spellings of the same text collate
/// as equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey(Vec<Element>);

impl SortKey {
	/// Builds the key for `s`
	pub fn new(s: &str) -> Self {
		let mut elements: Vec<Element> = Vec::with_capacity(s.len());
		let mut digits = String::new();
		for c in s.nfd() {
			if c.is_ascii_digit() {
				digits.push(c);
				continue;
			}
			if !digits.is_empty() {
				elements.push(Element::number(&digits));
				digits.clear();
			}
			if is_combining_mark(c) {
				match elements.last_mut() {
					Some(previous) => previous.marks.push(c),
					None => elements.push(Element::bare_mark(c)),
				}
			} else {
				elements.push(Element::character(c));
			}
		}
		if !digits.is_empty() {
			elements.push(Element::number(&digits));
		}
		Self(elements)
	}
}

impl Ord for SortKey {
	fn cmp(&self, other: &Self) -> Ordering {
		let primary = self
			.0
			.iter()
			.map(|e| &e.primary)
			.cmp(other.0.iter().map(|e| &e.primary));
		let secondary = || {
			self.0
				.iter()
				.map(|e| &e.marks)
				.cmp(other.0.iter().map(|e| &e.marks))
		};
		let tertiary = || {
			self.0
				.iter()
				.map(|e| e.uppercase)
				.cmp(other.0.iter().map(|e| e.uppercase))
		};
		primary.then_with(secondary).then_with(tertiary)
	}
}

impl PartialOrd for SortKey {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Compares two strings with natural, accent- and case-aware collation
pub fn compare(a: &str, b: &str) -> Ordering {
	SortKey::new(a).cmp(&SortKey::new(b))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("1", "2", Ordering::Less)]
	#[case("2", "10", Ordering::Less)]
	#[case("10", "9", Ordering::Greater)]
	#[case("item 2", "item 10", Ordering::Less)]
	#[case("01", "1", Ordering::Equal)]
	#[case("000", "0", Ordering::Equal)]
	#[case("a", "B", Ordering::Less)]
	#[case("a", "A", Ordering::Less)]
	#[case("Apple", "apple", Ordering::Greater)]
	#[case("e", "é", Ordering::Less)]
	#[case("é", "f", Ordering::Less)]
	#[case("résumé", "resume", Ordering::Greater)]
	#[case("", "a", Ordering::Less)]
	#[case("a b", "ab", Ordering::Less)]
	#[case("-", "1", Ordering::Less)]
	#[case("9", "a", Ordering::Less)]
	#[case("Bob", "Bob", Ordering::Equal)]
	#[case("\u{e9}", "e\u{301}", Ordering::Equal)]
	#[case("e\u{301}b", "ea", Ordering::Greater)]
	#[case("e\u{301}b", "\u{e9}b", Ordering::Equal)]
	#[case("E\u{301}", "\u{e9}", Ordering::Greater)]
	#[case("\u{301}", "a", Ordering::Less)]
	fn test_compare(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
		assert_eq!(compare(a, b), expected);
		assert_eq!(compare(b, a), expected.reverse());
	}

	#[rstest]
	fn test_numeric_aware_sequence() {
		let mut keys = vec!["10", "2", "1"];
		keys.sort_by(|a, b| compare(a, b));
		assert_eq!(keys, vec!["1", "2", "10"]);
	}

	#[rstest]
	fn test_accent_loses_to_later_primary_difference() {
		// "éa" vs "eb": primary decides on the second letter before accents are considered
		assert_eq!(compare("éa", "eb"), Ordering::Less);
	}

	#[rstest]
	fn test_decomposed_text_sorts_by_base_letters() {
		let mut keys = vec!["e\u{301}b", "ea", "ec"];
		keys.sort_by(|a, b| compare(a, b));
		assert_eq!(keys, vec!["ea", "e\u{301}b", "ec"]);
	}

	#[rstest]
	fn test_long_numbers_do_not_overflow() {
		let big = "123456789012345678901234567890";
		let bigger = "223456789012345678901234567890";
		assert_eq!(compare(big, bigger), Ordering::Less);
	}
}
