//! Named style storage.
//!
//! Style names live in a fixed-size [`StyleKey`] slot so lookups while
//! rendering never allocate. Names longer than [`MAX_NAME_LEN`] characters are
//! truncated when registered.

use std::collections::HashMap;
use std::fmt;

/// Maximum length of a style name, in characters.
pub const MAX_NAME_LEN: usize = 16;

/// The built-in palette registered by [`StyleRegistry::with_builtins`].
pub const BUILTIN_STYLES: &[(&str, &str)] = &[
    ("plain", "22"),
    ("reset", "0"),
    ("bold", "1"),
    ("faint", "2"),
    ("italic", "3"),
    ("underline", "4"),
    ("blink", "5"),
    ("strike", "6"),
    ("black", "30"),
    ("red", "31"),
    ("green", "32"),
    ("yellow", "33"),
    ("blue", "34"),
    ("magenta", "35"),
    ("cyan", "36"),
    ("white", "37"),
    ("default", "39"),
    ("bg-black", "40"),
    ("bg-red", "41"),
    ("bg-green", "42"),
    ("bg-yellow", "43"),
    ("bg-blue", "44"),
    ("bg-magenta", "45"),
    ("bg-cyan", "46"),
    ("bg-white", "47"),
    ("bg-default", "49"),
    ("light-black", "90"),
    ("light-red", "91"),
    ("light-green", "92"),
    ("light-yellow", "93"),
    ("light-blue", "94"),
    ("light-magenta", "95"),
    ("light-cyan", "96"),
    ("light-white", "97"),
    ("bg-light-black", "100"),
    ("bg-light-red", "101"),
    ("bg-light-green", "102"),
    ("bg-light-yellow", "103"),
    ("bg-light-blue", "104"),
    ("bg-light-magenta", "105"),
    ("bg-light-cyan", "106"),
    ("bg-light-white", "107"),
];

/// A style name stored in a fixed-size slot.
///
/// Unused slots are zero-filled and the length is part of the key, so a name
/// never compares equal to a longer name that happens to end in `'\0'`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleKey {
    chars: [char; MAX_NAME_LEN],
    len: u8,
}

impl StyleKey {
    /// Creates an empty key.
    pub const fn empty() -> Self {
        Self {
            chars: ['\0'; MAX_NAME_LEN],
            len: 0,
        }
    }

    /// Creates a key from `name`, keeping at most [`MAX_NAME_LEN`] characters.
    pub fn new(name: &str) -> Self {
        let mut key = Self::empty();
        for c in name.chars().take(MAX_NAME_LEN) {
            key.push(c);
        }
        key
    }

    /// Appends a character. Returns `false`, leaving the key unchanged, when
    /// the key is already full.
    pub fn push(&mut self, c: char) -> bool {
        let len = self.len as usize;
        if len == MAX_NAME_LEN {
            return false;
        }
        self.chars[len] = c;
        self.len += 1;
        true
    }

    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The stored characters.
    pub fn as_chars(&self) -> &[char] {
        &self.chars[..self.len()]
    }
}

impl Default for StyleKey {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_chars().iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl fmt::Debug for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StyleKey({:?})", self.to_string())
    }
}

impl From<&str> for StyleKey {
    fn from(name: &str) -> Self {
        StyleKey::new(name)
    }
}

/// Map of style names to escape-code bodies.
///
/// A code body is the parameter part of an SGR sequence, without the
/// `ESC [` introducer or the `m` terminator: `"1"`, `"31"`, `"1;31"`.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    named: HashMap<StyleKey, String>,
}

impl StyleRegistry {
    /// Creates a registry with no styles at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in palette.
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            named: HashMap::with_capacity(BUILTIN_STYLES.len()),
        };
        for (name, codes) in BUILTIN_STYLES {
            registry.named.insert(StyleKey::new(name), codes.to_string());
        }
        registry
    }

    /// Inserts or replaces a style.
    ///
    /// `name` is truncated to [`MAX_NAME_LEN`] characters. Neither the name
    /// nor the body is validated.
    pub fn register(&mut self, name: &str, codes: impl Into<String>) {
        let key = StyleKey::new(name);
        let codes = codes.into();
        log::trace!("registering style {:?} as {:?}", key, codes);
        self.named.insert(key, codes);
    }

    /// Looks up the code body registered under `name`.
    ///
    /// Names longer than [`MAX_NAME_LEN`] are truncated before the lookup,
    /// matching how they were stored.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.get(&StyleKey::new(name))
    }

    /// Looks up a key directly.
    pub fn get(&self, key: &StyleKey) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named.contains_key(&StyleKey::new(name))
    }

    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }
}
