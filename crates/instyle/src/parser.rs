//! The tag-rendering automaton.
//!
//! The renderer scans its input once with a single byte cursor. At each `[`
//! it checks for an opening tag (`[~name+name]`) or a closing tag (`[/]`);
//! everything else is copied through unchanged.
//!
//! Open scopes are kept on a [`NestingStack`] of at most [`MAX_DEPTH`] resolved
//! sequences. Closing a scope emits a reset followed by every sequence still
//! open, so the text after an inner scope gets its parents' style back.
//!
//! Malformed tags are never an error. A tag that fails to parse leaves the
//! cursor on its `[`, which is emitted as a literal character before scanning
//! resumes at the next position.
//!
//! All markers are ASCII, so matching them byte by byte can never land inside
//! a multi-byte UTF-8 character, and literal runs can be copied as slices.

use crate::registry::{StyleKey, StyleRegistry};

/// Maximum number of nested open scopes.
pub const MAX_DEPTH: usize = 5;

/// The SGR reset sequence.
pub const RESET: &str = "\x1b[0m";

const INTRODUCER: &str = "\x1b[";
const TERMINATOR: char = 'm';

const OPENING: &[u8] = b"[~";
const OPENING_CLOSE: &[u8] = b"]";
const SEGMENT_SEPARATOR: char = '+';
const CLOSING: &[u8] = b"[/]";

/// Fixed-capacity stack of resolved sequences, indexed by depth.
#[derive(Debug, Default)]
struct NestingStack {
    slots: [Option<String>; MAX_DEPTH],
    depth: usize,
}

impl NestingStack {
    fn new() -> Self {
        Self::default()
    }

    fn depth(&self) -> usize {
        self.depth
    }

    fn is_full(&self) -> bool {
        self.depth == MAX_DEPTH
    }

    /// Stores `sequence` at the current depth and enters the next level.
    /// Callers check [`is_full`](Self::is_full) first.
    fn push(&mut self, sequence: String) {
        debug_assert!(!self.is_full(), "pushed past the nesting limit");
        self.slots[self.depth] = Some(sequence);
        self.depth += 1;
    }

    /// Leaves the innermost level, clearing its slot.
    fn pop(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
            self.slots[self.depth] = None;
        }
    }

    /// Closes every open level.
    fn close_all(&mut self) {
        self.slots = Default::default();
        self.depth = 0;
    }

    /// True if a scope opened at the root level is still open.
    fn root_open(&self) -> bool {
        self.slots[0].is_some()
    }

    /// The sequences of all open levels, outermost first.
    fn active(&self) -> impl Iterator<Item = &str> {
        self.slots[..self.depth].iter().flatten().map(String::as_str)
    }
}

/// Renders `input`, replacing tags with escape sequences resolved through
/// `registry`.
///
/// The output always starts with a reset. If a scope is left open at the end
/// of the input a single trailing reset is appended.
pub(crate) fn render(registry: &StyleRegistry, input: &str) -> String {
    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len() * 4 / 3 + RESET.len() + 5);
    output.push_str(RESET);

    let mut stack = NestingStack::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != OPENING[0] {
            i += 1;
            continue;
        }

        if check_sequence(OPENING, bytes, i).is_some() {
            if stack.is_full() {
                log::debug!(
                    "opening tag at byte {} ignored: nesting limit of {} reached",
                    i,
                    MAX_DEPTH
                );
            } else if let Some((sequence, end)) = parse_opening(registry, input, i) {
                output.push_str(&input[literal_start..i]);
                output.push_str(&sequence);
                stack.push(sequence);

                i = end + 1;
                literal_start = i;
                continue;
            }
        }

        if stack.depth() > 0 {
            if let Some(end) = check_sequence(CLOSING, bytes, i) {
                output.push_str(&input[literal_start..i]);
                output.push_str(RESET);
                stack.pop();

                if end + 1 == bytes.len() {
                    stack.close_all();
                }

                for sequence in stack.active() {
                    output.push_str(sequence);
                }

                i = end + 1;
                literal_start = i;
                continue;
            }
        }

        i += 1;
    }

    output.push_str(&input[literal_start..]);

    if stack.root_open() {
        output.push_str(RESET);
    }

    output
}

/// Parses the opening tag whose marker starts at byte `idx`.
///
/// Returns the resolved escape sequence and the byte index of the tag's
/// closing `]`, or `None` if the tag is invalid.
fn parse_opening(registry: &StyleRegistry, input: &str, idx: usize) -> Option<(String, usize)> {
    let after = check_sequence(OPENING, input.as_bytes(), idx)?;
    let body_start = after + 1;

    let mut sequence = String::with_capacity(12);
    sequence.push_str(INTRODUCER);

    let mut key = StyleKey::empty();
    let mut numeric = true;
    let mut first = true;

    for (offset, c) in input[body_start..].char_indices() {
        let pos = body_start + offset;
        let is_close = check_sequence(OPENING_CLOSE, input.as_bytes(), pos).is_some();

        if !is_close && c != SEGMENT_SEPARATOR {
            if !c.is_ascii_digit() {
                numeric = false;
            }
            if !key.push(c) {
                log::debug!("tag at byte {} rejected: segment name too long", idx);
                return None;
            }
            continue;
        }

        if key.is_empty() {
            log::debug!("tag at byte {} rejected: empty segment", idx);
            return None;
        }

        if !first {
            sequence.push(';');
        }
        first = false;

        if let Some(codes) = registry.get(&key) {
            sequence.push_str(codes);
        } else if numeric {
            sequence.extend(key.as_chars());
        } else {
            log::debug!("tag at byte {} rejected: unknown style {:?}", idx, key);
            return None;
        }

        if is_close {
            sequence.push(TERMINATOR);
            return Some((sequence, pos));
        }

        key.clear();
        numeric = true;
    }

    log::debug!("tag at byte {} rejected: unterminated", idx);
    None
}

/// Checks whether `sequence` occurs in `bytes` starting at `idx`.
///
/// Returns the index of the sequence's last byte. A sequence that would run
/// past the end of `bytes` never matches.
fn check_sequence(sequence: &[u8], bytes: &[u8], idx: usize) -> Option<usize> {
    let end = idx.checked_add(sequence.len())?;
    match bytes.get(idx..end) {
        Some(window) if !sequence.is_empty() && window == sequence => Some(end - 1),
        _ => None,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    // Text that contains no `[`, so no marker can ever match.
    fn plain_text() -> impl Strategy<Value = String> {
        "[^\\[]{0,60}"
    }

    fn builtin_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(
            crate::registry::BUILTIN_STYLES
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>(),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn markerless_input_passes_through(content in plain_text()) {
            let out = render(&StyleRegistry::with_builtins(), &content);
            prop_assert_eq!(out, format!("{}{}", RESET, content));
        }

        #[test]
        fn never_panics(input in "[\\[\\]~/+a-z0-9 é]{0,80}") {
            let out = render(&StyleRegistry::with_builtins(), &input);
            prop_assert!(out.starts_with(RESET));
        }

        #[test]
        fn closed_scope_has_no_trailing_reset(
            name in builtin_name(),
            content in plain_text(),
        ) {
            let registry = StyleRegistry::with_builtins();
            let input = format!("[~{}]{}[/]", name, content);
            let expected = format!(
                "{}\x1b[{}m{}{}",
                RESET,
                registry.resolve(name).unwrap(),
                content,
                RESET
            );
            prop_assert_eq!(render(&registry, &input), expected);
        }

        #[test]
        fn unclosed_scopes_end_with_one_reset(
            names in prop::collection::vec(builtin_name(), 1..=MAX_DEPTH),
            content in plain_text(),
        ) {
            let mut input = String::new();
            for name in &names {
                input.push_str(&format!("[~{}]", name));
            }
            input.push_str(&content);

            let out = render(&StyleRegistry::with_builtins(), &input);
            let tail = format!("{}{}", content, RESET);
            let double_reset = format!("{}{}", RESET, RESET);
            prop_assert!(out.ends_with(&tail), "got {:?}", out);
            prop_assert!(content.is_empty() || !out.ends_with(&double_reset), "got {:?}", out);
        }

        #[test]
        fn numeric_segments_used_verbatim(codes in prop::collection::vec(0u16..1000, 1..4)) {
            let body = codes.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            let input = format!("[~{}]x[/]", body.join("+"));
            let out = render(&StyleRegistry::empty(), &input);
            prop_assert_eq!(out, format!("{}\x1b[{}mx{}", RESET, body.join(";"), RESET));
        }
    }
}
