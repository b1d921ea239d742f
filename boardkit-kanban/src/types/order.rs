//! Order keys for task positioning using fractional indexing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Position of a task within its status column.
///
/// Order keys are opaque strings that sort lexicographically (plain byte
/// comparison, no collation) to determine display order. This allows
/// inserting between existing tasks without renumbering the rest of the
/// column. An empty key is legal on read and sorts before everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderKey(String);

impl OrderKey {
    /// Key for the first task placed in an empty column
    pub fn first() -> Self {
        Self("a0".to_string())
    }

    /// Wrap an existing key string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Key sorting strictly after `last`.
    ///
    /// Incrementing the tail byte keeps keys short, but is only done
    /// inside a run of the increment alphabet; any other tail byte
    /// (including `'9'`, `'z'`, and out-of-alphabet bytes such as
    /// uppercase letters) extends the key instead, which sorts after
    /// unconditionally.
    pub fn after(last: &OrderKey) -> Self {
        match last.0.as_bytes().last() {
            None => Self::first(),
            Some(&tail @ (b'0'..=b'8' | b'a'..=b'y')) => {
                let mut out = last.0.clone();
                out.pop();
                out.push((tail + 1) as char);
                Self(out)
            }
            Some(_) => Self(format!("{}0", last.0)),
        }
    }

    /// Key sorting strictly between `before` and `after`.
    ///
    /// Requires `before < after`; callers validate bounds upstream.
    /// Returns `None` when no key this generator can emit fits inside
    /// the gap: the tightest case is `after == before + "0"`, where any
    /// key above `before` that stays below `after` would need a byte
    /// under `'0'`, outside the generation alphabet.
    pub fn between(before: &OrderKey, after: &OrderKey) -> Option<Self> {
        let b = before.0.as_bytes();
        let a = after.0.as_bytes();

        let common = b.iter().zip(a.iter()).take_while(|(x, y)| x == y).count();

        // Bounds diverge before either ends: anything extending `before`
        // stays below `after`, and a byte gap lets the key stay short
        if common < b.len() && common < a.len() {
            let low = b[common];
            let high = a[common];
            let mid = low + (high - low) / 2;
            if mid > low {
                let mut out = a[..common].to_vec();
                out.push(mid);
                if let Ok(key) = String::from_utf8(out) {
                    return Some(Self(key));
                }
                // The common prefix split a multi-byte char; extend instead
            }
            return Some(Self(format!("{}0", before.0)));
        }

        // `before` is a strict prefix of `after`; the first tail byte
        // decides whether anything fits below it
        let tail = &a[common..];
        match tail.first() {
            Some(&t) if t > b'0' => {
                let mut out = b.to_vec();
                out.push(b'0' + (t - b'0') / 2);
                String::from_utf8(out).ok().map(Self)
            }
            // "<before>0" only fits when `after` continues past the '0'
            Some(&b'0') if tail.len() > 1 => Some(Self(format!("{}0", before.0))),
            // after == before + "0", a tail byte below '0', or bounds
            // that never satisfied the precondition
            _ => None,
        }
    }

    /// Get the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key is the (legal but legacy) empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Narrow interface for synthesizing a key between two neighbors.
///
/// `None` on either side means no bound on that side. A returned key must
/// sort strictly inside the bounds; `None` means the generator has no such
/// key (which callers treat as an error, never as a best-effort key).
pub trait KeyGenerator {
    /// Produce a key strictly between `before` and `after`
    fn key_between(&self, before: Option<&OrderKey>, after: Option<&OrderKey>) -> Option<OrderKey>;
}

/// Midpoint-string key generator
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointKeys;

impl KeyGenerator for MidpointKeys {
    fn key_between(&self, before: Option<&OrderKey>, after: Option<&OrderKey>) -> Option<OrderKey> {
        match (before, after) {
            (None, None) => Some(OrderKey::first()),
            (Some(b), None) => Some(OrderKey::after(b)),
            (None, Some(a)) => OrderKey::between(&OrderKey::default(), a),
            (Some(b), Some(a)) => OrderKey::between(b, a),
        }
    }
}
