//! Dotted-path access into nested JSON documents.
//!
//! The Fleet API returns loosely-typed nested structures in several places
//! (most notably package-policy stream objects, whose shape varies by
//! integration). This module provides get/set/remove/move operations
//! addressed by dot-separated paths, with decimal segments indexing into
//! arrays on reads.
//!
//! # Invariants
//! - Read operations never fail; absence is reported as `None`.
//! - `set_path` creates intermediate objects for absent segments and only
//!   descends objects; a scalar in the way makes the call a no-op.
//! - `remove_path` does not prune parents left empty by the removal.

use serde_json::{Map, Value};

/// Dotted-path operations over a JSON object.
pub trait TreeAccess {
    /// Resolve `path` to a value. `None` if any intermediate segment is
    /// absent, is not a container, or an array index is unparsable or out
    /// of bounds.
    fn get_path(&self, path: &str) -> Option<&Value>;

    /// Like [`TreeAccess::get_path`], but additionally requires the
    /// resolved value to be a JSON object.
    fn get_object_path(&self, path: &str) -> Option<&Map<String, Value>>;

    /// Set the value at `path`, creating intermediate objects as needed and
    /// overwriting any terminal value.
    fn set_path(&mut self, path: &str, value: Value);

    /// Remove the terminal key at `path`, returning the removed value.
    /// No-op (returning `None`) when the path does not resolve.
    fn remove_path(&mut self, path: &str) -> Option<Value>;

    /// Move the value at `from` to `to`. No-op when the source is absent.
    fn move_path(&mut self, from: &str, to: &str);
}

impl TreeAccess for Map<String, Value> {
    fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => {
                    let index: usize = segment.parse().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    fn get_object_path(&self, path: &str) -> Option<&Map<String, Value>> {
        self.get_path(path)?.as_object()
    }

    fn set_path(&mut self, path: &str, value: Value) {
        match path.split_once('.') {
            None => {
                self.insert(path.to_string(), value);
            }
            Some((head, rest)) => {
                let entry = self
                    .entry(head.to_string())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Value::Object(map) = entry {
                    map.set_path(rest, value);
                }
            }
        }
    }

    fn remove_path(&mut self, path: &str) -> Option<Value> {
        match path.split_once('.') {
            None => self.remove(path),
            Some((head, rest)) => match self.get_mut(head) {
                Some(Value::Object(map)) => map.remove_path(rest),
                _ => None,
            },
        }
    }

    fn move_path(&mut self, from: &str, to: &str) {
        if let Some(value) = self.get_path(from).cloned() {
            self.set_path(to, value);
            self.remove_path(from);
        }
    }
}
