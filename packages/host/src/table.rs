//! Name-to-entry-point registration for exposed native operations.
//!
//! The host runtime calls operations by name with a fixed, pre-registered
//! argument count. The table is built once at module load, then published;
//! publishing seals it, so only explicitly registered operations are ever
//! reachable and no dynamic lookup happens later.

use std::collections::BTreeMap;
use std::fmt;

use seam_word::{BoundaryWord, HostRef};

use crate::error::DispatchError;

/// A native entry point: host heap access, native-side state, argument
/// handles in registration order. The result comes back already encoded as
/// a boundary word.
pub type EntryFn<H, C> = fn(&mut H, &mut C, &[HostRef]) -> BoundaryWord;

/// One exposed operation.
pub struct EntryPoint<H, C> {
    /// The externally callable name.
    pub name: &'static str,
    /// Number of argument handles the entry expects.
    pub arity: usize,
    /// The native function.
    pub func: EntryFn<H, C>,
}

impl<H, C> Clone for EntryPoint<H, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, C> Copy for EntryPoint<H, C> {}

impl<H, C> fmt::Debug for EntryPoint<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// The set of operations reachable from the host runtime.
pub struct CallTable<H, C> {
    entries: BTreeMap<&'static str, EntryPoint<H, C>>,
    published: bool,
}

impl<H, C> CallTable<H, C> {
    /// Create an empty, unpublished table.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            published: false,
        }
    }

    /// Register one operation. Fails on duplicate names and after
    /// [`CallTable::publish`].
    pub fn register(&mut self, entry: EntryPoint<H, C>) -> Result<(), DispatchError> {
        if self.published {
            return Err(DispatchError::AlreadyPublished);
        }
        if self.entries.contains_key(entry.name) {
            return Err(DispatchError::Duplicate { name: entry.name });
        }
        tracing::debug!(name = entry.name, arity = entry.arity, "registered operation");
        self.entries.insert(entry.name, entry);
        Ok(())
    }

    /// The one-time module load hook: seal the table. After this, only the
    /// registered operations are reachable, and only once.
    pub fn publish(&mut self) -> Result<(), DispatchError> {
        if self.published {
            return Err(DispatchError::AlreadyPublished);
        }
        self.published = true;
        tracing::info!(operations = self.entries.len(), "call table published");
        Ok(())
    }

    /// Whether the table has been published.
    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Look up an operation by name. Nothing is reachable before publish.
    pub fn lookup(&self, name: &str) -> Result<&EntryPoint<H, C>, DispatchError> {
        if !self.published {
            return Err(DispatchError::NotPublished);
        }
        self.entries
            .get(name)
            .ok_or_else(|| DispatchError::UnknownOperation {
                name: name.to_string(),
            })
    }

    /// Registered operation names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H, C> Default for CallTable<H, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockHost;

    fn nil(heap: &mut MockHost, _ctx: &mut (), _args: &[HostRef]) -> BoundaryWord {
        BoundaryWord::value(heap.unit_ref())
    }

    fn entry(name: &'static str, arity: usize) -> EntryPoint<MockHost, ()> {
        EntryPoint {
            name,
            arity,
            func: nil,
        }
    }

    #[test]
    fn register_then_publish_then_lookup() {
        let mut table = CallTable::new();
        table.register(entry("window_open", 1)).unwrap();
        table.register(entry("window_close", 0)).unwrap();

        // Nothing is reachable before publish.
        assert_eq!(
            table.lookup("window_open").unwrap_err(),
            DispatchError::NotPublished
        );

        table.publish().unwrap();
        assert!(table.is_published());
        assert_eq!(table.lookup("window_open").unwrap().arity, 1);
        assert_eq!(
            table.names().collect::<Vec<_>>(),
            vec!["window_close", "window_open"]
        );
    }

    #[test]
    fn unknown_names_are_not_reachable() {
        let mut table: CallTable<MockHost, ()> = CallTable::new();
        table.publish().unwrap();
        assert_eq!(
            table.lookup("window_open").unwrap_err(),
            DispatchError::UnknownOperation {
                name: "window_open".to_string()
            }
        );
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut table = CallTable::new();
        table.register(entry("window_open", 1)).unwrap();
        assert_eq!(
            table.register(entry("window_open", 2)).unwrap_err(),
            DispatchError::Duplicate {
                name: "window_open"
            }
        );
    }

    #[test]
    fn publish_is_one_time_and_seals_the_table() {
        let mut table = CallTable::new();
        table.register(entry("window_open", 1)).unwrap();
        table.publish().unwrap();

        assert_eq!(
            table.publish().unwrap_err(),
            DispatchError::AlreadyPublished
        );
        assert_eq!(
            table.register(entry("late", 0)).unwrap_err(),
            DispatchError::AlreadyPublished
        );
        assert_eq!(table.len(), 1);
    }
}
