//! Lookup-with-default helper shared by every reference table.

/// What a table returns when a key is not one of its entries.
#[derive(Debug, Clone, Copy)]
pub enum Fallback<V> {
    /// Substitute a named entry of the same table (e.g. `"Chicago"`).
    Entry(&'static str),
    /// Substitute a bare value that is not tied to any entry.
    Value(V),
}

/// Immutable keyed table with a documented fallback.
///
/// Tables are small (a dozen entries at most), so entries are kept in
/// declaration order and searched linearly. Order matters: it is the order
/// in which keys are listed to users.
#[derive(Debug)]
pub struct ReferenceTable<V: 'static> {
    /// Human-readable table name used in log messages.
    pub name: &'static str,
    /// Entries in display order.
    pub entries: &'static [(&'static str, V)],
    /// Substitution applied to unknown keys.
    pub fallback: Fallback<V>,
}

/// Outcome of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a, V> {
    /// Key the value belongs to: the requested key on a hit, the fallback
    /// entry's key on a substituted entry, or the requested key when a bare
    /// fallback value was used.
    pub key: &'a str,
    /// Looked-up or substituted value.
    pub value: V,
    /// Whether the fallback was applied.
    pub defaulted: bool,
}

impl<V: Copy> ReferenceTable<V> {
    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Returns `true` if `key` is an entry of this table.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterator over entry keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Looks up `key`, substituting the table's fallback on a miss.
    ///
    /// Never fails. A fallback pointing at a key that is itself missing from
    /// the table is a programming error caught by the table tests; at
    /// runtime it degrades to the first entry.
    ///
    /// # Arguments
    ///
    /// * `key` - Requested key, typically straight from user input
    ///
    /// # Returns
    ///
    /// The resolved key, value and whether the fallback applied.
    pub fn resolve<'a>(&self, key: &'a str) -> Resolved<'a, V> {
        if let Some(value) = self.get(key) {
            return Resolved {
                key,
                value,
                defaulted: false,
            };
        }

        tracing::debug!(table = self.name, key, "unknown key, using fallback");
        let key = match self.fallback {
            Fallback::Entry(fallback_key) => fallback_key,
            Fallback::Value(_) => key,
        };
        Resolved {
            key,
            value: self.fallback_value(),
            defaulted: true,
        }
    }

    /// The value an unknown key resolves to.
    pub fn fallback_value(&self) -> V {
        match self.fallback {
            Fallback::Entry(key) => self
                .get(key)
                .or_else(|| self.entries.first().map(|(_, v)| *v))
                .unwrap_or_else(|| unreachable!("reference table `{}` has no entries", self.name)),
            Fallback::Value(value) => value,
        }
    }
}
