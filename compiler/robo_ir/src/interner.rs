//! String interner for identifiers.
//!
//! The front end interns every identifier while building the tree; after
//! that the interner is frozen inside the [`Program`] and only read, so it
//! can be shared across threads without locking.
//!
//! [`Program`]: crate::Program

use rustc_hash::FxHashMap;

use super::Name;

/// Append-only string table mapping identifiers to [`Name`]s.
#[derive(Clone, Default)]
pub struct StringInterner {
    /// Map from string content to its name.
    map: FxHashMap<Box<str>, Name>,
    /// Storage for string contents (indexed by `Name`).
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its existing name if already present.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let name = Name::from_raw(self.strings.len() as u32);
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        name
    }

    /// Look up the name of an already-interned string.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Resolve a name to its text.
    ///
    /// Names not produced by this interner resolve to `"<unknown>"`.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings
            .get(name.index())
            .map_or("<unknown>", |s| s.as_ref())
    }

    /// Whether `name` was produced by this interner.
    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        name.index() < self.strings.len()
    }

    /// Every interned string with its name, in interning order.
    pub fn entries(&self) -> impl Iterator<Item = (Name, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(index, s)| (Name::from_raw(index as u32), s.as_ref()))
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.strings.iter()).finish()
    }
}

impl PartialEq for StringInterner {
    fn eq(&self, other: &Self) -> bool {
        self.strings == other.strings
    }
}

impl Eq for StringInterner {}

// Serialized as the plain string table; `Name`s are positions in it.
#[cfg(feature = "serde")]
impl serde::Serialize for StringInterner {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.strings.len()))?;
        for s in &self.strings {
            seq.serialize_element(s.as_ref())?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StringInterner {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        let mut interner = StringInterner::new();
        for (index, s) in strings.iter().enumerate() {
            let name = interner.intern(s);
            if name.index() != index {
                return Err(serde::de::Error::custom(format!(
                    "duplicate identifier `{s}` in string table"
                )));
            }
        }
        Ok(interner)
    }
}
