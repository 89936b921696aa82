//! Argument splitting for variadic calls.
//!
//! A call arrives as an ordered sequence of arguments where the last element
//! may be a keyword-style options mapping. [`Invocation`] separates the two:
//! everything before a trailing mapping is positional, the mapping itself is
//! copied into an owned *working options* mapping that later aliasing may
//! rewrite. The caller-supplied sequence is kept verbatim and is never
//! touched by that rewriting.

/// One element of a variadic call.
///
/// The original dynamic design sniffed the last argument at runtime to decide
/// whether it was an options mapping. Here the distinction is carried in the
/// type, so a mapping is an explicit, statically visible element.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<T> {
    /// A positional value.
    Value(T),
    /// A keyword-style options mapping, insertion order preserved.
    Options(Vec<(String, T)>),
}

impl<T> Arg<T> {
    /// A positional value.
    pub fn value(value: T) -> Self {
        Arg::Value(value)
    }

    /// An options mapping built from `(key, value)` entries, keeping the
    /// order they are given in.
    pub fn options<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        Arg::Options(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A split invocation: positional values plus an owned working copy of the
/// trailing options mapping, if one was supplied.
///
/// A mapping is only treated as options when it is the *last* element; a
/// mapping anywhere else in the sequence stays positional.
#[derive(Debug, Clone)]
pub struct Invocation<T> {
    raw: Vec<Arg<T>>,
    positionals: Vec<Arg<T>>,
    options: Vec<(String, T)>,
    supplied: Vec<String>,
    has_options: bool,
}

impl<T: Clone> Invocation<T> {
    /// Split `args` into positionals and working options.
    ///
    /// The trailing mapping, when present, is copied rather than aliased:
    /// later in-place key moves on the working options must not show through
    /// [`Invocation::raw`].
    pub fn new(args: Vec<Arg<T>>) -> Self {
        let mut positionals = args.clone();
        let (options, has_options) = match positionals.pop() {
            Some(Arg::Options(map)) => (map, true),
            Some(other) => {
                positionals.push(other);
                (Vec::new(), false)
            }
            None => (Vec::new(), false),
        };
        let supplied = options.iter().map(|(key, _)| key.clone()).collect();

        Self {
            raw: args,
            positionals,
            options,
            supplied,
            has_options,
        }
    }

    /// The untouched original argument sequence.
    pub fn raw(&self) -> &[Arg<T>] {
        &self.raw
    }

    /// The positional arguments, in original order.
    pub fn values(&self) -> &[Arg<T>] {
        &self.positionals
    }

    /// Whether the call carried a trailing options mapping.
    pub fn has_options(&self) -> bool {
        self.has_options
    }

    /// Current value for `key` in the working options.
    pub fn option(&self, key: &str) -> Option<&T> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Keys the caller supplied in the mapping, as seen at construction.
    ///
    /// Aliasing rewrites the working options but not this snapshot, so the
    /// diagnostic passes always see the names the caller actually wrote.
    pub fn supplied_keys(&self) -> impl Iterator<Item = &str> {
        self.supplied.iter().map(String::as_str)
    }

    /// Whether `key` was in the mapping at construction.
    pub fn supplied(&self, key: &str) -> bool {
        self.supplied.iter().any(|k| k == key)
    }

    /// Remove `key` from the working options, returning its value. Remaining
    /// entries keep their relative order.
    pub fn take_option(&mut self, key: &str) -> Option<T> {
        let position = self.options.iter().position(|(k, _)| k == key)?;
        Some(self.options.remove(position).1)
    }

    /// Set `key` in the working options: overwrite in place when the key
    /// exists, append otherwise.
    pub fn put_option(&mut self, key: &str, value: T) {
        match self.options.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.options.push((key.to_string(), value)),
        }
    }
}
