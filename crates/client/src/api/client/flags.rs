/// A value that may be sent as a named query flag.
///
/// Returning `None` means the value is the type's default and the flag
/// must be left out of the query entirely: the daemon treats an absent
/// flag differently from one sent with its default literal.
pub trait FlagValue {
    fn flag_value(&self) -> Option<String>;
}

impl FlagValue for bool {
    fn flag_value(&self) -> Option<String> {
        self.then(|| "true".to_string())
    }
}

impl FlagValue for str {
    fn flag_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl FlagValue for String {
    fn flag_value(&self) -> Option<String> {
        self.as_str().flag_value()
    }
}

impl<T: FlagValue + ?Sized> FlagValue for &T {
    fn flag_value(&self) -> Option<String> {
        (**self).flag_value()
    }
}

impl<T: FlagValue> FlagValue for Option<T> {
    fn flag_value(&self) -> Option<String> {
        self.as_ref().and_then(|value| value.flag_value())
    }
}

/// Named query flags for a single call, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags(Vec<(&'static str, String)>);

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` unless `value` is its type's default.
    pub fn with(mut self, name: &'static str, value: impl FlagValue) -> Self {
        if let Some(value) = value.flag_value() {
            self.0.push((name, value));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }
}
