/// A single name/value pair as handed over by the host interception hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered header list with case-insensitive name lookup.
///
/// Order and duplicates are preserved exactly as received; the host
/// resubmits the whole list, so nothing here may reorder untouched entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderCollection {
    headers: Vec<Header>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_headers(headers: Vec<Header>) -> Self {
        Self { headers }
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.name.eq_ignore_ascii_case(name))
    }

    /// Value of the first header with the given name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.position(name)
            .map(|index| self.headers[index].value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Overwrites the first header with the given name, or appends one.
    pub fn set<V: Into<String>>(&mut self, name: &str, value: V) {
        match self.position(name) {
            Some(index) => self.headers[index].value = value.into(),
            None => self.headers.push(Header::new(name, value)),
        }
    }

    /// Removes every header with the given name. Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.headers.len();
        self.headers
            .retain(|header| !header.name.eq_ignore_ascii_case(name));
        before - self.headers.len()
    }

    /// Removes every occurrence of every listed name. Returns the total removed.
    pub fn remove_many<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        let before = self.headers.len();
        self.headers.retain(|header| {
            !names
                .iter()
                .any(|name| header.name.eq_ignore_ascii_case(name.as_ref()))
        });
        before - self.headers.len()
    }

    pub fn into_headers(self) -> Vec<Header> {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
