use std::fmt;

/// A dotted path into a document, such as `address.city`.
///
/// Each segment is kept separately so that it can be escaped on its own when
/// serialized. Segments are never interpreted, so reserved words and empty
/// segments are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<String>);

impl Path {
    /// Splits `path` on `.`.
    ///
    /// An empty string yields a single empty segment, the same way splitting
    /// any other string without a separator yields one segment.
    pub fn parse(path: &str) -> Path {
        Path(path.split('.').map(String::from).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` if the path has no non-empty segment.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|segment| segment.is_empty())
    }

    /// Returns `true` if `prefix` names this path or one of its ancestors.
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::parse(value)
    }
}

impl From<&String> for Path {
    fn from(value: &String) -> Self {
        Path::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path::parse(&value)
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Path(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for segment in &self.0 {
            write!(f, "{s}{segment}")?;
            s = ".";
        }

        Ok(())
    }
}
