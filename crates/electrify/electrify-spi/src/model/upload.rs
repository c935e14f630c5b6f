//! Uploaded file handle.

/// Raw bytes of an uploaded CSV together with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// An empty upload counts as no file at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
