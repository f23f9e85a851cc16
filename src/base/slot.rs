/// A durable key-value slot holding one serialized value.
pub trait Slot {
    /// Returns the slot's contents, or `None` if nothing was ever written.
    fn read(&self) -> std::io::Result<Option<String>>;

    /// Replaces the slot's contents. Implementations must never leave the
    /// slot partially written.
    fn write(&mut self, contents: &str) -> std::io::Result<()>;
}

/// Slot backed by a single file.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: std::path::PathBuf,
}

impl FileSlot {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, contents: &str) -> std::io::Result<()> {
        crate::base::fs::write_atomic(&self.path, contents)
    }
}

/// Slot held in memory, for embedding the ledger without a filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySlot(Option<String>);

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self(Some(contents.into()))
    }

    pub fn contents(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> std::io::Result<Option<String>> {
        Ok(self.0.clone())
    }

    fn write(&mut self, contents: &str) -> std::io::Result<()> {
        self.0 = Some(contents.to_string());
        Ok(())
    }
}
