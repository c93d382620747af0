use querysync_core::traits::Navigator;
use querysync_core::types::Location;

/// A history stack kept in memory.
///
/// Stands in for the browser in tests and in the replay CLI: `push_state`
/// moves the current entry into `back`, `replace_state` overwrites it.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    back: Vec<Location>,
    current: Location,
}

impl MemoryNavigator {
    pub fn new(url: &str) -> Self {
        Self { back: Vec::new(), current: Location::parse(url) }
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    /// Every entry, oldest first, ending with the current one.
    pub fn history(&self) -> Vec<Location> {
        self.back.iter().chain(std::iter::once(&self.current)).cloned().collect()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        self.current().clone()
    }

    fn push_state(&mut self, url: &str) {
        let previous = std::mem::replace(&mut self.current, Location::parse(url));
        self.back.push(previous);
    }

    fn replace_state(&mut self, url: &str) {
        self.current = Location::parse(url);
    }
}
