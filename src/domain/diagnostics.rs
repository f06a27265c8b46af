/// Trailing log of remote-call failures, accumulated for the lifetime of a
/// loader instance so `status()` can expose recent problems to the operator.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<String>,
}

impl Diagnostics {
    /// How many entries are surfaced to consumers.
    pub const SURFACED: usize = 8;

    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// The trailing [`Self::SURFACED`] entries, oldest first.
    pub fn recent(&self) -> &[String] {
        let start = self.entries.len().saturating_sub(Self::SURFACED);
        &self.entries[start..]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
