/// A change message with a stable name, used for log fields and for
/// renderers that dispatch on the kind of change.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "table.filters.changed").
    fn event_type(&self) -> &'static str;

    /// Payload shape version, bumped when fields are added or renamed.
    fn version(&self) -> u32;
}
