//! Closed enumerations shared between the list filters and the status badges.

/// A closed enumeration with a stable wire code.
///
/// Every implementor also carries a `#[serde(other)] Unknown` variant that is
/// deliberately left out of [`Categorical::all`], so an unrecognised code from
/// the backend still deserialises and can be rendered with a neutral style.
pub trait Categorical: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Wire code, identical to the serde representation.
    fn code(&self) -> &'static str;

    /// Human readable label.
    fn display_name(&self) -> &'static str;

    /// All known values, in display order. `Unknown` is never included.
    fn all() -> &'static [Self];

    /// Parse from a wire code.
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }

    /// `(code, label)` pairs for select boxes.
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::all()
            .iter()
            .map(|v| (v.code(), v.display_name()))
            .collect()
    }
}
