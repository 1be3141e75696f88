//! The three acquisition modes a consumer chooses between.

/// How a consumer obtains the good.
///
/// The declaration order is the reporting order used everywhere
/// (`New`, `Used`, `Subscribe`); [`Acquisition::index`] maps a variant to its
/// slot in per-option arrays.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acquisition {
    /// Buy a new good for a one-time price.
    New,
    /// Buy a used good for a one-time price at discounted utility.
    Used,
    /// Pay a subscription price every period.
    Subscribe,
}

impl Acquisition {
    /// All options in reporting order.
    pub const ALL: [Acquisition; 3] = [Acquisition::New, Acquisition::Used, Acquisition::Subscribe];

    /// Slot of this option in a `[T; 3]` indexed by [`Acquisition::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Acquisition::New       => 0,
            Acquisition::Used      => 1,
            Acquisition::Subscribe => 2,
        }
    }

    /// Short label, used for CSV columns and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Acquisition::New       => "new",
            Acquisition::Used      => "used",
            Acquisition::Subscribe => "sub",
        }
    }
}

impl std::fmt::Display for Acquisition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
