//! Active-section selection from scroll position.

/// Lookahead added to the scroll offset before comparing against section
/// tops. Sections highlight slightly before their top edge reaches the
/// viewport top, which keeps the marker in step with a sticky header.
pub const LOOKAHEAD_MARGIN: f64 = 120.0;

/// Selects the active entry for a scroll offset.
///
/// The tracker is stateless; section tops are supplied fresh on every call
/// so page reflow is picked up without any cache invalidation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracker {
    margin: f64,
}

impl Tracker {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Index of the active entry for the given scroll offset.
    ///
    /// `tops` yields one element per entry, `None` for entries without a
    /// measurable section. The scan visits every entry in order and keeps
    /// the last index whose top is at or below `scroll_offset + margin`.
    /// Returns 0 when nothing qualifies, including the empty list.
    pub fn active_index<I>(&self, scroll_offset: f64, tops: I) -> usize
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let effective = scroll_offset + self.margin;
        let mut active = 0;
        for (index, top) in tops.into_iter().enumerate() {
            if let Some(top) = top
                && top <= effective
            {
                active = index;
            }
        }
        active
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(LOOKAHEAD_MARGIN)
    }
}
