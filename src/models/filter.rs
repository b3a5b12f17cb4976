use chrono::NaiveDate;

/// Optional query constraints, combined with logical AND.
///
/// Dates bound `date(start_time)` inclusively on both sides. Substring
/// matches are case-sensitive; an empty needle is the same as no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub name_contains: Option<String>,
    pub description_contains: Option<String>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, d: NaiveDate) -> Self {
        self.start_date = Some(d);
        self
    }

    pub fn end_date(mut self, d: NaiveDate) -> Self {
        self.end_date = Some(d);
        self
    }

    /// Restrict to a single calendar day.
    pub fn on(self, d: NaiveDate) -> Self {
        self.start_date(d).end_date(d)
    }

    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = non_empty(needle.into());
        self
    }

    pub fn description_contains(mut self, needle: impl Into<String>) -> Self {
        self.description_contains = non_empty(needle.into());
        self
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
