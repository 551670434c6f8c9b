use serde::{Deserialize, Serialize};

/// One parsed day of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Label as it appeared in the response, e.g. `"Day 3"`.
    pub day: String,
    /// Task text, line breaks as they appeared in the response.
    pub tasks: String,
    /// Source references in encounter order.
    pub sources: Vec<String>,
}

impl DayEntry {
    pub fn new(day: impl Into<String>, tasks: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            tasks: tasks.into(),
            sources: Vec::new(),
        }
    }
}

/// Day entries keyed by label, in the order labels were first seen.
///
/// Inserting an existing label replaces that entry in place, so the
/// position of a day never moves once it has been seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roadmap {
    days: Vec<DayEntry>,
}

impl Roadmap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or reset an entry, returning its index.
    pub fn insert(&mut self, entry: DayEntry) -> usize {
        match self.position(&entry.day) {
            Some(index) => {
                self.days[index] = entry;
                index
            }
            None => {
                self.days.push(entry);
                self.days.len() - 1
            }
        }
    }

    pub fn get(&self, day: &str) -> Option<&DayEntry> {
        self.position(day).map(|i| &self.days[i])
    }

    pub(crate) fn entry_at_mut(&mut self, index: usize) -> Option<&mut DayEntry> {
        self.days.get_mut(index)
    }

    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.day.as_str())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn position(&self, day: &str) -> Option<usize> {
        self.days.iter().position(|d| d.day == day)
    }
}

impl<'a> IntoIterator for &'a Roadmap {
    type Item = &'a DayEntry;
    type IntoIter = std::slice::Iter<'a, DayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
