use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – one (name, year) row of the source table
// ---------------------------------------------------------------------------

/// A single (Name, Year) observation.
///
/// `total` is kept exactly as stored in the file; it is not recomputed from
/// the male / female columns even when they disagree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Assigned Male")]
    pub assigned_male: u32,
    #[serde(rename = "Assigned Female")]
    pub assigned_female: u32,
    #[serde(rename = "Total")]
    pub total: u32,
}

impl Record {
    /// Whether the stored total matches male + female.
    pub fn total_is_consistent(&self) -> bool {
        u64::from(self.assigned_male) + u64::from(self.assigned_female) == u64::from(self.total)
    }
}

// ---------------------------------------------------------------------------
// NameIndex – sorted distinct names for the dropdowns
// ---------------------------------------------------------------------------

/// Sorted, deduplicated list of every name present in the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex(Vec<String>);

impl NameIndex {
    fn from_records(records: &[Record]) -> Self {
        let mut names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
        names.sort_unstable();
        names.dedup();
        NameIndex(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Names containing `query`, ignoring case. An empty query matches all.
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + 'a {
        let needle = query.trim().to_lowercase();
        self.iter()
            .filter(move |name| needle.is_empty() || name.to_lowercase().contains(&needle))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table plus its name index. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    names: NameIndex,
}

impl Dataset {
    /// Build the name index from the loaded records. Row order is kept.
    pub fn from_records(records: Vec<Record>) -> Self {
        let names = NameIndex::from_records(&records);
        Dataset { records, names }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn names(&self) -> &NameIndex {
        &self.names
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
