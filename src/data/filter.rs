use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Name predicate
// ---------------------------------------------------------------------------

/// Records whose `Name` equals `name` exactly, in dataset order.
///
/// A name that is not in the dataset simply yields nothing.
pub fn records_for_name<'a>(
    dataset: &'a Dataset,
    name: &'a str,
) -> impl Iterator<Item = &'a Record> + 'a {
    dataset.records().iter().filter(move |r| r.name == name)
}
