use std::collections::BTreeMap;

use crate::domain::pool::dto::form_fields::NodeLabel;

/// Folds label rows into a key → value map.
///
/// A lone row with an empty key is the form's blank placeholder and yields no
/// labels. Duplicate keys resolve to the last row. Keys are not validated.
pub fn normalize_labels(labels: &[NodeLabel]) -> BTreeMap<String, String> {
    if let [only] = labels {
        if only.key.is_empty() {
            return BTreeMap::new();
        }
    }

    labels.iter().fold(BTreeMap::new(), |mut acc, label| {
        acc.insert(label.key.clone(), label.value.clone());
        acc
    })
}
