use crate::domain::pool::dto::form_fields::Taint;

/// Drops the form's blank placeholder row; otherwise keeps taints as entered.
/// Order is preserved.
pub fn normalize_taints(taints: &[Taint]) -> Vec<Taint> {
    match taints {
        [only] if only.key.is_empty() => Vec::new(),
        _ => taints.to_vec(),
    }
}
