pub fn record_hint(index: Option<usize>) -> String {
    match index {
        Some(index) => format!("[{}]", index),
        None => "(root)".to_string(),
    }
}

pub fn field_hint(index: Option<usize>, field: &str) -> String {
    format!("{}.{}", record_hint(index), field)
}
