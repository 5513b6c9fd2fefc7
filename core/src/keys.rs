pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// `aria-expanded` is a string attribute; only the literal `"true"` counts.
pub fn toggled_expanded(current: Option<&str>) -> bool {
    current != Some("true")
}

pub fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
