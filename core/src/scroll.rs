pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const NAV_OFFSET_PX: f64 = 100.0;

pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open window `[top - offset, top - offset + height)` in which the
    /// section's navigation link counts as current.
    pub fn contains(&self, scroll_y: f64, offset: f64) -> bool {
        let start = self.top - offset;
        scroll_y >= start && scroll_y < start + self.height
    }
}

pub fn nav_link_selector(section_id: &str) -> String {
    format!(".nav-links a[href=\"#{}\"]", css_escape_quoted(section_id))
}

fn css_escape_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
