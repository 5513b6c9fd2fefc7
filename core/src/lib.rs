pub mod catalog;
pub mod config;
pub mod contact;
pub mod counter;
pub mod keys;
pub mod reveal;
pub mod scroll;

pub use catalog::{detail_blocks, project_by_id, DetailBlock, ProjectDetail, PROJECT_CATALOG};
pub use config::{ConfigError, PageConfig, DEFAULT_LAZY_POLYFILL_URL};
pub use contact::{
    is_valid_email, validate_contact, validate_field, ContactDraft, ContactField, ContactReport,
    FieldError,
};
pub use counter::{format_count, parse_count, CounterAnimation, CounterFrame};
pub use scroll::{nav_link_selector, scroll_top_visible, SectionBounds};
