//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent across the store and CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_POST_ID: &str = "post_id";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_TAG: &str = "tag";

// Collection sizes
pub const FIELD_TAG_COUNT: &str = "tag_count";
pub const FIELD_ROW_COUNT: &str = "row_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
