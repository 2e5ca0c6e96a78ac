//! Canonical logging macros
//!
//! Every store operation brackets its work with these so that start, end and
//! failure events share the same field layout.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use blogmgr_core::log_op_start;
/// log_op_start!("create_post");
/// log_op_start!("create_post", title = "Intro");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = blogmgr_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = blogmgr_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use blogmgr_core::log_op_end;
/// log_op_end!("list_posts", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = blogmgr_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = blogmgr_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `BlogError`. Failures the user caused
/// (blank fields, a taken title) are logged at INFO; store failures at ERROR.
///
/// # Example
///
/// ```
/// # use blogmgr_core::log_op_error;
/// # use blogmgr_core::errors::PostError;
/// let err = PostError::DuplicateTitle { title: "Intro".to_string() };
/// log_op_error!("create_post", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::BlogError;
        let blog_err: BlogError = $err.into();
        if blog_err.kind().is_user_error() {
            tracing::info!(
                component = module_path!(),
                op = $op,
                event = blogmgr_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?blog_err.kind(),
                err_code = blog_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = blogmgr_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?blog_err.kind(),
                err_code = blog_err.code(),
                $($field)*
            );
        }
    }};
}
