use blogmgr_core::errors::{BlogError, BlogErrorKind, PostError};

#[test]
fn test_duplicate_title_verifiable_by_kind() {
    let err = PostError::DuplicateTitle {
        title: "Intro".to_string(),
    };

    let blog_err: BlogError = err.into();

    assert_eq!(blog_err.kind(), BlogErrorKind::DuplicateTitle);
    assert_eq!(blog_err.code(), "ERR_DUPLICATE_TITLE");
    assert_eq!(blog_err.title(), Some("Intro"));
    assert_eq!(blog_err.op(), Some("create_post"));
}

#[test]
fn test_domain_errors_are_user_errors() {
    let duplicate: BlogError = PostError::DuplicateTitle {
        title: "Intro".to_string(),
    }
    .into();
    let blank: BlogError = PostError::InvalidContent {
        reason: "content cannot be empty".to_string(),
    }
    .into();

    assert!(duplicate.kind().is_user_error());
    assert!(blank.kind().is_user_error());
}

#[test]
fn test_invalid_title_structured_fields() {
    let blog_err: BlogError = PostError::InvalidTitle {
        reason: "title cannot be empty".to_string(),
    }
    .into();

    assert_eq!(blog_err.kind(), BlogErrorKind::InvalidTitle);
    assert_eq!(blog_err.code(), "ERR_INVALID_TITLE");
    assert!(blog_err.message().contains("Invalid title"));
}

#[test]
fn test_invalid_content_maps_to_invalid_input() {
    let blog_err: BlogError = PostError::InvalidContent {
        reason: "content cannot be empty".to_string(),
    }
    .into();

    assert_eq!(blog_err.kind(), BlogErrorKind::InvalidInput);
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (BlogErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (BlogErrorKind::InvalidTitle, "ERR_INVALID_TITLE"),
        (BlogErrorKind::DuplicateTitle, "ERR_DUPLICATE_TITLE"),
        (BlogErrorKind::StoreUnavailable, "ERR_STORE_UNAVAILABLE"),
        (BlogErrorKind::Persistence, "ERR_PERSISTENCE"),
        (BlogErrorKind::Io, "ERR_IO"),
    ];

    let mut seen = std::collections::HashSet::new();
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        assert!(seen.insert(expected_code), "Duplicate code {}", expected_code);
    }
}

#[test]
fn test_builder_preserves_message() {
    let err = BlogError::new(BlogErrorKind::Persistence)
        .with_op("list_posts")
        .with_message("disk I/O error");

    assert_eq!(err.op(), Some("list_posts"));
    assert_eq!(err.message(), "disk I/O error");
    assert!(err.to_string().contains("disk I/O error"));
}
