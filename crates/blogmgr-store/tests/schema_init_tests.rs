// Integration tests for the schema initializer
// Startup must create posts/tags/post_tags and be safe to repeat

use blogmgr_core::errors::BlogErrorKind;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    blogmgr_store::db::configure(&conn).unwrap();
    conn
}

#[test]
fn test_initialize_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: The schema is initialized
    let result = blogmgr_store::schema::initialize(&mut conn);

    // Then: It succeeds and the three tables exist
    assert!(result.is_ok(), "Schema init should succeed: {:?}", result.err());

    let tables = get_table_names(&conn);
    for expected in ["posts", "tags", "post_tags"] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
}

#[test]
fn test_initialize_is_idempotent_and_keeps_data() {
    // Given: An initialized database holding one post
    let mut conn = setup_test_db();
    blogmgr_store::schema::initialize(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO posts (title, content, created_at) VALUES ('Intro', 'Hello', 0)",
        [],
    )
    .unwrap();

    // When: The initializer runs again
    let result = blogmgr_store::schema::initialize(&mut conn);

    // Then: It is a no-op
    assert!(result.is_ok(), "Re-running init should succeed");
    let posts: i64 = conn
        .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(posts, 1, "Existing rows must survive re-initialization");
}

#[test]
fn test_deleting_post_cascades_to_links() {
    // Given: A post linked to a tag
    let mut conn = setup_test_db();
    blogmgr_store::schema::initialize(&mut conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO posts (id, title, content, created_at) VALUES (1, 'Intro', 'Hello', 0);
        INSERT INTO tags (id, name) VALUES (1, 'go');
        INSERT INTO post_tags (post_id, tag_id) VALUES (1, 1);
        "#,
    )
    .unwrap();

    // When: The post is deleted
    conn.execute("DELETE FROM posts WHERE id = 1", []).unwrap();

    // Then: Its links are gone, the tag stays
    let links: i64 = conn
        .query_row("SELECT COUNT(*) FROM post_tags", [], |row| row.get(0))
        .unwrap();
    let tags: i64 = conn
        .query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))
        .unwrap();
    assert_eq!(links, 0);
    assert_eq!(tags, 1);
}

#[test]
fn test_deleting_tag_cascades_to_links() {
    let mut conn = setup_test_db();
    blogmgr_store::schema::initialize(&mut conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO posts (id, title, content, created_at) VALUES (1, 'Intro', 'Hello', 0);
        INSERT INTO tags (id, name) VALUES (1, 'go');
        INSERT INTO post_tags (post_id, tag_id) VALUES (1, 1);
        "#,
    )
    .unwrap();

    conn.execute("DELETE FROM tags WHERE id = 1", []).unwrap();

    let links: i64 = conn
        .query_row("SELECT COUNT(*) FROM post_tags", [], |row| row.get(0))
        .unwrap();
    assert_eq!(links, 0);
}

#[test]
fn test_duplicate_link_rejected() {
    let mut conn = setup_test_db();
    blogmgr_store::schema::initialize(&mut conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO posts (id, title, content, created_at) VALUES (1, 'Intro', 'Hello', 0);
        INSERT INTO tags (id, name) VALUES (1, 'go');
        INSERT INTO post_tags (post_id, tag_id) VALUES (1, 1);
        "#,
    )
    .unwrap();

    let result = conn.execute("INSERT INTO post_tags (post_id, tag_id) VALUES (1, 1)", []);
    assert!(result.is_err(), "A post cannot carry the same tag twice");
}

#[test]
fn test_open_on_disk_twice() {
    // Given: A database file created by a first startup
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("blog.db");
    {
        let mut store = blogmgr_store::BlogStore::open(&db_path).unwrap();
        store.create_post("Intro", "Hello", "go").unwrap();
        store.close().unwrap();
    }

    // When: The program starts again on the same file
    let store = blogmgr_store::BlogStore::open(&db_path).unwrap();

    // Then: Previous posts are still there
    let posts = store.list_posts().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Intro");
}

#[test]
fn test_open_directory_fails_as_store_unavailable() {
    // Given: A path that is a directory, not a database file
    let temp_dir = tempfile::TempDir::new().unwrap();

    // When: The store is opened there
    let result = blogmgr_store::BlogStore::open(temp_dir.path());

    // Then: Startup fails with a store-level error
    let err = result.err().expect("Opening a directory must fail");
    assert!(
        matches!(
            err.kind(),
            BlogErrorKind::StoreUnavailable | BlogErrorKind::Persistence
        ),
        "unexpected error: {}",
        err
    );
}

// Helper function to get all table names from the database
fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    let tables = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();

    tables
}
