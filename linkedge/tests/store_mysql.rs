//! Database-backed integration tests.
//!
//! These run against a real MySQL instance and are ignored by default:
//!
//! ```bash
//! DATABASE_URL="mysql://root@localhost:3306/linkedge_test" cargo test -- --ignored
//! ```
//!
//! The bundled migrations are applied on first use; fixtures use random ids
//! so tests can share a database without cleanup.

use chrono::Utc;
use linkedge::{EdgeDb, EdgePool, LinkStore, RandomKeyOptions, ROOT_KEY};
use rand::Rng;
use sqlx::MySqlPool;

async fn connect() -> EdgeDb {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must point at a MySQL instance for --ignored tests");
    let pool = MySqlPool::connect(&url).await.expect("connect to MySQL");
    linkedge::migrator().run(&pool).await.expect("run migrations");
    EdgeDb::new(EdgePool::from_pool(pool))
}

fn rid(tag: &str) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    let suffix: String = (0..10)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{tag}_{suffix}")
}

async fn insert_workspace(db: &EdgeDb, id: &str) {
    sqlx::query("INSERT INTO Project (id, name, slug) VALUES (?, ?, ?)")
        .bind(id)
        .bind("Test Workspace")
        .bind(rid("slug"))
        .execute(db.pool().get().expect("pool"))
        .await
        .expect("insert workspace");
}

async fn insert_domain(db: &EdgeDb, slug: &str, target: Option<&str>) {
    sqlx::query("INSERT INTO Domain (id, slug, target, projectId) VALUES (?, ?, ?, ?)")
        .bind(rid("dom"))
        .bind(slug)
        .bind(target)
        .bind(rid("proj"))
        .execute(db.pool().get().expect("pool"))
        .await
        .expect("insert domain");
}

async fn insert_link(db: &EdgeDb, domain: &str, key: &str, url: &str) {
    sqlx::query("INSERT INTO Link (id, domain, `key`, url) VALUES (?, ?, ?, ?)")
        .bind(rid("link"))
        .bind(domain)
        .bind(key)
        .bind(url)
        .execute(db.pool().get().expect("pool"))
        .await
        .expect("insert link");
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn workspace_lookup_strips_prefix_and_increment_adds_one() {
    let db = connect().await;
    let id = rid("ws");
    insert_workspace(&db, &id).await;

    let workspace = db
        .get_workspace(&format!("ws_{id}"))
        .await
        .unwrap()
        .expect("workspace found via prefixed id");
    assert_eq!(workspace.id, id);
    let before = workspace.ai_usage;

    assert_eq!(db.increment_ai_usage(&format!("ws_{id}")).await.unwrap(), 1);

    let after = db.get_workspace(&id).await.unwrap().expect("workspace");
    assert_eq!(after.ai_usage, before + 1);
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn increment_on_missing_workspace_touches_no_rows() {
    let db = connect().await;
    assert_eq!(db.increment_ai_usage("ws_does_not_exist").await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn link_lookup_normalizes_percent_encoded_and_unicode_keys() {
    let db = connect().await;
    let domain = format!("{}.sh", rid("d"));
    // stored canonical form of "bücher"
    insert_link(&db, &domain, "xn--bcher-kva", "https://example.com/books").await;

    for key in ["b%C3%BCcher", "bücher", "xn--bcher-kva"] {
        let link = db
            .get_link(&domain, key)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("key {key} should resolve"));
        assert_eq!(link.url, "https://example.com/books");
        assert!(db.key_exists(&domain, key).await.unwrap());
    }

    assert!(!db.key_exists(&domain, "unrelated").await.unwrap());
    assert!(db.get_link(&domain, "unrelated").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn link_lookup_by_destination_url() {
    let db = connect().await;
    let domain = format!("{}.sh", rid("d"));
    let url = format!("https://example.com/{}", rid("page"));
    insert_link(&db, &domain, "home", &url).await;

    let link = db.get_link_by_url(&url).await.unwrap().expect("link by url");
    assert_eq!(link.domain, domain);
    assert_eq!(link.key, "home");
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn resolution_synthesizes_root_entry_from_domain_target() {
    let db = connect().await;
    let slug = format!("{}.sh", rid("d"));
    insert_domain(&db, &slug, Some("https://example.com")).await;

    let entry = db.resolve_entry(&slug, None).await.unwrap().expect("root entry");
    assert_eq!(entry.key, ROOT_KEY);
    assert_eq!(entry.url, "https://example.com");

    assert!(db.resolve_entry("missing.example", None).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn hashed_api_key_resolves_user_and_touch_updates_last_used() {
    let db = connect().await;
    let user_id = rid("user");
    let hashed_key = rid("hash");

    sqlx::query("INSERT INTO User (id, name, email) VALUES (?, ?, ?)")
        .bind(&user_id)
        .bind("Jane")
        .bind(format!("{user_id}@example.com"))
        .execute(db.pool().get().expect("pool"))
        .await
        .expect("insert user");
    sqlx::query(
        "INSERT INTO Token (id, name, hashedKey, partialKey, userId) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(rid("tok"))
    .bind("ci token")
    .bind(&hashed_key)
    .bind("sk_...abcd")
    .bind(&user_id)
    .execute(db.pool().get().expect("pool"))
    .await
    .expect("insert token");

    assert!(db.user_exists(&user_id).await.unwrap());
    assert!(!db.user_exists(&rid("nobody")).await.unwrap());

    let user = db
        .get_user_by_api_key(&hashed_key)
        .await
        .unwrap()
        .expect("user behind token");
    assert_eq!(user.id, user_id);
    assert_eq!(user.name.as_deref(), Some("Jane"));

    let now = Utc::now();
    assert_eq!(db.touch_api_key(&hashed_key, now).await.unwrap(), 1);
    assert_eq!(db.touch_api_key(&rid("nohash"), now).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn affiliate_lookup_by_workspace_and_username() {
    let db = connect().await;
    let project_id = rid("proj");
    let username = rid("jane");

    sqlx::query("INSERT INTO Affiliate (id, username, email, projectId) VALUES (?, ?, ?, ?)")
        .bind(rid("aff"))
        .bind(&username)
        .bind(format!("{username}@example.com"))
        .bind(&project_id)
        .execute(db.pool().get().expect("pool"))
        .await
        .expect("insert affiliate");

    let affiliate = db
        .get_affiliate(&project_id, &username)
        .await
        .unwrap()
        .expect("affiliate");
    assert_eq!(affiliate.project_id, project_id);
    assert!(affiliate.user_id.is_none());

    assert!(db.get_affiliate(&project_id, "someone_else").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires MySQL via DATABASE_URL"]
async fn generated_keys_avoid_existing_rows() {
    let db = connect().await;
    let domain = format!("{}.sh", rid("d"));

    let key = db
        .generate_random_key(&domain, &RandomKeyOptions::default())
        .await
        .unwrap();
    assert!(!db.key_exists(&domain, &key).await.unwrap());

    let prefixed = db
        .generate_random_key(
            &domain,
            &RandomKeyOptions {
                prefix: Some("/promo/".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(prefixed.starts_with("promo/"));
}
