//! `DieselRequestStore` against embedded PostgreSQL.
//!
//! The cluster tests are opt-in: run with
//! `RUN_PG_EMBEDDED=1 cargo test -- --ignored`. They apply the Diesel
//! migrations to a fresh cluster and then run the same store contract as the
//! in-memory adapter.

use std::time::Duration;

use diesel::{Connection, RunQueryDsl};
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use request_desk::domain::ports::RequestStore;
use request_desk::domain::{RequestId, RequestStatus, SongRequest};
use request_desk::outbound::persistence::{DbPool, DieselRequestStore, PoolConfig};
use request_desk::test_support::store_contract::assert_store_contract;
use tokio::runtime::Runtime;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn enabled() -> bool {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1") {
        return true;
    }
    eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
    false
}

/// Runs all pending Diesel migrations against the test database.
fn migrate_schema(url: &str) {
    let mut conn = PgConnection::establish(url).expect("connect for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("migrations apply");
}

async fn store_for(url: &str) -> DieselRequestStore {
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool builds");
    DieselRequestStore::new(pool)
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn diesel_store_honours_the_store_contract() {
    if !enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let url = cluster.connection().database_url("postgres");
    migrate_schema(&url);

    let runtime = Runtime::new().expect("runtime");
    runtime.block_on(async {
        let store = store_for(&url).await;
        assert_store_contract(&store).await;
    });
}

#[test]
#[ignore = "requires embedded Postgres binaries; opt-in via RUN_PG_EMBEDDED=1"]
fn schema_rejects_unknown_status_labels() {
    if !enabled() {
        return;
    }
    let cluster = TestCluster::new().expect("embedded Postgres should start");
    let url = cluster.connection().database_url("postgres");
    migrate_schema(&url);

    let mut conn = PgConnection::establish(&url).expect("connect");
    let result = diesel::sql_query(
        "INSERT INTO requests (id, artist, title, status) \
         VALUES (gen_random_uuid(), 'a', 't', 'encore')",
    )
    .execute(&mut conn);
    assert!(result.is_err(), "status check constraint should reject 'encore'");
}

#[tokio::test]
async fn unreachable_database_surfaces_as_store_error() {
    let pool = DbPool::new(
        PoolConfig::new("postgres://nobody@127.0.0.1:1/missing")
            .with_connection_timeout(Duration::from_millis(500)),
    )
    .await
    .expect("pool builds lazily");
    let store = DieselRequestStore::new(pool);
    let request = SongRequest::new(
        RequestId::random(),
        "Daft Punk".to_owned(),
        "Digital Love".to_owned(),
        Some(RequestStatus::Maybe),
        chrono::Utc::now(),
    );

    assert!(store.insert_request(request).await.is_err());
    assert!(store.list_requests().await.is_err());
}
