#![allow(dead_code)]

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use customer_users::db::{ConnectionOptions, DbPool, establish_connection_pool};
use customer_users::models::customer::NewCustomer;
use customer_users::models::user::{NewUser, NewUserAddress};
use customer_users::repository::DieselRepository;
use customer_users::schema::{customers, user_addresses, users};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory for one test.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(
            path.to_str().expect("utf-8 database path"),
            ConnectionOptions::default(),
        )
        .expect("create connection pool");

        let mut pooled = pool.get().expect("get connection");
        let conn: &mut SqliteConnection = &mut pooled;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    pub fn insert_customer(&self, name: &str) -> i32 {
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(customers::table)
            .values(&NewCustomer { name })
            .execute(&mut conn)
            .expect("insert customer");
        customers::table
            .select(customers::id)
            .order(customers::id.desc())
            .first::<i32>(&mut conn)
            .expect("load customer id")
    }

    pub fn insert_user(&self, customer_id: i32, slug: &str, email: &str) -> i32 {
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(users::table)
            .values(&NewUser {
                customer_id,
                slug,
                email,
                first_name: None,
                last_name: None,
            })
            .execute(&mut conn)
            .expect("insert user");
        users::table
            .select(users::id)
            .order(users::id.desc())
            .first::<i32>(&mut conn)
            .expect("load user id")
    }

    /// Inserts `count` users named `user-01`, `user-02`, ... for the customer.
    pub fn seed_users(&self, customer_id: i32, count: usize) -> Vec<i32> {
        (1..=count)
            .map(|n| {
                self.insert_user(
                    customer_id,
                    &format!("user-{n:02}"),
                    &format!("user{n:02}.c{customer_id}@example.com"),
                )
            })
            .collect()
    }

    pub fn insert_address(&self, user_id: i32, city: &str) {
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(user_addresses::table)
            .values(&NewUserAddress {
                user_id,
                street: "1 Rue de la Paix",
                postal_code: "75002",
                city,
                country: "France",
            })
            .execute(&mut conn)
            .expect("insert address");
    }

    pub fn user_exists(&self, user_id: i32) -> bool {
        let mut conn = self.pool.get().expect("get connection");
        users::table
            .find(user_id)
            .count()
            .get_result::<i64>(&mut conn)
            .expect("count users")
            > 0
    }

    pub fn address_count(&self, user_id: i32) -> i64 {
        let mut conn = self.pool.get().expect("get connection");
        user_addresses::table
            .filter(user_addresses::user_id.eq(user_id))
            .count()
            .get_result::<i64>(&mut conn)
            .expect("count addresses")
    }
}
