use customer_users::db::get_connection;

mod common;

#[test]
fn test_creates_migrated_database() {
    let test_db = common::TestDb::new("test_creates_migrated_database.db");
    let conn = get_connection(test_db.pool());
    assert!(conn.is_ok());

    let customer_id = test_db.insert_customer("Acme");
    assert!(customer_id > 0);
}
