//! Staged writes and atomic commit of the SeaORM repository wrapper

mod common;

use common::{new_developer, TestDb};
use developer_registry::contract::Developer;
use developer_registry::domain::repository::RepositoryWrapper;
use developer_registry::infra::storage::repositories::SeaOrmRepositoryWrapper;

#[tokio::test]
async fn test_staged_writes_are_invisible_until_save() {
    let db = TestDb::new().await;
    let wrapper = SeaOrmRepositoryWrapper::new(db.conn.clone());

    let assigned = wrapper.department().create("Platform", Some("Core"));
    assert_eq!(wrapper.pending_len(), 1);
    assert!(assigned.get().is_none());
    assert!(wrapper.department().all_departments().await.unwrap().is_empty());

    wrapper.save().await.unwrap();
    assert_eq!(wrapper.pending_len(), 0);
    assert!(assigned.get().is_some());

    let departments = wrapper.department().all_departments().await.unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].description.as_deref(), Some("Core"));
    assert!(!departments[0].deleted);
}

#[tokio::test]
async fn test_writes_apply_in_staging_order() {
    let db = TestDb::new().await;
    let wrapper = SeaOrmRepositoryWrapper::new(db.conn.clone());
    let platform_id = wrapper.department().create("Platform", None);
    wrapper.save().await.unwrap();
    let platform = wrapper
        .department()
        .department_by_id(platform_id.get().unwrap())
        .await
        .unwrap()
        .unwrap();

    // Insert then remove within one batch leaves nothing behind
    let developer = Developer::from_new(new_developer("Ada", platform.id));
    wrapper.developer().create(&developer);
    wrapper.developer().delete(&developer);
    wrapper.save().await.unwrap();

    assert!(wrapper
        .developer()
        .developer_by_id(developer.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_failing_write_rolls_back_the_whole_batch() {
    let db = TestDb::new().await;
    let wrapper = SeaOrmRepositoryWrapper::new(db.conn.clone());
    let platform_id = wrapper.department().create("Platform", None);
    wrapper.save().await.unwrap();
    let platform = wrapper
        .department()
        .department_by_id(platform_id.get().unwrap())
        .await
        .unwrap()
        .unwrap();

    let good = Developer::from_new(new_developer("Ada", platform.id));
    let orphan = Developer::from_new(new_developer("Bob", platform.id + 100));
    wrapper.developer().create(&good);
    wrapper.department().create("Data", None);
    wrapper.developer().create(&orphan);

    assert!(wrapper.save().await.is_err());
    assert_eq!(wrapper.pending_len(), 0);

    assert!(wrapper.developer().all_developers().await.unwrap().is_empty());
    let names: Vec<_> = wrapper
        .department()
        .all_departments()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Platform"]);
}

#[tokio::test]
async fn test_deleting_a_missing_row_fails_the_commit() {
    let db = TestDb::new().await;
    let wrapper = SeaOrmRepositoryWrapper::new(db.conn.clone());

    let ghost = Developer::from_new(new_developer("Ghost", 1));
    wrapper.developer().delete(&ghost);

    assert!(wrapper.save().await.is_err());
}

#[tokio::test]
async fn test_empty_save_is_a_no_op() {
    let db = TestDb::new().await;
    let wrapper = SeaOrmRepositoryWrapper::new(db.conn.clone());

    wrapper.save().await.unwrap();
    assert!(wrapper.developer().all_developers().await.unwrap().is_empty());
}
