use std::collections::BTreeSet;

use sea_orm::Set;

use projman::db::dao::{ProjectDao, TransactionalDao, UserDao};
use projman::db::entities::{project, user};
use projman::services::ServiceContext;
use projman::test_helpers::sqlite_db;

async fn seed(db: &sea_orm::DatabaseConnection) {
    let users = UserDao::new(db);
    for id in [5, 9] {
        users
            .create(user::ActiveModel {
                id: Set(id),
                email: Set(format!("user{id}@example.com")),
                display_name: Set(format!("User {id}")),
                ..Default::default()
            })
            .await
            .expect("seed user should succeed");
    }

    let projects = ProjectDao::new(db);
    for (owner, name) in [(5, "Alpha"), (5, "Beta"), (9, "Gamma")] {
        projects
            .create(project::ActiveModel {
                owner: Set(owner),
                name: Set(name.to_string()),
                ..Default::default()
            })
            .await
            .expect("seed project should succeed");
    }
}

#[tokio::test]
async fn list_projects_returns_exactly_the_users_projects() {
    let db = sqlite_db().await;
    seed(&db).await;
    let services = ServiceContext::new(&db);

    let names: BTreeSet<String> = services
        .project()
        .list_projects(5)
        .await
        .expect("list should succeed")
        .into_iter()
        .map(|row| row.name)
        .collect();
    assert_eq!(names, BTreeSet::from(["Alpha".to_string(), "Beta".to_string()]));

    let other = services
        .project()
        .list_projects(9)
        .await
        .expect("list should succeed");
    assert_eq!(other.len(), 1);
    assert_eq!(other[0].name, "Gamma");
    assert!(other.iter().all(|row| row.owner == 9));
}

#[tokio::test]
async fn list_projects_is_empty_for_a_user_with_no_projects() {
    let db = sqlite_db().await;
    seed(&db).await;
    let services = ServiceContext::new(&db);

    let none = services
        .project()
        .list_projects(1)
        .await
        .expect("list should succeed");
    assert!(none.is_empty());
}
