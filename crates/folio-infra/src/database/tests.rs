use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, EntityTrait, MockDatabase, MockExecResult, QueryTrait};
use serde_json::json;
use uuid::Uuid;

use folio_core::domain::{ContactPage, HomePage, PortfolioProject};
use folio_core::error::RepoError;
use folio_core::ports::{
    BaseRepository, BlogPostFilter, BlogPostRepository, SingletonRepository, UserRepository,
};

use crate::database::entity::{
    blog_post, blog_post_tag, contact_page, home_page, portfolio_project, user,
};
use crate::database::postgres_base::{DUPLICATE_RECORD, constraint_violation, map_db_err};
use crate::database::postgres_repo::{
    PostgresBlogPostRepository, PostgresContactPageRepository, PostgresHomePageRepository,
    PostgresPortfolioRepository, PostgresUserRepository,
};

fn project_model(id: Uuid) -> portfolio_project::Model {
    let now = Utc::now();
    portfolio_project::Model {
        id,
        title: "Telemetry Platform".to_owned(),
        slug: "telemetry-platform".to_owned(),
        description: "Fleet telemetry ingestion".to_owned(),
        category: "Engineering".to_owned(),
        tags: json!(["rust", "iot"]),
        icon: None,
        color: Some("#0f766e".to_owned()),
        link: None,
        impact: None,
        images: json!(["/uploads/a.png", "/uploads/b.png"]),
        featured: true,
        published: true,
        sort_order: 1,
        author_id: Uuid::new_v4(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn post_model(id: Uuid, views: i64) -> blog_post::Model {
    let now = Utc::now();
    blog_post::Model {
        id,
        title: "Test Post".to_owned(),
        slug: "test-post".to_owned(),
        excerpt: None,
        content: "<p>hello</p>".to_owned(),
        cover_image: None,
        published: true,
        published_at: Some(now.into()),
        views,
        author_id: Uuid::new_v4(),
        category_id: None,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_project_decodes_list_columns() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![project_model(id)]])
        .into_connection();

    let repo = PostgresPortfolioRepository::new(db);
    let project: PortfolioProject = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(project.id, id);
    assert_eq!(project.tags, vec!["rust", "iot"]);
    assert_eq!(project.images, vec!["/uploads/a.png", "/uploads/b.png"]);
    assert_eq!(project.sort_order, 1);
}

#[tokio::test]
async fn test_malformed_list_column_reads_as_empty() {
    let id = Uuid::new_v4();
    let mut model = project_model(id);
    model.tags = json!({"not": "a list"});

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPortfolioRepository::new(db);
    let project: PortfolioProject = repo.find_by_id(id).await.unwrap().unwrap();

    assert!(project.tags.is_empty());
    assert_eq!(project.images.len(), 2);
}

#[tokio::test]
async fn test_find_user_by_email_maps_role() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_owned(),
            name: Some("Admin".to_owned()),
            password_hash: "hash".to_owned(),
            role: "admin".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);
    let user = repo.find_by_email("admin@example.com").await.unwrap().unwrap();

    assert!(user.is_admin());
    assert_eq!(user.name.as_deref(), Some("Admin"));
}

#[tokio::test]
async fn test_blog_post_carries_ordered_tags() {
    let post_id = Uuid::new_v4();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, 3)]])
        .append_query_results(vec![vec![
            blog_post_tag::Model {
                post_id,
                tag_id: first,
                position: 0,
            },
            blog_post_tag::Model {
                post_id,
                tag_id: second,
                position: 1,
            },
        ]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let post = repo.find_by_slug("test-post").await.unwrap().unwrap();

    assert_eq!(post.tag_ids, vec![first, second]);
    assert_eq!(post.views, 3);
}

#[tokio::test]
async fn test_empty_blog_list_skips_tag_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let posts = repo
        .list(BlogPostFilter {
            published_only: true,
        })
        .await
        .unwrap();

    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_increment_views_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let result = repo.increment_views(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_increment_views_updates_one_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    assert!(repo.increment_views(Uuid::new_v4()).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let result = repo.delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_home_page_find_first() {
    let page = HomePage::starter(Utc::now());
    let model = home_page::Model {
        id: page.id,
        hero_title: page.hero_title.clone(),
        hero_job_title: page.hero_job_title.clone(),
        hero_description: page.hero_description.clone(),
        hero_image: None,
        stats: json!([{"value": "10+", "label": "Years"}]),
        achievements: json!([]),
        skills: json!([]),
        cta_title: page.cta_title.clone(),
        cta_description: page.cta_description.clone(),
        published: true,
        created_at: page.created_at.into(),
        updated_at: page.updated_at.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresHomePageRepository::new(db);
    let found: HomePage = repo.find_first().await.unwrap().unwrap();

    assert_eq!(found.id, page.id);
    assert_eq!(found.stats.len(), 1);
    assert_eq!(found.stats[0].value, "10+");
}

#[tokio::test]
async fn test_contact_page_save_inserts_when_missing() {
    let page = ContactPage::starter(Utc::now());
    let model = contact_page::Model {
        id: page.id,
        page_title: page.page_title.clone(),
        page_description: page.page_description.clone(),
        location_title: page.location_title.clone(),
        location_address: page.location_address.clone(),
        operating_hours: page.operating_hours.clone(),
        social_media: json!([]),
        quick_actions: json!([]),
        response_time: page.response_time.clone(),
        response_time_desc: page.response_time_desc.clone(),
        faqs: json!([{"question": "Q", "answer": "A"}]),
        published: true,
        created_at: page.created_at.into(),
        updated_at: page.updated_at.into(),
    };

    // The UPDATE ... RETURNING comes back empty, then the INSERT returns the row.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<contact_page::Model>::new()])
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresContactPageRepository::new(db);
    let saved: ContactPage = repo.save(page.clone()).await.unwrap();

    assert_eq!(saved.id, page.id);
    assert_eq!(saved.faqs.len(), 1);
}

fn edited_post(id: Uuid, stale_views: i64) -> folio_core::domain::BlogPost {
    let mut post = folio_core::domain::BlogPost::from(post_model(id, stale_views));
    post.title = "Edited Title".to_owned();
    post
}

#[test]
fn test_edit_statement_leaves_views_alone() {
    let active = blog_post::ActiveModel::for_edit(edited_post(Uuid::new_v4(), 0));
    assert!(!active.views.is_set());

    let sql = blog_post::Entity::update(active)
        .build(DatabaseBackend::Postgres)
        .to_string();
    assert!(sql.contains(r#""title" = 'Edited Title'"#), "{sql}");
    assert!(!sql.contains(r#""views" ="#), "{sql}");
}

#[tokio::test]
async fn test_update_returns_stored_view_count() {
    let id = Uuid::new_v4();
    let mut stored = post_model(id, 7);
    stored.title = "Edited Title".to_owned();

    // UPDATE ... RETURNING, then the tag link delete.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored]])
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let saved = repo.update(edited_post(id, 6)).await.unwrap();

    assert_eq!(saved.title, "Edited Title");
    assert_eq!(saved.views, 7);
}

#[test]
fn test_unique_violation_detail_is_generic() {
    let raw = r#"duplicate key value violates unique constraint "blog_posts_slug_key""#;
    match constraint_violation(raw) {
        RepoError::Constraint(msg) => {
            assert_eq!(msg, DUPLICATE_RECORD);
            assert!(!msg.contains("blog_posts_slug_key"));
        }
        other => panic!("expected constraint error, got {other:?}"),
    }
}

#[test]
fn test_missing_record_maps_to_not_found() {
    assert!(matches!(map_db_err(DbErr::RecordNotUpdated), RepoError::NotFound));
}
