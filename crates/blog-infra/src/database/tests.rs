#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use blog_core::domain::{Author, AuthorChanges, BlogPost, PostChanges};
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;

    fn model(title: &str) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            author_first_name: "Jane".to_owned(),
            author_last_name: "Doe".to_owned(),
            content: "Content".to_owned(),
            created: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let row = model("Test Post");
        let post_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(post.author, Author::new("Jane", "Doe"));
    }

    #[tokio::test]
    async fn test_find_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("first"), model("second")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_all().await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_save_returns_stored_row() {
        let post = BlogPost::new(
            "foo bar".to_owned(),
            Author::new("Jane", "Doe"),
            "lorem".to_owned(),
        );
        let stored = post::Model {
            id: post.id,
            title: post.title.clone(),
            author_first_name: "Jane".to_owned(),
            author_last_name: "Doe".to_owned(),
            content: post.content.clone(),
            created: post.created.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let saved = repo.save(post.clone()).await.unwrap();
        assert_eq!(saved, post);
    }

    #[tokio::test]
    async fn test_update_by_id_applies_changes() {
        let row = model("before");
        let mut after = row.clone();
        after.title = "etetetetet".to_owned();
        after.author_last_name = "20".to_owned();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()], vec![after]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let updated = repo
            .update_by_id(
                row.id,
                PostChanges {
                    title: Some("etetetetet".to_owned()),
                    author: Some(AuthorChanges {
                        first_name: None,
                        last_name: Some("20".to_owned()),
                    }),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, row.id);
        assert_eq!(updated.title, "etetetetet");
        assert_eq!(updated.author, Author::new("Jane", "20"));
        assert_eq!(updated.content, "Content");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .update_by_id(
                uuid::Uuid::new_v4(),
                PostChanges {
                    title: Some("x".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_of_concurrently_deleted_post_is_none() {
        // Row is read, then gone by the time the UPDATE runs.
        let row = model("before");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()], Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo
            .update_by_id(
                row.id,
                PostChanges {
                    title: Some("etetetetet".to_owned()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<BlogPost, _>::delete(&repo, uuid::Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(3)))])]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_insert_many_empty_is_noop() {
        // No results queued: any statement would fail.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PostgresPostRepository::new(db);

        repo.insert_many(Vec::new()).await.unwrap();
    }
}
