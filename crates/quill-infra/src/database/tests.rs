#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_base::map_db_err;
    use crate::database::postgres_repo::PostgresPostRepository;
    use quill_core::domain::{Post, PostFields};
    use quill_core::error::RepoError;
    use quill_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn model(title: &str, minutes_ago: i64) -> post::Model {
        let at = chrono::Utc::now() - chrono::Duration::minutes(minutes_ago);
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            content: "Content body for tests".to_owned(),
            created_at: at.into(),
            updated_at: at.into(),
        }
    }

    fn fields() -> PostFields {
        PostFields {
            title: "Test Post".to_owned(),
            content: "Content body for tests".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let row = model("Test Post", 0);
        let post_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("newer", 1), model("older", 5)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let posts = repo.find_all().await.unwrap();

        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["newer", "older"]);
    }

    #[tokio::test]
    async fn test_find_all_sorts_by_updated_at() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        repo.find_all().await.unwrap();

        let log = repo.db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains(r#"ORDER BY \"posts\".\"updated_at\" DESC"#));
    }

    #[tokio::test]
    async fn test_create_returns_stored_post() {
        let row = model("Test Post", 0);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let post = repo.create(fields()).await.unwrap();

        assert_eq!(post.id, row.id);
        assert_eq!(post.title, "Test Post");
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_constraint_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                r#"duplicate key value violates unique constraint "posts_pkey""#.to_owned(),
            )])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let err = repo.create(fields()).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[test]
    fn test_db_errors_map_onto_repo_errors() {
        assert!(matches!(
            map_db_err(DbErr::Custom("UNIQUE constraint failed: posts.id".to_owned())),
            RepoError::Constraint(_)
        ));
        assert!(matches!(map_db_err(DbErr::RecordNotUpdated), RepoError::NotFound));
        assert!(matches!(
            map_db_err(DbErr::Conn(RuntimeErr::Internal("refused".to_owned()))),
            RepoError::Connection(_)
        ));
        assert!(matches!(
            map_db_err(DbErr::Custom("syntax error".to_owned())),
            RepoError::Query(_)
        ));
    }

    #[tokio::test]
    async fn test_update_returns_stored_post() {
        let mut row = model("Edited", 5);
        row.updated_at = chrono::Utc::now().into();
        let post_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let updated = repo
            .update(
                post_id,
                PostFields {
                    title: "Edited".to_owned(),
                    content: "Content body for tests".to_owned(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, post_id);
        assert_eq!(updated.title, "Edited");
        assert!(updated.updated_at > updated.created_at);

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("UPDATE"));
        assert!(sql.contains("RETURNING"));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let err = repo
            .update(uuid::Uuid::new_v4(), fields())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_post_in_one_statement() {
        let row = model("Doomed", 0);
        let post_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let removed: Post = repo.delete(post_id).await.unwrap();

        assert_eq!(removed.id, post_id);
        assert_eq!(removed.title, "Doomed");

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("DELETE FROM"));
        assert!(sql.contains("RETURNING"));
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        // Also what a concurrent delete that won the race looks like.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let err = BaseRepository::<Post, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }
}
