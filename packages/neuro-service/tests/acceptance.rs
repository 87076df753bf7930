use uuid::Uuid;

use neuro_config::{Config, Limits, Map, Postgres, Security, Service, Storage};
use neuro_service::{CreateNoteRequest, CreateUserRequest, Error, NoteService};
use neuro_storage::db::Db;
use neuro_testkit::TestDatabase;

fn test_config(dsn: String) -> Config {
	Config {
		service: Service { http_bind: "127.0.0.1:0".to_string(), log_level: "info".to_string() },
		storage: Storage { postgres: Postgres { dsn, pool_max_conns: 1 } },
		map: Map::default(),
		limits: Limits::default(),
		security: Security { bind_localhost_only: true },
	}
}

async fn test_service() -> Option<(TestDatabase, NoteService)> {
	let base_dsn = match neuro_testkit::env_dsn() {
		Some(value) => value,
		None => {
			eprintln!("Skipping acceptance tests; set NEURO_PG_DSN to run this test.");

			return None;
		},
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = test_config(test_db.dsn().to_string());
	let db = Db::connect(&cfg.storage.postgres).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	Some((test_db, NoteService::new(cfg, db)))
}

fn words(count: usize) -> String {
	vec!["word"; count].join(" ")
}

fn note_request(user_id: Uuid, topic_name: &str, content: String) -> CreateNoteRequest {
	CreateNoteRequest { user_id, topic_name: topic_name.to_string(), title: None, content }
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn record_note_creates_topic_lazily() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user = service
		.create_user(CreateUserRequest { display_name: "Demo".to_string() })
		.await
		.expect("Failed to create user.");
	let first = service
		.record_note(note_request(user.user_id, "AI", words(10)))
		.await
		.expect("Failed to record first note.");
	let second = service
		.record_note(note_request(user.user_id, "AI", words(20)))
		.await
		.expect("Failed to record second note.");

	assert_eq!(first.note.topic_id, second.note.topic_id);
	assert_eq!(first.topic_label, "AI");
	assert_eq!(first.note.words_count, 10);
	assert_eq!(second.note.words_count, 20);

	let count: i64 = sqlx::query_scalar("SELECT count(*) FROM topics WHERE user_id = $1")
		.bind(user.user_id)
		.fetch_one(&service.db.pool)
		.await
		.expect("Failed to count topics.");

	assert_eq!(count, 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn map_sizes_topics_by_activity() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user = service
		.create_user(CreateUserRequest { display_name: "Demo".to_string() })
		.await
		.expect("Failed to create user.");

	for count in [10, 20, 70] {
		service
			.record_note(note_request(user.user_id, "AI", words(count)))
			.await
			.expect("Failed to record note.");
	}

	let map = service.map(user.user_id).await.expect("Failed to build map.");

	assert_eq!(map.nodes.len(), 1);
	assert!(map.edges.is_empty());

	let node = &map.nodes[0];

	// 3 notes + floor(100 / 50) points of volume.
	assert_eq!(node.label, "AI");
	assert_eq!(node.score, 5);
	assert_eq!(node.radius, 22);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn map_keeps_empty_topics_visible() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user = service
		.create_user(CreateUserRequest { display_name: "Demo".to_string() })
		.await
		.expect("Failed to create user.");

	// A topic with no notes referencing it yet.
	neuro_storage::topics::upsert_topic(
		&service.db.pool,
		&neuro_storage::models::Topic {
			topic_id: Uuid::new_v4(),
			user_id: user.user_id,
			label: "Biology".to_string(),
			created_at: time::OffsetDateTime::now_utc(),
		},
	)
	.await
	.expect("Failed to upsert topic.");

	let map = service.map(user.user_id).await.expect("Failed to build map.");

	assert_eq!(map.nodes.len(), 1);
	assert_eq!(map.nodes[0].score, 0);
	assert_eq!(map.nodes[0].radius, 12);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn map_radius_clamps_at_the_ceiling() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user = service
		.create_user(CreateUserRequest { display_name: "Demo".to_string() })
		.await
		.expect("Failed to create user.");

	// 1 note + floor(1450 / 50) = score 30; unclamped radius would be 72.
	service
		.record_note(note_request(user.user_id, "Everything", words(1_450)))
		.await
		.expect("Failed to record note.");

	let map = service.map(user.user_id).await.expect("Failed to build map.");

	assert_eq!(map.nodes[0].score, 30);
	assert_eq!(map.nodes[0].radius, 60);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn blank_content_is_rejected_without_side_effects() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user = service
		.create_user(CreateUserRequest { display_name: "Demo".to_string() })
		.await
		.expect("Failed to create user.");
	let err = service
		.record_note(note_request(user.user_id, "AI", "   ".to_string()))
		.await
		.expect_err("Blank content must fail validation.");

	match err {
		Error::Validation { fields, .. } => {
			assert_eq!(fields, vec!["$.content".to_string()]);
		},
		other => panic!("Expected a validation error, got {other:?}."),
	}

	let topic_count: i64 = sqlx::query_scalar("SELECT count(*) FROM topics WHERE user_id = $1")
		.bind(user.user_id)
		.fetch_one(&service.db.pool)
		.await
		.expect("Failed to count topics.");
	let note_count: i64 = sqlx::query_scalar("SELECT count(*) FROM notes WHERE user_id = $1")
		.bind(user.user_id)
		.fetch_one(&service.db.pool)
		.await
		.expect("Failed to count notes.");

	assert_eq!(topic_count, 0);
	assert_eq!(note_count, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn blank_topic_name_is_rejected() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let user = service
		.create_user(CreateUserRequest { display_name: "Demo".to_string() })
		.await
		.expect("Failed to create user.");
	let err = service
		.record_note(note_request(user.user_id, " \t ", words(5)))
		.await
		.expect_err("Blank topic name must fail validation.");

	match err {
		Error::Validation { fields, .. } => {
			assert_eq!(fields, vec!["$.topic_name".to_string()]);
		},
		other => panic!("Expected a validation error, got {other:?}."),
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn unknown_user_surfaces_not_found() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let unknown = Uuid::new_v4();
	let map_err = service.map(unknown).await.expect_err("Map for unknown user must fail.");

	assert!(matches!(map_err, Error::NotFound { .. }));

	let note_err = service
		.record_note(note_request(unknown, "AI", words(5)))
		.await
		.expect_err("Note for unknown user must fail.");

	assert!(matches!(note_err, Error::NotFound { .. }));

	let fetch_err = service
		.fetch_note(unknown, Uuid::new_v4())
		.await
		.expect_err("Fetching a missing note must fail.");

	assert!(matches!(fetch_err, Error::NotFound { .. }));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set NEURO_PG_DSN to run."]
async fn map_isolates_users() {
	let Some((test_db, service)) = test_service().await else {
		return;
	};
	let alice = service
		.create_user(CreateUserRequest { display_name: "Alice".to_string() })
		.await
		.expect("Failed to create user.");
	let bob = service
		.create_user(CreateUserRequest { display_name: "Bob".to_string() })
		.await
		.expect("Failed to create user.");

	service
		.record_note(note_request(alice.user_id, "AI", words(10)))
		.await
		.expect("Failed to record note.");

	let bob_map = service.map(bob.user_id).await.expect("Failed to build map.");

	assert!(bob_map.nodes.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
