//! Property-based tests for the retention trim
//!
//! Whatever the number of inserts and the cap, the table ends up holding
//! exactly the `min(n, cap)` most recent messages.

use proptest::prelude::*;
use souvenir::backend::chat::db::{enforce_cap, insert_message, list_messages};
use souvenir::backend::server::config::DatabaseSettings;
use souvenir::backend::Database;
use souvenir::shared::RawSubmission;

async fn run(inserts: usize, cap: usize) -> Vec<String> {
    let dir = tempfile::tempdir().unwrap();
    let settings = DatabaseSettings::sqlite(dir.path().join("cap.db").display().to_string());
    let db = Database::prepare(&settings).await.unwrap();

    for i in 0..inserts {
        let submission = RawSubmission::new("Lea", "Info", format!("m{}", i))
            .validate()
            .unwrap();
        insert_message(&db, &submission).await.unwrap();
        enforce_cap(&db, cap).await.unwrap();
    }

    let texts = list_messages(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.commentaire)
        .collect();
    db.close().await;
    texts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_cap_keeps_most_recent(inserts in 0usize..30, cap in 1usize..12) {
        let texts = tokio_test::block_on(run(inserts, cap));

        let expected: Vec<String> = (0..inserts)
            .rev()
            .take(cap)
            .map(|i| format!("m{}", i))
            .collect();
        prop_assert_eq!(texts, expected);
    }
}
