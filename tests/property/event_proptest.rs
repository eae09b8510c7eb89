//! Property-based tests for real-time events

use proptest::prelude::*;
use souvenir::shared::{ChatPayload, RealtimeEvent};

proptest! {
    #[test]
    fn test_chat_new_wire_shape(
        prenom in "\\PC{0,50}",
        filiaire in "\\PC{0,120}",
        commentaire in "\\PC{0,200}",
    ) {
        let event = RealtimeEvent::ChatNew(ChatPayload {
            prenom: prenom.clone(),
            filiaire: filiaire.clone(),
            commentaire: commentaire.clone(),
        });
        let value = serde_json::to_value(&event).unwrap();

        prop_assert_eq!(value["event"].as_str(), Some("chat:new"));
        prop_assert_eq!(value["data"]["prenom"].as_str(), Some(prenom.as_str()));
        prop_assert_eq!(value["data"]["filiaire"].as_str(), Some(filiaire.as_str()));
        prop_assert_eq!(value["data"]["commentaire"].as_str(), Some(commentaire.as_str()));
        prop_assert_eq!(value["data"].as_object().map(|o| o.len()), Some(3));
    }
}
