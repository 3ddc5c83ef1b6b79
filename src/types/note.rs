use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Shape clients post on bulk create. Identifiers are assigned by the store.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Debug)]
pub struct NotePage {
    pub total: i64,
    pub notes: Vec<Note>,
    pub page: i64,
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_serializes_flat() {
        let page = NotePage {
            total: 3,
            notes: vec![Note {
                id: "f2f06774-4a6f-4f67-9861-d10ce6b8ab27".to_string(),
                title: "first".to_string(),
                content: "body".to_string(),
            }],
            page: 1,
            limit: 2,
        };

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["page"], 1);
        assert_eq!(json["limit"], 2);
        assert_eq!(json["notes"][0]["title"], "first");
    }

    #[test]
    fn new_note_body_needs_no_id() {
        let new_note: NewNote =
            serde_json::from_str(r#"{"title": "t", "content": "c"}"#).unwrap();
        assert_eq!(new_note.title, "t");
        assert_eq!(new_note.content, "c");
    }
}
