use anyhow::Result;
use notecase::domain::{Folder, Note};

#[test]
fn given_note_when_serializing_to_json_then_uses_stored_field_names() -> Result<()> {
    // Arrange
    let note = Note {
        id: 1234567890,
        title: "Test title".to_string(),
        content: "Test content".to_string(),
        folder_id: Some(42),
    };

    // Act
    let json = serde_json::to_string_pretty(&note)?;

    // Assert
    assert!(json.contains(r#""id": 1234567890"#));
    assert!(json.contains(r#""title": "Test title""#));
    assert!(json.contains(r#""content": "Test content""#));
    assert!(json.contains(r#""folderId": 42"#));
    assert!(!json.contains("folder_id"));
    Ok(())
}

#[test]
fn given_note_without_folder_when_serializing_then_writes_null() -> Result<()> {
    let note = Note {
        id: 1,
        title: "T".to_string(),
        content: "C".to_string(),
        folder_id: None,
    };

    let json = serde_json::to_string(&note)?;

    assert!(json.contains(r#""folderId":null"#));
    Ok(())
}

#[test]
fn given_stored_note_without_folder_key_when_parsing_then_has_no_folder() -> Result<()> {
    let note: Note = serde_json::from_str(r#"{"id": 3, "title": "T", "content": "C"}"#)?;

    assert_eq!(note.folder_id, None);
    Ok(())
}

#[test]
fn given_folder_when_serializing_then_has_three_fields() -> Result<()> {
    let folder = Folder {
        id: 9,
        name: "Work".to_string(),
        description: "Work stuff".to_string(),
    };

    let value = serde_json::to_value(&folder)?;

    assert_eq!(value["id"], 9);
    assert_eq!(value["name"], "Work");
    assert_eq!(value["description"], "Work stuff");
    assert_eq!(value.as_object().map(|o| o.len()), Some(3));
    Ok(())
}
