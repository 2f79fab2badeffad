use emgraph_core::model::RelationKind;
use emgraph_core::templates::RelationshipSink;
use emgraph_core::{FileStaging, MemoryStaging, RelationshipDescriptor, RelationshipStaging};
use tempfile::TempDir;

fn owner(i: usize) -> RelationshipDescriptor {
    RelationshipDescriptor::new(
        RelationKind::Reference,
        "owner",
        "Parameter",
        format!("P{i}"),
        "DomainOfExpertise",
        "D1",
    )
}

#[test]
fn test_memory_append_then_drain_in_order() {
    let mut staging = MemoryStaging::new();
    for i in 0..5 {
        staging.append(owner(i));
    }
    assert_eq!(staging.len(), 5);

    let drained = staging.drain_all().unwrap();
    let players: Vec<&str> = drained.iter().map(|d| d.player1.as_str()).collect();
    assert_eq!(players, vec!["P0", "P1", "P2", "P3", "P4"]);
    assert!(staging.is_empty());
    assert!(staging.drain_all().unwrap().is_empty());
}

#[test]
fn test_file_staging_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("staged.json");

    let mut staging = FileStaging::create(&path).unwrap();
    for i in 0..3 {
        staging.append(owner(i));
    }
    staging.flush().unwrap();
    drop(staging);

    let mut reopened = FileStaging::open(&path).unwrap();
    assert_eq!(reopened.len(), 3);
    let drained = reopened.drain_all().unwrap();
    assert_eq!(drained, vec![owner(0), owner(1), owner(2)]);
}

#[test]
fn test_drain_keeps_file_until_cleared() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("staged.json");

    let mut staging = FileStaging::create(&path).unwrap();
    staging.append(owner(1));
    staging.flush().unwrap();

    assert_eq!(staging.drain_all().unwrap().len(), 1);
    assert!(path.exists());
    assert_eq!(FileStaging::open(&path).unwrap().len(), 1);

    staging.clear().unwrap();
    assert!(!path.exists());
    assert!(FileStaging::open(&path).unwrap().is_empty());
}

#[test]
fn test_create_discards_previous_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("staged.json");

    let mut staging = FileStaging::create(&path).unwrap();
    staging.append(owner(1));
    staging.flush().unwrap();

    let fresh = FileStaging::create(&path).unwrap();
    assert!(fresh.is_empty());
}
