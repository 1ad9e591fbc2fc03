use featnet::management::{NetworkManager, PersistError};
use featnet::types::{Edge, EdgeTrack, FeaturingNetwork, NetworkMetadata, Node};
use tempfile::tempdir;

// Helper function to create a small finished network
fn create_test_network(description: &str) -> FeaturingNetwork {
    FeaturingNetwork {
        nodes: vec![
            Node {
                id: "a".to_string(),
                name: "Artist A".to_string(),
                degree: 2,
            },
            Node {
                id: "b".to_string(),
                name: "Artist B".to_string(),
                degree: 2,
            },
        ],
        edges: vec![Edge {
            source: "a".to_string(),
            target: "b".to_string(),
            weight: 2,
            tracks: vec![EdgeTrack {
                track_name: "Duet".to_string(),
                track_id: "t1".to_string(),
                popularity: 55,
                genre: "J-Pop".to_string(),
            }],
        }],
        metadata: NetworkMetadata {
            total_nodes: 2,
            total_edges: 1,
            total_collaborations: 2,
            description: description.to_string(),
        },
    }
}

#[tokio::test]
async fn test_persist_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("network.json");

    let manager = NetworkManager::new(create_test_network("round trip"), path.clone());
    manager.persist().await.unwrap();

    let loaded = NetworkManager::load(path).await.unwrap();
    let network = loaded.network();

    // Everything that went in comes back out
    assert_eq!(network.nodes.len(), 2);
    assert_eq!(network.nodes[0].id, "a");
    assert_eq!(network.edges.len(), 1);
    assert_eq!(network.edges[0].weight, 2);
    assert_eq!(network.edges[0].tracks[0].track_name, "Duet");
    assert_eq!(network.metadata.total_collaborations, 2);
    assert_eq!(network.metadata.description, "round trip");
}

#[tokio::test]
async fn test_persist_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("public/nested/network.json");

    let manager = NetworkManager::new(create_test_network("nested"), path.clone());
    manager.persist().await.unwrap();

    assert!(path.is_file());
}

#[tokio::test]
async fn test_persist_overwrites_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("network.json");

    let first = NetworkManager::new(create_test_network("first"), path.clone());
    first.persist().await.unwrap();

    let second = NetworkManager::new(create_test_network("second"), path.clone());
    second.persist().await.unwrap();

    // The rerun replaced the previous file
    let loaded = NetworkManager::load(path).await.unwrap();
    assert_eq!(loaded.network().metadata.description, "second");
}

#[tokio::test]
async fn test_persist_leaves_no_staging_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("network.json");

    let manager = NetworkManager::new(create_test_network("staged"), path.clone());
    manager.persist().await.unwrap();

    // The staging file was renamed into place, not left behind
    assert!(path.is_file());
    assert!(!dir.path().join("network.json.tmp").exists());
}

#[tokio::test]
async fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();

    let result = NetworkManager::load(dir.path().join("missing.json")).await;
    assert!(matches!(result, Err(PersistError::IoError(_))));
}
