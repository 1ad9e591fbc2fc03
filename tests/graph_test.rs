use featnet::graph::{BuilderOptions, NetworkBuilder};
use featnet::types::{Artist, Track, TrackArtist};

// Helper function to create a test artist
fn create_test_artist(id: &str, name: &str, popularity: u32) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
    }
}

// Helper function to create a test track credited to the given artists
fn create_test_track(id: &str, name: &str, popularity: u32, credits: &[(&str, &str)]) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
        artists: credits
            .iter()
            .map(|(id, name)| TrackArtist {
                id: Some(id.to_string()),
                name: name.to_string(),
            })
            .collect(),
    }
}

// Helper function for builder options with a small seed cap
fn create_test_options() -> BuilderOptions {
    BuilderOptions {
        max_artists: 100,
        include_featured_artists: true,
        genre_label: "J-Pop".to_string(),
        description: "test network".to_string(),
    }
}

#[test]
fn test_shared_track_creates_edge() {
    let a = create_test_artist("a", "Artist A", 80);
    let b = create_test_artist("b", "Artist B", 70);
    let track = create_test_track("t1", "Duet", 50, &[("a", "Artist A"), ("b", "Artist B")]);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone(), b]);
    builder.record_track(&a, &track);

    let network = builder.finish();

    // One edge between the two artists, weight one
    assert_eq!(network.edges.len(), 1);
    assert_eq!(network.edges[0].weight, 1);

    // Each endpoint gains the edge weight as degree
    assert_eq!(network.nodes.len(), 2);
    assert!(network.nodes.iter().all(|n| n.degree == 1));

    // The shared track is recorded on the edge
    assert_eq!(network.edges[0].tracks.len(), 1);
    assert_eq!(network.edges[0].tracks[0].track_id, "t1");
}

#[test]
fn test_shared_track_counted_from_both_traversals() {
    let a = create_test_artist("a", "Artist A", 80);
    let b = create_test_artist("b", "Artist B", 70);
    let track = create_test_track("t1", "Duet", 50, &[("a", "Artist A"), ("b", "Artist B")]);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone(), b.clone()]);

    // The same track shows up in both artists' collections
    builder.record_track(&a, &track);
    builder.record_track(&b, &track);

    let network = builder.finish();

    // Still a single edge, but each traversal added one weight
    assert_eq!(network.edges.len(), 1);
    assert_eq!(network.edges[0].weight, 2);
    assert!(network.nodes.iter().all(|n| n.degree == 2));
    assert_eq!(network.metadata.total_collaborations, 2);
}

#[test]
fn test_degree_sums_incident_edge_weights() {
    let a = create_test_artist("a", "Hub", 90);
    let b = create_test_artist("b", "B", 50);
    let c = create_test_artist("c", "C", 40);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone(), b, c]);

    // a-b twice, a-c once
    builder.record_track(
        &a,
        &create_test_track("t1", "One", 10, &[("a", "Hub"), ("b", "B")]),
    );
    builder.record_track(
        &a,
        &create_test_track("t2", "Two", 10, &[("a", "Hub"), ("b", "B")]),
    );
    builder.record_track(
        &a,
        &create_test_track("t3", "Three", 10, &[("a", "Hub"), ("c", "C")]),
    );

    let network = builder.finish();

    // Degrees: a = 2 + 1, b = 2, c = 1; nodes come out degree-descending
    let degrees: Vec<(&str, u64)> = network
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), n.degree))
        .collect();
    assert_eq!(degrees, vec![("a", 3), ("b", 2), ("c", 1)]);

    // Edges come out weight-descending
    assert_eq!(network.edges[0].weight, 2);
    assert_eq!(network.edges[1].weight, 1);
    assert_eq!(network.metadata.total_collaborations, 3);
}

#[test]
fn test_artist_without_collaborations_keeps_zero_degree() {
    let a = create_test_artist("a", "Solo", 60);
    let solo_track = create_test_track("t1", "Alone", 30, &[("a", "Solo")]);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone()]);
    builder.record_track(&a, &solo_track);

    let network = builder.finish();

    // The artist stays in the network even with nothing to connect to
    assert_eq!(network.nodes.len(), 1);
    assert_eq!(network.nodes[0].degree, 0);
    assert!(network.edges.is_empty());
    assert_eq!(network.metadata.total_collaborations, 0);
}

#[test]
fn test_featured_artists_join_the_network() {
    let a = create_test_artist("a", "Seeded", 60);
    let track = create_test_track("t1", "Guest Spot", 40, &[("a", "Seeded"), ("x", "Guest")]);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone()]);
    builder.record_track(&a, &track);

    let network = builder.finish();

    // The unseeded guest is synthesized from the track credit
    assert_eq!(network.nodes.len(), 2);
    let guest = network.nodes.iter().find(|n| n.id == "x").unwrap();
    assert_eq!(guest.name, "Guest");
    assert_eq!(guest.degree, 1);

    assert_eq!(network.edges.len(), 1);
    assert_eq!(network.edges[0].weight, 1);
}

#[test]
fn test_excluding_featured_artists_drops_unknown_credits() {
    let a = create_test_artist("a", "Seeded", 60);
    let track = create_test_track("t1", "Guest Spot", 40, &[("a", "Seeded"), ("x", "Guest")]);

    let mut options = create_test_options();
    options.include_featured_artists = false;

    let mut builder = NetworkBuilder::new(options);
    builder.seed_artists(&[a.clone()]);
    builder.record_track(&a, &track);

    let network = builder.finish();

    // The guest never enters the graph and no edge is created
    assert_eq!(network.nodes.len(), 1);
    assert_eq!(network.nodes[0].id, "a");
    assert!(network.edges.is_empty());
}

#[test]
fn test_same_name_artists_stay_distinct() {
    // Two different artists sharing a stage name
    let first = create_test_artist("id1", "YOASOBI", 80);
    let second = create_test_artist("id2", "YOASOBI", 20);
    let track = create_test_track(
        "t1",
        "Collab",
        50,
        &[("id1", "YOASOBI"), ("id2", "YOASOBI")],
    );

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[first.clone(), second]);
    builder.record_track(&first, &track);

    let network = builder.finish();

    // Keyed by id, so both survive as separate nodes with an edge between them
    assert_eq!(network.nodes.len(), 2);
    assert_eq!(network.edges.len(), 1);
    assert_ne!(network.edges[0].source, network.edges[0].target);
}

#[test]
fn test_max_artists_caps_seeding() {
    let a = create_test_artist("a", "A", 90);
    let b = create_test_artist("b", "B", 80);
    let c = create_test_artist("c", "C", 70);

    let mut options = create_test_options();
    options.max_artists = 2;

    let mut builder = NetworkBuilder::new(options);
    builder.seed_artists(&[a, b, c.clone()]);

    // Only the first two artists were seeded
    assert_eq!(builder.node_count(), 2);

    // Tracks of the capped-out artist are ignored entirely
    let track = create_test_track("t1", "Late", 10, &[("c", "C"), ("a", "A")]);
    builder.record_track(&c, &track);
    assert_eq!(builder.edge_count(), 0);
}

#[test]
fn test_self_and_missing_id_credits_are_skipped() {
    let a = create_test_artist("a", "A", 50);
    let mut track = create_test_track("t1", "Odd Credits", 10, &[("a", "A"), ("a", "A")]);
    track.artists.push(TrackArtist {
        id: None,
        name: "Unidentified".to_string(),
    });

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone()]);
    builder.record_track(&a, &track);

    // Neither the duplicate self-credit nor the id-less credit produces anything
    assert_eq!(builder.node_count(), 1);
    assert_eq!(builder.edge_count(), 0);
}

#[test]
fn test_edge_keeps_first_contact_orientation() {
    let a = create_test_artist("a", "A", 50);
    let b = create_test_artist("b", "B", 50);
    let track = create_test_track("t1", "Duet", 10, &[("a", "A"), ("b", "B")]);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone(), b.clone()]);

    // b's collection is traversed first
    builder.record_track(&b, &track);
    builder.record_track(&a, &track);

    let network = builder.finish();

    // One edge either way round; source/target reflect who touched it first
    assert_eq!(network.edges.len(), 1);
    assert_eq!(network.edges[0].source, "b");
    assert_eq!(network.edges[0].target, "a");
    assert_eq!(network.edges[0].weight, 2);
}

#[test]
fn test_equal_weights_keep_first_seen_order() {
    let a = create_test_artist("a", "A", 50);
    let b = create_test_artist("b", "B", 50);
    let c = create_test_artist("c", "C", 50);
    let d = create_test_artist("d", "D", 50);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone(), b, c.clone(), d]);

    builder.record_track(
        &a,
        &create_test_track("t1", "First", 10, &[("a", "A"), ("b", "B")]),
    );
    builder.record_track(
        &c,
        &create_test_track("t2", "Second", 10, &[("c", "C"), ("d", "D")]),
    );

    let network = builder.finish();

    // Both edges weigh the same, so creation order decides
    assert_eq!(network.edges[0].tracks[0].track_id, "t1");
    assert_eq!(network.edges[1].tracks[0].track_id, "t2");

    // All nodes tie on degree and keep seeding order
    let ids: Vec<&str> = network.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_metadata_counts_and_description() {
    let a = create_test_artist("a", "A", 50);
    let b = create_test_artist("b", "B", 50);
    let track = create_test_track("t1", "Duet", 10, &[("a", "A"), ("b", "B")]);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone(), b]);
    builder.record_track(&a, &track);

    let network = builder.finish();

    assert_eq!(network.metadata.total_nodes, 2);
    assert_eq!(network.metadata.total_edges, 1);
    assert_eq!(network.metadata.total_collaborations, 1);
    assert_eq!(network.metadata.description, "test network");
}

#[test]
fn test_identical_input_produces_identical_output() {
    let build = || {
        let a = create_test_artist("a", "A", 50);
        let b = create_test_artist("b", "B", 50);
        let c = create_test_artist("c", "C", 50);

        let mut builder = NetworkBuilder::new(create_test_options());
        builder.seed_artists(&[a.clone(), b, c]);
        builder.record_track(
            &a,
            &create_test_track("t1", "One", 10, &[("a", "A"), ("b", "B")]),
        );
        builder.record_track(
            &a,
            &create_test_track("t2", "Two", 10, &[("a", "A"), ("c", "C")]),
        );
        builder.finish()
    };

    let first = serde_json::to_string(&build()).unwrap();
    let second = serde_json::to_string(&build()).unwrap();

    // Same input, same bytes
    assert_eq!(first, second);
}

#[test]
fn test_edge_records_track_details() {
    let a = create_test_artist("a", "A", 50);
    let b = create_test_artist("b", "B", 50);
    let track = create_test_track("t9", "Neon Rain", 73, &[("a", "A"), ("b", "B")]);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a.clone(), b]);
    builder.record_track(&a, &track);

    let network = builder.finish();
    let recorded = &network.edges[0].tracks[0];

    assert_eq!(recorded.track_name, "Neon Rain");
    assert_eq!(recorded.track_id, "t9");
    assert_eq!(recorded.popularity, 73);
    assert_eq!(recorded.genre, "J-Pop");
}

#[test]
fn test_duplicate_seeds_collapse() {
    let a = create_test_artist("a", "A", 50);
    let a_again = create_test_artist("a", "A", 50);
    let b = create_test_artist("b", "B", 50);

    let mut builder = NetworkBuilder::new(create_test_options());
    builder.seed_artists(&[a, a_again, b]);

    assert_eq!(builder.node_count(), 2);
}
