use featnet::types::Artist;
use featnet::utils::*;

// Helper function to create a test artist
fn create_test_artist(id: &str, name: &str, popularity: u32) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        popularity,
    }
}

#[test]
fn test_remove_duplicate_artists() {
    let mut artists = vec![
        create_test_artist("id1", "Artist A", 80),
        create_test_artist("id2", "Artist B", 70),
        create_test_artist("id1", "Artist A Duplicate", 80), // Duplicate
        create_test_artist("id3", "Artist C", 60),
    ];

    remove_duplicate_artists(&mut artists);

    // Should have 3 unique artists
    assert_eq!(artists.len(), 3);

    // Should contain the first occurrence of each unique ID
    let ids: Vec<&String> = artists.iter().map(|a| &a.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
    assert_eq!(artists[0].name, "Artist A");
}

#[test]
fn test_sort_artists_by_popularity() {
    let mut artists = vec![
        create_test_artist("id1", "Mid", 50),
        create_test_artist("id2", "Top", 90),
        create_test_artist("id3", "Low", 10),
    ];

    sort_artists_by_popularity(&mut artists);

    // Should be sorted by popularity descending
    let popularity: Vec<u32> = artists.iter().map(|a| a.popularity).collect();
    assert_eq!(popularity, vec![90, 50, 10]);
}

#[test]
fn test_sort_artists_by_popularity_is_stable() {
    let mut artists = vec![
        create_test_artist("id1", "First", 50),
        create_test_artist("id2", "Second", 50),
        create_test_artist("id3", "Third", 50),
    ];

    sort_artists_by_popularity(&mut artists);

    // Equal popularity keeps the original order
    let ids: Vec<&String> = artists.iter().map(|a| &a.id).collect();
    assert_eq!(ids, vec!["id1", "id2", "id3"]);
}

#[test]
fn test_parse_featured_credits_multiple_names() {
    let credits = parse_featured_credits("Tokyo Drift (feat. A, B & C)");

    // Names split on commas and ampersands, trimmed
    assert_eq!(credits, vec!["A", "B", "C"]);
}

#[test]
fn test_parse_featured_credits_featuring_word() {
    let credits = parse_featured_credits("Midnight (featuring Ado)");
    assert_eq!(credits, vec!["Ado"]);
}

#[test]
fn test_parse_featured_credits_cross_marker() {
    // The multiplication sign is a common collaboration marker in Japanese titles
    let credits = parse_featured_credits("TOKYO × OSAKA");
    assert_eq!(credits, vec!["OSAKA"]);
}

#[test]
fn test_parse_featured_credits_case_insensitive() {
    let credits = parse_featured_credits("SUMMER SONG FT. HIKARU");
    assert_eq!(credits, vec!["HIKARU"]);
}

#[test]
fn test_parse_featured_credits_stops_at_bracket() {
    let credits = parse_featured_credits("Banger [w/ Yuki] (Remix)");

    // The credit ends at the closing bracket; the remix suffix is not a name
    assert_eq!(credits, vec!["Yuki"]);
}

#[test]
fn test_parse_featured_credits_no_markers() {
    let credits = parse_featured_credits("Plain Title");
    assert!(credits.is_empty());
}

#[test]
fn test_parse_featured_credits_multiple_markers() {
    let credits = parse_featured_credits("Anthem (feat. Rei) [w/ Kenta]");

    // Both credit groups contribute
    assert!(credits.contains(&"Rei".to_string()));
    assert!(credits.contains(&"Kenta".to_string()));
    assert_eq!(credits.len(), 2);
}

#[test]
fn test_parse_featured_credits_multibyte_title() {
    // Marker scanning must not split multibyte characters
    let credits = parse_featured_credits("夜に駆ける (feat. 幾田りら)");
    assert_eq!(credits, vec!["幾田りら"]);
}
