use std::collections::HashSet;

use crate::types::Artist;

// Featuring credit markers commonly seen in track titles. "×" shows up a lot
// in Japanese collaboration titles.
const FEATURE_MARKERS: [&str; 5] = ["feat.", "featuring", "ft.", "×", "w/"];

pub fn remove_duplicate_artists(artists: &mut Vec<Artist>) {
    let mut seen_ids = HashSet::new();
    artists.retain(|artist| seen_ids.insert(artist.id.clone()));
}

pub fn sort_artists_by_popularity(artists: &mut Vec<Artist>) {
    // Stable sort keeps discovery order among equally popular artists.
    artists.sort_by(|a, b| b.popularity.cmp(&a.popularity));
}

/// Extracts guest artist names from a track title, e.g.
/// `"Tokyo Drift (feat. A, B & C)"` yields `["A", "B", "C"]`.
///
/// Matching is case-insensitive for the ASCII markers; a credit runs until
/// the closing bracket of its group. Names are split on `,` and `&`.
pub fn parse_featured_credits(track_name: &str) -> Vec<String> {
    let mut credits = Vec::new();

    for marker in FEATURE_MARKERS {
        let mut search_from = 0;
        while let Some(pos) = find_marker(track_name, marker, search_from) {
            let rest = &track_name[pos + marker.len()..];
            let segment = rest.split([')', ']']).next().unwrap_or("");

            for part in segment.split([',', '&']) {
                let name = part.trim();
                if !name.is_empty() {
                    credits.push(name.to_string());
                }
            }

            search_from = pos + marker.len();
        }
    }

    credits
}

// Byte scan instead of lowercasing the haystack: case mapping can change
// byte lengths in non-ASCII text and would misalign the returned index.
fn find_marker(haystack: &str, marker: &str, from: usize) -> Option<usize> {
    if !marker.is_ascii() {
        return haystack.get(from..)?.find(marker).map(|p| from + p);
    }

    let hay = haystack.as_bytes();
    let needle = marker.as_bytes();
    let mut i = from;
    while i + needle.len() <= hay.len() {
        if haystack.is_char_boundary(i) && hay[i..i + needle.len()].eq_ignore_ascii_case(needle) {
            return Some(i);
        }
        i += 1;
    }
    None
}
