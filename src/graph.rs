//! Co-occurrence graph construction.
//!
//! The featuring network is an undirected weighted graph: nodes are
//! artists, an edge between two artists records every track both are
//! credited on, and the edge weight counts those co-occurrences. Nodes and
//! edges are keyed by artist id throughout, so two artists sharing a stage
//! name stay distinct and a renamed artist keeps their identity.
//!
//! Construction is incremental: seed the builder with the artist pool,
//! feed it every collected track, then finish. Finishing derives node
//! degrees from edge weights and orders the output (edges by weight, nodes
//! by degree, both descending, ties in first-seen order) so repeated runs
//! over the same input produce identical files.

use std::collections::HashMap;

use crate::types::{Artist, Edge, EdgeTrack, FeaturingNetwork, NetworkMetadata, Node, Track};

/// Options governing graph construction.
#[derive(Debug, Clone)]
pub struct BuilderOptions {
    /// Upper bound on seeded artists; artists beyond it are ignored.
    pub max_artists: usize,
    /// Synthesize nodes for credited artists outside the seed pool. When
    /// off, co-occurrences with unknown artists are dropped.
    pub include_featured_artists: bool,
    /// Genre label stamped on every collaboration track entry.
    pub genre_label: String,
    /// Free-form description carried into the output metadata.
    pub description: String,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        BuilderOptions {
            max_artists: crate::config::DEFAULT_MAX_ARTISTS,
            include_featured_artists: true,
            genre_label: crate::config::DEFAULT_GENRE_LABEL.to_string(),
            description: String::new(),
        }
    }
}

/// Incremental builder for a [`FeaturingNetwork`].
pub struct NetworkBuilder {
    options: BuilderOptions,
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    edge_index: HashMap<(String, String), usize>,
}

impl NetworkBuilder {
    pub fn new(options: BuilderOptions) -> Self {
        NetworkBuilder {
            options,
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Seeds the graph with the discovered artist pool, in pool order.
    ///
    /// Only the first `max_artists` entries become seeds; duplicates by id
    /// collapse into one node.
    pub fn seed_artists(&mut self, artists: &[Artist]) {
        for artist in artists.iter().take(self.options.max_artists) {
            self.add_node(&artist.id, &artist.name);
        }
    }

    /// Records the co-occurrences on one track of one seeded artist.
    ///
    /// For every other artist credited on the track, the edge between the
    /// traversed artist and that artist gains one weight and one track
    /// entry. Credits without an id cannot be keyed and are skipped, as is
    /// the traversed artist's own credit. Tracks of artists that were never
    /// seeded are ignored entirely.
    pub fn record_track(&mut self, artist: &Artist, track: &Track) {
        if !self.node_index.contains_key(&artist.id) {
            return;
        }

        let genre_label = self.options.genre_label.clone();

        for participant in &track.artists {
            let Some(participant_id) = &participant.id else {
                continue;
            };
            if *participant_id == artist.id {
                continue;
            }

            if !self.node_index.contains_key(participant_id) {
                if !self.options.include_featured_artists {
                    continue;
                }
                self.add_node(participant_id, &participant.name);
            }

            let edge = self.edge_entry(&artist.id, participant_id);
            edge.weight += 1;
            edge.tracks.push(EdgeTrack {
                track_name: track.name.clone(),
                track_id: track.id.clone(),
                popularity: track.popularity,
                genre: genre_label.clone(),
            });
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Derives degrees, orders the output and yields the finished network.
    ///
    /// A node's degree is the sum of the weights of its incident edges.
    /// Both sorts are stable and descending, so ties keep first-seen order
    /// and rebuilding from the same input reproduces the same file.
    pub fn finish(self) -> FeaturingNetwork {
        let NetworkBuilder {
            options,
            mut nodes,
            node_index,
            mut edges,
            ..
        } = self;

        for edge in &edges {
            if let Some(&i) = node_index.get(&edge.source) {
                nodes[i].degree += edge.weight;
            }
            if let Some(&i) = node_index.get(&edge.target) {
                nodes[i].degree += edge.weight;
            }
        }

        edges.sort_by(|a, b| b.weight.cmp(&a.weight));
        nodes.sort_by(|a, b| b.degree.cmp(&a.degree));

        let total_collaborations: u64 = edges.iter().map(|e| e.weight).sum();

        let metadata = NetworkMetadata {
            total_nodes: nodes.len() as u64,
            total_edges: edges.len() as u64,
            total_collaborations,
            description: options.description,
        };

        FeaturingNetwork {
            nodes,
            edges,
            metadata,
        }
    }

    fn add_node(&mut self, id: &str, name: &str) {
        if self.node_index.contains_key(id) {
            return;
        }

        self.node_index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(Node {
            id: id.to_string(),
            name: name.to_string(),
            degree: 0,
        });
    }

    /// Returns the edge between two artists, creating it on first contact.
    ///
    /// The index key is the id pair in sorted order so both traversal
    /// directions land on the same edge; the stored source/target keep the
    /// orientation of first contact.
    fn edge_entry(&mut self, source_id: &str, target_id: &str) -> &mut Edge {
        let key = if source_id < target_id {
            (source_id.to_string(), target_id.to_string())
        } else {
            (target_id.to_string(), source_id.to_string())
        };

        let index = *self.edge_index.entry(key).or_insert_with(|| {
            self.edges.push(Edge {
                source: source_id.to_string(),
                target: target_id.to_string(),
                weight: 0,
                tracks: Vec::new(),
            });
            self.edges.len() - 1
        });

        &mut self.edges[index]
    }
}
