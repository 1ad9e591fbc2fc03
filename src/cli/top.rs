use std::path::PathBuf;

use tabled::Table;

use crate::{
    error, info,
    management::NetworkManager,
    types::{EdgeTableRow, FeaturingNetwork, NodeTableRow},
    utils,
};

/// Displays the most connected artists and strongest collaborations from a
/// saved network file.
///
/// Loads the network JSON written by `featnet build` and prints two tables:
/// the highest-degree nodes and the highest-weight edges. Both lists come
/// out of the file already sorted, so this command only takes the first N
/// of each.
///
/// # Arguments
///
/// * `input` - Path to the network JSON file
/// * `nodes` - Number of artist rows to display
/// * `edges` - Number of collaboration rows to display
///
/// # Example Usage
///
/// ```bash
/// # Defaults: top 15 artists and top 15 collaborations
/// featnet top
///
/// # A deeper look at the edges of a custom build
/// featnet top --input data/network.json --edges 30
/// ```
pub async fn top(input: PathBuf, nodes: usize, edges: usize) {
    let manager = match NetworkManager::load(input.clone()).await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load network from {}: {:?}. Run featnet build first.",
                input.display(),
                e
            );
        }
    };

    let network = manager.network();

    info!("Nodes: {}", network.metadata.total_nodes);
    info!("Edges: {}", network.metadata.total_edges);
    info!("Collaborations: {}", network.metadata.total_collaborations);

    let node_rows: Vec<NodeTableRow> = network
        .nodes
        .iter()
        .take(nodes)
        .map(|n| NodeTableRow {
            name: n.name.clone(),
            degree: n.degree,
        })
        .collect();

    info!("Most connected artists:");
    let table = Table::new(node_rows);
    println!("{}", table);

    let edge_rows: Vec<EdgeTableRow> = network
        .edges
        .iter()
        .take(edges)
        .map(|e| {
            let track = e.tracks.first();
            EdgeTableRow {
                artists: format!(
                    "{} - {}",
                    display_name(network, &e.source),
                    display_name(network, &e.target)
                ),
                weight: e.weight,
                track: track.map(|t| t.track_name.clone()).unwrap_or_default(),
                featured: track
                    .map(|t| utils::parse_featured_credits(&t.track_name).join(", "))
                    .unwrap_or_default(),
            }
        })
        .collect();

    info!("Strongest collaborations:");
    let table = Table::new(edge_rows);
    println!("{}", table);
}

/// Resolves an edge endpoint to its display name, falling back to the raw id.
fn display_name<'a>(network: &'a FeaturingNetwork, id: &'a str) -> &'a str {
    network
        .nodes
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.name.as_str())
        .unwrap_or(id)
}
