//! # CLI Module
//!
//! This module provides the command-line interface layer for Featnet, a
//! Spotify API client that builds artist collaboration networks from catalog
//! data. It implements all user-facing CLI commands and coordinates between
//! the pipeline, data management, and API components.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the Featnet
//! application's functionality. It provides commands for:
//!
//! - **Authentication Management**: Client credentials flow for Spotify API access
//! - **Network Builds**: Running the full discovery, collection and graph pipeline
//! - **Network Queries**: Inspecting a previously built network
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Requests and caches an access token using the client credentials grant
//!
//! ### Build Operations
//!
//! - [`build`] - Discovers artists, collects their tracks and writes the network JSON
//!
//! ### Query Operations
//!
//! - [`top`] - Displays the most connected artists and strongest collaborations
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Pipeline Layer (Build Orchestration)
//!     ↓
//! Management Layer (Token/Network Persistence)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each CLI command delegates to the pipeline and management modules while
//! handling user interaction, progress feedback, and error presentation.
//!
//! ## Error Handling Philosophy
//!
//! The CLI module implements user-friendly error handling:
//!
//! - **Graceful Degradation**: Partial collection failures don't prevent a build
//! - **Helpful Messages**: Clear guidance on how to resolve issues
//! - **Context Preservation**: Error messages include relevant context information
//!
//! ## Progress and User Experience
//!
//! All long-running operations provide comprehensive user feedback:
//!
//! - **Progress Indicators**: Visual spinners for network-bound operations
//! - **Status Messages**: Informative messages about current operation status
//! - **Success Confirmation**: Clear indication when operations complete successfully
//! - **Detailed Output**: Rich formatting using tables and color coding
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! featnet auth                     # Verify credentials and cache a token
//! featnet build                    # Build the network with defaults
//! ```
//!
//! ### Regular Usage
//! ```bash
//! featnet build --source charts    # Rebuild from chart playlists only
//! featnet top                      # Inspect the saved network
//! ```
//!
//! ### Advanced Queries
//! ```bash
//! featnet build --source genres --genre j-rock --genre anime
//! featnet top --edges 30 --nodes 5
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::pipeline`] - Build orchestration
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::management`] - Token and network persistence
//! - [`crate::types`] - Data structures and type definitions

mod auth;
mod build;
mod top;

pub use auth::auth;
pub use build::build;
pub use top::top;
