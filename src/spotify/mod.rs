//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! featuring-network builder: authentication, catalog queries and the shared
//! request plumbing that keeps the builder inside Spotify's rate limits.
//!
//! ## Overview
//!
//! All catalog access goes through [`client::SpotifyClient`], a thin wrapper
//! around `reqwest` that owns the access token, paces requests and converts
//! rate-limit responses into sleep-and-retry cycles. The endpoint modules are
//! free functions that build a URL and hand it to the client.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline / Sources / Collector
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Artist Operations (genre search, detail lookup)
//!     ├── Playlist Operations (chart playlist metadata, tracks)
//!     └── Release Operations (new releases, albums, track batches)
//!          ↓
//! SpotifyClient (token, pacing, rate-limit retry)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! The builder only reads public catalog data, so it uses the OAuth 2.0
//! client-credentials grant: application credentials are exchanged directly
//! for a bearer token, no user authorization and no refresh token. Expired
//! tokens are simply re-requested with the same credentials.
//!
//! ## Rate Limiting
//!
//! Two cooperating mechanisms:
//!
//! - **Proactive pacing**: a fixed delay after every successful request,
//!   configurable down to zero for reactive-only operation.
//! - **Reactive backoff**: a 429 response suspends the request for the
//!   number of seconds named in the `Retry-After` header (60 when absent),
//!   then retries the same URL. A configurable ceiling bounds how many such
//!   waits a single request may absorb.
//!
//! Not-found and forbidden responses are surfaced as distinct error variants
//! so callers can treat a vanished chart playlist as "no data from this
//! source" instead of a failure.
//!
//! ## API Coverage
//!
//! - `GET /search` - artist search by genre keyword
//! - `GET /artists/{id}` - artist detail (name, popularity)
//! - `GET /artists/{id}/albums` - discography listing
//! - `GET /albums/{id}/tracks` - simplified album tracks
//! - `GET /tracks` - batched track details (up to 50 ids)
//! - `GET /playlists/{id}` - chart playlist metadata
//! - `GET /playlists/{id}/tracks` - chart playlist pages
//! - `GET /browse/new-releases` - new-release feed
//! - `POST /api/token` - client-credentials token exchange

pub mod artists;
pub mod auth;
pub mod client;
pub mod playlists;
pub mod releases;
