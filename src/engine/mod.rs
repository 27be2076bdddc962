//! The parse-engine boundary.
//!
//! The engine itself is a black box: it is handed the raw source bytes and a
//! [`ParseSession`] carrying three callbacks (node materialization, optional
//! subtree-reuse lookup, and an optional diagnostic sink), and it drives the
//! whole parse synchronously on the calling thread. This module defines the
//! record shapes that cross that boundary, the capability traits on either
//! side of it, and the one-time layout compatibility check.

mod compat;
mod materialize;
mod session;

pub use compat::{LAYOUT_FINGERPRINT, verify_compatibility};
pub use materialize::{GreenMaterializer, NodeMaterializer, RawNode};
pub use session::ParseSession;

use rowan::{GreenNode, GreenToken, NodeOrToken};

/// A materialized handle at the engine boundary.
///
/// The driver treats it as opaque; only the materializer that produced it
/// knows its structure.
pub type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// One parse engine.
///
/// Engines run synchronously inside `parse` and invoke the session callbacks
/// in-line; callbacks must not re-enter the driver and must not block on I/O.
pub trait ParseEngine {
    /// Fingerprint of the boundary record layout this engine was built
    /// against. Compared to [`LAYOUT_FINGERPRINT`] once per process before
    /// the engine is first invoked.
    fn layout_fingerprint(&self) -> u64;

    /// Parse `source`, materializing every produced subtree through
    /// `session`, and return the top-level handle. `None` signals that a
    /// node could not be materialized; the driver reports it as invalid
    /// syntax data.
    fn parse(&self, source: &str, session: &mut ParseSession<'_>) -> Option<GreenElement>;
}
