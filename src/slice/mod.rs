//! State-container primitives shared by every slice.
//!
//! Each slice follows a unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ reader
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain record owned by the [`Store`](crate::store::Store)
//! - **Intent**: an action dispatched by the UI or a data-fetching collaborator
//! - **Reducer**: total, pure function that produces the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
