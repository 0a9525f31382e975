//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Identities)]` | on struct/enum | Register identity elements |

pub mod identities;
