//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages receive the session store and gateway as props.

pub mod callback;
pub mod creator;
pub mod login;
pub mod stats;
