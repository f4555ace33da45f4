//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the guard placeholder and stats chrome. Shared state
//! arrives through props rather than context lookups.

pub mod protected_route;
pub mod stats_panel;
pub mod time_range_tabs;
pub mod track_list;
