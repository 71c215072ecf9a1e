// src/ui/widgets/mod.rs

// Declare all of our widget modules here. Each renders one region or view;
// none of them owns state beyond what `App` hands over per frame.

pub mod filter_bar; // Search box plus severity/status selectors.
pub mod footer; // The dynamic footer bar with keybinding hints.
pub mod sidebar; // The fixed navigation route list.
pub mod vuln_table; // The vulnerability browser table with row expansion.
pub mod wizard; // The three-step scan wizard.
