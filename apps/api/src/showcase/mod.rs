// Static showcase data for the dashboard and templates views.
// Illustrative only: nothing here is derived from generation history.

pub mod data;
pub mod handlers;
