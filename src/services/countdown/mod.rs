mod display;
mod reconciler;

pub use display::{format_remaining, progress_percent, CountdownDisplay};
pub use reconciler::{CountdownReconciler, CountdownTransition};
