pub mod volleyball;

// Re-export the volleyball club survey entry points
pub use volleyball::{
    DEMOGRAPHICS_TITLE, TITLE, catalog, demographic_label, demographic_options,
};
