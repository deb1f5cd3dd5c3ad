//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use texprune_core::prelude::*;
//! ```

// Core result types
pub use crate::error::{TexpruneError, TexpruneResult};

// File scanning
pub use crate::scan::{gather_image_files, gather_tex_files};

// Usage extraction
pub use crate::extract::{find_used_images, GraphicsPathMap};

// Def inlining
pub use crate::defs::{inline_defs, DefsReport};

// Pruning
pub use crate::prune::{prune_images, PruneReport};

// Configuration
pub use crate::config::{load_config, TexpruneConfig};

// Builder API
pub use crate::builder::{Pruner, RunReport};
