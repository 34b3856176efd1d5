//! # Labelfold-RS: Near-Duplicate Label Reduction
//!
//! Collapses sets of near-duplicate text labels (survey question titles,
//! column headers, category names) into a smaller set of canonical labels:
//!
//! - **Similarity Scoring**: Ratcliff/Obershelp matching-block ratio
//! - **Grouping**: row-wise threshold groups over the pairwise matrix
//! - **Reduction**: each group is replaced by its longest common substring
//! - **Independence**: how rarely the reduced labels contain one another
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Pipeline                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Core          │  Detectors        │  I/O                   │
//! │ • Config       │ • Similarity      │ • Label parsing        │
//! │ • Errors       │ • Grouping        │ • Substitution         │
//! │ • Matrix       │ • Reduction       │ • Reports              │
//! │ • Pipeline     │ • Independence    │                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! let titles = ["Customer Age", "Customer Age (years)", "Region"];
//! let (labels, trajectory, independence) = labelfold_rs::run(&titles, 0.5, 1);
//!
//! assert_eq!(labels, vec!["Region", "Customer Age"]);
//! assert_eq!(trajectory, vec![3, 2]);
//! assert_eq!(independence, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Configuration, errors and the reduction driver
pub mod core {
    //! Core data structures and the reduction pipeline.

    pub mod config;
    pub mod errors;
    pub mod matrix;
    pub mod pipeline;
}

// Scoring, grouping and reduction algorithms
pub mod detectors {
    //! Label similarity, grouping, reduction and independence scoring.

    pub mod grouping;
    pub mod independence;
    pub mod reduction;
    pub mod similarity;
}

// Input parsing, substitution and reporting
pub mod io {
    //! Label input, record substitution and report output.

    pub mod labels;
    pub mod reports;
    pub mod substitution;
}

// Re-export primary types for convenience
pub use crate::core::config::LabelfoldConfig;
pub use crate::core::errors::{LabelfoldError, Result, ResultExt};
pub use crate::core::matrix::SimilarityMatrix;
pub use crate::core::pipeline::{run, sweep, Pipeline, PipelineRun, SweepPoint, SweepSeries};
pub use crate::detectors::similarity::{similarity, LabelSimilarity, SequenceRatio};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
