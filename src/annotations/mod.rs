//! Annotation module
//!
//! Annotation records associating external resources (images, treebanks,
//! research objects) with CTS-addressed passages, plus the store and query
//! engine over them.
//!
//! # Lifecycle
//!
//! Records are collected into an [`AnnotationStoreBuilder`], then resolved
//! once against a [`crate::text::TextProvider`], which turns each target
//! into its expanded deepest-level reference set. The resulting
//! [`AnnotationStore`] is immutable and answers queries by exact URN match
//! or expanded-set intersection.

mod query;
mod store;
mod types;

pub use query::{QueryError, QueryOptions};
pub use store::{AnnotationStore, AnnotationStoreBuilder, ResolvedAnnotation, StoreError};
pub use types::{AnnotationResource, Target};
