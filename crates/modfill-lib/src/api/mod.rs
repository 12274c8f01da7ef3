//! # API Module
//!
//! Remote collaborators for project resolution.
//!
//! ## Modules
//!
//! - [`curseforge`] - CurseForge project search and file listing

pub mod curseforge;

pub use curseforge::{
    CurseForgeClient, CurseForgeConfig, CurseForgeError, FileCandidate, LiveCurseForgeClient,
    MockCurseForgeClient, ProjectCandidate,
};
