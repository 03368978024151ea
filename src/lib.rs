//! Build hook that pins kotlin-stdlib in a Cordova Android project
//!
//! Run after the Android platform is prepared. Appends a Gradle
//! `resolutionStrategy` forcing every kotlin-stdlib artifact to one version,
//! which avoids duplicate-class failures when plugins disagree.

pub mod commands;
pub mod config;
pub mod context;
pub mod patcher;
pub mod snippet;

pub use context::BuildContext;
pub use patcher::{patch, GradlePatcher, PatchOutcome};
