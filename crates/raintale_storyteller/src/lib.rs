//! Story assembly and the storyteller protocol for Raintale.
//!
//! The [`StoryAssembler`] drives the per-element rendering loop for
//! thread-style output. The [`Storyteller`] trait is the protocol every
//! renderer follows: generate output from a story and a template, then
//! publish it. Per-element failures are isolated: one bad element never
//! aborts the whole story.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod file;
mod storyteller;

pub use assembler::StoryAssembler;
pub use file::FileStoryteller;
pub use storyteller::Storyteller;
