//! Shell integration helpers.
//!
//! The binary talks to the calling shell through **stdout**.  The picker
//! renders on the alternate screen (stderr-backed) and notices go to stderr,
//! so stdout only ever carries reveal requests.

pub mod integration;
