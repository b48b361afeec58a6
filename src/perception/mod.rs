//! Perception boundary. The hand tracker is a black box behind one contract:
//! a backend plugin overwrites [`Perception`] every render frame; the
//! fixed-rate session tick reads whatever is current. A frame with no fresh
//! data therefore means "hold the last sample"; a backend that loses the hand
//! writes an explicit empty sample. No error ever crosses this boundary.

pub mod pointer;

use bevy::prelude::*;

use crate::core::sim::PerceptionSample;

pub use pointer::PointerPerceptionPlugin;

/// Latest sample from whichever perception backend is installed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Perception(pub PerceptionSample);
