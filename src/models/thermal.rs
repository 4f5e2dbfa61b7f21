//! Thermal mass models.
//!
//! - [`LumpedNode`]: transient temperature of a body in constant surroundings.
//! - [`VentilatedMass`]: time-scale diagnostics for mass in a ventilated space.

mod lumped_node;
mod ventilated_mass;

pub use lumped_node::{LumpedNode, LumpedNodeError, LumpedNodeOutput};
pub use ventilated_mass::{
    InteriorAir, StackVent, TimeScales, VentilatedMass, VentilationState,
};
