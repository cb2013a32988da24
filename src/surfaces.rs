// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Depth-stencil and color render-target register state.
//!
//! Same category of versioned bit-packed state as the descriptors, but the
//! output is a generation-tagged struct of *named* register values — the
//! state emitter writes them into the command stream by name, not as a flat
//! array.  Each builder splits into an `init_*` for the static shape and a
//! `set_mutable_*` patch for per-draw fields, mirroring the image
//! descriptor's static/mutable split.

pub mod color;
pub mod depth;

pub use color::{
    ColorSurfaceRegs, ColorSurfaceState, MutableColorState, init_cb_surface,
    set_mutable_cb_surface_fields,
};
pub use depth::{
    AuxSurface, DepthSurfaceRegs, DepthSurfaceState, MutableDepthState, init_ds_surface,
    set_mutable_ds_surface_fields,
};
