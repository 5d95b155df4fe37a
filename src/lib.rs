//! Geometric polygon pattern renderer and studio service.
//!
//! The core is a pure rendering routine: a parameter set and a raster surface
//! go in, a repainted surface comes out. Everything else in the crate is a
//! caller of that routine: the [`studio`] owns parameter state and re-renders
//! on every change, and [`routes`] exposes the studio over HTTP.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`params`] | `RenderParameters` and their defaults |
//! | [`input`] | Slider / precise input modalities and parameter updates |
//! | [`pattern`] | Pure polygon layout (radii, rotation offsets, vertices) |
//! | [`color`] | Resolving color strings into paint colors |
//! | [`render`] | Raster surface, painting and PNG export |
//! | [`randomize`] | Random parameter sets |
//! | [`studio`] | Caller-owned parameter state with re-render on mutation |
//! | [`config`] | Environment configuration |
//! | [`state`] | Shared Axum application state |
//! | [`routes`] | HTTP router and handlers |

pub mod color;
pub mod config;
pub mod input;
pub mod params;
pub mod pattern;
pub mod randomize;
pub mod render;
pub mod routes;
pub mod state;
pub mod studio;
