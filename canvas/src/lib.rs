//! Drawing and input engine for the canvas gallery.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and is also
//! linked natively by the headless host. Every demo screen draws through the
//! [`surface::Surface`] trait, so the same code paints a browser canvas via
//! [`render::WebSurface`] or records a [`surface::DisplayList`] for tests and
//! the host. The host layer only wires pointer events and timers to the engine
//! and reacts to the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Screen selection, top-level engine and testable [`engine::EngineCore`] |
//! | [`surface`] | Drawing trait, paints, and the recording [`surface::DisplayList`] |
//! | [`geom`] | Points, sizes, rects and the scale+offset transform |
//! | [`path`] | Vector paths and arc-length measurement |
//! | [`svg`] | SVG path-data parsing |
//! | [`anim`] | Time-based animations, easing and tweens |
//! | [`input`] | Gesture events and the pointer state machine |
//! | [`arrow`] | Arrow travelling along a curve |
//! | [`clock`] | Analog clock face |
//! | [`dial`] | Rotary weight dial |
//! | [`grid`] | Numbered background grid |
//! | [`selector`] | Segmented selector with ring animation |
//! | [`picker`] | Gender picker with gradient fill |
//! | [`shapes`] | Random primitives for the clicker game |
//! | [`countdown`] | One-second countdown |
//! | [`game`] | Shape clicker game |
//! | [`moving_box`] | Rotating box that glides to random spots |
//! | [`render`] | [`surface::Surface`] over a `Canvas2D` context |
//! | [`consts`] | Shared numeric constants (durations, sizes, insets) |

pub mod anim;
pub mod arrow;
pub mod clock;
pub mod consts;
pub mod countdown;
pub mod dial;
pub mod engine;
pub mod game;
pub mod geom;
pub mod grid;
pub mod input;
pub mod moving_box;
pub mod path;
pub mod picker;
pub mod render;
pub mod selector;
pub mod shapes;
pub mod surface;
pub mod svg;
