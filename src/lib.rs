//! # Heatsink Sizer
//!
//! Thermal sizing of sealed, naturally cooled radio-unit enclosures as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given a bill of heat-generating components and the packaging parameters,
//! the models estimate each component's temperature margin, find the
//! component that limits the design, and size the fin array, enclosure
//! volume, and mass needed to keep it within its limit.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Model-specific utility code lives in each
//! model's internal `core` module and remains private.

pub mod models;
pub mod support;
