//! # Commands Module
//!
//! Entry points the presentation layer (or the driver binary) calls.
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── order.rs    ◄─── Order request, summary and placement
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  OrderRequest (JSON)                                                    │
//! │         │                                                               │
//! │         │ request.edits()  ── unknown size/crust/topping ──► ApiError  │
//! │         ▼                                                               │
//! │  engine.apply(edit) for each field                                      │
//! │         │                                                               │
//! │         │ engine.submit().await                                         │
//! │         ▼                                                               │
//! │  PlaceOrderResponse { outcome, message }  ──► JSON                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod order;
