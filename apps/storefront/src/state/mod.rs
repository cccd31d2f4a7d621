//! # State Module
//!
//! Long-lived state of a storefront session.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShopSession                                                            │
//! │    ├── CartStore   Arc<Mutex<CartState>>, mutated only through reduce   │
//! │    ├── Carousel    featured books cursor                                │
//! │    └── listing     last book list shown                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;

pub use cart::CartStore;
