//! Board module tests.
//!
//! - `perft.rs` - move generation counts on standard positions
//! - `make_unmake.rs` - make/unmake restores the position exactly
//! - `edge_cases.rs` - castling, en passant, promotion, mate and stalemate
//! - `proptest.rs` - property-based tests over random playouts

mod make_unmake;
