//! gridmean-engine - Grid model + stencil averaging.

pub mod engine;
