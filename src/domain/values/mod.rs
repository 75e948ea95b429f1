pub mod action;
pub mod asset_class;
pub mod confidence;
pub mod horizon;
pub mod levels;
pub mod signal_request;
