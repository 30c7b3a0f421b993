//! Configuration storage adapter

mod xdg;

pub use xdg::XdgConfigStore;
