//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для engine;
//! - генерация кодов сессий.

pub mod codes;
pub mod rng;

pub use codes::*;
pub use rng::*;
