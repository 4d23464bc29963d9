//! Доменная модель игры: роли, игроки, пул карт, сессия.

pub mod player;
pub mod pool;
pub mod role;
pub mod session;

/// Код сессии – внешний человекочитаемый идентификатор (5 заглавных букв).
pub type SessionCode = String;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Role и т.п.
pub use player::*;
pub use pool::*;
pub use role::*;
pub use session::*;
