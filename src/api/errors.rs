use serde::{Deserialize, Serialize};

use crate::domain::session::SessionError;
use crate::domain::SessionCode;
use crate::engine::session_manager::ManagerError;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    BadRequest(String),

    /// Сессия не найдена.
    SessionNotFound(SessionCode),

    /// Роль с таким именем не существует в каталоге.
    UnknownRole(String),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка подготовки сессии (игроки, пул).
    SessionError(String),

    /// Ошибка раздачи.
    EngineError(String),

    /// Внутренняя ошибка сервера.
    Internal(String),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        ApiError::SessionError(err.to_string())
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::EngineError(err.to_string())
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::SessionNotFound(code) => ApiError::SessionNotFound(code),
            ManagerError::CodeTaken(code) => {
                ApiError::InvalidCommand(format!("Код '{code}' уже занят"))
            }
            ManagerError::Session(e) => e.into(),
            ManagerError::Engine(e) => e.into(),
        }
    }
}
