use std::collections::HashMap;

use crate::domain::session::{Session, SessionError};
use crate::domain::SessionCode;
use crate::engine::deal::{deal, reset_cards, DealReport};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Ошибки уровня менеджера сессий (над движком одной сессии).
#[derive(Debug)]
pub enum ManagerError {
    /// Сессия с таким кодом не найдена.
    SessionNotFound(SessionCode),

    /// Код уже занят другой сессией.
    CodeTaken(SessionCode),

    /// Проброшенная ошибка подготовки сессии.
    Session(SessionError),

    /// Проброшенная ошибка раздачи.
    Engine(EngineError),
}

impl From<SessionError> for ManagerError {
    fn from(e: SessionError) -> Self {
        ManagerError::Session(e)
    }
}

impl From<EngineError> for ManagerError {
    fn from(e: EngineError) -> Self {
        ManagerError::Engine(e)
    }
}

/// Менеджер сессий:
/// - хранит несколько независимых сессий по коду;
/// - даёт обёртки deal_session/reset_session поверх engine::deal / engine::reset_cards.
///
/// ВАЖНО: код сессии генерируется снаружи (infra::codes) и передаётся сюда –
/// менеджер только проверяет уникальность.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionCode, Session>,
}

impl SessionManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Завести новую сессию под кодом и сразу посадить хоста первым игроком.
    pub fn create_session(
        &mut self,
        code: SessionCode,
        host_name: impl Into<String>,
    ) -> Result<&mut Session, ManagerError> {
        if self.sessions.contains_key(&code) {
            return Err(ManagerError::CodeTaken(code));
        }
        let host_name = host_name.into();
        let mut session = Session::new(code.clone(), host_name.clone());
        session.add_player(host_name)?;
        Ok(self.sessions.entry(code).or_insert(session))
    }

    pub fn has_session(&self, code: &str) -> bool {
        self.sessions.contains_key(code)
    }

    pub fn session(&self, code: &str) -> Option<&Session> {
        self.sessions.get(code)
    }

    pub fn session_mut(&mut self, code: &str) -> Option<&mut Session> {
        self.sessions.get_mut(code)
    }

    /// Удалить сессию целиком. true, если она существовала.
    pub fn remove_session(&mut self, code: &str) -> bool {
        self.sessions.remove(code).is_some()
    }

    /// Коды всех живых сессий.
    pub fn codes(&self) -> Vec<SessionCode> {
        self.sessions.keys().cloned().collect()
    }

    /// Раздать карты в конкретной сессии.
    pub fn deal_session<R: RandomSource>(
        &mut self,
        code: &str,
        rng: &mut R,
    ) -> Result<DealReport, ManagerError> {
        let session = self
            .sessions
            .get_mut(code)
            .ok_or_else(|| ManagerError::SessionNotFound(code.to_string()))?;
        Ok(deal(session, rng)?)
    }

    /// Вернуть игрокам сессии изначально розданные карты.
    pub fn reset_session(&mut self, code: &str) -> Result<(), ManagerError> {
        let session = self
            .sessions
            .get_mut(code)
            .ok_or_else(|| ManagerError::SessionNotFound(code.to_string()))?;
        Ok(reset_cards(session)?)
    }
}
