use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::player::{Player, PlayerRegistry};
use crate::domain::pool::RolePool;
use crate::domain::role::Role;
use crate::domain::SessionCode;

/// Минимум игроков для раздачи.
pub const MIN_PLAYERS: usize = 3;
/// Максимум игроков для раздачи.
pub const MAX_PLAYERS: usize = 7;
/// Сколько карт уходит в центр при раздаче.
pub const CENTER_CARDS: usize = 3;

/// Ошибки этапа подготовки сессии (до раздачи).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Игрок с именем '{0}' уже есть в сессии")]
    DuplicateName(String),

    #[error("Игрок '{0}' не найден")]
    PlayerNotFound(String),

    #[error("Лимит роли '{role}' исчерпан (максимум {max})")]
    RoleLimitExceeded { role: Role, max: u8 },

    #[error("Роли '{0}' нет в пуле")]
    CardNotInPool(Role),

    #[error("Сессия заполнена ({max} игроков)")]
    SessionFull { max: u8 },

    #[error("Пул уже укомплектован ({needed} карт)")]
    PoolComplete { needed: usize },

    #[error("Число игроков должно быть от 3 до 7, а не {0}")]
    PlayerCountOutOfRange(usize),

    #[error("Раздача уже состоялась – состав сессии заморожен")]
    AlreadyInitialized,
}

/// Фаза жизни сессии (только подготовка и раздача; ночная фаза,
/// голосование и т.п. живут во внешних слоях).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionPhase {
    /// Сессия создана, идёт набор игроков.
    Setup,
    /// Число игроков зафиксировано, идёт выбор ролей.
    RoleSelection,
    /// Ролей ровно players + 3, можно раздавать.
    Ready,
    /// Раздача состоялась.
    Dealt,
}

/// Одна сессия игры: реестр игроков + пул ролей + розданное состояние.
///
/// Никаких глобалей: несколько независимых сессий спокойно живут рядом
/// (ими управляет engine::SessionManager).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub code: SessionCode,
    pub host_name: String,

    /// Ожидаемое число игроков (если хост его зафиксировал).
    pub expected_players: Option<u8>,

    registry: PlayerRegistry,
    pool: RolePool,

    /// Карты центра; ровно CENTER_CARDS штук после раздачи, до неё пусто.
    center_cards: Vec<Role>,

    /// Была ли хоть одна успешная раздача. Обратно в false не переводится –
    /// сессию либо пере-раздают, либо удаляют целиком.
    initialized: bool,

    phase: SessionPhase,
}

impl Session {
    pub fn new(code: SessionCode, host_name: impl Into<String>) -> Self {
        Self {
            code,
            host_name: host_name.into(),
            expected_players: None,
            registry: PlayerRegistry::new(),
            pool: RolePool::new(),
            center_cards: Vec::new(),
            initialized: false,
            phase: SessionPhase::Setup,
        }
    }

    // --- read-only доступ ---

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn players(&self) -> &[Player] {
        self.registry.players()
    }

    pub fn player_count(&self) -> usize {
        self.registry.len()
    }

    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.registry.get(name)
    }

    pub fn pool(&self) -> &RolePool {
        &self.pool
    }

    pub fn center_cards(&self) -> &[Role] {
        &self.center_cards
    }

    /// Сколько карт должно быть в пуле, если число игроков зафиксировано.
    pub fn pool_target(&self) -> Option<usize> {
        self.expected_players
            .map(|n| n as usize + CENTER_CARDS)
    }

    // --- подготовка сессии ---

    /// Зафиксировать ожидаемое число игроков (3..=7).
    pub fn set_player_count(&mut self, count: usize) -> Result<(), SessionError> {
        self.ensure_setup()?;
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SessionError::PlayerCountOutOfRange(count));
        }
        self.expected_players = Some(count as u8);
        self.phase = SessionPhase::RoleSelection;
        Ok(())
    }

    /// Посадить игрока. Порядок добавления = порядок раздачи.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_setup()?;
        if let Some(max) = self.expected_players {
            if self.registry.len() >= max as usize {
                return Err(SessionError::SessionFull { max });
            }
        }
        self.registry.add(name)
    }

    /// Убрать игрока. Отсутствие имени не ошибка.
    pub fn remove_player(&mut self, name: &str) -> Result<(), SessionError> {
        self.ensure_setup()?;
        self.registry.remove(name);
        Ok(())
    }

    /// Добавить роль в пул. Возвращает новый размер пула.
    pub fn add_card(&mut self, role: Role) -> Result<usize, SessionError> {
        self.ensure_setup()?;
        if let Some(target) = self.pool_target() {
            if self.pool.len() >= target {
                return Err(SessionError::PoolComplete { needed: target });
            }
        }
        let new_len = self.pool.add_card(role)?;
        if self.pool_target() == Some(new_len) {
            self.phase = SessionPhase::Ready;
        }
        Ok(new_len)
    }

    /// Убрать одну копию роли из пула. Возвращает новый размер пула.
    pub fn remove_card(&mut self, role: Role) -> Result<usize, SessionError> {
        self.ensure_setup()?;
        let new_len = self.pool.remove_card(role)?;
        if self.phase == SessionPhase::Ready {
            self.phase = SessionPhase::RoleSelection;
        }
        Ok(new_len)
    }

    /// Сбросить весь выбор ролей.
    pub fn clear_cards(&mut self) -> Result<(), SessionError> {
        self.ensure_setup()?;
        self.pool.clear();
        if self.expected_players.is_some() {
            self.phase = SessionPhase::RoleSelection;
        }
        Ok(())
    }

    /// Подменить текущую карту игрока.
    ///
    /// Примитив для внешних игровых механик (ночные обмены и т.п. живут
    /// вне ядра); reset_cards откатывает любые такие подмены.
    pub fn set_current_card(&mut self, name: &str, role: Role) -> Result<(), SessionError> {
        match self.registry.get_mut(name) {
            Some(player) => {
                player.current_card = Some(role);
                Ok(())
            }
            None => Err(SessionError::PlayerNotFound(name.to_string())),
        }
    }

    fn ensure_setup(&self) -> Result<(), SessionError> {
        if self.initialized {
            Err(SessionError::AlreadyInitialized)
        } else {
            Ok(())
        }
    }

    // --- мутации для engine (раздача/reset) ---

    pub(crate) fn registry_mut(&mut self) -> &mut PlayerRegistry {
        &mut self.registry
    }

    pub(crate) fn install_center(&mut self, center: Vec<Role>) {
        self.center_cards = center;
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
        self.phase = SessionPhase::Dealt;
    }
}
