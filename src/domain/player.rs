use serde::{Deserialize, Serialize};

use crate::domain::role::Role;
use crate::domain::session::SessionError;

/// Игрок за столом.
///
/// `initial_card` выставляется ровно один раз за раздачу; `current_card`
/// потом могут менять игровые механики, reset возвращает её к initial_card.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub initial_card: Option<Role>,
    pub current_card: Option<Role>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial_card: None,
            current_card: None,
        }
    }

    /// Получил ли игрок карту (т.е. была ли уже раздача).
    pub fn is_dealt(&self) -> bool {
        self.initial_card.is_some()
    }
}

/// Реестр игроков.
///
/// Порядок вставки сохраняется и определяет порядок раздачи карт.
/// Имена уникальны: дубликат отклоняем сразу, чтобы игрока всегда
/// можно было адресовать по имени.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Добавить игрока в конец реестра.
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(SessionError::DuplicateName(name));
        }
        self.players.push(Player::new(name));
        Ok(())
    }

    /// Убрать игрока по имени. Отсутствие имени не ошибка;
    /// относительный порядок остальных не меняется.
    pub fn remove(&mut self, name: &str) {
        self.players.retain(|p| p.name != name);
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    /// Упорядоченный read-only снапшот.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.iter_mut()
    }

    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }
}
