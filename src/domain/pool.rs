use serde::{Deserialize, Serialize};

use crate::domain::role::Role;
use crate::domain::session::SessionError;

/// Пул карт-ролей, выбранных для сессии.
///
/// Упорядоченный список; количество копий каждой роли ограничено
/// `Role::max_count()`. Перемешивание делает engine (через RNG из infra),
/// НЕ здесь – пул только хранит выбор.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolePool {
    cards: Vec<Role>,
}

impl RolePool {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Role] {
        &self.cards
    }

    /// Сколько копий роли уже в пуле.
    pub fn count_of(&self, role: Role) -> usize {
        self.cards.iter().filter(|&&r| r == role).count()
    }

    /// Добавить карту в пул. Возвращает новый размер пула.
    ///
    /// Либо полностью успешно, либо пул не меняется: при превышении
    /// лимита роли возвращаем RoleLimitExceeded.
    pub fn add_card(&mut self, role: Role) -> Result<usize, SessionError> {
        let max = role.max_count();
        if self.count_of(role) >= max as usize {
            return Err(SessionError::RoleLimitExceeded { role, max });
        }
        self.cards.push(role);
        Ok(self.cards.len())
    }

    /// Убрать одну копию роли из пула (коррекция выбора до раздачи).
    /// Возвращает новый размер пула.
    pub fn remove_card(&mut self, role: Role) -> Result<usize, SessionError> {
        match self.cards.iter().position(|&r| r == role) {
            Some(idx) => {
                self.cards.remove(idx);
                Ok(self.cards.len())
            }
            None => Err(SessionError::CardNotInPool(role)),
        }
    }

    /// Сбросить весь выбор.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
