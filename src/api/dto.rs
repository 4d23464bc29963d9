use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::role::Role;
use crate::domain::session::SessionPhase;
use crate::domain::SessionCode;
use crate::engine::DealReport;

/// DTO игрока без ролей – то, что видят все в лобби.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicDto {
    pub name: String,
}

/// DTO игрока с ролями – для хоста/финального экрана.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRoleDto {
    pub name: String,
    pub initial_role: Option<Role>,
    pub current_role: Option<Role>,
}

pub fn player_public_dto(player: &Player) -> PlayerPublicDto {
    PlayerPublicDto {
        name: player.name.clone(),
    }
}

pub fn player_role_dto(player: &Player) -> PlayerRoleDto {
    PlayerRoleDto {
        name: player.name.clone(),
        initial_role: player.initial_card,
        current_role: player.current_card,
    }
}

/// DTO сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub code: SessionCode,
    pub host_name: String,
    pub expected_players: Option<u8>,
    pub players_count: usize,
    pub players: Vec<PlayerPublicDto>,
    /// Выбранные в пул роли (это не секрет – секретна только раскладка).
    pub roles_selected: Vec<Role>,
    pub phase: SessionPhase,
    pub initialized: bool,
    /// Карты центра – только когда запрошены роли и раздача уже была.
    pub center_cards: Option<Vec<Role>>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,

    /// Создана новая сессия.
    SessionCreated(SessionViewDto),

    /// Вернуть обновлённое состояние сессии.
    SessionState(SessionViewDto),

    /// Результат раздачи.
    DealFinished(DealReport),
}
