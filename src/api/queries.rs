use serde::{Deserialize, Serialize};

use crate::api::dto::{
    player_public_dto, player_role_dto, PlayerPublicDto, PlayerRoleDto, SessionViewDto,
};
use crate::api::errors::ApiError;
use crate::domain::role::Role;
use crate::domain::session::Session;
use crate::domain::SessionCode;
use crate::engine::session_manager::SessionManager;
use crate::engine::{night_order, EngineError};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Снапшот сессии. include_roles раскрывает карты центра.
    GetSession {
        code: SessionCode,
        include_roles: bool,
    },

    /// Список игроков, с ролями или без.
    GetPlayers {
        code: SessionCode,
        include_roles: bool,
    },

    /// Карты центра (только после раздачи).
    GetCenterCards { code: SessionCode },

    /// Порядок ролей для ночной озвучки (только после раздачи).
    GetNightOrder { code: SessionCode },

    /// Была ли раздача.
    IsInitialized { code: SessionCode },

    /// Коды всех живых сессий.
    ListSessions,
}

/// Ответы на запросы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Session(SessionViewDto),
    Players(Vec<PlayerPublicDto>),
    PlayersWithRoles(Vec<PlayerRoleDto>),
    CenterCards(Vec<Role>),
    NightOrder(Vec<Role>),
    Initialized(bool),
    Sessions(Vec<SessionCode>),
}

/// Собрать DTO сессии из доменного объекта.
pub fn build_session_view(session: &Session, include_roles: bool) -> SessionViewDto {
    let center_cards = if include_roles && session.is_initialized() {
        Some(session.center_cards().to_vec())
    } else {
        None
    };

    SessionViewDto {
        code: session.code.clone(),
        host_name: session.host_name.clone(),
        expected_players: session.expected_players,
        players_count: session.player_count(),
        players: session.players().iter().map(player_public_dto).collect(),
        roles_selected: session.pool().cards().to_vec(),
        phase: session.phase(),
        initialized: session.is_initialized(),
        center_cards,
    }
}

/// Выполнить read-only запрос над менеджером сессий.
pub fn answer_query(manager: &SessionManager, query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetSession {
            code,
            include_roles,
        } => {
            let session = find_session(manager, &code)?;
            Ok(QueryResponse::Session(build_session_view(
                session,
                include_roles,
            )))
        }

        Query::GetPlayers {
            code,
            include_roles,
        } => {
            let session = find_session(manager, &code)?;
            if include_roles {
                Ok(QueryResponse::PlayersWithRoles(
                    session.players().iter().map(player_role_dto).collect(),
                ))
            } else {
                Ok(QueryResponse::Players(
                    session.players().iter().map(player_public_dto).collect(),
                ))
            }
        }

        Query::GetCenterCards { code } => {
            let session = find_session(manager, &code)?;
            if !session.is_initialized() {
                return Err(EngineError::NotInitialized.into());
            }
            Ok(QueryResponse::CenterCards(session.center_cards().to_vec()))
        }

        Query::GetNightOrder { code } => {
            let session = find_session(manager, &code)?;
            if !session.is_initialized() {
                return Err(EngineError::NotInitialized.into());
            }
            Ok(QueryResponse::NightOrder(night_order(session)))
        }

        Query::IsInitialized { code } => {
            let session = find_session(manager, &code)?;
            Ok(QueryResponse::Initialized(session.is_initialized()))
        }

        Query::ListSessions => Ok(QueryResponse::Sessions(manager.codes())),
    }
}

fn find_session<'a>(manager: &'a SessionManager, code: &str) -> Result<&'a Session, ApiError> {
    manager
        .session(code)
        .ok_or_else(|| ApiError::SessionNotFound(code.to_string()))
}
