use serde::{Deserialize, Serialize};

use crate::api::dto::CommandResponse;
use crate::api::errors::ApiError;
use crate::api::queries::build_session_view;
use crate::domain::role::Role;
use crate::domain::session::Session;
use crate::domain::SessionCode;
use crate::engine::session_manager::SessionManager;
use crate::engine::RandomSource;

/// Команда верхнего уровня.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новую сессию.
    CreateSession(CreateSessionCommand),

    /// Операция над конкретной сессией.
    SessionCommand(SessionCommand),
}

/// Команда создания сессии.
///
/// Код сессии генерится снаружи (infra::codes) и передаётся сюда –
/// менеджер уникальность только проверяет.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateSessionCommand {
    pub code: SessionCode,
    /// Хост сразу садится первым игроком.
    pub host_name: String,
}

/// Команды, которые относятся к существующей сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SessionCommand {
    /// Посадить игрока.
    AddPlayer(AddPlayerCommand),

    /// Убрать игрока.
    RemovePlayer(RemovePlayerCommand),

    /// Зафиксировать ожидаемое число игроков (3..=7).
    SetPlayerCount(SetPlayerCountCommand),

    /// Добавить роль в пул. Роль приходит строкой ("volkodlak", "težavnež"
    /// или вариант без диакритики) – парсинг и есть проверка каталога.
    AddRole(AddRoleCommand),

    /// Убрать одну копию роли из пула.
    RemoveRole(RemoveRoleCommand),

    /// Сбросить весь выбор ролей.
    ClearRoles(ClearRolesCommand),

    /// Перемешать пул и раздать карты.
    Deal(DealCommand),

    /// Вернуть всем игрокам изначально розданные карты.
    Reset(ResetCommand),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddPlayerCommand {
    pub code: SessionCode,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemovePlayerCommand {
    pub code: SessionCode,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetPlayerCountCommand {
    pub code: SessionCode,
    pub count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddRoleCommand {
    pub code: SessionCode,
    pub role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoveRoleCommand {
    pub code: SessionCode,
    pub role: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClearRolesCommand {
    pub code: SessionCode,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DealCommand {
    pub code: SessionCode,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetCommand {
    pub code: SessionCode,
}

/// Выполнить команду над менеджером сессий.
///
/// RNG нужен только раздаче, но передаётся всегда – сигнатура одна
/// для всех команд.
pub fn apply_command<R: RandomSource>(
    manager: &mut SessionManager,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateSession(cmd) => {
            let session = manager.create_session(cmd.code, cmd.host_name)?;
            Ok(CommandResponse::SessionCreated(build_session_view(
                session, false,
            )))
        }

        Command::SessionCommand(cmd) => apply_session_command(manager, rng, cmd),
    }
}

fn apply_session_command<R: RandomSource>(
    manager: &mut SessionManager,
    rng: &mut R,
    command: SessionCommand,
) -> Result<CommandResponse, ApiError> {
    match command {
        SessionCommand::AddPlayer(cmd) => {
            let session = find_session_mut(manager, &cmd.code)?;
            session.add_player(cmd.name)?;
            Ok(CommandResponse::SessionState(build_session_view(
                session, false,
            )))
        }

        SessionCommand::RemovePlayer(cmd) => {
            let session = find_session_mut(manager, &cmd.code)?;
            session.remove_player(&cmd.name)?;
            Ok(CommandResponse::SessionState(build_session_view(
                session, false,
            )))
        }

        SessionCommand::SetPlayerCount(cmd) => {
            let session = find_session_mut(manager, &cmd.code)?;
            session.set_player_count(cmd.count)?;
            Ok(CommandResponse::SessionState(build_session_view(
                session, false,
            )))
        }

        SessionCommand::AddRole(cmd) => {
            let role = parse_role(&cmd.role)?;
            let session = find_session_mut(manager, &cmd.code)?;
            session.add_card(role)?;
            Ok(CommandResponse::SessionState(build_session_view(
                session, false,
            )))
        }

        SessionCommand::RemoveRole(cmd) => {
            let role = parse_role(&cmd.role)?;
            let session = find_session_mut(manager, &cmd.code)?;
            session.remove_card(role)?;
            Ok(CommandResponse::SessionState(build_session_view(
                session, false,
            )))
        }

        SessionCommand::ClearRoles(cmd) => {
            let session = find_session_mut(manager, &cmd.code)?;
            session.clear_cards()?;
            Ok(CommandResponse::SessionState(build_session_view(
                session, false,
            )))
        }

        SessionCommand::Deal(cmd) => {
            let report = manager.deal_session(&cmd.code, rng)?;
            Ok(CommandResponse::DealFinished(report))
        }

        SessionCommand::Reset(cmd) => {
            manager.reset_session(&cmd.code)?;
            let session = find_session_mut(manager, &cmd.code)?;
            Ok(CommandResponse::SessionState(build_session_view(
                session, false,
            )))
        }
    }
}

fn parse_role(raw: &str) -> Result<Role, ApiError> {
    raw.parse::<Role>()
        .map_err(|_| ApiError::UnknownRole(raw.to_string()))
}

fn find_session_mut<'a>(
    manager: &'a mut SessionManager,
    code: &str,
) -> Result<&'a mut Session, ApiError> {
    manager
        .session_mut(code)
        .ok_or_else(|| ApiError::SessionNotFound(code.to_string()))
}
